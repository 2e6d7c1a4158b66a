use super::*;
use crate::model::{DataPoint, Freshness, MaterialCategory};

fn record(material: &str, category: MaterialCategory, year: i32, confidence: Confidence, source: &str) -> MaterialRecord {
    MaterialRecord {
        material_slug: material.to_ascii_lowercase(),
        material_name: material.to_owned(),
        category,
        point: DataPoint {
            country: "Chile".to_owned(),
            metric: "Mine production".to_owned(),
            value: 1.0,
            unit: "tonnes".to_owned(),
            year,
            source_name: source.to_owned(),
            source_url: String::new(),
            confidence,
            freshness: Freshness::Recent,
        },
    }
}

fn sample() -> Vec<MaterialRecord> {
    vec![
        record("Lithium", MaterialCategory::CriticalMineral, 2022, Confidence::High, "USGS"),
        record("Lithium", MaterialCategory::CriticalMineral, 2023, Confidence::Medium, "Cochilco"),
        record("Copper", MaterialCategory::BaseMetal, 2023, Confidence::High, "USGS"),
        record("Molybdenum", MaterialCategory::BaseMetal, 2021, Confidence::Low, ""),
        record("Iodine", MaterialCategory::CriticalMineral, 2023, Confidence::High, "USGS"),
    ]
}

#[test]
fn category_groups_order_by_count_then_label() {
    let groups = group_by_category(&sample());
    let keys = groups.iter().map(|g| g.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["Critical mineral", "Base metal"]);

    let critical = &groups[0];
    assert_eq!(critical.records, 3);
    assert_eq!(critical.high_confidence, 2);
    assert!((critical.high_confidence_share - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(critical.materials, 2);
    assert_eq!(critical.sources, 2);
    assert_eq!(critical.latest_year, Some(2023));
}

#[test]
fn blank_sources_are_not_counted() {
    let groups = group_by_category(&sample());
    let base = &groups[1];
    assert_eq!(base.records, 2);
    assert_eq!(base.sources, 1);
}

#[test]
fn ties_break_on_key_ascending() {
    let records = vec![
        record("Zinc", MaterialCategory::BaseMetal, 2022, Confidence::High, "A"),
        record("Cobalt", MaterialCategory::CriticalMineral, 2022, Confidence::High, "A"),
    ];
    let groups = group_by_material(&records);
    assert_eq!(groups[0].key, "Cobalt");
    assert_eq!(groups[1].key, "Zinc");
}

#[test]
fn year_groups_are_most_recent_first() {
    let groups = group_by_year(&sample());
    let years = groups.iter().map(|g| g.key).collect::<Vec<_>>();
    assert_eq!(years, vec![2023, 2022, 2021]);
    assert_eq!(groups[0].records, 3);
    assert_eq!(groups[0].materials, 3);
    assert_eq!(groups[0].latest_year, Some(2023));
}

#[test]
fn material_groups_count_records_per_material() {
    let groups = group_by_material(&sample());
    assert_eq!(groups[0].key, "Lithium");
    assert_eq!(groups[0].records, 2);
    assert_eq!(groups[0].materials, 1);
}

#[test]
fn empty_records_yield_no_groups() {
    assert!(group_by_category(&[]).is_empty());
    assert!(group_by_year(&[]).is_empty());
    assert!(group_by_material(&[]).is_empty());
}
