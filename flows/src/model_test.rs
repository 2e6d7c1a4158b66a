use super::*;

fn point(country: &str, year: i32) -> DataPoint {
    DataPoint {
        country: country.to_owned(),
        metric: "Mine production".to_owned(),
        value: 10.0,
        unit: "tonnes".to_owned(),
        year,
        source_name: "Survey".to_owned(),
        source_url: String::new(),
        confidence: Confidence::High,
        freshness: Freshness::Recent,
    }
}

fn material(name: &str, points: Vec<DataPoint>) -> RawMaterial {
    RawMaterial {
        name: name.to_owned(),
        slug: name.to_ascii_lowercase(),
        category: MaterialCategory::CriticalMineral,
        major_countries: vec!["Chile".to_owned()],
        notes: String::new(),
        data_points: points,
        related_products: Vec::new(),
        updated_at: None,
        updated_on: None,
    }
}

#[test]
fn material_category_parse_accepts_wire_names_only() {
    assert_eq!(MaterialCategory::parse("base_metal"), Some(MaterialCategory::BaseMetal));
    assert_eq!(MaterialCategory::parse("Base metal"), None);
    assert_eq!(MaterialCategory::parse(""), None);
}

#[test]
fn trade_flow_membership_checks_each_side() {
    let flow = TradeFlow {
        product: "Copper ore".to_owned(),
        category: FlowCategory::Metals,
        top_importers: vec!["China".to_owned()],
        top_exporters: vec!["Chile".to_owned(), "Peru".to_owned()],
        key_route: "Pacific".to_owned(),
    };
    assert!(flow.imports("China"));
    assert!(!flow.exports("China"));
    assert!(flow.exports("Peru"));
}

#[test]
fn records_for_country_joins_material_fields() {
    let materials = vec![
        material("Lithium", vec![point("Chile", 2022), point("Australia", 2022)]),
        material("Copper", vec![point("Chile", 2023)]),
    ];

    let records = records_for_country(&materials, "Chile");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].material_name, "Lithium");
    assert_eq!(records[1].material_slug, "copper");
    assert_eq!(records[1].point.year, 2023);
}

#[test]
fn raw_material_yaml_defaults_optional_fields() {
    let yaml = "name: Potash\ncategory: agricultural_input\nmajor_countries: [Canada]\n";
    let parsed: RawMaterial = serde_yaml::from_str(yaml).unwrap();
    assert!(parsed.data_points.is_empty());
    assert!(parsed.updated_at.is_none());
    assert!(parsed.updated_on.is_none());
    assert!(parsed.related_products.is_empty());
    assert!(parsed.slug.is_empty());
    assert!(parsed.notes.is_empty());
}

#[test]
fn material_record_serializes_flat() {
    let m = material("Lithium", vec![point("Chile", 2022)]);
    let record = MaterialRecord::from_point(&m, &m.data_points[0]);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["material_slug"], "lithium");
    assert_eq!(json["country"], "Chile");
    assert_eq!(json["confidence"], "high");
}
