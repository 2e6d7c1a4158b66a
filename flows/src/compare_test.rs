use super::*;
use crate::countries::build_country_profiles;
use crate::model::{Confidence, FlowCategory, Freshness, MaterialCategory, TradeFlow};

const FLOWS: &str = r"
- product: Iron ore
  category: metals
  top_importers: [China, Japan]
  top_exporters: [Australia, Brazil]
  key_route: Port Hedland to Qingdao
- product: Coal
  category: energy
  top_importers: [Japan, India]
  top_exporters: [Australia, Indonesia]
  key_route: Newcastle to Yokohama
";

const MATERIALS: &str = r"
- name: Potash
  category: agricultural_input
  major_countries: [Canada]
- name: Iron ore
  category: base_metal
  major_countries: [Australia, Brazil]
  data_points:
    - {country: Australia, metric: Mine production, value: 880, unit: Mt, year: 2022, source_name: USGS, confidence: high, freshness: recent}
";

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

fn point(metric: &str, year: i32, value: f64) -> DataPoint {
    DataPoint {
        country: "Chile".to_owned(),
        metric: metric.to_owned(),
        value,
        unit: "kt".to_owned(),
        year,
        source_name: "Survey".to_owned(),
        source_url: String::new(),
        confidence: Confidence::Medium,
        freshness: Freshness::Dated,
    }
}

#[test]
fn selection_ignores_blank_values() {
    let selection = CompareSelection::from_lookup(lookup(&[("left", " japan "), ("right", "  ")]));
    assert_eq!(selection.left.as_deref(), Some("japan"));
    assert!(selection.right.is_none());
    assert!(selection.material.is_none());
}

#[test]
fn resolve_uses_requested_slugs() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let selection = CompareSelection::from_lookup(lookup(&[
        ("left", "japan"),
        ("right", "india"),
        ("material", "potash"),
    ]));
    let resolved = selection.resolve(&store).unwrap();
    assert_eq!(resolved.left.name, "Japan");
    assert_eq!(resolved.right.name, "India");
    assert_eq!(resolved.material.map(|m| m.name.as_str()), Some("Potash"));
}

#[test]
fn resolve_falls_back_for_unknown_slugs() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let selection = CompareSelection::from_lookup(lookup(&[("left", "atlantis"), ("material", "mithril")]));
    let resolved = selection.resolve(&store).unwrap();
    assert_eq!(resolved.left.name, "Australia");
    assert_eq!(resolved.right.name, "Brazil");
    // First material that carries data points.
    assert_eq!(resolved.material.map(|m| m.name.as_str()), Some("Iron ore"));
}

#[test]
fn resolve_avoids_pairing_a_country_with_itself_by_default() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let selection = CompareSelection::from_lookup(lookup(&[("left", "brazil")]));
    let resolved = selection.resolve(&store).unwrap();
    assert_eq!(resolved.left.name, "Brazil");
    assert_eq!(resolved.right.name, "Australia");
}

#[test]
fn resolve_needs_at_least_one_country() {
    let store = DataStore::from_sources("[]", "[]").unwrap();
    assert!(CompareSelection::default().resolve(&store).is_none());
}

#[test]
fn compare_countries_intersects_partners_and_products() {
    let flows = vec![
        TradeFlow {
            product: "Iron ore".to_owned(),
            category: FlowCategory::Metals,
            top_importers: vec!["China".to_owned(), "Japan".to_owned()],
            top_exporters: vec!["Australia".to_owned(), "Brazil".to_owned()],
            key_route: String::new(),
        },
        TradeFlow {
            product: "Soybeans".to_owned(),
            category: FlowCategory::Agriculture,
            top_importers: vec!["China".to_owned()],
            top_exporters: vec!["Brazil".to_owned(), "United States".to_owned()],
            key_route: String::new(),
        },
    ];
    let profiles = build_country_profiles(&flows);
    let china = profiles.iter().find(|p| p.name == "China").unwrap();
    let japan = profiles.iter().find(|p| p.name == "Japan").unwrap();

    let cmp = compare_countries(china, japan);
    assert_eq!(cmp.shared_partners, vec!["Australia", "Brazil"]);
    assert_eq!(cmp.shared_products, vec!["Iron ore"]);
    assert_eq!(cmp.left_concentration.total, 4);
    assert_eq!(cmp.right_concentration.total, 2);
}

#[test]
fn material_snapshot_keeps_latest_per_metric() {
    let material = RawMaterial {
        name: "Copper".to_owned(),
        slug: "copper".to_owned(),
        category: MaterialCategory::BaseMetal,
        major_countries: vec![],
        notes: String::new(),
        data_points: vec![
            point("Mine production", 2021, 5.0),
            point("Mine production", 2023, 5.5),
            point("Reserves", 2022, 190.0),
            point("Reserves", 2022, 200.0),
            DataPoint {
                country: "Peru".to_owned(),
                ..point("Mine production", 2024, 2.6)
            },
        ],
        related_products: Vec::new(),
        updated_at: None,
        updated_on: None,
    };

    let snapshot = material_snapshot(&material, "Chile");
    let rows = snapshot
        .iter()
        .map(|p| (p.metric.as_str(), p.year, p.value))
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![("Mine production", 2023, 5.5), ("Reserves", 2022, 200.0)]);
    assert!(material_snapshot(&material, "Bolivia").is_empty());
}
