use std::collections::HashMap;

use super::*;
use crate::countries::build_country_profiles;
use crate::model::{DataPoint, FlowCategory, Freshness, TradeFlow};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key: &str| map.get(key).cloned()
}

fn profiles() -> Vec<CountryProfile> {
    let flows = vec![
        TradeFlow {
            product: "Crude oil".to_owned(),
            category: FlowCategory::Energy,
            top_importers: vec!["China".to_owned(), "India".to_owned()],
            top_exporters: vec!["Saudi Arabia".to_owned(), "Canada".to_owned()],
            key_route: "Hormuz".to_owned(),
        },
        TradeFlow {
            product: "Refined petroleum".to_owned(),
            category: FlowCategory::Energy,
            top_importers: vec!["Canada".to_owned()],
            top_exporters: vec!["India".to_owned()],
            key_route: "Atlantic".to_owned(),
        },
    ];
    build_country_profiles(&flows)
}

fn material(name: &str, category: MaterialCategory, confidences: &[Confidence]) -> RawMaterial {
    RawMaterial {
        name: name.to_owned(),
        slug: name.to_ascii_lowercase(),
        category,
        major_countries: vec!["Chile".to_owned(), "Australia".to_owned()],
        notes: "Used in batteries".to_owned(),
        data_points: confidences
            .iter()
            .map(|c| DataPoint {
                country: "Chile".to_owned(),
                metric: "Mine production".to_owned(),
                value: 1.0,
                unit: "kt".to_owned(),
                year: 2023,
                source_name: "Survey".to_owned(),
                source_url: String::new(),
                confidence: *c,
                freshness: Freshness::Current,
            })
            .collect(),
        related_products: Vec::new(),
        updated_at: None,
        updated_on: None,
    }
}

#[test]
fn country_filter_defaults_when_params_missing() {
    let filter = CountryFilter::from_lookup(lookup(&[]));
    assert_eq!(filter.query, "");
    assert_eq!(filter.coverage, RoleCoverage::All);
    assert_eq!(filter.page, 1);
    assert!(!filter.is_active());
    assert_eq!(filter, CountryFilter::default());
}

#[test]
fn country_filter_invalid_values_fall_back() {
    let filter = CountryFilter::from_lookup(lookup(&[("coverage", "nobody"), ("page", "zero"), ("q", "  ")]));
    assert_eq!(filter, CountryFilter::default());
}

#[test]
fn country_filter_matches_text_case_insensitively() {
    let all = profiles();
    let filter = CountryFilter::from_lookup(lookup(&[("q", "SAUDI")]));
    let hits = filter.apply(&all);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Saudi Arabia");
}

#[test]
fn country_filter_coverage_modes() {
    let all = profiles();
    let names = |coverage: &str| {
        CountryFilter::from_lookup(lookup(&[("coverage", coverage)]))
            .apply(&all)
            .into_iter()
            .map(|p| p.name.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(names("importer"), vec!["Canada", "China", "India"]);
    assert_eq!(names("exporter"), vec!["Canada", "India", "Saudi Arabia"]);
    assert_eq!(names("both"), vec!["Canada", "India"]);
    assert_eq!(names("all").len(), 4);
}

#[test]
fn country_filter_query_pairs_omit_defaults() {
    let filter = CountryFilter::from_lookup(lookup(&[("q", "ind"), ("coverage", "both")]));
    assert_eq!(
        filter.to_query_pairs(3),
        vec![("q", "ind".to_owned()), ("coverage", "both".to_owned()), ("page", "3".to_owned())]
    );
    assert!(CountryFilter::default().to_query_pairs(1).is_empty());
}

#[test]
fn material_filter_parses_category_and_confidence() {
    let filter = MaterialFilter::from_lookup(lookup(&[
        ("category", "base_metal"),
        ("confidence", "medium_plus"),
        ("page", "2"),
    ]));
    assert_eq!(filter.category, Some(MaterialCategory::BaseMetal));
    assert_eq!(filter.confidence, ConfidenceScope::MediumPlus);
    assert_eq!(filter.page, 2);
    assert!(filter.is_active());

    let bad = MaterialFilter::from_lookup(lookup(&[("category", "gems"), ("confidence", "certain")]));
    assert_eq!(bad, MaterialFilter::default());
}

#[test]
fn material_filter_text_searches_name_notes_and_countries() {
    let m = material("Lithium", MaterialCategory::CriticalMineral, &[]);
    for q in ["lith", "BATTER", "austral"] {
        let filter = MaterialFilter::from_lookup(lookup(&[("q", q)]));
        assert!(filter.matches(&m), "{q}");
    }
    let miss = MaterialFilter::from_lookup(lookup(&[("q", "zinc")]));
    assert!(!miss.matches(&m));
}

#[test]
fn material_filter_confidence_scope_needs_a_point_in_scope() {
    let low_only = material("Gallium", MaterialCategory::CriticalMineral, &[Confidence::Low]);
    let mixed = material("Copper", MaterialCategory::BaseMetal, &[Confidence::Low, Confidence::Medium]);
    let bare = material("Potash", MaterialCategory::AgriculturalInput, &[]);

    let high = MaterialFilter::from_lookup(lookup(&[("confidence", "high")]));
    let medium = MaterialFilter::from_lookup(lookup(&[("confidence", "medium_plus")]));
    let any = MaterialFilter::default();

    assert!(!high.matches(&low_only));
    assert!(!high.matches(&mixed));
    assert!(medium.matches(&mixed));
    assert!(!medium.matches(&bare));
    assert!(any.matches(&bare));
}

#[test]
fn material_filter_category_restricts() {
    let items = vec![
        material("Lithium", MaterialCategory::CriticalMineral, &[]),
        material("Copper", MaterialCategory::BaseMetal, &[]),
    ];
    let filter = MaterialFilter::from_lookup(lookup(&[("category", "critical_mineral")]));
    let hits = filter.apply(&items);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Lithium");
}

#[test]
fn detail_filter_scopes_records_and_corridor_roles() {
    let filter = CountryDetailFilter::from_lookup(lookup(&[("corridor_role", "exporter"), ("confidence", "high")]));
    assert!(filter.corridor_role.matches(Role::Exporter));
    assert!(!filter.corridor_role.matches(Role::Importer));

    let m = material("Copper", MaterialCategory::BaseMetal, &[Confidence::High, Confidence::Low]);
    let records = crate::model::records_for_country(std::slice::from_ref(&m), "Chile");
    assert_eq!(filter.scoped_records(&records).len(), 1);
    assert_eq!(
        filter.to_query_pairs(1),
        vec![("corridor_role", "exporter".to_owned()), ("confidence", "high".to_owned())]
    );
}

#[test]
fn contains_folded_treats_empty_needle_as_match() {
    assert!(contains_folded("Chile", ""));
    assert!(contains_folded("Chile", "hIl"));
    assert!(!contains_folded("Chile", "peru"));
}
