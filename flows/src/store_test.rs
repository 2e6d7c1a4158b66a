use super::*;

const FLOWS: &str = r"
- product: Copper ore
  category: metals
  top_importers: [China, Japan]
  top_exporters: [Chile, Peru]
  key_route: Pacific bulk lanes
- product: Lithium carbonate
  category: metals
  top_importers: [China, South Korea]
  top_exporters: [Chile, Argentina]
  key_route: Antofagasta to East Asia
";

const MATERIALS: &str = r"
- name: Lithium
  category: critical_mineral
  major_countries: [Australia, Chile]
  notes: Battery cathodes.
  updated_at: '2024-11-02'
  data_points:
    - country: Chile
      metric: Mine production
      value: 44000
      unit: tonnes
      year: 2023
      source_name: USGS
      source_url: https://example.org/lithium
      confidence: high
      freshness: recent
- name: Copper
  category: base_metal
  major_countries: [Chile, Peru]
";

#[test]
fn builtin_datasets_load() {
    let store = DataStore::builtin().unwrap();
    assert!(!store.flows().is_empty());
    assert!(!store.materials().is_empty());
    assert!(!store.profiles().is_empty());
    assert_eq!(store.fingerprint().len(), 64);
    assert_eq!(store.short_fingerprint().len(), 12);
}

#[test]
fn builtin_profiles_resolve_by_slug() {
    let store = DataStore::builtin().unwrap();
    for profile in store.profiles() {
        assert_eq!(store.country(&profile.slug).map(|p| &p.name), Some(&profile.name));
    }
    for material in store.materials() {
        assert_eq!(material.slug, crate::slug::slugify(&material.name));
        assert!(store.material(&material.slug).is_some());
    }
}

#[test]
fn profiles_carry_material_records() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let chile = store.country("chile").unwrap();
    assert_eq!(chile.material_records.len(), 1);
    assert_eq!(chile.material_records[0].material_slug, "lithium");
    assert!(store.country("china").unwrap().material_records.is_empty());
}

#[test]
fn lookups_miss_cleanly() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    assert!(store.country("atlantis").is_none());
    assert!(store.material("unobtainium").is_none());
    assert!(store.country_by_name("south korea").is_none());
    assert!(store.country_by_name("South Korea").is_some());
}

#[test]
fn flows_for_material_matches_product_text() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let lithium = store.material("lithium").unwrap();
    let flows = store.flows_for_material(lithium);
    assert_eq!(flows.len(), 1);
    assert_eq!(flows[0].product, "Lithium carbonate");
}

#[test]
fn flows_for_material_matches_whole_words_only() {
    let flows = r"
- product: Platinum group metals
  category: metals
  top_importers: [Japan]
  top_exporters: [South Africa]
  key_route: Durban to Yokohama
- product: Tin ingots
  category: metals
  top_importers: [Japan]
  top_exporters: [Indonesia]
  key_route: Strait of Malacca
";
    let materials = r"
- name: Tin
  category: base_metal
  major_countries: [Indonesia]
";
    let store = DataStore::from_sources(flows, materials).unwrap();
    let tin = store.material("tin").unwrap();
    let products = store
        .flows_for_material(tin)
        .into_iter()
        .map(|f| f.product.as_str())
        .collect::<Vec<_>>();
    assert_eq!(products, vec!["Tin ingots"]);
}

#[test]
fn related_products_link_flows_without_the_name() {
    let store = DataStore::builtin().unwrap();
    let rare_earths = store.material("rare-earth-elements").unwrap();
    let products = store
        .flows_for_material(rare_earths)
        .into_iter()
        .map(|f| f.product.as_str())
        .collect::<Vec<_>>();
    assert_eq!(products, vec!["Rare earth oxides"]);
}

#[test]
fn unknown_related_product_is_rejected() {
    let materials = r"
- name: Copper
  category: base_metal
  major_countries: [Chile]
  related_products: [Copper wire]
";
    let err = DataStore::from_sources(FLOWS, materials).unwrap_err();
    assert!(matches!(err, StoreError::UnknownProduct { ref product, .. } if product == "Copper wire"));
}

#[test]
fn fingerprint_tracks_source_text() {
    let a = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let b = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let c = DataStore::from_sources(FLOWS, "[]").unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = DataStore::from_sources("- product: [", MATERIALS).unwrap_err();
    assert!(matches!(err, StoreError::Parse { dataset: TRADE_FLOWS_FILE, .. }));

    let err = DataStore::from_sources(FLOWS, "- name: X\n  category: gems\n  major_countries: []\n").unwrap_err();
    assert!(matches!(err, StoreError::Parse { dataset: RAW_MATERIALS_FILE, .. }));
}

#[test]
fn country_slug_collision_fails_fast() {
    let flows = r"
- product: Widgets
  category: manufactured
  top_importers: [South Korea]
  top_exporters: [South-Korea]
  key_route: nowhere
";
    let err = DataStore::from_sources(flows, "[]").unwrap_err();
    match err {
        StoreError::SlugCollision { kind, slug, first, second } => {
            assert_eq!(kind, "country");
            assert_eq!(slug, "south-korea");
            assert_eq!(first, "South Korea");
            assert_eq!(second, "South-Korea");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn material_slug_collision_fails_fast() {
    let materials = r"
- name: Rare earths
  category: critical_mineral
  major_countries: [China]
- name: Rare Earths
  category: critical_mineral
  major_countries: [China]
";
    let err = DataStore::from_sources(FLOWS, materials).unwrap_err();
    assert!(matches!(err, StoreError::SlugCollision { kind: "material", .. }));
}

#[test]
fn update_dates_are_parsed_at_load() {
    let store = DataStore::from_sources(FLOWS, MATERIALS).unwrap();
    let lithium = store.material("lithium").unwrap();
    assert_eq!(
        lithium.updated_on,
        Some(time::Date::from_calendar_date(2024, time::Month::November, 2).unwrap())
    );
    assert!(store.material("copper").unwrap().updated_on.is_none());
}

#[test]
fn invalid_update_date_is_rejected() {
    let materials = r"
- name: Nickel
  category: base_metal
  major_countries: [Indonesia]
  updated_at: last spring
";
    let err = DataStore::from_sources(FLOWS, materials).unwrap_err();
    assert!(matches!(err, StoreError::InvalidDate { .. }));
    assert!(err.to_string().contains("last spring"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn blank_names_are_rejected() {
    let flows = r"
- product: '  '
  category: energy
  top_importers: [Japan]
  top_exporters: [Qatar]
  key_route: Gulf
";
    let err = DataStore::from_sources(flows, "[]").unwrap_err();
    assert!(matches!(err, StoreError::EmptyName { index: 0, .. }));
}

#[test]
fn missing_directory_is_an_io_error() {
    let err = DataStore::from_dir(Path::new("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains(TRADE_FLOWS_FILE));
}

#[test]
fn data_directory_matches_builtin() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let from_dir = DataStore::from_dir(&dir).unwrap();
    let builtin = DataStore::builtin().unwrap();
    assert_eq!(from_dir.fingerprint(), builtin.fingerprint());
}
