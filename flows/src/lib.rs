//! Trade-flow and raw-material derivations for the atlas.
//!
//! This crate is UI-framework agnostic: it loads the two YAML datasets,
//! validates them, and derives everything the pages and the JSON API show
//! (country profiles, concentration, grouped records, trends, corridors,
//! filters, pagination, comparisons and the guessing game). Nothing here
//! touches HTTP or rendering.

pub mod compare;
pub mod concentration;
pub mod corridors;
pub mod countries;
pub mod filters;
pub mod freshness;
pub mod game;
pub mod grouping;
pub mod model;
pub mod pagination;
pub mod slug;
pub mod store;
pub mod trend;

pub use concentration::{Concentration, RiskBand, partner_concentration};
pub use corridors::{Corridor, extract_corridors};
pub use countries::{CountryProfile, build_country_profiles};
pub use grouping::{GroupSummary, group_by_category, group_by_material, group_by_year};
pub use model::{DataPoint, MaterialRecord, RawMaterial, TradeFlow};
pub use store::{DataStore, StoreError};
pub use trend::{TrendSignal, trend_signals};
