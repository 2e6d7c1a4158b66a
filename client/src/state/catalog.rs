//! Dataset handle and reference date for a single render.
//!
//! DESIGN
//! ======
//! The server builds one `Catalog` per request: the shared store plus the date
//! used for freshness labels. Pinning the date at request time keeps every
//! age on a page consistent, and lets tests render against a fixed day.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::Arc;

use flows::DataStore;
use flows::freshness::{UpdateAge, update_age};
use flows::model::RawMaterial;
use leptos::prelude::*;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug)]
pub struct Catalog {
    pub store: Arc<DataStore>,
    pub today: Date,
}

impl Catalog {
    /// Catalog dated to the current UTC day.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self::at(store, OffsetDateTime::now_utc().date())
    }

    pub fn at(store: Arc<DataStore>, today: Date) -> Self {
        Self { store, today }
    }

    pub fn update_age(&self, material: &RawMaterial) -> Option<UpdateAge> {
        update_age(material.updated_on, self.today)
    }

    /// Link for a country name when it has a profile.
    pub fn country_href(&self, name: &str) -> Option<String> {
        self.store
            .country_by_name(name)
            .map(|p| crate::util::query::country_href(&p.slug))
    }
}

/// Read the catalog provided by the server for this request.
pub fn use_catalog() -> Catalog {
    expect_context::<Catalog>()
}
