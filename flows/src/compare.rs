//! Side-by-side comparison of two countries and one material.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::concentration::{Concentration, partner_concentration};
use crate::countries::CountryProfile;
use crate::model::{DataPoint, RawMaterial};
use crate::store::DataStore;

pub const LEFT_KEY: &str = "left";
pub const RIGHT_KEY: &str = "right";
pub const MATERIAL_KEY: &str = "material";

/// Raw slugs as they arrived in the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompareSelection {
    pub left: Option<String>,
    pub right: Option<String>,
    pub material: Option<String>,
}

/// Selection resolved against the store, with fallbacks applied.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedComparison<'a> {
    pub left: &'a CountryProfile,
    pub right: &'a CountryProfile,
    pub material: Option<&'a RawMaterial>,
}

impl CompareSelection {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slug = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            left: slug(LEFT_KEY),
            right: slug(RIGHT_KEY),
            material: slug(MATERIAL_KEY),
        }
    }

    /// Resolve slugs, falling back to the first and second profiles and the
    /// first material with data. `None` only when the store has no countries.
    #[must_use]
    pub fn resolve<'a>(&self, store: &'a DataStore) -> Option<ResolvedComparison<'a>> {
        let profiles = store.profiles();
        let first = profiles.first()?;
        let second = profiles.get(1).unwrap_or(first);

        let left = self.left.as_deref().and_then(|s| store.country(s)).unwrap_or(first);
        let right = self
            .right
            .as_deref()
            .and_then(|s| store.country(s))
            .unwrap_or(if left.slug == second.slug { first } else { second });

        let material = self
            .material
            .as_deref()
            .and_then(|s| store.material(s))
            .or_else(|| store.materials().iter().find(|m| !m.data_points.is_empty()))
            .or_else(|| store.materials().first());

        Some(ResolvedComparison { left, right, material })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryComparison {
    /// Partners ranked on both profiles, by name.
    pub shared_partners: Vec<String>,
    /// Products both countries trade in any role, by name.
    pub shared_products: Vec<String>,
    pub left_concentration: Concentration,
    pub right_concentration: Concentration,
}

#[must_use]
pub fn compare_countries(left: &CountryProfile, right: &CountryProfile) -> CountryComparison {
    let partners = |p: &CountryProfile| p.top_partners.iter().map(|x| x.name.clone()).collect::<BTreeSet<_>>();
    let products = |p: &CountryProfile| p.products.iter().map(|x| x.product.clone()).collect::<BTreeSet<_>>();

    CountryComparison {
        shared_partners: partners(left).intersection(&partners(right)).cloned().collect(),
        shared_products: products(left).intersection(&products(right)).cloned().collect(),
        left_concentration: partner_concentration(&left.partner_counts()),
        right_concentration: partner_concentration(&right.partner_counts()),
    }
}

/// Latest data point per metric for `country`, ordered by metric name.
/// Equal years go to the higher value.
#[must_use]
pub fn material_snapshot<'a>(material: &'a RawMaterial, country: &str) -> Vec<&'a DataPoint> {
    let mut latest = BTreeMap::<&str, &DataPoint>::new();

    for point in material.data_points.iter().filter(|p| p.country == country) {
        let replace = latest.get(point.metric.as_str()).is_none_or(|current| {
            (point.year, point.value) > (current.year, current.value)
        });
        if replace {
            latest.insert(&point.metric, point);
        }
    }

    latest.into_values().collect()
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
