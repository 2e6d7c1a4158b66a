//! Read-only dataset store.
//!
//! DESIGN
//! ======
//! `DataStore` is built once at process start from the two YAML sources and
//! then shared behind an `Arc`. Construction validates everything the
//! derivation layer assumes (non-empty names, parseable dates, unique slugs)
//! so lookups afterwards are infallible. Slug collisions fail the load rather
//! than letting one profile shadow another.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::countries::{CountryProfile, build_country_profiles};
use crate::freshness::parse_update_date;
use crate::model::{RawMaterial, TradeFlow, records_for_country};
use crate::slug::slugify;

pub const TRADE_FLOWS_FILE: &str = "trade_flows.yaml";
pub const RAW_MATERIALS_FILE: &str = "raw_materials.yaml";

const BUILTIN_TRADE_FLOWS: &str = include_str!("../data/trade_flows.yaml");
const BUILTIN_RAW_MATERIALS: &str = include_str!("../data/raw_materials.yaml");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {dataset}: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{dataset} entry {index} has an empty name")]
    EmptyName { dataset: &'static str, index: usize },
    #[error("{kind} slug collision: \"{first}\" and \"{second}\" both map to \"{slug}\"")]
    SlugCollision {
        kind: &'static str,
        slug: String,
        first: String,
        second: String,
    },
    #[error("material \"{material}\" lists unknown related product \"{product}\"")]
    UnknownProduct { material: String, product: String },
    #[error("material \"{material}\" has invalid updated_at \"{value}\": {source}")]
    InvalidDate {
        material: String,
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

#[derive(Debug)]
pub struct DataStore {
    flows: Vec<TradeFlow>,
    materials: Vec<RawMaterial>,
    profiles: Vec<CountryProfile>,
    country_index: HashMap<String, usize>,
    material_index: HashMap<String, usize>,
    fingerprint: String,
}

impl DataStore {
    /// Load the datasets compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML fails validation.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_sources(BUILTIN_TRADE_FLOWS, BUILTIN_RAW_MATERIALS)
    }

    /// Load `trade_flows.yaml` and `raw_materials.yaml` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is unreadable or fails validation.
    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        let flows = read_source(&dir.join(TRADE_FLOWS_FILE))?;
        let materials = read_source(&dir.join(RAW_MATERIALS_FILE))?;
        Self::from_sources(&flows, &materials)
    }

    /// Parse both YAML sources and build the store.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or any validation failure.
    pub fn from_sources(flows_yaml: &str, materials_yaml: &str) -> Result<Self, StoreError> {
        let flows = serde_yaml::from_str::<Vec<TradeFlow>>(flows_yaml).map_err(|source| StoreError::Parse {
            dataset: TRADE_FLOWS_FILE,
            source,
        })?;
        let materials =
            serde_yaml::from_str::<Vec<RawMaterial>>(materials_yaml).map_err(|source| StoreError::Parse {
                dataset: RAW_MATERIALS_FILE,
                source,
            })?;

        let mut store = Self::new(flows, materials)?;
        store.fingerprint = fingerprint(&[flows_yaml, materials_yaml]);
        Ok(store)
    }

    /// Validate records, derive slugs and country profiles.
    ///
    /// # Errors
    ///
    /// Returns an error on empty names, invalid dates or slug collisions.
    pub fn new(flows: Vec<TradeFlow>, mut materials: Vec<RawMaterial>) -> Result<Self, StoreError> {
        for (index, flow) in flows.iter().enumerate() {
            let blank_country = flow
                .top_importers
                .iter()
                .chain(flow.top_exporters.iter())
                .any(|c| c.trim().is_empty());
            if flow.product.trim().is_empty() || blank_country {
                return Err(StoreError::EmptyName {
                    dataset: TRADE_FLOWS_FILE,
                    index,
                });
            }
        }

        for (index, material) in materials.iter_mut().enumerate() {
            if material.name.trim().is_empty() {
                return Err(StoreError::EmptyName {
                    dataset: RAW_MATERIALS_FILE,
                    index,
                });
            }
            if let Some(value) = material.updated_at.as_deref() {
                let date = parse_update_date(value).map_err(|source| StoreError::InvalidDate {
                    material: material.name.clone(),
                    value: value.to_owned(),
                    source,
                })?;
                material.updated_on = Some(date);
            }
            material.slug = slugify(&material.name);
        }

        for material in &materials {
            let unknown = material
                .related_products
                .iter()
                .find(|p| !flows.iter().any(|f| f.product.eq_ignore_ascii_case(p)));
            if let Some(product) = unknown {
                return Err(StoreError::UnknownProduct {
                    material: material.name.clone(),
                    product: product.clone(),
                });
            }
        }

        let mut profiles = build_country_profiles(&flows);
        for profile in &mut profiles {
            profile.material_records = records_for_country(&materials, &profile.name);
        }

        let country_index = index_slugs("country", profiles.iter().map(|p| (p.slug.as_str(), p.name.as_str())))?;
        let material_index = index_slugs("material", materials.iter().map(|m| (m.slug.as_str(), m.name.as_str())))?;
        let fingerprint = fingerprint(&[]);

        Ok(Self {
            flows,
            materials,
            profiles,
            country_index,
            material_index,
            fingerprint,
        })
    }

    #[must_use]
    pub fn flows(&self) -> &[TradeFlow] {
        &self.flows
    }

    #[must_use]
    pub fn materials(&self) -> &[RawMaterial] {
        &self.materials
    }

    /// Country profiles, sorted by name.
    #[must_use]
    pub fn profiles(&self) -> &[CountryProfile] {
        &self.profiles
    }

    #[must_use]
    pub fn country(&self, slug: &str) -> Option<&CountryProfile> {
        self.country_index.get(slug).and_then(|i| self.profiles.get(*i))
    }

    #[must_use]
    pub fn country_by_name(&self, name: &str) -> Option<&CountryProfile> {
        self.country(&slugify(name)).filter(|p| p.name == name)
    }

    #[must_use]
    pub fn material(&self, slug: &str) -> Option<&RawMaterial> {
        self.material_index.get(slug).and_then(|i| self.materials.get(*i))
    }

    /// Flows listed in the material's `related_products`, plus flows whose
    /// product name contains the material name as whole words. Dataset order.
    #[must_use]
    pub fn flows_for_material(&self, material: &RawMaterial) -> Vec<&TradeFlow> {
        let name = words(&material.name);
        self.flows
            .iter()
            .filter(|f| {
                material.related_products.iter().any(|p| p.eq_ignore_ascii_case(&f.product))
                    || contains_phrase(&words(&f.product), &name)
            })
            .collect()
    }

    /// Hex SHA-256 over the source texts the store was parsed from.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Short form of the fingerprint for display.
    #[must_use]
    pub fn short_fingerprint(&self) -> &str {
        self.fingerprint.get(..12).unwrap_or(&self.fingerprint)
    }
}

fn read_source(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn index_slugs<'a>(
    kind: &'static str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<HashMap<String, usize>, StoreError> {
    let mut index = HashMap::<String, usize>::new();
    let mut names = Vec::<&str>::new();

    for (position, (slug, name)) in entries.enumerate() {
        if let Some(existing) = index.get(slug) {
            return Err(StoreError::SlugCollision {
                kind,
                slug: slug.to_owned(),
                first: names[*existing].to_owned(),
                second: name.to_owned(),
            });
        }
        index.insert(slug.to_owned(), position);
        names.push(name);
    }

    Ok(index)
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

fn fingerprint(sources: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for source in sources {
        hasher.update(source.as_bytes());
        hasher.update([0u8]);
    }
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
