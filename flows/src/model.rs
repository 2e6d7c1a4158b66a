//! Authored dataset records and the small enums that classify them.
//!
//! DESIGN
//! ======
//! Records deserialize straight from the embedded YAML sources. Derived
//! fields (slugs, joined records) are filled in by the store after parsing,
//! so nothing in this module ever needs to be mutated once loaded.

use serde::{Deserialize, Serialize};
use time::Date;

// =============================================================================
// TRADE FLOWS
// =============================================================================

/// Broad product family a trade flow belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowCategory {
    Energy,
    Metals,
    Agriculture,
    Manufactured,
}

impl FlowCategory {
    pub const ALL: [Self; 4] = [Self::Energy, Self::Metals, Self::Agriculture, Self::Manufactured];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Metals => "metals",
            Self::Agriculture => "agriculture",
            Self::Manufactured => "manufactured",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Metals => "Metals",
            Self::Agriculture => "Agriculture",
            Self::Manufactured => "Manufactured goods",
        }
    }
}

/// A product-level trade relationship with its leading importers and exporters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeFlow {
    pub product: String,
    pub category: FlowCategory,
    /// Ordered by import volume, largest first.
    pub top_importers: Vec<String>,
    /// Ordered by export volume, largest first.
    pub top_exporters: Vec<String>,
    pub key_route: String,
}

impl TradeFlow {
    #[must_use]
    pub fn imports(&self, country: &str) -> bool {
        self.top_importers.iter().any(|c| c == country)
    }

    #[must_use]
    pub fn exports(&self, country: &str) -> bool {
        self.top_exporters.iter().any(|c| c == country)
    }
}

// =============================================================================
// RAW MATERIALS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    CriticalMineral,
    BaseMetal,
    EnergyCommodity,
    AgriculturalInput,
}

impl MaterialCategory {
    pub const ALL: [Self; 4] = [
        Self::CriticalMineral,
        Self::BaseMetal,
        Self::EnergyCommodity,
        Self::AgriculturalInput,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CriticalMineral => "critical_mineral",
            Self::BaseMetal => "base_metal",
            Self::EnergyCommodity => "energy_commodity",
            Self::AgriculturalInput => "agricultural_input",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CriticalMineral => "Critical mineral",
            Self::BaseMetal => "Base metal",
            Self::EnergyCommodity => "Energy commodity",
            Self::AgriculturalInput => "Agricultural input",
        }
    }

    /// Parse the snake_case wire name; `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Editorial reliability tag on a data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Editorial recency tag on a data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Current,
    Recent,
    Dated,
}

impl Freshness {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Recent => "Recent",
            Self::Dated => "Dated",
        }
    }
}

/// One sourced observation about a material in a country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub country: String,
    pub metric: String,
    pub value: f64,
    pub unit: String,
    pub year: i32,
    pub source_name: String,
    #[serde(default)]
    pub source_url: String,
    pub confidence: Confidence,
    pub freshness: Freshness,
}

/// A raw material entry.
///
/// Entries without `data_points` / `updated_at` are the plain directory
/// variant; the richer variant carries both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub name: String,
    /// Derived from `name` by the store; never authored.
    #[serde(default, skip_deserializing)]
    pub slug: String,
    pub category: MaterialCategory,
    pub major_countries: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Flow products tied to this material beyond those naming it.
    #[serde(default)]
    pub related_products: Vec<String>,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// `updated_at` parsed by the store.
    #[serde(skip)]
    pub updated_on: Option<Date>,
}

impl RawMaterial {
    #[must_use]
    pub fn has_major_country(&self, country: &str) -> bool {
        self.major_countries.iter().any(|c| c == country)
    }
}

/// A data point joined with the material it describes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialRecord {
    pub material_slug: String,
    pub material_name: String,
    pub category: MaterialCategory,
    #[serde(flatten)]
    pub point: DataPoint,
}

impl MaterialRecord {
    #[must_use]
    pub fn from_point(material: &RawMaterial, point: &DataPoint) -> Self {
        Self {
            material_slug: material.slug.clone(),
            material_name: material.name.clone(),
            category: material.category,
            point: point.clone(),
        }
    }
}

/// Every data point in `materials` recorded against `country`, in dataset order.
#[must_use]
pub fn records_for_country(materials: &[RawMaterial], country: &str) -> Vec<MaterialRecord> {
    materials
        .iter()
        .flat_map(|m| {
            m.data_points
                .iter()
                .filter(|p| p.country == country)
                .map(move |p| MaterialRecord::from_point(m, p))
        })
        .collect()
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
