//! Serializable filter state for directory and detail views.
//!
//! DESIGN
//! ======
//! Filters are plain values rebuilt from the query string on every render.
//! Construction goes through a key lookup so any query representation (axum
//! query maps, router param maps, test fixtures) can feed the same parser.
//! Unknown or malformed values silently fall back to the default; a filter
//! can never fail to build.

use serde::Serialize;

use crate::countries::{CountryProfile, Role};
use crate::model::{Confidence, MaterialCategory, MaterialRecord, RawMaterial};
use crate::pagination::parse_page;

pub const QUERY_KEY: &str = "q";
pub const PAGE_KEY: &str = "page";
pub const COVERAGE_KEY: &str = "coverage";
pub const CATEGORY_KEY: &str = "category";
pub const CONFIDENCE_KEY: &str = "confidence";
pub const CORRIDOR_ROLE_KEY: &str = "corridor_role";

/// Query pairs ready for URL encoding; defaults are omitted.
pub type QueryPairs = Vec<(&'static str, String)>;

// =============================================================================
// ENUM FILTERS
// =============================================================================

/// Which trade roles a country must cover to be listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCoverage {
    #[default]
    All,
    Importer,
    Exporter,
    Both,
}

impl RoleCoverage {
    pub const ALL: [Self; 4] = [Self::All, Self::Importer, Self::Exporter, Self::Both];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Importer => "importer",
            Self::Exporter => "exporter",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All roles",
            Self::Importer => "Importers",
            Self::Exporter => "Exporters",
            Self::Both => "Importers and exporters",
        }
    }

    #[must_use]
    pub fn matches(self, profile: &CountryProfile) -> bool {
        match self {
            Self::All => true,
            Self::Importer => profile.imports_anything(),
            Self::Exporter => profile.exports_anything(),
            Self::Both => profile.imports_anything() && profile.exports_anything(),
        }
    }
}

/// Minimum editorial confidence a record must carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceScope {
    #[default]
    All,
    High,
    MediumPlus,
}

impl ConfidenceScope {
    pub const ALL: [Self; 3] = [Self::All, Self::High, Self::MediumPlus];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::High => "high",
            Self::MediumPlus => "medium_plus",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Any confidence",
            Self::High => "High only",
            Self::MediumPlus => "Medium or better",
        }
    }

    #[must_use]
    pub fn includes(self, confidence: Confidence) -> bool {
        match self {
            Self::All => true,
            Self::High => confidence == Confidence::High,
            Self::MediumPlus => matches!(confidence, Confidence::High | Confidence::Medium),
        }
    }
}

/// Subject-side role filter for corridor tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorRoleFilter {
    #[default]
    All,
    Importer,
    Exporter,
}

impl CorridorRoleFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Importer, Self::Exporter];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Importer => "importer",
            Self::Exporter => "exporter",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Both directions",
            Self::Importer => "Inbound (importing)",
            Self::Exporter => "Outbound (exporting)",
        }
    }

    #[must_use]
    pub fn matches(self, role: Role) -> bool {
        match self {
            Self::All => true,
            Self::Importer => role == Role::Importer,
            Self::Exporter => role == Role::Exporter,
        }
    }
}

// =============================================================================
// COUNTRY DIRECTORY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryFilter {
    pub query: String,
    pub coverage: RoleCoverage,
    pub page: usize,
}

impl Default for CountryFilter {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl CountryFilter {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            query: text_param(&lookup, QUERY_KEY),
            coverage: lookup(COVERAGE_KEY)
                .and_then(|raw| RoleCoverage::parse(raw.trim()))
                .unwrap_or_default(),
            page: parse_page(lookup(PAGE_KEY).as_deref()),
        }
    }

    #[must_use]
    pub fn matches(&self, profile: &CountryProfile) -> bool {
        contains_folded(&profile.name, &self.query) && self.coverage.matches(profile)
    }

    #[must_use]
    pub fn apply<'a>(&self, profiles: &'a [CountryProfile]) -> Vec<&'a CountryProfile> {
        profiles.iter().filter(|p| self.matches(p)).collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.coverage != RoleCoverage::All
    }

    /// Query pairs for this filter at `page`.
    #[must_use]
    pub fn to_query_pairs(&self, page: usize) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if !self.query.is_empty() {
            pairs.push((QUERY_KEY, self.query.clone()));
        }
        if self.coverage != RoleCoverage::All {
            pairs.push((COVERAGE_KEY, self.coverage.as_str().to_owned()));
        }
        push_page(&mut pairs, page);
        pairs
    }
}

// =============================================================================
// MATERIAL DIRECTORY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaterialFilter {
    pub query: String,
    pub category: Option<MaterialCategory>,
    pub confidence: ConfidenceScope,
    pub page: usize,
}

impl Default for MaterialFilter {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl MaterialFilter {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            query: text_param(&lookup, QUERY_KEY),
            category: lookup(CATEGORY_KEY).and_then(|raw| MaterialCategory::parse(raw.trim())),
            confidence: confidence_param(&lookup),
            page: parse_page(lookup(PAGE_KEY).as_deref()),
        }
    }

    /// Text matches name, notes or any major country. A confidence scope other
    /// than `All` requires at least one data point inside the scope.
    #[must_use]
    pub fn matches(&self, material: &RawMaterial) -> bool {
        let text_hit = self.query.is_empty()
            || contains_folded(&material.name, &self.query)
            || contains_folded(&material.notes, &self.query)
            || material.major_countries.iter().any(|c| contains_folded(c, &self.query));
        let category_hit = self.category.is_none_or(|c| c == material.category);
        let confidence_hit = self.confidence == ConfidenceScope::All
            || material
                .data_points
                .iter()
                .any(|p| self.confidence.includes(p.confidence));

        text_hit && category_hit && confidence_hit
    }

    #[must_use]
    pub fn apply<'a>(&self, materials: &'a [RawMaterial]) -> Vec<&'a RawMaterial> {
        materials.iter().filter(|m| self.matches(m)).collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_some() || self.confidence != ConfidenceScope::All
    }

    #[must_use]
    pub fn to_query_pairs(&self, page: usize) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if !self.query.is_empty() {
            pairs.push((QUERY_KEY, self.query.clone()));
        }
        if let Some(category) = self.category {
            pairs.push((CATEGORY_KEY, category.as_str().to_owned()));
        }
        if self.confidence != ConfidenceScope::All {
            pairs.push((CONFIDENCE_KEY, self.confidence.as_str().to_owned()));
        }
        push_page(&mut pairs, page);
        pairs
    }
}

// =============================================================================
// COUNTRY DETAIL
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryDetailFilter {
    pub corridor_role: CorridorRoleFilter,
    pub confidence: ConfidenceScope,
    /// Corridor table page.
    pub page: usize,
}

impl Default for CountryDetailFilter {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl CountryDetailFilter {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            corridor_role: lookup(CORRIDOR_ROLE_KEY)
                .and_then(|raw| CorridorRoleFilter::parse(raw.trim()))
                .unwrap_or_default(),
            confidence: confidence_param(&lookup),
            page: parse_page(lookup(PAGE_KEY).as_deref()),
        }
    }

    #[must_use]
    pub fn scoped_records(&self, records: &[MaterialRecord]) -> Vec<MaterialRecord> {
        records
            .iter()
            .filter(|r| self.confidence.includes(r.point.confidence))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn to_query_pairs(&self, page: usize) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if self.corridor_role != CorridorRoleFilter::All {
            pairs.push((CORRIDOR_ROLE_KEY, self.corridor_role.as_str().to_owned()));
        }
        if self.confidence != ConfidenceScope::All {
            pairs.push((CONFIDENCE_KEY, self.confidence.as_str().to_owned()));
        }
        push_page(&mut pairs, page);
        pairs
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn text_param(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    lookup(key).map(|v| v.trim().to_owned()).unwrap_or_default()
}

fn confidence_param(lookup: &impl Fn(&str) -> Option<String>) -> ConfidenceScope {
    lookup(CONFIDENCE_KEY)
        .and_then(|raw| ConfidenceScope::parse(raw.trim()))
        .unwrap_or_default()
}

fn push_page(pairs: &mut QueryPairs, page: usize) {
    if page > 1 {
        pairs.push((PAGE_KEY, page.to_string()));
    }
}

/// Case-insensitive substring test; an empty needle always matches.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
