//! Per-country aggregation over the trade-flow set.
//!
//! Every country named as an importer or exporter in any flow gets exactly one
//! profile. Profiles come back sorted by name.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{FlowCategory, MaterialRecord, TradeFlow};
use crate::slug::slugify;

/// Number of partners kept on a profile after ranking.
pub const TOP_PARTNER_LIMIT: usize = 8;

/// The subject's side of a flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Importer,
    Exporter,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Importer => "importer",
            Self::Exporter => "exporter",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Importer => "Importer",
            Self::Exporter => "Exporter",
        }
    }
}

/// Participation in a single flow, collapsing both sides into `Both`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRole {
    Importer,
    Exporter,
    Both,
}

impl FlowRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Importer => "Importer",
            Self::Exporter => "Exporter",
            Self::Both => "Importer & exporter",
        }
    }
}

/// How a partner relates to the subject country.
///
/// Suppliers export in flows the subject imports; customers import in flows
/// the subject exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerRole {
    Supplier,
    Customer,
}

impl PartnerRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Customer => "Customer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleBreakdown {
    pub importer_count: usize,
    pub exporter_count: usize,
    /// Distinct products across both roles.
    pub total_flows: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: String,
    pub shared_flows: u32,
    pub role: PartnerRole,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryProduct {
    pub product: String,
    pub category: FlowCategory,
    pub role: FlowRole,
    pub route: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryProfile {
    pub slug: String,
    pub name: String,
    pub role_breakdown: RoleBreakdown,
    pub top_partners: Vec<Partner>,
    pub products: Vec<CountryProduct>,
    pub material_records: Vec<MaterialRecord>,
}

impl CountryProfile {
    /// Shared-flow counts of the ranked partners, in rank order.
    #[must_use]
    pub fn partner_counts(&self) -> Vec<u32> {
        self.top_partners.iter().map(|p| p.shared_flows).collect()
    }

    #[must_use]
    pub fn imports_anything(&self) -> bool {
        self.role_breakdown.importer_count > 0
    }

    #[must_use]
    pub fn exports_anything(&self) -> bool {
        self.role_breakdown.exporter_count > 0
    }
}

/// Build one profile per distinct country across all flows, sorted by name.
///
/// `material_records` is left empty; the store attaches records afterwards.
#[must_use]
pub fn build_country_profiles(flows: &[TradeFlow]) -> Vec<CountryProfile> {
    let names = flows
        .iter()
        .flat_map(|f| f.top_importers.iter().chain(f.top_exporters.iter()))
        .map(String::as_str)
        .collect::<BTreeSet<_>>();

    names
        .into_iter()
        .map(|name| build_profile(flows, name))
        .collect()
}

fn build_profile(flows: &[TradeFlow], name: &str) -> CountryProfile {
    let mut importer_count = 0usize;
    let mut exporter_count = 0usize;
    let mut products = BTreeSet::<&str>::new();
    let mut suppliers = BTreeMap::<&str, u32>::new();
    let mut customers = BTreeMap::<&str, u32>::new();
    let mut rows = Vec::<CountryProduct>::new();

    for flow in flows {
        let imports = flow.imports(name);
        let exports = flow.exports(name);

        if imports {
            importer_count += 1;
            products.insert(&flow.product);
            for partner in flow.top_exporters.iter().filter(|p| *p != name) {
                *suppliers.entry(partner).or_insert(0) += 1;
            }
        }
        if exports {
            exporter_count += 1;
            products.insert(&flow.product);
            for partner in flow.top_importers.iter().filter(|p| *p != name) {
                *customers.entry(partner).or_insert(0) += 1;
            }
        }

        let role = match (imports, exports) {
            (true, true) => FlowRole::Both,
            (true, false) => FlowRole::Importer,
            (false, true) => FlowRole::Exporter,
            (false, false) => continue,
        };
        rows.push(CountryProduct {
            product: flow.product.clone(),
            category: flow.category,
            role,
            route: flow.key_route.clone(),
        });
    }

    rows.sort_by(|a, b| a.product.cmp(&b.product));

    CountryProfile {
        slug: slugify(name),
        name: name.to_owned(),
        role_breakdown: RoleBreakdown {
            importer_count,
            exporter_count,
            total_flows: products.len(),
        },
        top_partners: rank_partners(&suppliers, &customers),
        products: rows,
        material_records: Vec::new(),
    }
}

fn rank_partners(suppliers: &BTreeMap<&str, u32>, customers: &BTreeMap<&str, u32>) -> Vec<Partner> {
    let tagged = suppliers
        .iter()
        .map(|(name, count)| (*name, *count, PartnerRole::Supplier))
        .chain(customers.iter().map(|(name, count)| (*name, *count, PartnerRole::Customer)));

    let mut partners = tagged
        .map(|(name, shared_flows, role)| Partner {
            name: name.to_owned(),
            shared_flows,
            role,
        })
        .collect::<Vec<_>>();

    partners.sort_by(|a, b| {
        b.shared_flows
            .cmp(&a.shared_flows)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.role.cmp(&b.role))
    });
    partners.truncate(TOP_PARTNER_LIMIT);
    partners
}

#[cfg(test)]
#[path = "countries_test.rs"]
mod tests;
