//! Partner/product corridors for one country.

use serde::Serialize;

use crate::countries::Role;
use crate::model::{FlowCategory, TradeFlow};

/// One (partner, role, product) row. `role` is the subject country's side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Corridor {
    pub partner: String,
    pub role: Role,
    pub product: String,
    pub category: FlowCategory,
    pub route: String,
}

/// Every corridor `country` participates in, sorted by partner, role label,
/// then product. The subject never appears as its own partner.
#[must_use]
pub fn extract_corridors(flows: &[TradeFlow], country: &str) -> Vec<Corridor> {
    let mut rows = Vec::<Corridor>::new();

    for flow in flows {
        if flow.imports(country) {
            push_rows(&mut rows, flow, country, Role::Importer, &flow.top_exporters);
        }
        if flow.exports(country) {
            push_rows(&mut rows, flow, country, Role::Exporter, &flow.top_importers);
        }
    }

    rows.sort_by(|a, b| {
        a.partner
            .cmp(&b.partner)
            .then_with(|| a.role.as_str().cmp(b.role.as_str()))
            .then_with(|| a.product.cmp(&b.product))
    });
    rows
}

fn push_rows(rows: &mut Vec<Corridor>, flow: &TradeFlow, country: &str, role: Role, partners: &[String]) {
    for partner in partners.iter().filter(|p| *p != country) {
        rows.push(Corridor {
            partner: partner.clone(),
            role,
            product: flow.product.clone(),
            category: flow.category,
            route: flow.key_route.clone(),
        });
    }
}

#[cfg(test)]
#[path = "corridors_test.rs"]
mod tests;
