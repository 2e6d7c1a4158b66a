//! Year-over-year trend signals for a country's material records.
//!
//! For each material the most recent record is the "latest" (equal years go to
//! the higher value) and the most recent strictly-earlier record is the
//! "previous". Deltas are only computed when metric and unit agree.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::MaterialRecord;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendComparison {
    /// No earlier record exists.
    Baseline,
    Comparable {
        value_delta: f64,
        /// Ratio against the previous value (0.2 means +20%). `None` when the
        /// previous value is zero.
        value_delta_percent: Option<f64>,
    },
    /// Metric or unit changed between the two records.
    NotComparable,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSignal {
    pub material_slug: String,
    pub material_name: String,
    pub latest: MaterialRecord,
    pub previous: Option<MaterialRecord>,
    pub comparison: TrendComparison,
}

impl TrendSignal {
    #[must_use]
    pub fn value_delta(&self) -> Option<f64> {
        match self.comparison {
            TrendComparison::Comparable { value_delta, .. } => Some(value_delta),
            TrendComparison::Baseline | TrendComparison::NotComparable => None,
        }
    }

    #[must_use]
    pub fn value_delta_percent(&self) -> Option<f64> {
        match self.comparison {
            TrendComparison::Comparable { value_delta_percent, .. } => value_delta_percent,
            TrendComparison::Baseline | TrendComparison::NotComparable => None,
        }
    }
}

/// One signal per material present in `records`, ordered by material name.
#[must_use]
pub fn trend_signals(records: &[MaterialRecord]) -> Vec<TrendSignal> {
    let mut by_material = BTreeMap::<(&str, &str), Vec<&MaterialRecord>>::new();
    for record in records {
        by_material
            .entry((record.material_name.as_str(), record.material_slug.as_str()))
            .or_default()
            .push(record);
    }

    by_material
        .into_values()
        .filter_map(|group| signal_for(&group))
        .collect()
}

fn signal_for(group: &[&MaterialRecord]) -> Option<TrendSignal> {
    let latest = group.iter().copied().max_by(|a, b| recency(a, b))?;
    let previous = group
        .iter()
        .copied()
        .filter(|r| r.point.year < latest.point.year)
        .max_by(|a, b| recency(a, b));

    let comparison = match previous {
        None => TrendComparison::Baseline,
        Some(prev) if prev.point.metric == latest.point.metric && prev.point.unit == latest.point.unit => {
            let value_delta = latest.point.value - prev.point.value;
            let value_delta_percent = if prev.point.value.abs() < f64::EPSILON {
                None
            } else {
                Some(value_delta / prev.point.value)
            };
            TrendComparison::Comparable {
                value_delta,
                value_delta_percent,
            }
        }
        Some(_) => TrendComparison::NotComparable,
    };

    Some(TrendSignal {
        material_slug: latest.material_slug.clone(),
        material_name: latest.material_name.clone(),
        latest: latest.clone(),
        previous: previous.cloned(),
        comparison,
    })
}

/// Later year wins; within a year the higher value wins.
fn recency(a: &MaterialRecord, b: &MaterialRecord) -> Ordering {
    a.point
        .year
        .cmp(&b.point.year)
        .then_with(|| a.point.value.total_cmp(&b.point.value))
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod tests;
