//! Grouped summaries over a country's material records.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{Confidence, MaterialRecord};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupSummary<K> {
    pub key: K,
    pub records: usize,
    pub high_confidence: usize,
    /// `high_confidence / records`, in 0..=1.
    pub high_confidence_share: f64,
    pub materials: usize,
    pub sources: usize,
    pub latest_year: Option<i32>,
}

/// Group by material category label; largest groups first, then label.
#[must_use]
pub fn group_by_category(records: &[MaterialRecord]) -> Vec<GroupSummary<String>> {
    let mut groups = summarize(records, |r| r.category.label().to_owned());
    sort_by_count_then_key(&mut groups);
    groups
}

/// Group by material name; largest groups first, then name.
#[must_use]
pub fn group_by_material(records: &[MaterialRecord]) -> Vec<GroupSummary<String>> {
    let mut groups = summarize(records, |r| r.material_name.clone());
    sort_by_count_then_key(&mut groups);
    groups
}

/// Group by observation year, most recent first.
#[must_use]
pub fn group_by_year(records: &[MaterialRecord]) -> Vec<GroupSummary<i32>> {
    let mut groups = summarize(records, |r| r.point.year);
    groups.sort_by(|a, b| b.key.cmp(&a.key));
    groups
}

fn sort_by_count_then_key(groups: &mut [GroupSummary<String>]) {
    groups.sort_by(|a, b| b.records.cmp(&a.records).then_with(|| a.key.cmp(&b.key)));
}

#[derive(Default)]
struct Accumulator<'a> {
    records: usize,
    high_confidence: usize,
    materials: BTreeSet<&'a str>,
    sources: BTreeSet<&'a str>,
    latest_year: Option<i32>,
}

fn summarize<'a, K, F>(records: &'a [MaterialRecord], key_of: F) -> Vec<GroupSummary<K>>
where
    K: Ord,
    F: Fn(&MaterialRecord) -> K,
{
    let mut groups = BTreeMap::<K, Accumulator<'a>>::new();

    for record in records {
        let acc = groups.entry(key_of(record)).or_default();
        acc.records += 1;
        if record.point.confidence == Confidence::High {
            acc.high_confidence += 1;
        }
        acc.materials.insert(&record.material_slug);
        if !record.point.source_name.trim().is_empty() {
            acc.sources.insert(&record.point.source_name);
        }
        acc.latest_year = acc.latest_year.max(Some(record.point.year));
    }

    groups
        .into_iter()
        .map(|(key, acc)| {
            #[allow(clippy::cast_precision_loss)]
            let high_confidence_share = if acc.records == 0 {
                0.0
            } else {
                acc.high_confidence as f64 / acc.records as f64
            };
            GroupSummary {
                key,
                records: acc.records,
                high_confidence: acc.high_confidence,
                high_confidence_share,
                materials: acc.materials.len(),
                sources: acc.sources.len(),
                latest_year: acc.latest_year,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;
