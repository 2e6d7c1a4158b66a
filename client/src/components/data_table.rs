//! Sourced data point table shared by material and country pages.

use flows::model::{Confidence, DataPoint};
use leptos::prelude::*;

use crate::components::source_link::SourceLink;
use crate::util::format::format_value;

/// One table row: the point plus the entity it is listed against.
#[derive(Clone, Debug)]
pub struct PointRow {
    pub subject: String,
    pub subject_href: Option<String>,
    pub point: DataPoint,
}

/// Counts per confidence level, highest first.
pub fn confidence_counts<'a>(points: impl IntoIterator<Item = &'a DataPoint>) -> [(Confidence, usize); 3] {
    let mut counts = [(Confidence::High, 0), (Confidence::Medium, 0), (Confidence::Low, 0)];
    for point in points {
        for (level, count) in &mut counts {
            if *level == point.confidence {
                *count += 1;
            }
        }
    }
    counts
}

#[component]
pub fn ConfidenceTag(confidence: Confidence) -> impl IntoView {
    let class = format!("confidence confidence--{}", confidence.label().to_lowercase());
    view! { <span class=class>{confidence.label()}</span> }
}

#[component]
pub fn DataPointTable(#[prop(into)] subject_heading: String, rows: Vec<PointRow>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th scope="col">{subject_heading}</th>
                    <th scope="col">"Metric"</th>
                    <th scope="col" class="data-table__num">"Value"</th>
                    <th scope="col">"Year"</th>
                    <th scope="col">"Source"</th>
                    <th scope="col">"Confidence"</th>
                    <th scope="col">"Freshness"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let PointRow { subject, subject_href, point } = row;
                        let subject_cell = match subject_href {
                            Some(href) => view! { <a href=href>{subject}</a> }.into_any(),
                            None => view! { <span>{subject}</span> }.into_any(),
                        };
                        view! {
                            <tr>
                                <td>{subject_cell}</td>
                                <td>{point.metric}</td>
                                <td class="data-table__num">
                                    {format!("{} {}", format_value(point.value), point.unit)}
                                </td>
                                <td>{point.year}</td>
                                <td>
                                    <SourceLink name=point.source_name url=point.source_url/>
                                </td>
                                <td>
                                    <ConfidenceTag confidence=point.confidence/>
                                </td>
                                <td>{point.freshness.label()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
