//! Methodology notes with the live band thresholds and dataset fingerprint.

use flows::concentration::{HIGH_HHI_THRESHOLD, MODERATE_HHI_THRESHOLD, RiskBand};
use flows::countries::TOP_PARTNER_LIMIT;
use flows::freshness::{AGING_DAYS, FRESH_DAYS, UpdateStatus};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::risk_badge::RiskBadge;
use crate::state::catalog::use_catalog;
use crate::util::format::format_hhi;
use crate::util::markdown::render_markdown_html;

const METHODOLOGY: &str = include_str!("../content/methodology.md");

#[component]
pub fn MethodologyPage() -> impl IntoView {
    let catalog = use_catalog();
    let html = render_markdown_html(METHODOLOGY);
    let fingerprint = catalog.store.fingerprint().to_owned();

    let bands = [
        (RiskBand::High, format!("{} and above", format_hhi(HIGH_HHI_THRESHOLD))),
        (
            RiskBand::Moderate,
            format!("{} to {}", format_hhi(MODERATE_HHI_THRESHOLD), format_hhi(HIGH_HHI_THRESHOLD - 1.0)),
        ),
        (RiskBand::Low, format!("below {}", format_hhi(MODERATE_HHI_THRESHOLD))),
    ]
    .into_iter()
    .map(|(band, range)| {
        view! {
            <tr>
                <td>
                    <RiskBadge band/>
                </td>
                <td>{range}</td>
            </tr>
        }
    })
    .collect_view();

    let review = [
        (UpdateStatus::Fresh, format!("reviewed within {FRESH_DAYS} days")),
        (UpdateStatus::Aging, format!("reviewed within {AGING_DAYS} days")),
        (UpdateStatus::Stale, format!("last reviewed more than {AGING_DAYS} days ago")),
    ]
    .into_iter()
    .map(|(status, rule)| view! { <li>{status.label()} ": " {rule}</li> })
    .collect_view();

    view! {
        <Title text="Methodology"/>
        <article class="prose" inner_html=html></article>

        <section class="panel">
            <h2>"Concentration bands"</h2>
            <p class="panel__hint">{format!("Computed over at most {TOP_PARTNER_LIMIT} partners per country.")}</p>
            <table class="data-table data-table--compact">
                <thead>
                    <tr>
                        <th scope="col">"Band"</th>
                        <th scope="col">"HHI"</th>
                    </tr>
                </thead>
                <tbody>{bands}</tbody>
            </table>
        </section>

        <section class="panel">
            <h2>"Review status"</h2>
            <ul class="plain-list">{review}</ul>
        </section>

        <section class="panel">
            <h2>"Dataset"</h2>
            <p>
                {format!(
                    "{} flows, {} countries, {} materials.",
                    catalog.store.flows().len(),
                    catalog.store.profiles().len(),
                    catalog.store.materials().len(),
                )}
            </p>
            <p>"SHA-256 fingerprint: " <code>{fingerprint}</code></p>
        </section>
    }
}
