//! Concentration risk band badge.

use flows::concentration::RiskBand;
use leptos::prelude::*;

#[component]
pub fn RiskBadge(band: RiskBand) -> impl IntoView {
    let class = format!("risk-badge risk-badge--{}", band.as_str());
    view! { <span class=class>{format!("{} concentration", band.label())}</span> }
}
