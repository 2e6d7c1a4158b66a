//! Headline number tile.

use leptos::prelude::*;

#[component]
pub fn StatTile(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
            {detail.map(|d| view! { <span class="stat-tile__detail">{d}</span> })}
        </div>
    }
}
