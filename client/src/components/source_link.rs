//! Source attribution for a data point.
//!
//! Points with no URL still show the source name, as plain text.

use leptos::prelude::*;

#[component]
pub fn SourceLink(#[prop(into)] name: String, #[prop(into)] url: String) -> impl IntoView {
    if url.trim().is_empty() {
        view! { <span class="source source--unlinked">{name}</span> }.into_any()
    } else {
        view! {
            <a class="source" href=url target="_blank" rel="noopener noreferrer">
                {name}
            </a>
        }
        .into_any()
    }
}
