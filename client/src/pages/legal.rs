//! Privacy and terms pages rendered from bundled markdown.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::util::markdown::render_markdown_html;

const PRIVACY: &str = include_str!("../content/privacy.md");
const TERMS: &str = include_str!("../content/terms.md");

#[component]
fn MarkdownPage(title: &'static str, source: &'static str) -> impl IntoView {
    view! {
        <Title text=title/>
        <article class="prose" inner_html=render_markdown_html(source)></article>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <MarkdownPage title="Privacy" source=PRIVACY/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <MarkdownPage title="Terms of use" source=TERMS/> }
}
