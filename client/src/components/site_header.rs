//! Site-wide navigation header and footer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::catalog::use_catalog;

const NAV: [(&str, &str); 5] = [
    ("/materials", "Materials"),
    ("/countries", "Countries"),
    ("/compare", "Compare"),
    ("/game", "Twenty Questions"),
    ("/methodology", "Methodology"),
];

/// Whether `current` sits under the nav section rooted at `section`.
pub fn is_active_section(current: &str, section: &str) -> bool {
    current == section || current.strip_prefix(section).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let current = use_location().pathname.get_untracked();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Trade Atlas"</a>
            <nav class="site-header__nav" aria-label="Primary">
                {NAV
                    .into_iter()
                    .map(|(href, label)| {
                        let active = is_active_section(&current, href);
                        view! {
                            <a
                                class="site-header__link"
                                class:site-header__link--active=active
                                href=href
                                aria-current=active.then_some("page")
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let catalog = use_catalog();
    let version = catalog.store.short_fingerprint().to_owned();

    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <a href="/privacy">"Privacy"</a>
                <a href="/terms">"Terms"</a>
                <a href="/methodology">"Sources & method"</a>
            </nav>
            <span class="site-footer__dataset" title="Dataset fingerprint">
                "Dataset " <code>{version}</code>
            </span>
        </footer>
    }
}
