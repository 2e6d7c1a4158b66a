//! Previous/next pagination control.

use flows::filters::QueryPairs;
use flows::pagination::Page;
use leptos::prelude::*;

use crate::util::query::href;

/// Links for the page before and after `page`, built from `pairs_at`.
pub struct PagerLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub summary: String,
}

impl PagerLinks {
    pub fn new<T>(path: &str, page: &Page<T>, pairs_at: impl Fn(usize) -> QueryPairs) -> Self {
        let summary = if page.total_items == 0 {
            "No results".to_owned()
        } else {
            format!(
                "Showing {}–{} of {} · page {} of {}",
                page.first_index(),
                page.last_index(),
                page.total_items,
                page.page,
                page.total_pages
            )
        };
        Self {
            previous: page.has_previous().then(|| href(path, &pairs_at(page.page - 1))),
            next: page.has_next().then(|| href(path, &pairs_at(page.page + 1))),
            summary,
        }
    }
}

#[component]
pub fn Pager(links: PagerLinks) -> impl IntoView {
    let PagerLinks { previous, next, summary } = links;

    view! {
        <nav class="pager" aria-label="Pagination">
            {match previous {
                Some(href) => view! { <a class="pager__link" rel="prev" href=href>"← Previous"</a> }.into_any(),
                None => view! { <span class="pager__link pager__link--disabled">"← Previous"</span> }.into_any(),
            }}
            <span class="pager__summary">{summary}</span>
            {match next {
                Some(href) => view! { <a class="pager__link" rel="next" href=href>"Next →"</a> }.into_any(),
                None => view! { <span class="pager__link pager__link--disabled">"Next →"</span> }.into_any(),
            }}
        </nav>
    }
}
