//! Placeholder block for filters and lists with nothing to show.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// Link that clears the active filters, when there are any.
    #[prop(optional, into)]
    reset_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <p class="empty-state__title">{title}</p>
            <p class="empty-state__message">{message}</p>
            {reset_href.map(|href| view! { <a class="empty-state__reset" href=href>"Clear filters"</a> })}
        </div>
    }
}
