//! Fallback page for unknown routes and slugs.

use leptos::prelude::*;
use leptos_meta::Title;

/// Renders the not-found notice and marks the response as 404.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not found"/>
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at this address. The country or material may have been renamed."</p>
            <p>
                <a href="/countries">"Browse countries"</a>
                " · "
                <a href="/materials">"Browse materials"</a>
            </p>
        </section>
    }
}
