//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::{SiteFooter, SiteHeader};
use crate::pages::{
    compare::ComparePage,
    countries::CountriesPage,
    country_detail::CountryDetailPage,
    game::GamePage,
    home::HomePage,
    legal::{PrivacyPage, TermsPage},
    material_detail::MaterialDetailPage,
    materials::MaterialsPage,
    methodology::MethodologyPage,
    not_found::NotFound,
};

/// HTML shell rendered on the server. There is no hydration bundle.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Expects a `state::Catalog` in context, provided per request by the server.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="atlas" href="/assets/atlas.css"/>
        <Title formatter=|page: String| format!("{page} · Trade Atlas")/>

        <Router>
            <SiteHeader/>
            <main class="page">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("materials") view=MaterialsPage/>
                    <Route path=(StaticSegment("materials"), ParamSegment("slug")) view=MaterialDetailPage/>
                    <Route path=StaticSegment("countries") view=CountriesPage/>
                    <Route path=(StaticSegment("countries"), ParamSegment("slug")) view=CountryDetailPage/>
                    <Route path=StaticSegment("compare") view=ComparePage/>
                    <Route path=StaticSegment("methodology") view=MethodologyPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("game") view=GamePage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
