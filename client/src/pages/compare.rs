//! Side-by-side comparison of two countries and one material.

use flows::compare::{
    CompareSelection, LEFT_KEY, MATERIAL_KEY, RIGHT_KEY, ResolvedComparison, compare_countries, material_snapshot,
};
use flows::concentration::partner_concentration;
use flows::countries::CountryProfile;
use flows::model::RawMaterial;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::empty_state::EmptyState;
use crate::components::risk_badge::RiskBadge;
use crate::components::source_link::SourceLink;
use crate::state::catalog::{Catalog, use_catalog};
use crate::util::format::{format_hhi, format_percent, format_value};
use crate::util::query::{country_href, material_href, use_query_lookup};

const PARTNER_PREVIEW: usize = 3;

#[component]
pub fn ComparePage() -> impl IntoView {
    let catalog = use_catalog();
    let selection = CompareSelection::from_lookup(use_query_lookup());

    let body = match selection.resolve(&catalog.store) {
        Some(resolved) => comparison_view(&catalog, resolved).into_any(),
        None => view! { <EmptyState title="Nothing to compare" message="The dataset has no countries loaded."/> }
            .into_any(),
    };

    view! {
        <Title text="Compare"/>
        <header class="page-header">
            <h1>"Compare countries"</h1>
            <p>"Pick two countries and a material to see their partners, products and production side by side."</p>
        </header>
        {body}
    }
}

fn comparison_view(catalog: &Catalog, resolved: ResolvedComparison<'_>) -> impl IntoView + use<> {
    let ResolvedComparison { left, right, material } = resolved;
    let comparison = compare_countries(left, right);

    let country_options = |selected: &str| {
        catalog
            .store
            .profiles()
            .iter()
            .map(|p| {
                view! {
                    <option value=p.slug.clone() selected={p.slug == selected}>
                        {p.name.clone()}
                    </option>
                }
            })
            .collect_view()
    };
    let material_options = catalog
        .store
        .materials()
        .iter()
        .map(|m| {
            let selected = material.is_some_and(|s| s.slug == m.slug);
            view! {
                <option value=m.slug.clone() selected=selected>
                    {m.name.clone()}
                </option>
            }
        })
        .collect_view();

    let shared_partners = name_list(&comparison.shared_partners, "No partners in common.");
    let shared_products = name_list(&comparison.shared_products, "No products in common.");

    view! {
        <form class="filter-form" method="get" action="/compare">
            <label class="filter-form__field">
                <span>"Country A"</span>
                <select name=LEFT_KEY>{country_options(&left.slug)}</select>
            </label>
            <label class="filter-form__field">
                <span>"Country B"</span>
                <select name=RIGHT_KEY>{country_options(&right.slug)}</select>
            </label>
            <label class="filter-form__field">
                <span>"Material"</span>
                <select name=MATERIAL_KEY>{material_options}</select>
            </label>
            <button class="btn" type="submit">
                "Compare"
            </button>
        </form>

        <div class="compare-grid">
            {country_column(left, material)}
            {country_column(right, material)}
        </div>

        <section class="panel">
            <h2>"In common"</h2>
            <div class="compare-grid">
                <div>
                    <h3>"Shared top partners"</h3>
                    {shared_partners}
                </div>
                <div>
                    <h3>"Shared products"</h3>
                    {shared_products}
                </div>
            </div>
        </section>
    }
}

fn name_list(names: &[String], empty: &'static str) -> AnyView {
    if names.is_empty() {
        view! { <p class="panel__hint">{empty}</p> }.into_any()
    } else {
        let items = names.iter().map(|n| view! { <li>{n.clone()}</li> }).collect_view();
        view! { <ul class="inline-list">{items}</ul> }.into_any()
    }
}

fn country_column(profile: &CountryProfile, material: Option<&RawMaterial>) -> impl IntoView + use<> {
    let concentration = partner_concentration(&profile.partner_counts());
    let partners = profile
        .top_partners
        .iter()
        .take(PARTNER_PREVIEW)
        .map(|p| view! { <li>{format!("{} · {} ({})", p.name, p.role.label(), p.shared_flows)}</li> })
        .collect_view();

    let snapshot = match material {
        Some(material) => material_block(material, &profile.name).into_any(),
        None => view! { <p class="panel__hint">"No materials loaded."</p> }.into_any(),
    };

    view! {
        <section class="panel compare-column">
            <h2>
                <a href=country_href(&profile.slug)>{profile.name.clone()}</a>
            </h2>
            <dl class="facts">
                <dt>"Importer in"</dt>
                <dd>{profile.role_breakdown.importer_count}</dd>
                <dt>"Exporter in"</dt>
                <dd>{profile.role_breakdown.exporter_count}</dd>
                <dt>"Distinct products"</dt>
                <dd>{profile.role_breakdown.total_flows}</dd>
                <dt>"Partner HHI"</dt>
                <dd>{format_hhi(concentration.hhi)} " " <RiskBadge band=concentration.risk_band/></dd>
                <dt>"Top partner share"</dt>
                <dd>{format_percent(concentration.top_share)}</dd>
            </dl>
            <h3>"Leading partners"</h3>
            <ul class="plain-list">{partners}</ul>
            {snapshot}
        </section>
    }
}

fn material_block(material: &RawMaterial, country: &str) -> impl IntoView + use<> {
    let heading = view! {
        <h3>
            <a href=material_href(&material.slug)>{material.name.clone()}</a>
        </h3>
    };
    let points = material_snapshot(material, country);

    if points.is_empty() {
        let message = if material.has_major_country(country) {
            format!("Listed as a major producer of {}, with no sourced figures yet.", material.name)
        } else {
            format!("No figures for {} in {country}.", material.name)
        };
        return view! {
            {heading}
            <p class="panel__hint">{message}</p>
        }
        .into_any();
    }

    let rows = points
        .into_iter()
        .map(|p| {
            view! {
                <tr>
                    <td>{p.metric.clone()}</td>
                    <td class="data-table__num">{format!("{} {}", format_value(p.value), p.unit)}</td>
                    <td>{p.year}</td>
                    <td>
                        <SourceLink name=p.source_name.clone() url=p.source_url.clone()/>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        {heading}
        <table class="data-table data-table--compact">
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
