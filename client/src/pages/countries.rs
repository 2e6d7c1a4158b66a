//! Country directory with name search and trade-role coverage filter.

use flows::concentration::partner_concentration;
use flows::countries::CountryProfile;
use flows::filters::{COVERAGE_KEY, CountryFilter, QUERY_KEY, RoleCoverage};
use flows::pagination::{COUNTRIES_PER_PAGE, paginate};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::empty_state::EmptyState;
use crate::components::pager::{Pager, PagerLinks};
use crate::components::risk_badge::RiskBadge;
use crate::state::catalog::use_catalog;
use crate::util::format::plural;
use crate::util::query::{country_href, use_query_lookup};

const PATH: &str = "/countries";

#[component]
pub fn CountriesPage() -> impl IntoView {
    let catalog = use_catalog();
    let filter = CountryFilter::from_lookup(use_query_lookup());

    let matches = filter.apply(catalog.store.profiles());
    let page = paginate(matches, filter.page, COUNTRIES_PER_PAGE);
    let links = PagerLinks::new(PATH, &page, |n| filter.to_query_pairs(n));

    let results = if page.items.is_empty() {
        view! {
            <EmptyState
                title="No countries match"
                message="Check the spelling or switch the role filter back to all roles."
                reset_href=PATH
            />
        }
        .into_any()
    } else {
        let cards = page.items.iter().map(|p| country_card(p)).collect_view();
        view! { <div class="card-grid">{cards}</div> }.into_any()
    };

    view! {
        <Title text="Countries"/>
        <header class="page-header">
            <h1>"Countries"</h1>
            <p>{plural(page.total_items, "country", "countries")} " in view"</p>
        </header>
        <form class="filter-form" method="get" action=PATH>
            <label class="filter-form__field">
                <span>"Search"</span>
                <input type="search" name=QUERY_KEY value=filter.query.clone() placeholder="Country name"/>
            </label>
            <label class="filter-form__field">
                <span>"Role"</span>
                <select name=COVERAGE_KEY>
                    {RoleCoverage::ALL
                        .into_iter()
                        .map(|coverage| {
                            view! {
                                <option value=coverage.as_str() selected={filter.coverage == coverage}>
                                    {coverage.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button class="btn" type="submit">
                "Apply"
            </button>
            {filter.is_active().then(|| view! { <a class="filter-form__reset" href=PATH>"Reset"</a> })}
        </form>
        {results}
        <Pager links/>
    }
}

fn country_card(profile: &CountryProfile) -> impl IntoView + use<> {
    let concentration = partner_concentration(&profile.partner_counts());
    let breakdown = &profile.role_breakdown;

    view! {
        <article class="card">
            <h2 class="card__title">
                <a href=country_href(&profile.slug)>{profile.name.clone()}</a>
            </h2>
            <p class="card__meta">
                {format!("Imports {} · Exports {}", breakdown.importer_count, breakdown.exporter_count)}
            </p>
            <p class="card__meta">{plural(breakdown.total_flows, "product", "products")}</p>
            <RiskBadge band=concentration.risk_band/>
        </article>
    }
}
