//! Landing page with headline counts and entry points into the directories.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use flows::concentration::{Concentration, partner_concentration};
use flows::countries::CountryProfile;
use flows::model::{FlowCategory, RawMaterial, TradeFlow};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::risk_badge::RiskBadge;
use crate::components::stat_tile::StatTile;
use crate::state::catalog::use_catalog;
use crate::util::format::{format_hhi, format_percent, plural};
use crate::util::query::{country_href, material_href};

const LEADER_LIMIT: usize = 5;
const FEATURED_LIMIT: usize = 4;

/// Countries with the most concentrated partner sets, highest HHI first.
/// Ties go to the country name.
pub fn concentration_leaders(profiles: &[CountryProfile], limit: usize) -> Vec<(&CountryProfile, Concentration)> {
    let mut ranked = profiles
        .iter()
        .map(|p| (p, partner_concentration(&p.partner_counts())))
        .filter(|(_, c)| c.total > 0)
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.hhi.total_cmp(&a.1.hhi).then_with(|| a.0.name.cmp(&b.0.name)));
    ranked.truncate(limit);
    ranked
}

/// Materials with the most data points, then by name.
pub fn featured_materials(materials: &[RawMaterial], limit: usize) -> Vec<&RawMaterial> {
    let mut featured = materials.iter().filter(|m| !m.data_points.is_empty()).collect::<Vec<_>>();
    featured.sort_by(|a, b| b.data_points.len().cmp(&a.data_points.len()).then_with(|| a.name.cmp(&b.name)));
    featured.truncate(limit);
    featured
}

pub fn flows_in_category(flows: &[TradeFlow], category: FlowCategory) -> Vec<&TradeFlow> {
    flows.iter().filter(|f| f.category == category).collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();
    let store = &catalog.store;
    let point_count = store.materials().iter().map(|m| m.data_points.len()).sum::<usize>();

    let leaders = concentration_leaders(store.profiles(), LEADER_LIMIT)
        .into_iter()
        .map(|(profile, concentration)| {
            view! {
                <tr>
                    <td>
                        <a href=country_href(&profile.slug)>{profile.name.clone()}</a>
                    </td>
                    <td class="data-table__num">{format_percent(concentration.top_share)}</td>
                    <td class="data-table__num">{format_hhi(concentration.hhi)}</td>
                    <td>
                        <RiskBadge band=concentration.risk_band/>
                    </td>
                </tr>
            }
        })
        .collect_view();

    let categories = FlowCategory::ALL
        .into_iter()
        .map(|category| {
            let flows = flows_in_category(store.flows(), category);
            let products = flows.iter().map(|f| f.product.clone()).collect::<Vec<_>>().join(", ");
            view! {
                <li class="category-list__item">
                    <span class="category-list__name">{category.label()}</span>
                    <span class="category-list__count">{plural(flows.len(), "flow", "flows")}</span>
                    <span class="category-list__products">{products}</span>
                </li>
            }
        })
        .collect_view();

    let featured = featured_materials(store.materials(), FEATURED_LIMIT)
        .into_iter()
        .map(|material| {
            view! {
                <article class="card">
                    <h3 class="card__title">
                        <a href=material_href(&material.slug)>{material.name.clone()}</a>
                    </h3>
                    <p class="card__meta">{material.category.label()}</p>
                    <p class="card__body">{material.notes.clone()}</p>
                    <p class="card__meta">{plural(material.data_points.len(), "data point", "data points")}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <Title text="Overview"/>
        <section class="hero">
            <h1>"Where raw materials come from, and where they go"</h1>
            <p class="hero__lede">
                "Trade corridors for energy, metals, farm inputs and manufactured goods, "
                "with the countries that dominate each side and sourced production figures."
            </p>
        </section>

        <section class="stat-grid">
            <StatTile label="Trade flows" value=store.flows().len().to_string()/>
            <StatTile label="Countries" value=store.profiles().len().to_string()/>
            <StatTile label="Materials" value=store.materials().len().to_string()/>
            <StatTile label="Sourced data points" value=point_count.to_string()/>
        </section>

        <section class="panel">
            <h2>"Most concentrated partner sets"</h2>
            <p class="panel__hint">
                "Ranked by Herfindahl-Hirschman index over shared-flow counts. "
                <a href="/methodology">"How this is computed"</a>
            </p>
            <table class="data-table">
                <thead>
                    <tr>
                        <th scope="col">"Country"</th>
                        <th scope="col" class="data-table__num">"Top partner share"</th>
                        <th scope="col" class="data-table__num">"HHI"</th>
                        <th scope="col">"Band"</th>
                    </tr>
                </thead>
                <tbody>{leaders}</tbody>
            </table>
        </section>

        <section class="panel">
            <h2>"Flows by category"</h2>
            <ul class="category-list">{categories}</ul>
        </section>

        <section class="panel">
            <h2>"Featured materials"</h2>
            <div class="card-grid">{featured}</div>
            <p>
                <a href="/materials">"All materials →"</a>
            </p>
        </section>
    }
}
