//! Single material: notes, producers, sourced data points and related flows.

use flows::model::{RawMaterial, TradeFlow};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::data_table::{DataPointTable, PointRow, confidence_counts};
use crate::components::empty_state::EmptyState;
use crate::pages::not_found::NotFound;
use crate::state::catalog::{Catalog, use_catalog};
use crate::util::format::{format_days, plural};
use crate::util::query::use_slug;

#[component]
pub fn MaterialDetailPage() -> impl IntoView {
    let catalog = use_catalog();
    let slug = use_slug();

    match catalog.store.material(&slug) {
        Some(material) => material_view(&catalog, material).into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

fn material_view(catalog: &Catalog, material: &RawMaterial) -> impl IntoView + use<> {
    let review = match catalog.update_age(material) {
        Some(age) => format!(
            "{} · reviewed {} ago ({})",
            age.status.label(),
            format_days(age.days),
            age.updated_on
        ),
        None => "No review date recorded".to_owned(),
    };

    let producers = material
        .major_countries
        .iter()
        .map(|name| match catalog.country_href(name) {
            Some(href) => view! { <li><a href=href>{name.clone()}</a></li> }.into_any(),
            None => view! { <li>{name.clone()}</li> }.into_any(),
        })
        .collect_view();

    let confidence = confidence_counts(&material.data_points)
        .into_iter()
        .map(|(level, count)| {
            view! {
                <li class="confidence-summary__item">
                    <span class="confidence-summary__count">{count}</span>
                    " "
                    {level.label()}
                </li>
            }
        })
        .collect_view();

    let rows = material
        .data_points
        .iter()
        .map(|point| PointRow {
            subject: point.country.clone(),
            subject_href: catalog.country_href(&point.country),
            point: point.clone(),
        })
        .collect::<Vec<_>>();

    let points = if rows.is_empty() {
        view! {
            <EmptyState
                title="No sourced figures yet"
                message="This entry lists producers only. Figures are added once a source is reviewed."
            />
        }
        .into_any()
    } else {
        view! { <DataPointTable subject_heading="Country" rows/> }.into_any()
    };

    let related = catalog.store.flows_for_material(material);
    let flows = if related.is_empty() {
        view! {
            <EmptyState
                title="No matching trade flows"
                message="None of the tracked flows names this material in its product."
            />
        }
        .into_any()
    } else {
        flow_table(catalog, &related).into_any()
    };

    view! {
        <Title text=material.name.clone()/>
        <header class="page-header">
            <p class="page-header__crumb">
                <a href="/materials">"Materials"</a>
            </p>
            <h1>{material.name.clone()}</h1>
            <p class="page-header__meta">{material.category.label()} " · " {review}</p>
        </header>

        <section class="panel">
            <p>{material.notes.clone()}</p>
            <h2>"Major producers"</h2>
            <ul class="inline-list">{producers}</ul>
        </section>

        <section class="panel">
            <h2>"Sourced data points"</h2>
            <p class="panel__hint">{plural(material.data_points.len(), "point", "points")} " by confidence:"</p>
            <ul class="confidence-summary">{confidence}</ul>
            {points}
        </section>

        <section class="panel">
            <h2>"Related trade flows"</h2>
            {flows}
        </section>
    }
}

fn flow_table(catalog: &Catalog, flows: &[&TradeFlow]) -> impl IntoView + use<> {
    let linked = |names: &[String]| {
        names
            .iter()
            .map(|name| match catalog.country_href(name) {
                Some(href) => view! { <a class="country-chip" href=href>{name.clone()}</a> }.into_any(),
                None => view! { <span class="country-chip">{name.clone()}</span> }.into_any(),
            })
            .collect_view()
    };

    let rows = flows
        .iter()
        .map(|flow| {
            view! {
                <tr>
                    <td>{flow.product.clone()}</td>
                    <td>{flow.category.label()}</td>
                    <td>{linked(&flow.top_exporters)}</td>
                    <td>{linked(&flow.top_importers)}</td>
                    <td>{flow.key_route.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th scope="col">"Product"</th>
                    <th scope="col">"Category"</th>
                    <th scope="col">"Top exporters"</th>
                    <th scope="col">"Top importers"</th>
                    <th scope="col">"Key route"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
