//! Country profile: roles, partner concentration, material records, trends
//! and trade corridors.
//!
//! DESIGN
//! ======
//! The record scope (`confidence`) and the corridor table (`corridor_role`,
//! `page`) share one query string. Changing either filter drops the page
//! number, so the corridor table always restarts at page one.

#[cfg(test)]
#[path = "country_detail_test.rs"]
mod country_detail_test;

use std::fmt::Display;

use flows::concentration::partner_concentration;
use flows::corridors::{Corridor, extract_corridors};
use flows::countries::CountryProfile;
use flows::filters::{CONFIDENCE_KEY, CORRIDOR_ROLE_KEY, ConfidenceScope, CorridorRoleFilter, CountryDetailFilter};
use flows::grouping::{GroupSummary, group_by_category, group_by_material, group_by_year};
use flows::model::{MaterialRecord, TradeFlow};
use flows::pagination::{CORRIDORS_PER_PAGE, Page, paginate};
use flows::slug::slugify;
use flows::trend::{TrendComparison, TrendSignal, trend_signals};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::data_table::{DataPointTable, PointRow};
use crate::components::empty_state::EmptyState;
use crate::components::pager::{Pager, PagerLinks};
use crate::components::risk_badge::RiskBadge;
use crate::components::stat_tile::StatTile;
use crate::pages::not_found::NotFound;
use crate::state::catalog::{Catalog, use_catalog};
use crate::util::format::{format_hhi, format_percent, format_share, format_signed_percent, format_signed_value, format_value};
use crate::util::query::{country_href, material_href, use_query_lookup, use_slug};

/// Corridors for `country` that pass the role filter, paginated.
pub fn corridor_page(flows: &[TradeFlow], country: &str, filter: &CountryDetailFilter) -> Page<Corridor> {
    let corridors = extract_corridors(flows, country)
        .into_iter()
        .filter(|c| filter.corridor_role.matches(c.role))
        .collect::<Vec<_>>();
    paginate(corridors, filter.page, CORRIDORS_PER_PAGE)
}

/// Short description of how the latest record moved against the previous one.
pub fn trend_change_label(signal: &TrendSignal) -> String {
    match signal.comparison {
        TrendComparison::Baseline => "Baseline".to_owned(),
        TrendComparison::NotComparable => "Not directly comparable".to_owned(),
        TrendComparison::Comparable { value_delta, value_delta_percent } => match value_delta_percent {
            Some(ratio) => format!("{} ({})", format_signed_value(value_delta), format_signed_percent(ratio * 100.0)),
            None => format_signed_value(value_delta),
        },
    }
}

fn record_summary(record: &MaterialRecord) -> String {
    format!(
        "{} {} ({})",
        format_value(record.point.value),
        record.point.unit,
        record.point.year
    )
}

#[component]
pub fn CountryDetailPage() -> impl IntoView {
    let catalog = use_catalog();
    let slug = use_slug();
    let filter = CountryDetailFilter::from_lookup(use_query_lookup());

    match catalog.store.country(&slug) {
        Some(profile) => country_view(&catalog, profile, filter).into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

fn country_view(catalog: &Catalog, profile: &CountryProfile, filter: CountryDetailFilter) -> impl IntoView + use<> {
    let path = country_href(&profile.slug);
    let breakdown = profile.role_breakdown.clone();
    let concentration = partner_concentration(&profile.partner_counts());
    let records = filter.scoped_records(&profile.material_records);
    let corridors = corridor_page(catalog.store.flows(), &profile.name, &filter);
    let links = PagerLinks::new(&path, &corridors, |n| filter.to_query_pairs(n));

    let partners = if profile.top_partners.is_empty() {
        view! { <EmptyState title="No partners" message="This country only trades with itself in the tracked flows."/> }
            .into_any()
    } else {
        let rows = profile
            .top_partners
            .iter()
            .map(|partner| {
                let name = match catalog.country_href(&partner.name) {
                    Some(href) => view! { <a href=href>{partner.name.clone()}</a> }.into_any(),
                    None => view! { <span>{partner.name.clone()}</span> }.into_any(),
                };
                view! {
                    <tr>
                        <td>{name}</td>
                        <td>{partner.role.label()}</td>
                        <td class="data-table__num">{partner.shared_flows}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th scope="col">"Partner"</th>
                        <th scope="col">"Relationship"</th>
                        <th scope="col" class="data-table__num">"Shared flows"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    let products = profile
        .products
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.product.clone()}</td>
                    <td>{row.category.label()}</td>
                    <td>{row.role.label()}</td>
                    <td>{row.route.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    let records_section = if records.is_empty() {
        view! {
            <EmptyState
                title="No material records in scope"
                message="No sourced figures name this country at the selected confidence."
            />
        }
        .into_any()
    } else {
        let trends = trend_signals(&records);
        let rows = records
            .iter()
            .map(|r| PointRow {
                subject: r.material_name.clone(),
                subject_href: Some(material_href(&r.material_slug)),
                point: r.point.clone(),
            })
            .collect::<Vec<_>>();
        view! {
            <div class="group-grid">
                {group_table("By category", group_by_category(&records))}
                {group_table("By year", group_by_year(&records))}
                {group_table("By material", group_by_material(&records))}
            </div>
            <h3>"Trend signals"</h3>
            <TrendTable signals=trends/>
            <h3>"All records"</h3>
            <DataPointTable subject_heading="Material" rows/>
        }
        .into_any()
    };

    let corridor_section = if corridors.items.is_empty() {
        view! {
            <EmptyState
                title="No corridors in this direction"
                message="Switch the direction filter to see the other side of this country's trade."
                reset_href=path.clone()
            />
        }
        .into_any()
    } else {
        let rows = corridors
            .items
            .iter()
            .map(|c| {
                view! {
                    <tr>
                        <td>
                            <a href=country_href(&slugify(&c.partner))>
                                {c.partner.clone()}
                            </a>
                        </td>
                        <td>{c.role.label()}</td>
                        <td>{c.product.clone()}</td>
                        <td>{c.category.label()}</td>
                        <td>{c.route.clone()}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th scope="col">"Partner"</th>
                        <th scope="col">"Our side"</th>
                        <th scope="col">"Product"</th>
                        <th scope="col">"Category"</th>
                        <th scope="col">"Route"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <Title text=profile.name.clone()/>
        <header class="page-header">
            <p class="page-header__crumb">
                <a href="/countries">"Countries"</a>
            </p>
            <h1>{profile.name.clone()}</h1>
        </header>

        <section class="stat-grid">
            <StatTile label="Flows as importer" value=breakdown.importer_count.to_string()/>
            <StatTile label="Flows as exporter" value=breakdown.exporter_count.to_string()/>
            <StatTile label="Distinct products" value=breakdown.total_flows.to_string()/>
            <StatTile
                label="Partner HHI"
                value=format_hhi(concentration.hhi)
                detail=format!("Top partner {}", format_percent(concentration.top_share))
            />
        </section>

        <section class="panel">
            <h2>"Top partners " <RiskBadge band=concentration.risk_band/></h2>
            {partners}
        </section>

        <section class="panel">
            <h2>"Products"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th scope="col">"Product"</th>
                        <th scope="col">"Category"</th>
                        <th scope="col">"Role"</th>
                        <th scope="col">"Key route"</th>
                    </tr>
                </thead>
                <tbody>{products}</tbody>
            </table>
        </section>

        <form class="filter-form" method="get" action=path.clone()>
            <label class="filter-form__field">
                <span>"Record confidence"</span>
                <select name=CONFIDENCE_KEY>
                    {ConfidenceScope::ALL
                        .into_iter()
                        .map(|scope| {
                            view! {
                                <option value=scope.as_str() selected={filter.confidence == scope}>
                                    {scope.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="filter-form__field">
                <span>"Corridor direction"</span>
                <select name=CORRIDOR_ROLE_KEY>
                    {CorridorRoleFilter::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_str() selected={filter.corridor_role == role}>
                                    {role.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button class="btn" type="submit">
                "Apply"
            </button>
        </form>

        <section class="panel">
            <h2>"Material records"</h2>
            {records_section}
        </section>

        <section class="panel">
            <h2>"Trade corridors"</h2>
            {corridor_section}
            <Pager links/>
        </section>
    }
}

fn group_table<K: Display>(heading: &'static str, groups: Vec<GroupSummary<K>>) -> impl IntoView + use<K> {
    let rows = groups
        .into_iter()
        .map(|g| {
            view! {
                <tr>
                    <td>{g.key.to_string()}</td>
                    <td class="data-table__num">{g.records}</td>
                    <td class="data-table__num">{format_share(g.high_confidence_share)}</td>
                    <td class="data-table__num">{g.materials}</td>
                    <td class="data-table__num">{g.sources}</td>
                    <td>{g.latest_year.map(|y| y.to_string()).unwrap_or_default()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table data-table--compact">
            <caption>{heading}</caption>
            <thead>
                <tr>
                    <th scope="col">"Group"</th>
                    <th scope="col" class="data-table__num">"Records"</th>
                    <th scope="col" class="data-table__num">"High conf."</th>
                    <th scope="col" class="data-table__num">"Materials"</th>
                    <th scope="col" class="data-table__num">"Sources"</th>
                    <th scope="col">"Latest"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn TrendTable(signals: Vec<TrendSignal>) -> impl IntoView {
    let rows = signals
        .into_iter()
        .map(|signal| {
            let change = trend_change_label(&signal);
            let previous = signal.previous.as_ref().map_or_else(|| "–".to_owned(), record_summary);
            view! {
                <tr>
                    <td>
                        <a href=material_href(&signal.material_slug)>{signal.material_name.clone()}</a>
                    </td>
                    <td>{signal.latest.point.metric.clone()}</td>
                    <td>{record_summary(&signal.latest)}</td>
                    <td>{previous}</td>
                    <td>{change}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th scope="col">"Material"</th>
                    <th scope="col">"Metric"</th>
                    <th scope="col">"Latest"</th>
                    <th scope="col">"Previous"</th>
                    <th scope="col">"Change"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
