//! Material directory with text, category and confidence filters.

use flows::filters::{CATEGORY_KEY, CONFIDENCE_KEY, ConfidenceScope, MaterialFilter, QUERY_KEY};
use flows::model::{MaterialCategory, RawMaterial};
use flows::pagination::{MATERIALS_PER_PAGE, paginate};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::empty_state::EmptyState;
use crate::components::pager::{Pager, PagerLinks};
use crate::state::catalog::{Catalog, use_catalog};
use crate::util::format::plural;
use crate::util::query::{material_href, use_query_lookup};

const PATH: &str = "/materials";

#[component]
pub fn MaterialsPage() -> impl IntoView {
    let catalog = use_catalog();
    let filter = MaterialFilter::from_lookup(use_query_lookup());

    let matches = filter.apply(catalog.store.materials());
    let page = paginate(matches, filter.page, MATERIALS_PER_PAGE);
    let links = PagerLinks::new(PATH, &page, |n| filter.to_query_pairs(n));

    let results = if page.items.is_empty() {
        view! {
            <EmptyState
                title="No materials match"
                message="Try a shorter search term or widen the category and confidence filters."
                reset_href=PATH
            />
        }
        .into_any()
    } else {
        let cards = page.items.iter().map(|m| material_card(&catalog, m)).collect_view();
        view! { <div class="card-grid">{cards}</div> }.into_any()
    };

    view! {
        <Title text="Materials"/>
        <header class="page-header">
            <h1>"Raw materials"</h1>
            <p>{plural(page.total_items, "material", "materials")} " in view"</p>
        </header>
        <MaterialFilterForm filter/>
        {results}
        <Pager links/>
    }
}

#[component]
fn MaterialFilterForm(filter: MaterialFilter) -> impl IntoView {
    let active = filter.is_active();

    view! {
        <form class="filter-form" method="get" action=PATH>
            <label class="filter-form__field">
                <span>"Search"</span>
                <input type="search" name=QUERY_KEY value=filter.query placeholder="Name, note or country"/>
            </label>
            <label class="filter-form__field">
                <span>"Category"</span>
                <select name=CATEGORY_KEY>
                    <option value="" selected=filter.category.is_none()>
                        "All categories"
                    </option>
                    {MaterialCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <option value=c.as_str() selected={filter.category == Some(c)}>
                                    {c.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="filter-form__field">
                <span>"Confidence"</span>
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
            <button class="btn" type="submit">
                "Apply"
            </button>
            {active.then(|| view! { <a class="filter-form__reset" href=PATH>"Reset"</a> })}
        </form>
    }
}

fn material_card(catalog: &Catalog, material: &RawMaterial) -> impl IntoView + use<> {
    let status = catalog.update_age(material).map_or("Not reviewed", |age| age.status.label());
    let countries = material.major_countries.join(", ");

    view! {
        <article class="card">
            <h2 class="card__title">
                <a href=material_href(&material.slug)>{material.name.clone()}</a>
            </h2>
            <p class="card__meta">{material.category.label()} " · " {status}</p>
            <p class="card__body">{material.notes.clone()}</p>
            <p class="card__meta">"Major producers: " {countries}</p>
            <p class="card__meta">{plural(material.data_points.len(), "data point", "data points")}</p>
        </article>
    }
}
