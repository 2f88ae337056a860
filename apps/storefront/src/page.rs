//! Products page — hosts the filter for the current location.

use dioxus::prelude::*;
use storefront_filter_core::FilterState;

use crate::filter::ProductsFilter;
use crate::state::*;

/// Renders the filter for the current URL plus a summary of what the URL asks for.
///
/// The listing itself is produced by whatever consumes the URL; this page only
/// shows the request.
#[component]
pub fn ProductsPage() -> Element {
    let location = current_location();
    let categories = config().categories.clone();
    let requested = FilterState::from_params(&location.search);
    let active = requested.active();
    let href = location.href();

    rsx! {
        div {
            class: "products-page",
            h1 { class: "page-title", "Products" }

            ProductsFilter {
                categories,
                search_params: location.search.clone(),
            }

            div {
                class: "active-filters",
                if active.is_empty() {
                    span { class: "active-filters-empty", "No filters applied" }
                }
                for (key, value) in active.iter() {
                    span { class: "filter-chip", "{key}: {value}" }
                }
            }

            div {
                class: "products-request",
                span { class: "products-request-label", "REQUEST" }
                code { class: "products-request-href", "{href}" }
            }
        }
    }
}
