//! Filter controls bound to the URL query string.
//!
//! Control values live in local state seeded from the query parameters at
//! mount. Select changes navigate immediately; price edits navigate on submit.

use dioxus::prelude::*;
use storefront_filter_core::{category_options, sort_options, Category, FilterKey, FilterState, SearchParams};

use crate::state::{current_location, navigate};

#[component]
pub fn ProductsFilter(categories: Vec<Category>, search_params: SearchParams) -> Element {
    let mut filter = use_signal(|| FilterState::from_params(&search_params));
    let state = filter.read();

    rsx! {
        div {
            class: "filter",

            div {
                class: "filter-group",

                // Price range
                form {
                    class: "filter-prices",
                    onsubmit: move |e: Event<FormData>| {
                        e.prevent_default();
                        let target = filter.read().set_prices(&current_location());
                        navigate(target);
                    },
                    input {
                        class: "filter-price",
                        r#type: "number",
                        placeholder: "min price",
                        value: "{state.min_price}",
                        oninput: move |e: Event<FormData>| filter.write().set_min_price_input(e.value()),
                    }
                    input {
                        class: "filter-price",
                        r#type: "number",
                        placeholder: "max price",
                        value: "{state.max_price}",
                        oninput: move |e: Event<FormData>| filter.write().set_max_price_input(e.value()),
                    }
                    button { class: "filter-ok", r#type: "submit", "OK" }
                }

                // Category
                select {
                    class: "filter-select filter-category",
                    value: "{state.category}",
                    onchange: move |e: Event<FormData>| {
                        let target = filter.write().filter_change(FilterKey::Category, &e.value(), &current_location());
                        navigate(target);
                    },
                    for opt in category_options(&categories, &state.category) {
                        option {
                            key: "{opt.key}",
                            value: "{opt.value}",
                            selected: opt.selected,
                            "{opt.label}"
                        }
                    }
                }
            }

            // Sort
            div {
                select {
                    class: "filter-select filter-sort",
                    value: "{state.sort}",
                    onchange: move |e: Event<FormData>| {
                        let target = filter.write().filter_change(FilterKey::Sort, &e.value(), &current_location());
                        navigate(target);
                    },
                    for opt in sort_options(&state.sort) {
                        option {
                            key: "{opt.key}",
                            value: "{opt.value}",
                            selected: opt.selected,
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(categories: Vec<Category>, query: &str) -> String {
        let props = ProductsFilterProps::builder()
            .categories(categories)
            .search_params(SearchParams::parse(query))
            .build();
        let mut dom = VirtualDom::new_with_props(ProductsFilter, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn categories() -> Vec<Category> {
        vec![Category::new("1", "Shoes"), Category::new("2", "Hats"), Category::new("3", "Bags")]
    }

    #[test]
    fn renders_one_option_per_category_plus_defaults() {
        let html = render(categories(), "");
        // 1 + 3 category options, 1 + 4 sort options
        assert_eq!(html.matches("<option").count(), 9, "{html}");
        assert!(html.contains(">Category<"));
        assert!(html.contains(">Sort By<"));
        for name in ["Shoes", "Hats", "Bags"] {
            assert!(html.contains(&format!("value=\"{name}\"")), "missing option for {name}");
        }
    }

    #[test]
    fn renders_price_form_and_sort_labels() {
        let html = render(vec![], "minPrice=10&maxPrice=50");
        assert!(html.contains("min price"));
        assert!(html.contains("max price"));
        assert!(html.contains(">OK<"));
        for label in ["Price (low to high)", "Price (high to low)", "Newest", "Oldest"] {
            assert!(html.contains(label), "missing sort label {label}");
        }
        assert!(html.contains("value=\"10\""));
        assert!(html.contains("value=\"50\""));
    }

    #[test]
    fn initial_params_preselect_category_and_sort() {
        let html = render(categories(), "cat=Shoes&sort=asc+price");
        assert!(html.contains("value=\"Shoes\" selected=true"), "{html}");
        assert!(html.contains("value=\"asc price\" selected=true"), "{html}");
        assert_eq!(html.matches("selected=true").count(), 2, "{html}");
    }

    #[test]
    fn missing_params_preselect_the_empty_options() {
        let html = render(categories(), "");
        assert!(!html.contains("value=\"Shoes\" selected=true"), "{html}");
        assert_eq!(html.matches("selected=true").count(), 2, "{html}");
    }

    #[test]
    fn empty_category_list_keeps_default_option() {
        let html = render(vec![], "cat=Shoes");
        assert_eq!(html.matches("<option").count(), 6);
    }
}
