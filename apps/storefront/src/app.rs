//! Root application component — address bar, products page, status bar.

use dioxus::prelude::*;

use crate::page::ProductsPage;
use crate::state::*;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            AddressBar {}
            main {
                class: "content-area",
                ProductsPage {}
            }
            StatusBar {}
        }
    }
}

/// Back / forward buttons and the current URL.
#[component]
fn AddressBar() -> Element {
    let history = HISTORY.read();
    let can_back = history.can_go_back();
    let can_forward = history.can_go_forward();
    let href = history.current().href();

    rsx! {
        nav {
            class: "address-bar",
            button {
                class: "nav-btn",
                title: "Back",
                disabled: !can_back,
                onclick: move |_| go_back(),
                "\u{2190}"
            }
            button {
                class: "nav-btn",
                title: "Forward",
                disabled: !can_forward,
                onclick: move |_| go_forward(),
                "\u{2192}"
            }
            span { class: "address-href", "{href}" }
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let history = HISTORY.read();
    let entries = history.len();
    let category_count = config().categories.len();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-categories", "{category_count} categories" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-history", "{entries} history entries" }
        }
    }
}
