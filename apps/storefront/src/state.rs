//! Global navigation state using Dioxus signals.

use dioxus::prelude::*;
use storefront_filter_core::{HistoryStack, Location, Navigator, StorefrontConfig};

/// Configuration loaded at startup, or defaults when none was set.
pub fn config() -> &'static StorefrontConfig {
    crate::INITIAL_CONFIG.get_or_init(StorefrontConfig::default)
}

/// Client-side history; its current entry is the page URL.
pub static HISTORY: GlobalSignal<HistoryStack> =
    Signal::global(|| HistoryStack::new(config().start_location()));

/// The URL as the page currently sees it.
pub fn current_location() -> Location {
    HISTORY.read().current().clone()
}

/// Routes navigation requests into [`HISTORY`] without reloading anything.
pub struct SignalNavigator;

impl Navigator for SignalNavigator {
    fn push(&mut self, target: Location) {
        #[cfg(feature = "web")]
        mirror_to_browser("pushState", &target);
        HISTORY.write().push(target);
    }
}

/// Fire-and-forget client-side navigation.
pub fn navigate(target: Location) {
    SignalNavigator.push(target);
}

pub fn go_back() {
    let moved = HISTORY.write().back();
    if moved {
        sync_browser_url();
    }
}

pub fn go_forward() {
    let moved = HISTORY.write().forward();
    if moved {
        sync_browser_url();
    }
}

fn sync_browser_url() {
    #[cfg(feature = "web")]
    mirror_to_browser("replaceState", &current_location());
}

/// Reflect the in-app location in the browser's address bar.
#[cfg(feature = "web")]
fn mirror_to_browser(method: &str, target: &Location) {
    let href = match serde_json::to_string(&target.href()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "Could not encode href for history");
            return;
        }
    };
    let _ = document::eval(&format!("window.history.{method}(null, \"\", {href});"));
}
