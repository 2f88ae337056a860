//! Storefront — Dioxus host for the URL-synchronized product filter.

use std::path::PathBuf;
use std::sync::OnceLock;

use storefront_filter_core::StorefrontConfig;

mod app;
mod filter;
mod page;
mod state;

use app::App;

/// Loaded before Dioxus launches, read by the global signals on first use.
pub static INITIAL_CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "storefront=info".parse().unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StorefrontConfig::from_dir(&cwd);
    tracing::info!(start_url = %config.start_url, categories = config.categories.len(), "Starting storefront");
    let _ = INITIAL_CONFIG.set(config);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        use dioxus::prelude::LaunchBuilder;

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 250, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Storefront")
                            .with_inner_size(LogicalSize::new(1100.0, 720.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 400.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
