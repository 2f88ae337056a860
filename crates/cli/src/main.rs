//! Storefront filter CLI — compute where a filter interaction navigates to.
//!
//! Runs the same operations as the widget against a URL given on the command
//! line and prints the resulting navigation target.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use storefront_filter_core::{category_options, sort_options, FilterKey, FilterState, Location, SortOrder, StorefrontConfig};

/// Storefront filter CLI — URL-synchronized product filters from the terminal.
#[derive(Parser)]
#[command(name = "sfq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Change a select control (cat, sort) and print the navigation target
    Select {
        /// Query parameter to set: cat, sort, minPrice or maxPrice
        key: FilterKey,

        /// New value (not validated)
        value: String,

        /// Current URL, path-with-query or absolute
        #[arg(long)]
        url: String,
    },
    /// Submit the price form and print the navigation target
    Prices {
        /// Current URL, path-with-query or absolute
        #[arg(long)]
        url: String,

        /// Minimum price (empty when omitted)
        #[arg(long, default_value = "")]
        min: String,

        /// Maximum price (empty when omitted)
        #[arg(long, default_value = "")]
        max: String,
    },
    /// Show the filter state a URL initializes the controls with
    Inspect {
        /// Current URL, path-with-query or absolute
        #[arg(long)]
        url: String,

        /// storefront.toml to read categories from
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_location(url: &str) -> Location {
    Location::parse(url).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    })
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Select { key, value, url } => {
            let current = parse_location(&url);
            let mut state = FilterState::from_params(&current.search);
            let target = state.filter_change(key, &value, &current);

            if cli.json {
                print_json(&serde_json::json!({
                    "href": target.href(),
                    "state": state,
                }));
            } else {
                println!("{}", target.href());
            }
        }
        Commands::Prices { url, min, max } => {
            let current = parse_location(&url);
            let mut state = FilterState::from_params(&current.search);
            state.set_min_price_input(min);
            state.set_max_price_input(max);
            let target = state.set_prices(&current);

            if cli.json {
                print_json(&serde_json::json!({
                    "href": target.href(),
                    "state": state,
                }));
            } else {
                println!("{}", target.href());
            }
        }
        Commands::Inspect { url, config } => {
            let current = parse_location(&url);
            let state = FilterState::from_params(&current.search);
            let categories = match config {
                Some(path) => match StorefrontConfig::load(&path) {
                    Ok(c) => c.categories,
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "Could not load config");
                        std::process::exit(1);
                    }
                },
                None => Vec::new(),
            };
            let cat_opts = category_options(&categories, &state.category);
            let sort_opts = sort_options(&state.sort);

            if cli.json {
                print_json(&serde_json::json!({
                    "pathname": current.pathname,
                    "state": state,
                    "category_options": cat_opts,
                    "sort_options": sort_opts,
                }));
            } else {
                println!("Path:       {}", current.pathname);
                for key in FilterKey::ALL {
                    let value = state.get(key);
                    let shown = if value.is_empty() { "-" } else { value };
                    println!("{:<11} {}", format!("{key}:"), shown);
                }
                let other: Vec<(&str, &str)> = current
                    .search
                    .iter()
                    .filter(|(k, _)| k.parse::<FilterKey>().is_err())
                    .collect();
                if !other.is_empty() {
                    println!("\nOther parameters:");
                    for (k, v) in other {
                        println!("  {k} = {v}");
                    }
                }
                if !categories.is_empty() {
                    println!("\nCategories:");
                    for opt in cat_opts.iter().skip(1) {
                        let mark = if opt.selected { "*" } else { " " };
                        println!("  {mark} {}", opt.label);
                    }
                }
                if let Some(order) = SortOrder::from_token(&state.sort) {
                    println!("\nSorted by:  {}", order.label());
                }
            }
        }
    }
}
