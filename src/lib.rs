#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{BACKEND, DASHBOARD};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the backtest backend
    #[arg(long, default_value = BACKEND.default_base_url)]
    pub backend_url: String,

    /// Asset whose chart is shown at start-up
    #[arg(long, default_value = DASHBOARD.fallback_asset)]
    pub asset: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            backend_url: BACKEND.default_base_url.to_string(),
            asset: DASHBOARD.fallback_asset.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_config() {
        let args = Cli::parse_from(["backtest-dashboard"]);
        assert_eq!(args.backend_url, BACKEND.default_base_url);
        assert_eq!(args.asset, DASHBOARD.fallback_asset);

        let args = Cli::parse_from([
            "backtest-dashboard",
            "--backend-url",
            "http://10.0.0.2:8080",
            "--asset",
            "ETH/USD",
        ]);
        assert_eq!(args.backend_url, "http://10.0.0.2:8080");
        assert_eq!(args.asset, "ETH/USD");
    }
}
