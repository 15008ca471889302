//! Configuration module for the backtest dashboard.

mod backend;
mod dashboard;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

pub use backend::{BACKEND, BackendConfig};
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
