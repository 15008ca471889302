mod client;
mod provider;
mod wire;

pub use {
    client::{AsyncBackend, BacktestPromise, BackendClient, ChartDataPromise},
    provider::{BackendApi, HttpBackend},
    wire::{BacktestResponse, interpret_backtest_reply, interpret_chart_reply},
};
