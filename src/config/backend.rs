//! Backend HTTP endpoints and request limits.

pub struct EndpointConfig {
    /// GET, takes `?asset=<symbol>`
    pub chart_data: &'static str,
    /// POST, JSON body of trade parameters
    pub start_backtest: &'static str,
}

pub struct TimeoutConfig {
    pub connect_ms: u64,
    pub chart_data_ms: u64,
    /// Backtests run synchronously on the server, so this one is generous.
    pub start_backtest_ms: u64,
}

pub struct BackendConfig {
    /// Used by the native build when `--backend-url` is not given.
    pub default_base_url: &'static str,
    pub endpoints: EndpointConfig,
    pub timeouts: TimeoutConfig,
}

pub const BACKEND: BackendConfig = BackendConfig {
    default_base_url: "http://127.0.0.1:5000",
    endpoints: EndpointConfig {
        chart_data: "/api/chart-data",
        start_backtest: "/api/start_backtest",
    },
    timeouts: TimeoutConfig {
        connect_ms: 5_000,
        chart_data_ms: 30_000,
        start_backtest_ms: 600_000,
    },
};
