use anyhow::{Context, Result};
use async_trait::async_trait;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::{BACKEND, DF};
use crate::data::wire::{BacktestResponse, interpret_backtest_reply, interpret_chart_reply};
use crate::domain::{ChartDataError, ChartPoint, TradeParameters, TransportFailure};
use crate::utils::AppInstant;

/// Abstract interface for the dashboard's backend.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BackendApi {
    /// Historical OHLC points for one asset. `[]` is a valid answer.
    async fn chart_data(&self, asset: &str) -> Result<Vec<ChartPoint>, ChartDataError>;

    /// Run one backtest and wait for its reply.
    async fn start_backtest(
        &self,
        params: &TradeParameters,
    ) -> Result<BacktestResponse, TransportFailure>;
}

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.connect_timeout(Duration::from_millis(BACKEND.timeouts.connect_ms));
        let http = builder.build().context("failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BackendApi for HttpBackend {
    async fn chart_data(&self, asset: &str) -> Result<Vec<ChartPoint>, ChartDataError> {
        let start = AppInstant::now();
        let request = self
            .http
            .get(self.url(BACKEND.endpoints.chart_data))
            .query(&[("asset", asset)]);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(Duration::from_millis(BACKEND.timeouts.chart_data_ms));

        let response = request
            .send()
            .await
            .map_err(|e| ChartDataError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ChartDataError::Network(e.to_string()))?;

        if DF.log_requests {
            log::info!(
                "GET chart data for {} -> {} ({} bytes, {}ms)",
                asset,
                status,
                body.len(),
                start.elapsed().as_millis()
            );
        }
        interpret_chart_reply(status, &body)
    }

    async fn start_backtest(
        &self,
        params: &TradeParameters,
    ) -> Result<BacktestResponse, TransportFailure> {
        let start = AppInstant::now();
        let request = self
            .http
            .post(self.url(BACKEND.endpoints.start_backtest))
            .json(params);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(Duration::from_millis(BACKEND.timeouts.start_backtest_ms));

        let response = request
            .send()
            .await
            .map_err(|e| TransportFailure::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure::Network(e.to_string()))?;

        if DF.log_requests {
            log::info!(
                "POST start_backtest for {} -> {} ({}ms)",
                params.asset,
                status,
                start.elapsed().as_millis()
            );
        }
        interpret_backtest_reply(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let backend = HttpBackend::new("http://localhost:5000/").unwrap();
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(
            backend.url(BACKEND.endpoints.chart_data),
            "http://localhost:5000/api/chart-data"
        );
    }
}
