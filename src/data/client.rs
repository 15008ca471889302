use std::{future::Future, sync::Arc};

use poll_promise::Promise;

use crate::data::{BackendApi, BacktestResponse};
use crate::domain::{ChartDataError, ChartPoint, TradeParameters, TransportFailure};

pub type ChartDataPromise = Promise<Result<Vec<ChartPoint>, ChartDataError>>;
pub type BacktestPromise = Promise<Result<BacktestResponse, TransportFailure>>;

/// What the UI sees of the backend: every call is a promise with exactly one
/// resolution, polled from the frame loop.
pub trait BackendClient {
    fn fetch_chart_data(&self, asset: &str) -> ChartDataPromise;
    fn start_backtest(&self, params: &TradeParameters) -> BacktestPromise;
}

/// Drives a [`BackendApi`] on an executor and hands back promises.
pub struct AsyncBackend<A> {
    api: Arc<A>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Handle,
}

#[cfg(not(target_arch = "wasm32"))]
impl<A: BackendApi + Send + Sync + 'static> AsyncBackend<A> {
    pub fn new(api: A, runtime: tokio::runtime::Handle) -> Self {
        Self {
            api: Arc::new(api),
            runtime,
        }
    }

    fn spawn<T: Send + 'static>(&self, task: impl Future<Output = T> + Send + 'static) -> Promise<T> {
        let (sender, promise) = Promise::new();
        self.runtime.spawn(async move {
            sender.send(task.await);
        });
        promise
    }
}

#[cfg(target_arch = "wasm32")]
impl<A: BackendApi + 'static> AsyncBackend<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }

    fn spawn<T: Send + 'static>(&self, task: impl Future<Output = T> + 'static) -> Promise<T> {
        let (sender, promise) = Promise::new();
        wasm_bindgen_futures::spawn_local(async move {
            sender.send(task.await);
        });
        promise
    }
}

macro_rules! impl_backend_client {
    ($($bounds:tt)*) => {
        impl<A: BackendApi + $($bounds)*> BackendClient for AsyncBackend<A> {
            fn fetch_chart_data(&self, asset: &str) -> ChartDataPromise {
                let api = Arc::clone(&self.api);
                let asset = asset.to_string();
                self.spawn(async move { api.chart_data(&asset).await })
            }

            fn start_backtest(&self, params: &TradeParameters) -> BacktestPromise {
                let api = Arc::clone(&self.api);
                let params = params.clone();
                self.spawn(async move { api.start_backtest(&params).await })
            }
        }
    };
}

#[cfg(not(target_arch = "wasm32"))]
impl_backend_client!(Send + Sync + 'static);

#[cfg(target_arch = "wasm32")]
impl_backend_client!('static);

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    use crate::domain::ChartTime;

    struct CannedApi;

    #[async_trait]
    impl BackendApi for CannedApi {
        async fn chart_data(&self, asset: &str) -> Result<Vec<ChartPoint>, ChartDataError> {
            if asset == "BTC/USD" {
                Ok(vec![ChartPoint::new(ChartTime::Unix(1), 1.0, 2.0, 0.5, 1.5)])
            } else {
                Err(ChartDataError::Status(404))
            }
        }

        async fn start_backtest(
            &self,
            _params: &TradeParameters,
        ) -> Result<BacktestResponse, TransportFailure> {
            Err(TransportFailure::Network("connection refused".into()))
        }
    }

    fn wait<T: Send + 'static>(promise: Promise<T>) -> T {
        let mut promise = promise;
        for _ in 0..500 {
            match promise.try_take() {
                Ok(value) => return value,
                Err(pending) => promise = pending,
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("promise never resolved");
    }

    #[test]
    fn promises_resolve_from_runtime_tasks() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let backend = AsyncBackend::new(CannedApi, runtime.handle().clone());

        let points = wait(backend.fetch_chart_data("BTC/USD")).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(
            wait(backend.fetch_chart_data("DOGE/USD")),
            Err(ChartDataError::Status(404))
        );

        let params = TradeParameters {
            asset: "BTC/USD".into(),
            ai_model: "m".into(),
            strategy: "s".into(),
            entry_value: 1.0,
            target_value: 2.0,
            stop_loss: 1.0,
        };
        assert!(matches!(
            wait(backend.start_backtest(&params)),
            Err(TransportFailure::Network(_))
        ));
    }
}
