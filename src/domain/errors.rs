use thiserror::Error;

use crate::domain::ValidationError;

/// Chart could not be created. Terminal for the chart, harmless to the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartInitError {
    #[error("no rendering backend available for the chart")]
    RendererUnavailable,
    #[error("chart container not found")]
    ContainerMissing,
    #[error("chart container has no usable size ({width}x{height})")]
    ContainerCollapsed { width: f32, height: f32 },
}

/// Fetching or decoding chart data failed. Retrying `load` may recover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartDataError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid chart data: {0}")]
    Decode(String),
}

/// The backtest call never produced a usable reply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportFailure {
    #[error("{0}")]
    Network(String),
    #[error("HTTP status {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Everything an operation can end with besides success. All of it is shown
/// to the user as an error dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Backtest error: {0}")]
    BackendLogical(String),
    #[error("Communication error: {0}")]
    Transport(#[from] TransportFailure),
}
