// Domain types and value objects
mod candle;
mod errors;
mod operation_result;
mod trade_parameters;

pub use candle::{CandleType, ChartPoint, ChartTime};
pub use errors::{ChartDataError, ChartInitError, OperationError, TransportFailure};
pub use operation_result::{
    BacktestStats, BacktestSuccess, OperationResult, STAT_RETURN_PCT, STAT_TRADES,
    STAT_WIN_RATE_PCT,
};
pub use trade_parameters::{FormField, RawParameters, TradeParameters, ValidationError};
