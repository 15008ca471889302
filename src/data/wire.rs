//! JSON shapes exchanged with the backend, and how a raw reply is judged.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    BacktestStats, BacktestSuccess, ChartDataError, ChartPoint, OperationResult, TransportFailure,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BacktestResponse {
    pub success: bool,
    pub message: Option<String>,
    pub stats: Option<BTreeMap<String, Value>>,
    pub plot_warning: Option<String>,
    pub plot_path: Option<String>,
    pub error: Option<String>,
}

impl From<BacktestResponse> for OperationResult {
    fn from(reply: BacktestResponse) -> Self {
        if reply.success {
            OperationResult::Success(BacktestSuccess {
                message: reply.message,
                stats: reply.stats.map(BacktestStats),
                plot_warning: reply.plot_warning,
                plot_path: reply.plot_path,
            })
        } else {
            OperationResult::failure(reply.error)
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Any non-2xx status is a failure, whatever the body says. The body's
/// `error` text is kept as detail when it can be read.
pub fn interpret_backtest_reply(status: u16, body: &str) -> Result<BacktestResponse, TransportFailure> {
    if !is_success(status) {
        let detail = serde_json::from_str::<BacktestResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.is_empty());
        return Err(TransportFailure::Status { status, detail });
    }
    serde_json::from_str(body).map_err(|e| TransportFailure::Malformed(e.to_string()))
}

pub fn interpret_chart_reply(status: u16, body: &str) -> Result<Vec<ChartPoint>, ChartDataError> {
    if !is_success(status) {
        return Err(ChartDataError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ChartDataError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reply_becomes_success_result() {
        let body = r##"{
            "success": true,
            "message": "Backtest completed",
            "stats": {"Return [%]": 12.345, "# Trades": 7, "Win Rate [%]": 55.5, "Duration": "364 days"},
            "plot_path": "/static/dqn_strategy_backtest.html"
        }"##;
        let reply = interpret_backtest_reply(200, body).unwrap();
        let OperationResult::Success(success) = OperationResult::from(reply) else {
            panic!("expected success");
        };
        assert_eq!(success.message.as_deref(), Some("Backtest completed"));
        assert_eq!(success.stats.unwrap().number("# Trades"), Some(7.0));
        assert_eq!(
            success.plot_path.as_deref(),
            Some("/static/dqn_strategy_backtest.html")
        );
    }

    #[test]
    fn logical_failure_keeps_backend_error_text() {
        let reply = interpret_backtest_reply(200, r#"{"success": false, "error": "Failed to load data file."}"#)
            .unwrap();
        assert_eq!(
            OperationResult::from(reply),
            OperationResult::Failure {
                error_message: "Failed to load data file.".into()
            }
        );
    }

    #[test]
    fn non_2xx_is_a_transport_failure_even_with_success_body() {
        let err = interpret_backtest_reply(500, r#"{"success": true}"#).unwrap_err();
        assert_eq!(
            err,
            TransportFailure::Status {
                status: 500,
                detail: None
            }
        );

        let err = interpret_backtest_reply(400, r#"{"error": "No data received"}"#).unwrap_err();
        assert_eq!(
            err,
            TransportFailure::Status {
                status: 400,
                detail: Some("No data received".into())
            }
        );
    }

    #[test]
    fn unparsable_body_is_malformed() {
        let err = interpret_backtest_reply(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, TransportFailure::Malformed(_)));
    }

    #[test]
    fn empty_chart_array_is_not_an_error() {
        assert_eq!(interpret_chart_reply(200, "[]"), Ok(Vec::new()));
    }

    #[test]
    fn chart_status_wins_over_body() {
        // The backend answers 404 with [] when its data file is empty.
        assert_eq!(interpret_chart_reply(404, "[]"), Err(ChartDataError::Status(404)));
        assert!(matches!(
            interpret_chart_reply(200, r#"{"error": "x"}"#),
            Err(ChartDataError::Decode(_))
        ));
    }
}
