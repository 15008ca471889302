use std::collections::BTreeMap;

use serde_json::Value;

pub const STAT_RETURN_PCT: &str = "Return [%]";
pub const STAT_TRADES: &str = "# Trades";
pub const STAT_WIN_RATE_PCT: &str = "Win Rate [%]";

const DEFAULT_SUCCESS_MESSAGE: &str = "Backtest completed successfully.";
const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";
const MISSING_METRIC: &str = "n/a";

/// Named metrics as reported by the backend. Values are mostly numbers, but
/// dates and durations arrive as strings and NaN arrives as null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BacktestStats(pub BTreeMap<String, Value>);

impl BacktestStats {
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    fn percent(&self, key: &str) -> String {
        self.number(key)
            .map(|v| format!("{:.2}%", v))
            .unwrap_or_else(|| MISSING_METRIC.to_string())
    }

    fn count(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) if f.fract() == 0.0 => format!("{:.0}", f),
                (None, Some(f)) => f.to_string(),
                (None, None) => n.to_string(),
            },
            Some(Value::String(s)) => s.clone(),
            _ => MISSING_METRIC.to_string(),
        }
    }

    /// Fixed order: return, trade count, win rate.
    pub fn headline(&self) -> String {
        format!(
            "Final Return: {} | Trades: {} | Win Rate: {}",
            self.percent(STAT_RETURN_PCT),
            self.count(STAT_TRADES),
            self.percent(STAT_WIN_RATE_PCT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BacktestSuccess {
    pub message: Option<String>,
    pub stats: Option<BacktestStats>,
    pub plot_warning: Option<String>,
    pub plot_path: Option<String>,
}

impl BacktestSuccess {
    /// Text for the result dialog. The plot path is deliberately left out.
    pub fn summary(&self) -> String {
        let mut text = self
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
        if let Some(stats) = &self.stats {
            text.push('\n');
            text.push_str(&stats.headline());
        }
        if let Some(warning) = &self.plot_warning {
            text.push_str("\n\nPlot warning: ");
            text.push_str(warning);
        }
        text
    }
}

/// Outcome of a backtest that the backend did answer.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Success(BacktestSuccess),
    Failure { error_message: String },
}

impl OperationResult {
    pub fn failure(error: Option<String>) -> Self {
        OperationResult::Failure {
            error_message: error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stats(value: Value) -> BacktestStats {
        serde_json::from_value::<BTreeMap<String, Value>>(value)
            .map(BacktestStats)
            .unwrap()
    }

    #[test]
    fn headline_formats_percentages_to_two_places() {
        let s = stats(json!({"Return [%]": 12.345, "# Trades": 7, "Win Rate [%]": 55.5}));
        let summary = BacktestSuccess {
            message: None,
            stats: Some(s),
            ..Default::default()
        }
        .summary();
        assert!(summary.contains("12.35%"), "{summary}");
        assert!(summary.contains("Trades: 7"), "{summary}");
        assert!(summary.contains("55.50%"), "{summary}");
        assert!(summary.starts_with(DEFAULT_SUCCESS_MESSAGE));
    }

    #[test]
    fn missing_or_null_metrics_render_as_not_available() {
        let s = stats(json!({"Return [%]": null, "Start": "2024-01-01T00:00:00"}));
        assert_eq!(
            s.headline(),
            "Final Return: n/a | Trades: n/a | Win Rate: n/a"
        );
    }

    #[test]
    fn float_trade_count_prints_without_fraction() {
        let s = stats(json!({"# Trades": 7.0}));
        assert!(s.headline().contains("Trades: 7 |"));
    }

    #[test]
    fn plot_warning_goes_on_its_own_line_and_plot_path_is_hidden() {
        let summary = BacktestSuccess {
            message: Some("Backtest DQN finished".into()),
            stats: None,
            plot_warning: Some("Plot failed".into()),
            plot_path: Some("/static/dqn_strategy_backtest.html".into()),
        }
        .summary();
        assert_eq!(summary, "Backtest DQN finished\n\nPlot warning: Plot failed");
        assert!(!summary.contains("/static/"));
    }

    #[test]
    fn failure_without_text_uses_generic_message() {
        assert_eq!(
            OperationResult::failure(None),
            OperationResult::Failure {
                error_message: "Unknown error".into()
            }
        );
    }
}
