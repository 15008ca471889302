use serde::Serialize;
use strum_macros::Display;
use thiserror::Error;

/// The three numeric inputs of the configuration form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FormField {
    #[strum(to_string = "Entry value")]
    EntryValue,
    #[strum(to_string = "Target")]
    TargetValue,
    #[strum(to_string = "Stop loss")]
    StopLoss,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Validation error: {0} is required.")]
    Missing(FormField),
    #[error("Validation error: {field} must be a number (got \"{input}\").")]
    NotANumber { field: FormField, input: String },
    #[error("Validation error: {field} must be a positive number.")]
    NotPositive { field: FormField, value: f64 },
    #[error("Validation error: Target must be greater than the entry value.")]
    TargetNotAboveEntry { entry: f64, target: f64 },
}

impl ValidationError {
    /// The single field at fault, `None` for the cross-field rule.
    pub fn field(&self) -> Option<FormField> {
        match self {
            ValidationError::Missing(field)
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotPositive { field, .. } => Some(*field),
            ValidationError::TargetNotAboveEntry { .. } => None,
        }
    }
}

/// Raw form state, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct RawParameters<'a> {
    pub asset: Option<&'a str>,
    pub ai_model: &'a str,
    pub strategy: &'a str,
    pub entry_value: &'a str,
    pub target_value: &'a str,
    pub stop_loss: &'a str,
}

/// Validated request body for a backtest run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    pub asset: String,
    pub ai_model: String,
    pub strategy: String,
    pub entry_value: f64,
    pub target_value: f64,
    pub stop_loss: f64,
}

impl TradeParameters {
    /// Order is fixed: entry, target, stop loss, then target > entry.
    /// The first failing rule wins.
    pub fn validate(raw: &RawParameters<'_>, fallback_asset: &str) -> Result<Self, ValidationError> {
        let entry_value = parse_positive(FormField::EntryValue, raw.entry_value)?;
        let target_value = parse_positive(FormField::TargetValue, raw.target_value)?;
        let stop_loss = parse_positive(FormField::StopLoss, raw.stop_loss)?;

        if target_value <= entry_value {
            return Err(ValidationError::TargetNotAboveEntry {
                entry: entry_value,
                target: target_value,
            });
        }

        let asset = raw
            .asset
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(fallback_asset)
            .to_string();

        Ok(TradeParameters {
            asset,
            ai_model: raw.ai_model.to_string(),
            strategy: raw.strategy.to_string(),
            entry_value,
            target_value,
            stop_loss,
        })
    }
}

fn parse_positive(field: FormField, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw<'a>(entry: &'a str, target: &'a str, stop: &'a str) -> RawParameters<'a> {
        RawParameters {
            asset: Some("BTC/USD"),
            ai_model: "Viktor IA (DQN)",
            strategy: "DQN",
            entry_value: entry,
            target_value: target,
            stop_loss: stop,
        }
    }

    #[test]
    fn non_numeric_entry_is_reported_against_entry_field() {
        let err = TradeParameters::validate(&raw("abc", "100", "10"), "BTC/USD").unwrap_err();
        assert_eq!(err.field(), Some(FormField::EntryValue));
        assert!(matches!(err, ValidationError::NotANumber { .. }));
    }

    #[test]
    fn each_numeric_field_rejects_zero_negative_and_garbage() {
        let cases = [
            (raw("0", "150", "10"), FormField::EntryValue),
            (raw("100", "-5", "10"), FormField::TargetValue),
            (raw("100", "150", "x"), FormField::StopLoss),
            (raw("100", "150", ""), FormField::StopLoss),
            (raw("inf", "150", "10"), FormField::EntryValue),
        ];
        for (input, field) in cases {
            let err = TradeParameters::validate(&input, "BTC/USD").unwrap_err();
            assert_eq!(err.field(), Some(field), "{err}");
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        // entry, target and stop are all bad: entry is reported
        let err = TradeParameters::validate(&raw("-1", "abc", "0"), "BTC/USD").unwrap_err();
        assert_eq!(err.field(), Some(FormField::EntryValue));

        // target bad and cross-field would also fail: target is reported
        let err = TradeParameters::validate(&raw("100", "0", "10"), "BTC/USD").unwrap_err();
        assert_eq!(err.field(), Some(FormField::TargetValue));

        // stop loss bad while target < entry: stop loss comes first
        let err = TradeParameters::validate(&raw("100", "90", "0"), "BTC/USD").unwrap_err();
        assert_eq!(err.field(), Some(FormField::StopLoss));
    }

    #[test]
    fn target_must_be_above_entry() {
        let err = TradeParameters::validate(&raw("100", "90", "10"), "BTC/USD").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TargetNotAboveEntry {
                entry: 100.0,
                target: 90.0
            }
        );
        let err = TradeParameters::validate(&raw("100", "100", "10"), "BTC/USD").unwrap_err();
        assert!(matches!(err, ValidationError::TargetNotAboveEntry { .. }));
    }

    #[test]
    fn missing_asset_falls_back() {
        let mut input = raw("100", "150", "10");
        input.asset = None;
        let params = TradeParameters::validate(&input, "BTC/USD").unwrap();
        assert_eq!(params.asset, "BTC/USD");

        input.asset = Some("   ");
        let params = TradeParameters::validate(&input, "ETH/USD").unwrap();
        assert_eq!(params.asset, "ETH/USD");
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let params = TradeParameters::validate(&raw(" 100 ", "150", "10"), "BTC/USD").unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "asset": "BTC/USD",
                "aiModel": "Viktor IA (DQN)",
                "strategy": "DQN",
                "entryValue": 100.0,
                "targetValue": 150.0,
                "stopLoss": 10.0
            })
        );
    }
}
