use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time key of a chart point, as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChartTime {
    /// UNIX timestamp in seconds
    Unix(i64),
    /// Business day, `YYYY-MM-DD`
    Day(String),
}

impl ChartTime {
    /// Seconds since the epoch, or `None` for an unparsable day string.
    pub fn epoch_secs(&self) -> Option<i64> {
        match self {
            ChartTime::Unix(secs) => Some(*secs),
            ChartTime::Day(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc().timestamp()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One OHLC point of the price series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartPoint {
    pub time: ChartTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl ChartPoint {
    pub fn new(time: ChartTime, open: f64, high: f64, low: f64, close: f64) -> Self {
        ChartPoint {
            time,
            open,
            high,
            low,
            close,
        }
    }

    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open, self.close),
            CandleType::Bearish => (self.close, self.open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload_with_unix_seconds() {
        let raw = r#"[{"time": 1704067200, "open": 42000.5, "high": 42500.0, "low": 41800.0, "close": 42300.25}]"#;
        let points: Vec<ChartPoint> = serde_json::from_str(raw).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].time, ChartTime::Unix(1_704_067_200));
        assert_eq!(points[0].close, 42300.25);
    }

    #[test]
    fn business_day_strings_resolve_to_midnight_utc() {
        let time = ChartTime::Day("2024-01-01".to_string());
        assert_eq!(time.epoch_secs(), Some(1_704_067_200));
        assert_eq!(ChartTime::Day("yesterday".to_string()).epoch_secs(), None);
    }

    #[test]
    fn body_range_orders_open_and_close() {
        let up = ChartPoint::new(ChartTime::Unix(0), 10.0, 12.0, 9.0, 11.0);
        let down = ChartPoint::new(ChartTime::Unix(0), 11.0, 12.0, 9.0, 10.0);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(down.body_range(), (10.0, 11.0));
    }
}
