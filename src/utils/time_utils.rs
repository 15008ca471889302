use chrono::DateTime;

/// `std::time::Instant` panics on wasm32, this one does not.
pub type AppInstant = web_time::Instant;

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

/// Used for axis labels. Out-of-range timestamps give an empty label.
pub fn epoch_sec_to_date_string(epoch_sec: i64) -> String {
    DateTime::from_timestamp(epoch_sec, 0)
        .map(|dt| dt.format(STANDARD_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_seconds_as_utc_day() {
        assert_eq!(epoch_sec_to_date_string(1_704_067_200), "2024-01-01");
        assert_eq!(epoch_sec_to_date_string(i64::MAX), "");
    }
}
