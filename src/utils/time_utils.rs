use chrono::DateTime;

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const SHORT_DATE_FORMAT: &str = "%b %d";
}

/// Used for axis labels and tooltips. Out-of-range input yields an empty string.
pub fn epoch_ms_to_date_string(epoch_ms: i64, format: &str) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_in_utc() {
        assert_eq!(
            epoch_ms_to_date_string(1_718_841_600_000, TimeUtils::STANDARD_DATE_FORMAT),
            "2024-06-20"
        );
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        assert_eq!(format_duration(5_000), "5s");
        assert_eq!(format_duration(TimeUtils::MS_IN_MIN * 3), "3m");
        assert_eq!(format_duration(TimeUtils::MS_IN_H * 5), "5h");
        assert_eq!(format_duration(TimeUtils::MS_IN_D * 2), "2d");
    }
}
