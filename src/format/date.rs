//! Timestamp display formatting

use chrono::{DateTime, Utc};

/// Placeholder shown when a value is unknown
pub const MISSING: &str = "—";

/// chrono pattern for `"MMM. d, yyyy; h:mm a"`
const DISPLAY_PATTERN: &str = "%b. %-d, %Y; %-I:%M %p";

/// Render a transaction timestamp, e.g. `"Oct. 31, 2025; 11:15 AM"`
///
/// Times are shown in UTC. A missing timestamp renders as `"—"`.
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format(DISPLAY_PATTERN).to_string(),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case::morning(2025, 10, 31, 11, 15, "Oct. 31, 2025; 11:15 AM")]
    #[case::afternoon(2025, 3, 4, 15, 5, "Mar. 4, 2025; 3:05 PM")]
    #[case::midnight(2024, 1, 1, 0, 0, "Jan. 1, 2024; 12:00 AM")]
    #[case::noon(2024, 12, 9, 12, 30, "Dec. 9, 2024; 12:30 PM")]
    fn test_format_timestamp(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] expected: &str,
    ) {
        let ts = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap();
        assert_eq!(format_timestamp(Some(&ts)), expected);
    }

    #[test]
    fn test_missing_timestamp_renders_dash() {
        assert_eq!(format_timestamp(None), "—");
    }
}
