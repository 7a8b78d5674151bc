//! Duration and wall-clock formatting.
//!
//! Trip duration renders as zero-padded `HH:MM:SS` with unbounded hours (no
//! day rollover). The time-of-day display is a separate one-second ticking
//! readout unrelated to trip duration.

use chrono::{DateTime, Local};

/// Format whole seconds as zero-padded `HH:MM:SS`. Hours are not wrapped
/// at 24.
pub fn format_duration_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds / 60 % 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a wall-clock time of day as `HH:mm:ss`.
pub fn wall_clock_hms(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// The current time of day, formatted for the clock display.
pub fn current_time_hms() -> String {
    wall_clock_hms(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_zero() {
        assert_eq!(format_duration_hms(0), "00:00:00");
    }

    #[test]
    fn test_duration_mixed() {
        assert_eq!(format_duration_hms(3661), "01:01:01");
        assert_eq!(format_duration_hms(59), "00:00:59");
        assert_eq!(format_duration_hms(600), "00:10:00");
    }

    #[test]
    fn test_duration_hours_do_not_wrap() {
        assert_eq!(format_duration_hms(26 * 3600 + 90), "26:01:30");
        assert_eq!(format_duration_hms(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_wall_clock_zero_padded() {
        let t = Local.with_ymd_and_hms(2024, 5, 7, 9, 5, 3).unwrap();
        assert_eq!(wall_clock_hms(t), "09:05:03");
    }
}
