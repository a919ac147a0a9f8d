//! Elapsed/total time strings.

use core::fmt::Write;

/// Longest output: `1193046:28:15` for `u32::MAX` seconds.
pub type TimeString = heapless::String<16>;

/// `H:MM:SS` when the value reaches an hour, `M:SS` otherwise.
///
/// ```
/// assert_eq!(ui::time::format_seconds(75).as_str(), "1:15");
/// assert_eq!(ui::time::format_seconds(3_725).as_str(), "1:02:05");
/// ```
pub fn format_seconds(seconds: u32) -> TimeString {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    let mut out = TimeString::new();
    // 16 bytes always fit the widest u32 rendering, so write! cannot fail
    let _ = if hours > 0 {
        write!(out, "{hours}:{minutes:02}:{secs:02}")
    } else {
        write!(out, "{minutes}:{secs:02}")
    };
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::format_seconds;

    #[test]
    fn test_zero() {
        assert_eq!(format_seconds(0).as_str(), "0:00");
    }

    #[test]
    fn test_under_an_hour() {
        assert_eq!(format_seconds(59).as_str(), "0:59");
        assert_eq!(format_seconds(600).as_str(), "10:00");
        assert_eq!(format_seconds(3_599).as_str(), "59:59");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_seconds(3_600).as_str(), "1:00:00");
        assert_eq!(format_seconds(36_061).as_str(), "10:01:01");
    }

    #[test]
    fn test_max_fits() {
        assert_eq!(format_seconds(u32::MAX).as_str(), "1193046:28:15");
    }
}
