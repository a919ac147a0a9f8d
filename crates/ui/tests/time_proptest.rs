//! Property-based tests for the display time strings.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use ui::format_seconds;

fn parse(label: &str) -> u32 {
    label
        .split(':')
        .fold(0u32, |acc, part| acc * 60 + part.parse::<u32>().unwrap())
}

proptest::proptest! {
    /// Parsing the label back gives the original number of seconds.
    #[test]
    fn label_reads_back(secs in 0u32..1_000_000) {
        assert_eq!(parse(&format_seconds(secs)), secs);
    }

    /// Hours appear exactly when the value reaches an hour.
    #[test]
    fn hour_field_only_when_needed(secs in 0u32..1_000_000) {
        let label = format_seconds(secs);
        let fields = label.split(':').count();
        assert_eq!(fields == 3, secs >= 3600);
    }

    /// Seconds are always two digits.
    #[test]
    fn seconds_are_padded(secs in 0u32..100_000) {
        let label = format_seconds(secs);
        let last = label.rsplit(':').next().unwrap();
        assert_eq!(last.len(), 2);
    }
}
