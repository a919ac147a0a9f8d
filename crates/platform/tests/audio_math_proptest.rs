//! Property-based tests for volume stepping.
//! Verifies invariants hold for ALL inputs, not just fixed examples.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use platform::audio_types::VolumeLevel;

proptest::proptest! {
    /// VolumeLevel::new never panics for any u8 input and always lands in range.
    #[test]
    fn volume_level_new_never_panics(raw in 0u8..=255u8) {
        let v = VolumeLevel::new(raw);
        assert!(v.get() <= VolumeLevel::MAX);
    }

    /// try_new agrees with new on in-range input and rejects the rest.
    #[test]
    fn try_new_matches_new_inside_range(raw in 0u8..=255u8) {
        match VolumeLevel::try_new(raw) {
            Ok(v) => assert_eq!(v, VolumeLevel::new(raw)),
            Err(e) => assert!(e.value > u32::from(VolumeLevel::MAX)),
        }
    }

    /// louder() then quieter() is the identity except at the top bound.
    #[test]
    fn louder_then_quieter_round_trips(raw in 0u8..21u8) {
        let v = VolumeLevel::new(raw);
        assert_eq!(v.louder().quieter(), v);
    }

    /// Stepping is monotone.
    #[test]
    fn stepping_is_monotone(raw in 0u8..=21u8) {
        let v = VolumeLevel::new(raw);
        assert!(v.louder() >= v);
        assert!(v.quieter() <= v);
    }
}
