//! Property-Based Tests for the Secret Santa wheel and form
//!
//! These tests verify:
//! - Rotation targets always decode back to their segment
//! - Settled labels agree with the emitted rotation for any seed and list
//! - Form validation accepts exactly the non-blank inputs

use proptest::prelude::*;
use secret_santa::submission::FormFields;
use secret_santa::wheel::{EXTRA_TURN_CHOICES, SelectorWheel, rotation_for, segment_at};
use std::time::{Duration, Instant};

// =============================================================================
// Rotation Property Tests
// =============================================================================

/// Segment count, index within it, and extra turns
fn segment_strategy() -> impl Strategy<Value = (usize, usize, u32)> {
    (1usize..=64).prop_flat_map(|n| (Just(n), 0..n, 0..EXTRA_TURN_CHOICES))
}

proptest! {
    /// segment_at inverts rotation_for
    #[test]
    fn rotation_decodes_to_segment((n, k, r) in segment_strategy()) {
        prop_assert_eq!(segment_at(rotation_for(k, r, n), n), k);
    }

    /// Rotations always include at least three full turns
    #[test]
    fn rotation_has_minimum_turns((n, k, r) in segment_strategy()) {
        let rotation = rotation_for(k, r, n);
        prop_assert!(rotation >= 1080.0);
        prop_assert!(rotation < (4 + r) as f64 * 360.0);
    }
}

// =============================================================================
// Wheel Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The settled label is the one under the pointer at the emitted rotation
    #[test]
    fn settled_label_matches_rotation(
        seed in any::<u64>(),
        names in prop::collection::vec("[A-Za-z]{1,12}", 1..12),
    ) {
        let mut wheel = SelectorWheel::with_seed(names.clone(), Duration::ZERO, seed).unwrap();
        let now = Instant::now();
        let rotation = wheel.trigger(now).unwrap();
        let outcome = wheel.tick(now).unwrap().clone();

        prop_assert_eq!(outcome.rotation, rotation);
        prop_assert_eq!(segment_at(rotation, names.len()), outcome.index);
        prop_assert_eq!(&names[outcome.index], &outcome.label);
        prop_assert_eq!(wheel.segment_under_pointer(now), outcome.index);
    }
}

// =============================================================================
// Form Property Tests
// =============================================================================

proptest! {
    /// Any pair of non-blank values produces a trimmed request
    #[test]
    fn non_blank_fields_make_request(
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
        name in "[A-Za-z][A-Za-z ]{0,20}",
        pad in " {0,3}",
    ) {
        let fields = FormFields::new(format!("{pad}{email}{pad}"), format!("{name}{pad}"));
        let request = fields.to_request().unwrap();
        prop_assert_eq!(request.email, email);
        prop_assert_eq!(request.name, name.trim());
    }

    /// Blank values are always rejected
    #[test]
    fn blank_fields_rejected(blank in "[ \t]{0,5}") {
        let fields = FormFields::new(blank.clone(), "Ann");
        prop_assert!(fields.to_request().is_err());
        let fields = FormFields::new("a@b.c", blank);
        prop_assert!(fields.to_request().is_err());
    }
}
