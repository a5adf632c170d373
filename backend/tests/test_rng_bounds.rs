//! Range containment and argument validation tests

use csrandom_core_rs::{CsRandom, RandomError};
use proptest::prelude::*;

#[test]
fn test_next_double_in_range() {
    let mut rng = CsRandom::new(12345);

    for _ in 0..1_000_000 {
        let val = rng.next_double();
        assert!(
            (0.0..1.0).contains(&val),
            "next_double() produced value {} outside [0.0, 1.0)",
            val
        );
    }
}

#[test]
fn test_range_single_value() {
    let mut rng = CsRandom::new(12345);

    // Range [5, 5) collapses to 5
    for _ in 0..100 {
        assert_eq!(rng.next_range(5, 5), Ok(5));
    }
    assert_eq!(rng.next_range(i32::MIN, i32::MIN), Ok(i32::MIN));
    assert_eq!(rng.next_range(i32::MAX, i32::MAX), Ok(i32::MAX));
}

#[test]
fn test_range_invalid_bounds() {
    let mut rng = CsRandom::new(12345);

    assert_eq!(
        rng.next_range(5, 3),
        Err(RandomError::InvalidRange { min: 5, max: 3 })
    );
}

#[test]
fn test_ceiling_negative() {
    let mut rng = CsRandom::new(12345);

    assert_eq!(
        rng.next_ceiling(-1),
        Err(RandomError::InvalidRange { min: 0, max: -1 })
    );
}

#[test]
fn test_ceiling_zero() {
    let mut rng = CsRandom::new(12345);

    for _ in 0..100 {
        assert_eq!(rng.next_ceiling(0), Ok(0));
    }
}

#[test]
fn test_next_bytes_nil_buffer() {
    let mut rng = CsRandom::new(12345);

    assert_eq!(rng.next_bytes(None), Err(RandomError::NilBuffer));
    assert_eq!(rng.samples_drawn(), 0, "no sample consumed on error");
}

#[test]
fn test_next_bytes_empty_buffer() {
    let mut rng = CsRandom::new(12345);
    let mut buf: [u8; 0] = [];

    assert_eq!(rng.next_bytes(Some(&mut buf)), Ok(()));
    assert_eq!(rng.samples_drawn(), 0);
}

#[test]
fn test_next_bytes_fills_whole_buffer() {
    let mut rng = CsRandom::new(12345);
    let mut touched = [false; 64];

    // A byte equals its previous value with probability 1/256 per trial;
    // across 8 trials every position is overwritten with overwhelming probability.
    for _ in 0..8 {
        let mut buf = [0u8; 64];
        rng.next_bytes(Some(&mut buf)).unwrap();
        for (i, &b) in buf.iter().enumerate() {
            touched[i] |= b != 0;
        }
    }

    assert!(touched.iter().all(|&t| t), "some positions were never written");
    assert_eq!(rng.samples_drawn(), 8 * 64, "one sample per byte");
}

#[test]
fn test_next_bytes_matches_next_int_low_byte() {
    let mut bytes_rng = CsRandom::new(777);
    let mut int_rng = CsRandom::new(777);
    let mut buf = [0u8; 100];

    bytes_rng.next_bytes(Some(&mut buf)).unwrap();

    for &b in &buf {
        assert_eq!(i32::from(b), int_rng.next_int() % 256);
    }
}

#[test]
fn test_error_message_names_bounds() {
    let err = RandomError::InvalidRange { min: 5, max: 3 };
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('3'), "message was: {}", msg);
}

proptest! {
    #[test]
    fn prop_next_range_contained(seed in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut rng = CsRandom::new(seed);

        for _ in 0..20 {
            let v = rng.next_range(min, max).unwrap();
            if min == max {
                prop_assert_eq!(v, min);
            } else {
                prop_assert!(v >= min && v < max, "{} outside [{}, {})", v, min, max);
            }
        }
    }

    #[test]
    fn prop_next_ceiling_contained(seed in any::<i32>(), max in 0..=i32::MAX) {
        let mut rng = CsRandom::new(seed);

        for _ in 0..20 {
            let v = rng.next_ceiling(max).unwrap();
            if max == 0 {
                prop_assert_eq!(v, 0);
            } else {
                prop_assert!(v >= 0 && v < max, "{} outside [0, {})", v, max);
            }
        }
    }

    #[test]
    fn prop_inverted_range_rejected(seed in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let (min, max) = if a > b { (a, b) } else { (b, a) };
        let mut rng = CsRandom::new(seed);
        let before = rng.clone();

        prop_assert!(rng.next_range(min, max).is_err());
        prop_assert_eq!(rng, before);
    }
}
