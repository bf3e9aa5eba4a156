//! Property-based tests for field coercion

use approx::assert_relative_eq;
use freqdist_coerce::{coerce, coerce_column, try_coerce, Error, InvalidValueReason};
use proptest::prelude::*;

#[test]
fn test_documented_examples() {
    assert_eq!(coerce(Some("2-5")), Some(3.5));
    assert_eq!(coerce(Some("10+")), Some(10.0));
    assert_eq!(coerce(Some("7")), Some(7.0));
    assert_eq!(coerce(Some("abc")), None);
    assert_eq!(coerce(None::<&str>), None);
}

#[test]
fn test_try_coerce_explains_rejection() {
    match try_coerce("3 years") {
        Err(Error::InvalidValue { value, reason }) => {
            assert_eq!(value, "3 years");
            assert_eq!(reason, InvalidValueReason::NotANumber);
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_experience_column() {
    let raw = vec![
        Some("0-1"),
        Some("1-3"),
        Some("3-5"),
        Some("5-10"),
        Some("10+"),
        Some("Fresher"),
        None,
    ];
    let column = coerce_column(raw);
    assert_eq!(column.values(), &[0.5, 2.0, 4.0, 7.5, 10.0]);
    assert_eq!(column.total(), 7);
    assert_eq!(column.rejected(), 1);
    assert_eq!(column.missing(), 1);
}

proptest! {
    #[test]
    fn prop_plain_numbers_round_trip(value in -1.0e9f64..1.0e9) {
        let text = value.to_string();
        prop_assert_eq!(coerce(Some(text.as_str())), Some(value));
    }

    #[test]
    fn prop_ranges_are_midpoints(low in 0u32..10_000, width in 0u32..10_000) {
        let high = low + width;
        let text = format!("{low}-{high}");
        let parsed = coerce(Some(text.as_str())).unwrap();
        assert_relative_eq!(parsed, (f64::from(low) + f64::from(high)) / 2.0);
    }

    #[test]
    fn prop_open_ended_is_lower_bound(value in 0u32..100_000) {
        let text = format!("{value}+");
        prop_assert_eq!(coerce(Some(text.as_str())), Some(f64::from(value)));
    }

    #[test]
    fn prop_coercion_never_panics(text in "\\PC*") {
        let _ = coerce(Some(text.as_str()));
    }

    #[test]
    fn prop_column_accounts_for_every_row(fields in proptest::collection::vec(proptest::option::of("[0-9+\\- a-z]{0,6}"), 0..40)) {
        let column = coerce_column(fields.clone());
        prop_assert_eq!(column.total(), fields.len());
        prop_assert_eq!(column.valid() + column.missing() + column.rejected(), fields.len());
    }
}
