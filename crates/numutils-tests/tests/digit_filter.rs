//! Digit filtering through the public API.

use numutils::{contains_digit, digit_filter, filter_by_digit, filter_with, NumericError};
use numutils_tests::filter_by_digit_orig;
use proptest::prelude::*;

#[test]
fn test_filter_known_values() -> anyhow::Result<()> {
    let values = [1, 2, 3, 4, 5, 6, 7, 68, 69, 70, 15, 17];
    assert_eq!(filter_by_digit(Some(&values[..]), 7)?, [7, 70, 17]);

    let none = [213142, 234514, 234153, 892384];
    assert!(filter_by_digit(Some(&none[..]), 0)?.is_empty());

    let all = [3, 33, 333, 3333, 33333];
    assert_eq!(filter_by_digit(Some(&all[..]), 3)?, all);

    assert!(filter_by_digit(Some(&[][..]), 5)?.is_empty());
    Ok(())
}

#[test]
fn test_filter_absent_values() {
    assert_eq!(filter_by_digit(None, 5), Err(NumericError::NullArgument));
    assert_eq!(filter_by_digit(None, -1), Err(NumericError::NullArgument));
    assert_eq!(filter_by_digit(None, 9), Err(NumericError::NullArgument));
}

#[test]
fn test_filter_digit_out_of_range() {
    assert_eq!(filter_by_digit(Some(&[][..]), 10), Err(NumericError::OutOfRange));
    assert_eq!(filter_by_digit(Some(&[][..]), -2), Err(NumericError::OutOfRange));
}

#[test]
fn test_filter_negative_values() -> anyhow::Result<()> {
    let values = [-70, 17, -3, i32::MIN, i32::MAX];
    // |i32::MIN| = 2147483648, i32::MAX = 2147483647
    assert_eq!(
        filter_by_digit(Some(&values[..]), 7)?,
        [-70, 17, i32::MIN, i32::MAX]
    );
    assert_eq!(filter_by_digit(Some(&values[..]), 0)?, [-70]);
    assert_eq!(filter_by_digit(Some(&values[..]), 5)?, Vec::<i32>::new());
    Ok(())
}

#[test]
fn test_filter_with_arbitrary_predicate() -> anyhow::Result<()> {
    let values = [10, -5, 0, 42, 7];
    assert_eq!(filter_with(Some(&values[..]), |v| v > 0)?, [10, 42, 7]);
    assert_eq!(filter_with(None, |_| true), Err(NumericError::NullArgument));
    Ok(())
}

// === Properties ===

proptest! {
    /// All three filter shapes agree with string-based digit membership.
    #[test]
    fn filter_matches_string_reference(
        values in prop::collection::vec(any::<i32>(), 0..256),
        digit in 0u8..=9
    ) {
        let expected = filter_by_digit_orig(&values, digit);
        prop_assert_eq!(
            filter_by_digit(Some(&values[..]), i32::from(digit)),
            Ok(expected.clone())
        );
        prop_assert!(digit_filter(Some(&values[..]), i32::from(digit))
            .unwrap()
            .eq(expected.iter().copied()));
        prop_assert_eq!(
            filter_with(Some(&values[..]), |v| contains_digit(v, digit)),
            Ok(expected)
        );
    }

    /// Negating every input negates exactly the kept elements.
    #[test]
    fn filter_ignores_sign(
        values in prop::collection::vec(-1_000_000i32..=1_000_000, 0..64),
        digit in 0i32..=9
    ) {
        let negated: Vec<i32> = values.iter().map(|v| -v).collect();
        let kept = filter_by_digit(Some(&values[..]), digit).unwrap();
        let kept_negated = filter_by_digit(Some(&negated[..]), digit).unwrap();
        prop_assert_eq!(kept.iter().map(|v| -v).collect::<Vec<_>>(), kept_negated);
    }
}
