//! Numeric range validators
//!
//! Bounds are inclusive: a value equal to its bound passes. Values that do
//! not compare at all (`NaN`) are not below or above anything and pass.

use std::borrow::Cow;

use crate::combinators::all;
use crate::foundation::{Reportable, ValidationError, ValidationResult, Violation};

/// Fails iff `value < bound`.
///
/// # Examples
///
/// ```
/// use validate::validators::min;
///
/// assert!(min("age", 10, 10).is_ok());
/// let err = min("age", 9, 10).unwrap_err();
/// assert_eq!(err.to_string(), "age(9) below minimum (10)");
/// ```
#[inline]
pub fn min<'a, T>(label: impl Into<Cow<'a, str>>, value: T, bound: T) -> ValidationResult<'a>
where
    T: PartialOrd + Reportable + 'a,
{
    if value < bound {
        return Err(ValidationError::violation(Violation::BelowMin {
            label: label.into(),
            value,
            bound,
        }));
    }
    Ok(())
}

/// Fails iff `value > bound`.
///
/// # Examples
///
/// ```
/// use validate::validators::max;
///
/// assert!(max("salary", 123.456, 123.456).is_ok());
/// assert!(max("salary", 123.4561, 123.456).is_err());
/// ```
#[inline]
pub fn max<'a, T>(label: impl Into<Cow<'a, str>>, value: T, bound: T) -> ValidationResult<'a>
where
    T: PartialOrd + Reportable + 'a,
{
    if value > bound {
        return Err(ValidationError::violation(Violation::AboveMax {
            label: label.into(),
            value,
            bound,
        }));
    }
    Ok(())
}

/// [`max`] then [`min`], aggregated.
///
/// Both sides are evaluated and any failure comes back as a nested set, so
/// an inverted range (`min_bound > max_bound`) can report two violations.
///
/// # Examples
///
/// ```
/// use validate::validators::min_max;
///
/// assert!(min_max("age", 30, 18, 65).is_ok());
/// let err = min_max("age", 70, 18, 65).unwrap_err();
/// assert_eq!(err.to_string(), "1 errors: [age(70) above maximum (65)]");
/// ```
pub fn min_max<'a, T>(
    label: impl Into<Cow<'a, str>>,
    value: T,
    min_bound: T,
    max_bound: T,
) -> ValidationResult<'a>
where
    T: PartialOrd + Clone + Reportable + 'a,
{
    let above = value > max_bound;
    let below = value < min_bound;
    if !above && !below {
        return Ok(());
    }
    let label = label.into();
    all([
        max(label.clone(), value.clone(), max_bound),
        min(label, value, min_bound),
    ])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ViolationKind;
    use rstest::rstest;

    #[rstest]
    #[case(9, false)]
    #[case(10, true)]
    #[case(11, true)]
    fn min_is_inclusive(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(min("n", value, 10).is_ok(), ok);
    }

    #[rstest]
    #[case(123.456, true)]
    #[case(123.4561, false)]
    #[case(-1.0, true)]
    fn max_is_inclusive(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(max("salary", value, 123.456).is_ok(), ok);
    }

    #[test]
    fn nan_passes_both_bounds() {
        assert!(min("x", f64::NAN, 0.0).is_ok());
        assert!(max("x", f64::NAN, 0.0).is_ok());
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(min("code", "b", "a").is_ok());
        assert_eq!(
            min("code", "a", "b").unwrap_err().kind(),
            Some(ViolationKind::BelowMin)
        );
    }

    #[test]
    fn min_max_below() {
        let err = min_max("age", 5, 18, 65).unwrap_err();
        let set = err.as_set().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.errors()[0].kind(), Some(ViolationKind::BelowMin));
    }

    #[test]
    fn min_max_inverted_range_reports_max_then_min() {
        let err = min_max("x", 5, 10, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "2 errors: [x(5) above maximum (1); x(5) below minimum (10)]"
        );
    }

    #[test]
    fn min_max_at_both_bounds() {
        assert!(min_max("x", 1, 1, 1).is_ok());
    }

    #[test]
    fn owned_label() {
        let field = format!("items[{}]", 3);
        let err = min(field, 0, 1).unwrap_err();
        assert_eq!(err.label(), "items[3]");
    }
}
