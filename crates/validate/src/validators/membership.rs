//! Membership validator

use std::borrow::Cow;

use crate::foundation::{Reportable, ValidationError, ValidationResult, Violation};

/// Fails iff `value` equals none of `allowed`.
///
/// The scan stops at the first match. On failure the whole allowed set is
/// copied into the violation as given, duplicates and order included; an
/// empty set never matches.
///
/// # Examples
///
/// ```
/// use validate::validators::one_of;
///
/// assert!(one_of("age", 55, &[35, 55]).is_ok());
///
/// let err = one_of("name", "Bob", &["Zeus", "Hera"]).unwrap_err();
/// assert_eq!(err.to_string(), "name(Bob) not in [Zeus, Hera]");
/// ```
pub fn one_of<'a, T>(
    label: impl Into<Cow<'a, str>>,
    value: T,
    allowed: &[T],
) -> ValidationResult<'a>
where
    T: PartialEq + Clone + Reportable + 'a,
{
    if allowed.iter().any(|candidate| *candidate == value) {
        return Ok(());
    }
    Err(ValidationError::violation(Violation::NotInSet {
        label: label.into(),
        value,
        allowed: allowed.iter().cloned().collect(),
    }))
}
