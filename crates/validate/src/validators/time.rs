//! Strict ordering against a reference point.
//!
//! Meant for time-like values (`chrono::DateTime`, `NaiveDate`, ...) but
//! works for anything `PartialOrd`. Equality fails both checks.

use std::borrow::Cow;

use crate::foundation::{Reportable, ValidationError, ValidationResult, Violation};

/// Fails unless `value < reference`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use validate::validators::before;
///
/// let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let err = before("vacation_start", start, cutoff).unwrap_err();
/// assert_eq!(err.to_string(), "vacation_start(2025-01-01) is not before (2024-01-01)");
/// ```
#[inline]
pub fn before<'a, T>(label: impl Into<Cow<'a, str>>, value: T, reference: T) -> ValidationResult<'a>
where
    T: PartialOrd + Reportable + 'a,
{
    if value < reference {
        return Ok(());
    }
    Err(ValidationError::violation(Violation::NotBefore {
        label: label.into(),
        value,
        reference,
    }))
}

/// Fails unless `value > reference`.
#[inline]
pub fn after<'a, T>(label: impl Into<Cow<'a, str>>, value: T, reference: T) -> ValidationResult<'a>
where
    T: PartialOrd + Reportable + 'a,
{
    if value > reference {
        return Ok(());
    }
    Err(ValidationError::violation(Violation::NotAfter {
        label: label.into(),
        value,
        reference,
    }))
}

// ============================================================================
// TESTS
// ============================================================================
