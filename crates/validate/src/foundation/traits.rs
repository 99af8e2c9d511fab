//! The validator contract
//!
//! This module defines the one trait user types implement to become
//! checkable, plus the blanket impls that let references, boxes, options
//! and collections of such types be checked the same way.

use crate::combinators::all;
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A type that can check itself.
///
/// Implementations are expected to be pure: no mutation, no I/O, same
/// answer every time. The usual body is a single [`all`] call over the
/// primitive checks and the nested types' own `validate()`.
///
/// # Examples
///
/// ```
/// use validate::prelude::*;
///
/// struct Education {
///     school: String,
/// }
///
/// impl Validate for Education {
///     fn validate(&self) -> ValidationResult<'_> {
///         all([one_of("school", self.school.as_str(), &["KAIST", "Stanford"])])
///     }
/// }
///
/// let education = Education { school: "Berkeley".into() };
/// let err = education.validate().unwrap_err();
/// assert_eq!(err.to_string(), "1 errors: [school(Berkeley) not in [KAIST, Stanford]]");
/// ```
pub trait Validate {
    /// Checks `self`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every check passed
    /// * `Err(ValidationError)` describing what failed; nothing is rendered
    ///   until the caller asks for it
    fn validate(&self) -> ValidationResult<'_>;

    /// Shorthand for `self.validate().is_ok()`.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// BLANKET IMPLEMENTATIONS
// ============================================================================

impl<T: Validate + ?Sized> Validate for &T {
    #[inline]
    fn validate(&self) -> ValidationResult<'_> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    #[inline]
    fn validate(&self) -> ValidationResult<'_> {
        (**self).validate()
    }
}

/// `None` has nothing to check and passes.
impl<T: Validate> Validate for Option<T> {
    #[inline]
    fn validate(&self) -> ValidationResult<'_> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

/// Every element is checked; failures are collected as one set.
impl<T: Validate> Validate for [T] {
    fn validate(&self) -> ValidationResult<'_> {
        all(self.iter().map(Validate::validate))
    }
}

impl<T: Validate> Validate for Vec<T> {
    #[inline]
    fn validate(&self) -> ValidationResult<'_> {
        self.as_slice().validate()
    }
}

// ============================================================================
// TESTS
// ============================================================================
