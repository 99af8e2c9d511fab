//! ALL-OF combinator - collects every failure from a list of checks
//!
//! Unlike short-circuiting conjunction, [`all`] looks at every result it is
//! given and reports each failure, in order, as one [`ViolationSet`].
//!
//! # Examples
//!
//! ```
//! use validate::prelude::*;
//!
//! let result = all([
//!     min("age", 5, 10),
//!     max("salary", 79.0, 123.456),
//!     one_of("name", "Bob", &["Zeus", "Hera"]),
//! ]);
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.as_set().map(|set| set.len()), Some(2));
//! ```

use crate::foundation::{Validate, ValidationError, ValidationResult, ViolationSet};

// ============================================================================
// ALL
// ============================================================================

/// Aggregates already-evaluated checks.
///
/// Every element is inspected exactly once, left to right, with no early
/// exit. Failures keep their relative order; a child that is itself a set
/// (a nested composite) stays a single node rather than being flattened.
///
/// Returns `Ok(())` when nothing failed, including for an empty input. The
/// failure list is only allocated once the first failure shows up.
pub fn all<'a, I>(results: I) -> ValidationResult<'a>
where
    I: IntoIterator<Item = ValidationResult<'a>>,
{
    let mut failures = Vec::new();
    let mut checked = 0_usize;

    for result in results {
        checked += 1;
        if let Err(error) = result {
            failures.push(error);
        }
    }

    match ViolationSet::from_errors(failures) {
        None => Ok(()),
        Some(set) => {
            tracing::trace!(checked, failed = set.len(), "all-of check failed");
            Err(ValidationError::Set(set))
        }
    }
}

// ============================================================================
// EACH
// ============================================================================

/// Runs [`Validate::validate`] on every item and aggregates like [`all`].
///
/// # Examples
///
/// ```
/// use validate::prelude::*;
///
/// struct Port(u16);
///
/// impl Validate for Port {
///     fn validate(&self) -> ValidationResult<'_> {
///         min("port", self.0, 1024)
///     }
/// }
///
/// let ports = [Port(80), Port(8080), Port(22)];
/// let err = each(&ports).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "2 errors: [port(80) below minimum (1024); port(22) below minimum (1024)]"
/// );
/// ```
pub fn each<'a, T, I>(items: I) -> ValidationResult<'a>
where
    T: Validate + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    all(items.into_iter().map(Validate::validate))
}

// ============================================================================
// TESTS
// ============================================================================
