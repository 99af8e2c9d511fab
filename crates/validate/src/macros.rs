//! Macros for writing checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`all!`]: variadic form of [`all`](crate::combinators::all)
//! - [`validator!`]: implement [`Validate`](crate::foundation::Validate) from a check list
//!
//! # Examples
//!
//! ```
//! use validate::prelude::*;
//!
//! struct Employee {
//!     name: String,
//!     age: u32,
//! }
//!
//! validate::validator! {
//!     impl Employee;
//!     check(self) [
//!         one_of("name", self.name.as_str(), &["Zeus", "Hera"]),
//!         min("age", self.age, 10),
//!     ]
//! }
//!
//! let bob = Employee { name: "Bob".into(), age: 3 };
//! let err = bob.validate().unwrap_err();
//! assert_eq!(err.count(), 2);
//! ```

// ============================================================================
// ALL MACRO
// ============================================================================

/// Aggregates any number of check results.
///
/// `all![a, b, c]` is `all([a, b, c])`.
///
/// ```
/// use validate::validators::{max, min};
///
/// assert!(validate::all![min("a", 3, 1), max("b", 3, 5)].is_ok());
/// assert!(validate::all![].is_ok());
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::combinators::all(::core::iter::empty())
    };
    ($($check:expr),+ $(,)?) => {
        $crate::combinators::all([$($check),+])
    };
}

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Implements `Validate` for a type whose check is one all-of list.
///
/// `self` is passed in so the check expressions can refer to it.
///
/// ```rust,ignore
/// validator! {
///     impl Education;
///     check(self) [
///         min("", self.duration, 10),
///         one_of("", self.school.as_str(), &["KAIST", "Stanford"]),
///     ]
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (
        impl $name:ty;
        check($self_:ident) [ $($check:expr),* $(,)? ]
    ) => {
        impl $crate::foundation::Validate for $name {
            fn validate(&$self_) -> $crate::foundation::ValidationResult<'_> {
                $crate::all![$($check),*]
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
