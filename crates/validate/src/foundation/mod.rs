//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Trait**: [`Validate`], the contract every checkable type implements
//! - **Leaves**: [`Violation`] (primitive failures), [`Message`] (ad hoc text),
//!   and the open [`Failure`] trait
//! - **Tree**: [`ValidationError`] and [`ViolationSet`]
//! - **Transport**: [`Report`], an owned snapshot of a failure tree
//!
//! # Architecture
//!
//! ## 1. Results, not exceptions
//!
//! Every check returns [`ValidationResult`]: `Ok(())` or a failure value the
//! caller can inspect, nest or drop.
//!
//! ## 2. Detect now, render later
//!
//! Failures store the label, observed value and bound. Text only exists
//! once somebody calls `to_string()` / [`ValidationError::render`].
//!
//! ## 3. Nothing on the success path
//!
//! A passing check returns `Ok(())` without touching the heap, and so does
//! an aggregate of passing checks.

pub mod error;
pub mod report;
pub mod traits;
pub mod violation;

pub use error::{Failure, Message, ValidationError, ViolationSet};
pub use report::Report;
pub use traits::Validate;
pub use violation::{Reportable, Violation, ViolationKind};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a check: `Ok(())` or the failure tree.
pub type ValidationResult<'a> = Result<(), ValidationError<'a>>;
