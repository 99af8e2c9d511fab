//! Prelude module for convenient imports.
//!
//! Provides a single `use validate::prelude::*;` import that brings in the
//! contract, the error model, every built-in validator and the aggregator.
//!
//! # Examples
//!
//! ```
//! use validate::prelude::*;
//!
//! let result = all([min("age", 42, 18), one_of("role", "user", &["admin", "user"])]);
//! assert!(result.is_ok());
//! ```

// ============================================================================
// FOUNDATION: Contract and error model
// ============================================================================

pub use crate::foundation::{
    Failure, Message, Report, Validate, ValidationError, ValidationResult, Violation,
    ViolationKind, ViolationSet,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    Length, after, before, max, max_len, min, min_len, min_max, min_max_len, one_of,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{all, each};
