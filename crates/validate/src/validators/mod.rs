//! Built-in validators
//!
//! Each validator is a free function that evaluates immediately and returns
//! a [`ValidationResult`](crate::foundation::ValidationResult). The first
//! argument is always the label shown in the rendered message (`""` for
//! none), then the observed value, then the bound(s).
//!
//! # Categories
//!
//! - **Range**: [`min`], [`max`], [`min_max`]
//! - **Membership**: [`one_of`]
//! - **Ordering**: [`before`], [`after`]
//! - **Length**: [`min_len`], [`max_len`], [`min_max_len`] over anything
//!   implementing [`Length`]
//!
//! # Examples
//!
//! ```
//! use validate::prelude::*;
//!
//! let result = all([
//!     min_max("age", 42, 18, 65),
//!     one_of("role", "admin", &["admin", "user"]),
//!     min_len("name", "Hera", 1),
//! ]);
//! assert!(result.is_ok());
//! ```

pub mod length;
pub mod membership;
pub mod range;
pub mod time;

pub use length::{Length, max_len, min_len, min_max_len};
pub use membership::one_of;
pub use range::{max, min, min_max};
pub use time::{after, before};
