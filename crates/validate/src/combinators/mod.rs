//! Combinators that turn many check results into one.
//!
//! - [`all`]: collect every failure from a list of results
//! - [`each`]: the same over a collection of [`Validate`](crate::foundation::Validate) items

pub mod all;

pub use all::{all, each};
