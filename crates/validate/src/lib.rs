//! # validate
//!
//! Composable all-of validation for plain Rust structs: no reflection, no
//! attributes, no code generation.
//!
//! ## Quick Start
//!
//! ```rust
//! use validate::prelude::*;
//!
//! struct Education {
//!     school: String,
//! }
//!
//! impl Validate for Education {
//!     fn validate(&self) -> ValidationResult<'_> {
//!         all([one_of("school", self.school.as_str(), &["KAIST", "Stanford"])])
//!     }
//! }
//!
//! struct Employee {
//!     name: String,
//!     age: u32,
//!     salary: f64,
//!     education: Education,
//! }
//!
//! impl Validate for Employee {
//!     fn validate(&self) -> ValidationResult<'_> {
//!         all([
//!             one_of("name", self.name.as_str(), &["Zeus", "Hera"]),
//!             min("age", self.age, 10),
//!             max("salary", self.salary, 123.456),
//!             self.education.validate(),
//!         ])
//!     }
//! }
//!
//! let bob = Employee {
//!     name: "Bob".into(),
//!     age: 101,
//!     salary: 256.99,
//!     education: Education { school: "Berkeley".into() },
//! };
//!
//! let err = bob.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "3 errors: [name(Bob) not in [Zeus, Hera]; salary(256.99) above maximum (123.456); \
//!      1 errors: [school(Berkeley) not in [KAIST, Stanford]]]"
//! );
//! ```
//!
//! ## How it fits together
//!
//! - [`Validate`](foundation::Validate) is the one trait a type implements.
//! - [`validators`] are free functions that evaluate on the spot and return
//!   [`ValidationResult`](foundation::ValidationResult).
//! - [`all`](combinators::all) collects every failure, in order, into a
//!   [`ViolationSet`](foundation::ViolationSet); nested types nest.
//! - Nothing is formatted until the error is displayed. A passing check does
//!   not allocate.
//!
//! ## Error grammar
//!
//! ```text
//! leaf:       <label>(<value>) <phrase> (<bound>)
//! membership: <label>(<value>) not in [<a>, <b>, ...]
//! set:        <N> errors: [<child>; <child>; ...]
//! ```

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use combinators::{all, each};
pub use foundation::{Validate, ValidationError, ValidationResult};
