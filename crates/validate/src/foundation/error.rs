//! Error model for validation failures
//!
//! A failure is a tree. Leaves are anything implementing [`Failure`]: the
//! built-in [`Violation`](crate::foundation::Violation), an ad hoc
//! [`Message`], or a user type. Internal nodes are [`ViolationSet`]s, one per
//! aggregator call that saw at least one failure.
//!
//! Nothing here formats eagerly. `Display` walks the tree when asked:
//!
//! ```text
//! 2 errors: [name(Bob) not in [Zeus, Hera]; 1 errors: [(Berkeley) not in [KAIST, Stanford]]]
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::foundation::ViolationKind;
use crate::foundation::report::Report;

// ============================================================================
// FAILURE TRAIT
// ============================================================================

/// A leaf failure that renders itself on demand.
///
/// Implement this for domain-specific failures that do not fit the
/// primitive set; both methods have defaults.
///
/// # Examples
///
/// ```
/// use validate::foundation::{Failure, ValidationError};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("color wrong value({0})")]
/// struct BadColor(String);
///
/// impl Failure for BadColor {}
///
/// let err = ValidationError::violation(BadColor("orange".into()));
/// assert_eq!(err.to_string(), "color wrong value(orange)");
/// ```
pub trait Failure: std::error::Error + Send + Sync {
    /// The primitive operator that failed, `None` for ad hoc failures.
    fn kind(&self) -> Option<ViolationKind> {
        None
    }

    /// The checked field's label, empty when unlabeled.
    fn label(&self) -> &str {
        ""
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

/// Ad hoc failure carrying a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{text}")]
pub struct Message<'a> {
    text: Cow<'a, str>,
}

impl<'a> Message<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Failure for Message<'_> {}

// ============================================================================
// VIOLATION SET
// ============================================================================

/// Ordered failures collected by one aggregator call.
///
/// Never empty: [`ViolationSet::from_errors`] refuses an empty list, so "no
/// failures" is always `Ok(())` rather than an empty set. Children keep the
/// order the checks were supplied in.
#[derive(Debug)]
pub struct ViolationSet<'a> {
    errors: Vec<ValidationError<'a>>,
}

// Never empty, so `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl<'a> ViolationSet<'a> {
    /// Wraps `errors`, or returns `None` when there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError<'a>>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError<'a>] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError<'a>> {
        self.errors.iter()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError<'a>> {
        self.errors
    }
}

impl<'s, 'a> IntoIterator for &'s ViolationSet<'a> {
    type Item = &'s ValidationError<'a>;
    type IntoIter = std::slice::Iter<'s, ValidationError<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for ViolationSet<'a> {
    type Item = ValidationError<'a>;
    type IntoIter = std::vec::IntoIter<ValidationError<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ViolationSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors: [", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        f.write_str("]")
    }
}

impl std::error::Error for ViolationSet<'_> {}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The failure half of a validation result.
///
/// Either a single leaf failure or the set produced by an aggregator. The
/// lifetime lets violations borrow the checked values (`&str` fields, for
/// instance) instead of copying them.
#[derive(Debug)]
pub enum ValidationError<'a> {
    /// One failed check.
    Violation(Box<dyn Failure + 'a>),
    /// Everything that failed in one [`all`](crate::combinators::all) call.
    Set(ViolationSet<'a>),
}

impl<'a> ValidationError<'a> {
    /// Wraps a leaf failure.
    pub fn violation(failure: impl Failure + 'a) -> Self {
        Self::Violation(Box::new(failure))
    }

    /// Ad hoc failure with a fixed message.
    ///
    /// # Examples
    ///
    /// ```
    /// use validate::foundation::ValidationError;
    ///
    /// let err = ValidationError::message("my special error");
    /// assert_eq!(err.render(), "my special error");
    /// ```
    pub fn message(text: impl Into<Cow<'a, str>>) -> Self {
        Self::violation(Message::new(text))
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    #[must_use]
    pub fn as_set(&self) -> Option<&ViolationSet<'a>> {
        match self {
            Self::Set(set) => Some(set),
            Self::Violation(_) => None,
        }
    }

    /// Operator of a leaf failure; `None` for sets and ad hoc failures.
    #[must_use]
    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            Self::Violation(failure) => failure.kind(),
            Self::Set(_) => None,
        }
    }

    /// Label of a leaf failure; empty for sets.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Violation(failure) => failure.label(),
            Self::Set(_) => "",
        }
    }

    /// Number of leaf failures in the whole tree.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Violation(_) => 1,
            Self::Set(set) => set.iter().map(ValidationError::count).sum(),
        }
    }

    /// Leaf failures in depth-first order.
    #[must_use]
    pub fn violations(&self) -> Vec<&(dyn Failure + 'a)> {
        let mut out = Vec::with_capacity(self.count());
        self.collect_violations(&mut out);
        out
    }

    fn collect_violations<'s>(&'s self, out: &mut Vec<&'s (dyn Failure + 'a)>) {
        match self {
            Self::Violation(failure) => out.push(&**failure),
            Self::Set(set) => {
                for error in set {
                    error.collect_violations(out);
                }
            }
        }
    }

    /// Renders the whole tree. Same output as `to_string()`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Owned snapshot of the tree, detached from the checked data.
    #[must_use]
    pub fn to_report(&self) -> Report {
        match self {
            Self::Violation(failure) => Report {
                code: failure.kind().map_or("custom", ViolationKind::as_str),
                field: Some(failure.label())
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned),
                message: failure.to_string(),
                nested: Vec::new(),
            },
            Self::Set(set) => Report {
                code: "all",
                field: None,
                message: format!("{} errors", set.len()),
                nested: set.iter().map(ValidationError::to_report).collect(),
            },
        }
    }

    /// The [`Report`] as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_report())
    }
}

impl fmt::Display for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Violation(failure) => fmt::Display::fmt(failure, f),
            Self::Set(set) => fmt::Display::fmt(set, f),
        }
    }
}

impl std::error::Error for ValidationError<'_> {}

impl<'a> From<ViolationSet<'a>> for ValidationError<'a> {
    fn from(set: ViolationSet<'a>) -> Self {
        Self::Set(set)
    }
}

impl<'a> From<Message<'a>> for ValidationError<'a> {
    fn from(message: Message<'a>) -> Self {
        Self::violation(message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
