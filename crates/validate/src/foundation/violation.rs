//! Leaf failures produced by the primitive validators.
//!
//! A [`Violation`] carries only the data needed to render it later: the
//! label, the observed value and whatever it was compared against. No text
//! is built when a violation is created; `Display` does that on demand.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::error::Failure;

// ============================================================================
// REPORTABLE VALUES
// ============================================================================

/// Values a violation can hold and render later.
///
/// Blanket-implemented for everything that is `Display + Debug + Send + Sync`,
/// which covers numbers, `&str`, `String` and the `chrono` time types.
pub trait Reportable: fmt::Display + fmt::Debug + Send + Sync {}

impl<T> Reportable for T where T: fmt::Display + fmt::Debug + Send + Sync + ?Sized {}

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// The operator a [`Violation`] failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViolationKind {
    /// `value < bound`.
    BelowMin,
    /// `value > bound`.
    AboveMax,
    /// `value` equals no member of the allowed set.
    NotInSet,
    /// `value` is not strictly before the reference.
    NotBefore,
    /// `value` is not strictly after the reference.
    NotAfter,
    /// Measured length is below the bound.
    LenBelowMin,
    /// Measured length is above the bound.
    LenAboveMax,
}

impl ViolationKind {
    /// Stable machine-readable code, as used in [`Report`](crate::foundation::Report).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BelowMin => "below_min",
            Self::AboveMax => "above_max",
            Self::NotInSet => "not_in_set",
            Self::NotBefore => "not_before",
            Self::NotAfter => "not_after",
            Self::LenBelowMin => "len_below_min",
            Self::LenAboveMax => "len_above_max",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failed primitive check.
///
/// One variant per operator. Length variants record the measured length as
/// the observed value, so they never hold on to the container itself.
///
/// # Rendering
///
/// ```text
/// age(5) below minimum (10)
/// salary(256.99) above maximum (123.456)
/// name(Bob) not in [Zeus, Hera]
/// birthday(1984-01-01 00:00:00 UTC) is not after (1984-01-01 00:00:00 UTC)
/// tags(0) length below minimum (1)
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation<'a, T> {
    #[error("{label}({value}) below minimum ({bound})")]
    BelowMin {
        label: Cow<'a, str>,
        value: T,
        bound: T,
    },

    #[error("{label}({value}) above maximum ({bound})")]
    AboveMax {
        label: Cow<'a, str>,
        value: T,
        bound: T,
    },

    #[error("{label}({value}) not in [{}]", Joined(.allowed))]
    NotInSet {
        label: Cow<'a, str>,
        value: T,
        allowed: SmallVec<[T; 4]>,
    },

    #[error("{label}({value}) is not before ({reference})")]
    NotBefore {
        label: Cow<'a, str>,
        value: T,
        reference: T,
    },

    #[error("{label}({value}) is not after ({reference})")]
    NotAfter {
        label: Cow<'a, str>,
        value: T,
        reference: T,
    },

    #[error("{label}({len}) length below minimum ({bound})")]
    LenBelowMin {
        label: Cow<'a, str>,
        len: usize,
        bound: usize,
    },

    #[error("{label}({len}) length above maximum ({bound})")]
    LenAboveMax {
        label: Cow<'a, str>,
        len: usize,
        bound: usize,
    },
}

impl<T> Violation<'_, T> {
    /// Which operator failed.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::BelowMin { .. } => ViolationKind::BelowMin,
            Self::AboveMax { .. } => ViolationKind::AboveMax,
            Self::NotInSet { .. } => ViolationKind::NotInSet,
            Self::NotBefore { .. } => ViolationKind::NotBefore,
            Self::NotAfter { .. } => ViolationKind::NotAfter,
            Self::LenBelowMin { .. } => ViolationKind::LenBelowMin,
            Self::LenAboveMax { .. } => ViolationKind::LenAboveMax,
        }
    }

    /// The field label, empty when none was given.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::BelowMin { label, .. }
            | Self::AboveMax { label, .. }
            | Self::NotInSet { label, .. }
            | Self::NotBefore { label, .. }
            | Self::NotAfter { label, .. }
            | Self::LenBelowMin { label, .. }
            | Self::LenAboveMax { label, .. } => label,
        }
    }
}

impl<T> Failure for Violation<'_, T>
where
    T: Reportable,
{
    fn kind(&self) -> Option<ViolationKind> {
        Some(Violation::kind(self))
    }

    fn label(&self) -> &str {
        Violation::label(self)
    }
}

/// Renders a slice as `a, b, c`.
struct Joined<'s, T>(&'s [T]);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
