//! Length validators
//!
//! One family for sequences, keyed collections and text, driven by the
//! [`Length`] trait. Text is measured in Unicode scalar values (chars),
//! collections in elements or entries. The violation records the measured
//! length, never the container.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::combinators::all;
use crate::foundation::{ValidationError, ValidationResult, Violation};

// ============================================================================
// LENGTH
// ============================================================================

/// Something with a size the length validators can bound.
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length + ?Sized> Length for &L {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Fails iff `value.length() < bound`.
///
/// # Examples
///
/// ```
/// use validate::validators::min_len;
///
/// assert!(min_len("tags", &vec!["a"], 1).is_ok());
/// let err = min_len("tags", &Vec::<&str>::new(), 1).unwrap_err();
/// assert_eq!(err.to_string(), "tags(0) length below minimum (1)");
/// ```
#[inline]
pub fn min_len<'a, L>(
    label: impl Into<Cow<'a, str>>,
    value: &L,
    bound: usize,
) -> ValidationResult<'a>
where
    L: Length + ?Sized,
{
    len_at_least(label.into(), value.length(), bound)
}

/// Fails iff `value.length() > bound`.
#[inline]
pub fn max_len<'a, L>(
    label: impl Into<Cow<'a, str>>,
    value: &L,
    bound: usize,
) -> ValidationResult<'a>
where
    L: Length + ?Sized,
{
    len_at_most(label.into(), value.length(), bound)
}

/// [`max_len`] then [`min_len`], aggregated like
/// [`min_max`](crate::validators::min_max).
///
/// The length is measured once.
pub fn min_max_len<'a, L>(
    label: impl Into<Cow<'a, str>>,
    value: &L,
    min_bound: usize,
    max_bound: usize,
) -> ValidationResult<'a>
where
    L: Length + ?Sized,
{
    let len = value.length();
    if (min_bound..=max_bound).contains(&len) {
        return Ok(());
    }
    let label = label.into();
    all([
        len_at_most(label.clone(), len, max_bound),
        len_at_least(label, len, min_bound),
    ])
}

fn len_at_least(label: Cow<'_, str>, len: usize, bound: usize) -> ValidationResult<'_> {
    if len < bound {
        return Err(ValidationError::violation(Violation::LenBelowMin::<'_, usize> {
            label,
            len,
            bound,
        }));
    }
    Ok(())
}

fn len_at_most(label: Cow<'_, str>, len: usize, bound: usize) -> ValidationResult<'_> {
    if len > bound {
        return Err(ValidationError::violation(Violation::LenAboveMax::<'_, usize> {
            label,
            len,
            bound,
        }));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
