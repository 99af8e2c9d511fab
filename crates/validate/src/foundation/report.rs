//! Owned snapshot of a failure tree.

/// Detached, `'static` view of a [`ValidationError`](crate::foundation::ValidationError).
///
/// Built by [`ValidationError::to_report`](crate::foundation::ValidationError::to_report)
/// for handing results to code that cannot hold on to the borrowed values,
/// such as a response body or a log record.
///
/// - `code`: [`ViolationKind::as_str`](crate::foundation::ViolationKind::as_str),
///   `"custom"` for ad hoc failures, `"all"` for sets
/// - `field`: the label, absent when empty
/// - `message`: rendered text of the leaf, or `"N errors"` for sets
/// - `nested`: children of a set, in order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub code: &'static str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub field: Option<String>,
    pub message: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub nested: Vec<Report>,
}

impl Report {
    /// Number of leaf reports below (and including) this one.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.nested.is_empty() {
            1
        } else {
            self.nested.iter().map(Report::leaf_count).sum()
        }
    }
}
