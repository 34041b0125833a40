//! Validation feedback: the structured outcome of a run

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome tag for a validation run. Exactly one is active at a time:
/// whichever stage failed first owns the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Valid,
    MissingRequiredFields,
    Invalid,
    Mismatch,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Status::Valid => "valid",
            Status::MissingRequiredFields => "missingRequiredFields",
            Status::Invalid => "invalid",
            Status::Mismatch => "mismatch",
        };
        write!(f, "{}", tag)
    }
}

/// One failing field. Mismatch entries additionally carry the
/// identifier of the field the value was compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorField {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
}

impl ErrorField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            match_id: None,
        }
    }

    pub fn mismatch(id: impl Into<String>, match_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            match_id: Some(match_id.into()),
        }
    }
}

/// Accumulated result of a validation run.
///
/// Error entries are keyed by scan index — the field's position in
/// the selected sequence of that particular run, not a stable
/// identifier. Two scans over the same fields may assign different
/// indices; correlate by field id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub success: bool,
    pub status: Status,
    pub error_fields: BTreeMap<usize, ErrorField>,
}

impl Feedback {
    /// Create a fresh, passing feedback for a new run.
    pub fn new() -> Self {
        Self {
            success: true,
            status: Status::Valid,
            error_fields: BTreeMap::new(),
        }
    }

    /// Record one failing field under the stage's status.
    pub(crate) fn record(&mut self, status: Status, index: usize, field: ErrorField) {
        self.success = false;
        self.status = status;
        self.error_fields.insert(index, field);
    }

    /// Check whether a field id appears among the failures.
    pub fn has_field(&self, id: &str) -> bool {
        self.error_fields.values().any(|f| f.id == id)
    }

    /// Number of failing fields recorded.
    pub fn len(&self) -> usize {
        self.error_fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.error_fields.is_empty()
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering request handed to the markup builder: the failing
/// status plus the error map it produced. Built per failure, never
/// stored.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    pub status: Status,
    pub fields: &'a BTreeMap<usize, ErrorField>,
}
