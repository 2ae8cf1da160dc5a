//! Aggregate error
//!
//! [`Error`] is what a failed operation hands back to its caller: a top-level
//! classification plus the field-level [`Issue`]s that caused it. Its serde
//! form is the wire contract shared with every client:
//!
//! ```text
//! { "code": string, "message": string,
//!   "issues": [ { "code": string, "message": string, "path": [string] } ] }
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::issue::{Issue, codes};
use crate::path::FieldPath;

/// A classified failure carrying zero or more issues.
///
/// `issues` is non-empty for `validation_failed` and empty for
/// `submission_failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(try_from = "WireError")]
#[error("{code}: {message}")]
pub struct Error {
    /// Top-level classification, see [`codes`].
    pub code: Cow<'static, str>,
    /// Human-readable summary.
    pub message: Cow<'static, str>,
    /// Field-level detail.
    pub issues: Vec<Issue>,
}

impl Error {
    /// Aggregates validation issues into a `validation_failed` error.
    ///
    /// # Panics
    ///
    /// Panics if `issues` is empty: a validation failure without issues
    /// cannot be acted upon by the caller.
    #[must_use]
    pub fn validation_failed(issues: Vec<Issue>) -> Self {
        assert!(
            !issues.is_empty(),
            "validation_failed requires at least one issue"
        );
        let message = match issues.len() {
            1 => Cow::Borrowed("validation failed with 1 issue"),
            n => Cow::Owned(format!("validation failed with {n} issues")),
        };
        Self {
            code: Cow::Borrowed(codes::VALIDATION_FAILED),
            message,
            issues,
        }
    }

    /// Wraps a collaborator failure. Carries no issues.
    pub fn submission_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Cow::Borrowed(codes::SUBMISSION_FAILED),
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Returns true for `validation_failed`.
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        self.code == codes::VALIDATION_FAILED
    }

    /// Returns true for `submission_failed`.
    #[must_use]
    pub fn is_submission_failure(&self) -> bool {
        self.code == codes::SUBMISSION_FAILED
    }

    /// Issues located at exactly `path`.
    ///
    /// Paths are compared by wire form, so this also works on an error
    /// decoded from JSON, where indices arrive as strings.
    pub fn issues_at<'a>(
        &'a self,
        path: &'a FieldPath,
    ) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |issue| issue.path.wire_eq(path))
    }
}

/// Decoding shadow of [`Error`]; conversion re-checks the invariants.
#[derive(Deserialize)]
struct WireError {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    issues: Vec<Issue>,
}

impl TryFrom<WireError> for Error {
    type Error = String;

    fn try_from(wire: WireError) -> Result<Self, Self::Error> {
        if wire.code.is_empty() {
            return Err("error code must not be empty".to_string());
        }
        if wire.code == codes::VALIDATION_FAILED && wire.issues.is_empty() {
            return Err("validation_failed requires at least one issue".to_string());
        }
        if wire.code == codes::SUBMISSION_FAILED && !wire.issues.is_empty() {
            return Err("submission_failed carries no issues".to_string());
        }
        Ok(Self {
            code: wire.code,
            message: wire.message,
            issues: wire.issues,
        })
    }
}
