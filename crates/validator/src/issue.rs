//! Validation issues
//!
//! An [`Issue`] is one localized validation failure. Codes come from the
//! closed taxonomy in [`codes`]; messages are human-readable defaults that
//! callers may replace (see [`RuleExt::with_message`](crate::rule::RuleExt::with_message)).

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::FieldPath;

/// Stable issue and error codes.
///
/// Issue codes describe a single field-level failure. The two error codes
/// classify an aggregate [`Error`](crate::error::Error).
pub mod codes {
    /// A required field is absent or `null`.
    pub const REQUIRED: &str = "required";
    /// The value has the wrong JSON type for the rule.
    pub const INVALID_TYPE: &str = "invalid_type";
    /// A string or array is shorter than allowed.
    pub const TOO_SHORT: &str = "too_short";
    /// A string or array is longer than allowed.
    pub const TOO_LONG: &str = "too_long";
    /// A string contains a forbidden character.
    pub const INVALID_CHARACTERS: &str = "invalid_characters";
    /// A string does not match the expected format.
    pub const INVALID_FORMAT: &str = "invalid_format";
    /// A string is not a valid email address.
    pub const INVALID_EMAIL: &str = "invalid_email";
    /// A number is outside its allowed bounds.
    pub const OUT_OF_RANGE: &str = "out_of_range";
    /// A value is not one of the allowed choices.
    pub const NOT_ALLOWED: &str = "not_allowed";
    /// An object carries a field the schema does not declare.
    pub const UNKNOWN_FIELD: &str = "unknown_field";
    /// A GeoJSON value is not the expected geometry.
    pub const INVALID_GEOMETRY: &str = "invalid_geometry";

    /// Aggregate code: at least one issue was recorded.
    pub const VALIDATION_FAILED: &str = "validation_failed";
    /// Aggregate code: the submission collaborator failed.
    pub const SUBMISSION_FAILED: &str = "submission_failed";
}

/// One validation failure.
///
/// Serializes to the wire shape `{ "code", "message", "path" }` with the
/// path as an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireIssue")]
pub struct Issue {
    /// Machine-readable code, e.g. `"too_short"`.
    pub code: Cow<'static, str>,
    /// Human-readable message.
    pub message: Cow<'static, str>,
    /// Location of the offending value.
    pub path: FieldPath,
}

impl Issue {
    /// Creates an issue.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty. Codes are static identifiers, so an empty
    /// one is a defect in the rule that produced it.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        path: FieldPath,
    ) -> Self {
        let code = code.into();
        assert!(!code.is_empty(), "issue code must not be empty");
        Self {
            code,
            message: message.into(),
            path,
        }
    }

    /// Shorthand for a `required` issue.
    pub fn required(path: FieldPath) -> Self {
        Self::new(codes::REQUIRED, "this field is required", path)
    }

    /// Shorthand for an `invalid_type` issue.
    pub fn invalid_type(expected: &str, path: FieldPath) -> Self {
        Self::new(codes::INVALID_TYPE, format!("expected {expected}"), path)
    }
}

/// Decoding shadow of [`Issue`]; conversion re-checks the code.
#[derive(Deserialize)]
struct WireIssue {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    path: FieldPath,
}

impl TryFrom<WireIssue> for Issue {
    type Error = &'static str;

    fn try_from(wire: WireIssue) -> Result<Self, Self::Error> {
        if wire.code.is_empty() {
            return Err("issue code must not be empty");
        }
        Ok(Self {
            code: wire.code,
            message: wire.message,
            path: wire.path,
        })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}: {}", self.code, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.path, self.code, self.message)
        }
    }
}
