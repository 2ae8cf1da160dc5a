//! Boolean rule

use serde_json::Value;

use super::record_invalid_type;
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

/// Value must be `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl Rule for Boolean {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        if !value.is_boolean() {
            record_invalid_type("a boolean", value, path, sink);
        }
    }
}

/// Creates a [`Boolean`] rule.
#[must_use]
pub fn boolean() -> Boolean {
    Boolean
}
