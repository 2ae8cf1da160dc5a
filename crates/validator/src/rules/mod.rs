//! Built-in rules
//!
//! - **Text**: [`text`], [`non_empty`], [`pattern`], [`email`], [`uuid`], [`one_of`]
//! - **Numbers**: [`integer`], [`number`]
//! - **Boolean**: [`boolean`]
//! - **Geometry**: [`geo_point`]
//! - **Structure**: [`object`], [`each`], [`any`]
//!
//! Every rule first checks the JSON type it expects and records
//! `invalid_type` when it gets something else; the remaining checks of that
//! rule are skipped for that value.

mod array;
mod boolean;
mod geo;
mod number;
mod object;
mod text;

pub use array::{Each, each};
pub use boolean::{Boolean, boolean};
pub use geo::{GeoPoint, geo_point};
pub use number::{Number, integer, number};
pub use object::{Object, Presence, UnknownFields, object};
pub use text::{
    Email, LengthMode, OneOf, Pattern, Text, Uuid, email, non_empty, one_of, pattern, text, uuid,
};

use serde_json::Value;

use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

/// Accepts any value.
///
/// Useful for fields that only need to be present:
/// `object().required("location", any())`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Rule for Any {
    fn check(&self, _value: &Value, _path: &FieldPath, _sink: &mut IssueSink) {}
}

/// Creates an [`Any`] rule.
#[must_use]
pub fn any() -> Any {
    Any
}

/// JSON type name used in `invalid_type` messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Records `invalid_type` for `value` at `path`.
pub(crate) fn record_invalid_type(
    expected: &str,
    value: &Value,
    path: &FieldPath,
    sink: &mut IssueSink,
) {
    sink.record(
        crate::issue::codes::INVALID_TYPE,
        format!("expected {expected}, got {}", json_type(value)),
        path,
    );
}
