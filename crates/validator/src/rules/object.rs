//! Object rule
//!
//! An [`Object`] maps field names to rules. It is the node of a schema tree:
//! each declared field is checked at `path.key(name)`, so nesting objects
//! yields nested paths.
//!
//! # Examples
//!
//! ```
//! use nuisance_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = object()
//!     .required("title", non_empty())
//!     .required("location", any())
//!     .optional("contact", object().required("email", email()));
//!
//! let mut sink = IssueSink::new();
//! schema.check(&json!({ "title": "", "location": null }), &FieldPath::root(), &mut sink);
//!
//! let codes: Vec<_> = sink.issues().iter().map(|i| i.code.as_ref()).collect();
//! assert_eq!(codes, ["too_short", "required"]);
//! ```

use serde_json::Value;

use super::record_invalid_type;
use crate::issue::{Issue, codes};
use crate::path::FieldPath;
use crate::rule::{BoxedRule, Rule};
use crate::sink::IssueSink;

/// Whether a declared field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Absent or `null` records a `required` issue.
    Required,
    /// Absent or `null` skips the field's rule.
    Optional,
}

/// What to do with members the object does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownFields {
    /// Leave them alone.
    #[default]
    Ignore,
    /// Record an `unknown_field` issue for each.
    Reject,
}

struct Field {
    name: String,
    presence: Presence,
    rule: BoxedRule,
}

/// Rule for JSON objects with declared fields.
///
/// Declared fields are checked in declaration order, then undeclared members
/// are handled per [`UnknownFields`].
#[derive(Default)]
pub struct Object {
    fields: Vec<Field>,
    unknown: UnknownFields,
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field(
                "fields",
                &self
                    .fields
                    .iter()
                    .map(|field| (&field.name, field.presence))
                    .collect::<Vec<_>>(),
            )
            .field("unknown", &self.unknown)
            .finish()
    }
}

impl Object {
    /// An object with no declared fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// # Panics
    ///
    /// Panics if a field with the same name was already declared.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        presence: Presence,
        rule: impl Rule + 'static,
    ) -> Self {
        let name = name.into();
        assert!(
            !self.declares(&name),
            "field {name:?} is declared more than once"
        );
        self.fields.push(Field {
            name,
            presence,
            rule: Box::new(rule),
        });
        self
    }

    /// Declares a required field.
    #[must_use]
    pub fn required(self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.field(name, Presence::Required, rule)
    }

    /// Declares an optional field.
    #[must_use]
    pub fn optional(self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.field(name, Presence::Optional, rule)
    }

    /// Sets the policy for undeclared members.
    #[must_use]
    pub fn unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.unknown = policy;
        self
    }

    /// Shorthand for `unknown_fields(UnknownFields::Reject)`.
    #[must_use]
    pub fn deny_unknown_fields(self) -> Self {
        self.unknown_fields(UnknownFields::Reject)
    }

    /// Returns true if `name` is a declared field.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl Rule for Object {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let Some(members) = value.as_object() else {
            record_invalid_type("an object", value, path, sink);
            return;
        };

        for field in &self.fields {
            let field_path = path.key(field.name.as_str());
            match members.get(&field.name) {
                None | Some(Value::Null) => {
                    if field.presence == Presence::Required {
                        sink.push(Issue::required(field_path));
                    }
                }
                Some(member) => field.rule.check(member, &field_path, sink),
            }
        }

        if self.unknown == UnknownFields::Reject {
            for name in members.keys().filter(|name| !self.declares(name)) {
                sink.record(
                    codes::UNKNOWN_FIELD,
                    format!("unknown field {name:?}"),
                    &path.key(name.as_str()),
                );
            }
        }
    }
}

/// Creates an empty [`Object`] rule.
#[must_use]
pub fn object() -> Object {
    Object::new()
}
