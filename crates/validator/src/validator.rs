//! Schema walker
//!
//! A [`Validator`] owns a rule tree (usually an [`object`](crate::rules::object))
//! built once at configuration time and runs it against inputs. It never
//! stops early: every applicable rule runs, and the returned sink holds
//! everything that went wrong.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::issue::codes;
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

/// Runs a statically configured rule tree against inputs.
///
/// Cloning is cheap; clones share the rule tree.
#[derive(Clone)]
pub struct Validator {
    root: Arc<dyn Rule>,
}

impl Validator {
    /// Creates a validator around `root`.
    pub fn new(root: impl Rule + 'static) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Validates `input` starting at the root path.
    #[must_use = "the sink holds the validation outcome"]
    pub fn validate(&self, input: &Value) -> IssueSink {
        let mut sink = IssueSink::new();
        self.root.check(input, &FieldPath::root(), &mut sink);
        sink
    }

    /// Encodes `input` as JSON and validates it.
    ///
    /// An input that cannot be encoded is reported as a single
    /// `invalid_type` issue at the root.
    #[must_use = "the sink holds the validation outcome"]
    pub fn validate_serialize<T: Serialize + ?Sized>(&self, input: &T) -> IssueSink {
        match serde_json::to_value(input) {
            Ok(value) => self.validate(&value),
            Err(e) => {
                let mut sink = IssueSink::new();
                sink.record(
                    codes::INVALID_TYPE,
                    format!("input cannot be encoded: {e}"),
                    &FieldPath::root(),
                );
                sink
            }
        }
    }

    /// Validates `input` and aggregates any issues into an [`Error`].
    pub fn check(&self, input: &Value) -> Result<(), Error> {
        self.validate(input).into_result()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("root", &self.root.name())
            .finish()
    }
}
