//! Numeric rules

use serde_json::Value;

use super::record_invalid_type;
use crate::issue::codes;
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

/// Numeric rule with optional inclusive bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Number {
    integer: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl Number {
    /// Requires the value to be at least `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds an already configured maximum.
    #[must_use]
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        let min = min.into();
        if let Some(max) = self.max {
            assert!(min <= max, "min {min} exceeds max {max}");
        }
        self.min = Some(min);
        self
    }

    /// Requires the value to be at most `max`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is below an already configured minimum.
    #[must_use]
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        let max = max.into();
        if let Some(min) = self.min {
            assert!(min <= max, "max {max} is below min {min}");
        }
        self.max = Some(max);
        self
    }

    /// Inclusive range; shorthand for `.min(min).max(max)`.
    #[must_use]
    pub fn range(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.min(min).max(max)
    }

    fn bounds_message(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => String::new(),
        }
    }
}

impl Rule for Number {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let Some(n) = value.as_f64() else {
            let expected = if self.integer { "an integer" } else { "a number" };
            record_invalid_type(expected, value, path, sink);
            return;
        };

        if self.integer && !is_integral(value) {
            record_invalid_type("an integer", value, path, sink);
            return;
        }

        let below = self.min.is_some_and(|min| n < min);
        let above = self.max.is_some_and(|max| n > max);
        if below || above {
            sink.record(codes::OUT_OF_RANGE, self.bounds_message(), path);
        }
    }
}

fn is_integral(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Any JSON number.
#[must_use]
pub fn number() -> Number {
    Number::default()
}

/// A JSON number without a fractional part.
#[must_use]
pub fn integer() -> Number {
    Number {
        integer: true,
        ..Number::default()
    }
}
