//! EACH rule - validates every element of an array

use serde_json::Value;

use super::record_invalid_type;
use crate::issue::codes;
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

/// Validates each element of an array at `path.index(i)`.
///
/// Size bounds are checked first, at the array's own path; elements are
/// checked regardless of the size outcome.
#[derive(Debug, Clone)]
pub struct Each<R> {
    item: R,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl<R> Each<R> {
    /// Creates an EACH rule with no size bounds.
    pub fn new(item: R) -> Self {
        Self {
            item,
            min_items: None,
            max_items: None,
        }
    }

    /// Requires at least `min` elements.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds an already configured maximum.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(mut self, min: usize) -> Self {
        if let Some(max) = self.max_items {
            assert!(min <= max, "min_items {min} exceeds max_items {max}");
        }
        self.min_items = Some(min);
        self
    }

    /// Allows at most `max` elements.
    ///
    /// # Panics
    ///
    /// Panics if `max` is below an already configured minimum.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(mut self, max: usize) -> Self {
        if let Some(min) = self.min_items {
            assert!(min <= max, "max_items {max} is below min_items {min}");
        }
        self.max_items = Some(max);
        self
    }

    /// Returns a reference to the element rule.
    pub fn item(&self) -> &R {
        &self.item
    }
}

impl<R: Rule> Rule for Each<R> {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let Some(elements) = value.as_array() else {
            record_invalid_type("an array", value, path, sink);
            return;
        };

        if let Some(min) = self.min_items
            && elements.len() < min
        {
            sink.record(
                codes::TOO_SHORT,
                format!("must contain at least {min} items"),
                path,
            );
        }
        if let Some(max) = self.max_items
            && elements.len() > max
        {
            sink.record(
                codes::TOO_LONG,
                format!("must contain at most {max} items"),
                path,
            );
        }

        for (index, element) in elements.iter().enumerate() {
            self.item.check(element, &path.index(index), sink);
        }
    }
}

/// Creates an [`Each`] rule.
pub fn each<R: Rule>(item: R) -> Each<R> {
    Each::new(item)
}
