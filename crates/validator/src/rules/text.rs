//! String rules
//!
//! Length is measured in Unicode scalar values (chars) by default. Use
//! [`Text::bytes`] for byte-length counting.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde_json::Value;

use super::record_invalid_type;
use crate::issue::codes;
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// TEXT
// ============================================================================

/// String rule with optional length bounds and forbidden characters.
///
/// Each failed constraint records its own issue, so `"<a"` against
/// `text().min_length(3).forbid_chars("<>")` yields both `too_short` and
/// `invalid_characters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    min: Option<usize>,
    max: Option<usize>,
    forbidden: Vec<char>,
    mode: LengthMode,
    trim: bool,
}

impl Text {
    /// Any string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts length in bytes instead of chars.
    #[must_use]
    pub fn bytes(mut self) -> Self {
        self.mode = LengthMode::Bytes;
        self
    }

    /// Ignores leading and trailing whitespace when measuring length.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Requires at least `min` characters.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds an already configured maximum.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        if let Some(max) = self.max {
            assert!(min <= max, "min_length {min} exceeds max_length {max}");
        }
        self.min = Some(min);
        self
    }

    /// Allows at most `max` characters.
    ///
    /// # Panics
    ///
    /// Panics if `max` is below an already configured minimum.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        if let Some(min) = self.min {
            assert!(min <= max, "max_length {max} is below min_length {min}");
        }
        self.max = Some(max);
        self
    }

    /// Rejects strings containing any of `chars`.
    #[must_use]
    pub fn forbid_chars(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            if !self.forbidden.contains(&c) {
                self.forbidden.push(c);
            }
        }
        self
    }
}

impl Rule for Text {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let Some(input) = value.as_str() else {
            record_invalid_type("a string", value, path, sink);
            return;
        };

        let measured = if self.trim { input.trim() } else { input };
        let len = self.mode.measure(measured);

        if let Some(min) = self.min
            && len < min
        {
            let message = if min == 1 {
                Cow::Borrowed("must not be empty")
            } else {
                Cow::Owned(format!("must be at least {min} characters"))
            };
            sink.record(codes::TOO_SHORT, message, path);
        }

        if let Some(max) = self.max
            && len > max
        {
            sink.record(
                codes::TOO_LONG,
                format!("must be at most {max} characters"),
                path,
            );
        }

        let mut found: Vec<char> = Vec::new();
        for c in input.chars() {
            if self.forbidden.contains(&c) && !found.contains(&c) {
                found.push(c);
            }
        }
        if !found.is_empty() {
            let listed: Vec<String> = found.iter().map(|c| format!("'{c}'")).collect();
            sink.record(
                codes::INVALID_CHARACTERS,
                format!("contains forbidden characters: {}", listed.join(", ")),
                path,
            );
        }
    }
}

/// Creates a [`Text`] rule accepting any string.
#[must_use]
pub fn text() -> Text {
    Text::new()
}

/// A string with at least one character.
#[must_use]
pub fn non_empty() -> Text {
    Text::new().min_length(1)
}

// ============================================================================
// PATTERN
// ============================================================================

/// String must match a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: regex::Regex,
}

impl Pattern {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: regex::Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Rule for Pattern {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        match value.as_str() {
            Some(input) if self.regex.is_match(input) => {}
            Some(_) => sink.record(
                codes::INVALID_FORMAT,
                format!("must match pattern {}", self.regex.as_str()),
                path,
            ),
            None => record_invalid_type("a string", value, path, sink),
        }
    }
}

/// Creates a [`Pattern`] rule.
///
/// # Panics
///
/// Panics if `regex` does not compile. Use [`Pattern::new`] for patterns
/// that are not compile-time constants.
#[must_use]
pub fn pattern(regex: &str) -> Pattern {
    match Pattern::new(regex) {
        Ok(rule) => rule,
        Err(e) => panic!("invalid pattern rule {regex:?}: {e}"),
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// String must be an email address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Email;

impl Rule for Email {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        match value.as_str() {
            Some(input) if EMAIL_REGEX.is_match(input) => {}
            Some(_) => sink.record(codes::INVALID_EMAIL, "must be a valid email address", path),
            None => record_invalid_type("a string", value, path, sink),
        }
    }
}

/// Creates an [`Email`] rule.
#[must_use]
pub fn email() -> Email {
    Email
}

// ============================================================================
// UUID
// ============================================================================

/// String must be a UUID in any of the textual forms `uuid` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uuid;

impl Rule for Uuid {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        match value.as_str() {
            Some(input) if uuid::Uuid::parse_str(input).is_ok() => {}
            Some(_) => sink.record(codes::INVALID_FORMAT, "must be a UUID", path),
            None => record_invalid_type("a string", value, path, sink),
        }
    }
}

/// Creates a [`Uuid`] rule.
#[must_use]
pub fn uuid() -> Uuid {
    Uuid
}

// ============================================================================
// ONE OF
// ============================================================================

/// String must be one of a fixed set of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    choices: Vec<String>,
}

impl Rule for OneOf {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        match value.as_str() {
            Some(input) if self.choices.iter().any(|c| c == input) => {}
            Some(_) => sink.record(
                codes::NOT_ALLOWED,
                format!("must be one of: {}", self.choices.join(", ")),
                path,
            ),
            None => record_invalid_type("a string", value, path, sink),
        }
    }
}

/// Creates a [`OneOf`] rule.
///
/// # Panics
///
/// Panics if `choices` is empty.
pub fn one_of<I, S>(choices: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
    assert!(!choices.is_empty(), "one_of requires at least one choice");
    OneOf { choices }
}
