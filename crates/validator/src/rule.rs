//! The rule trait
//!
//! A [`Rule`] inspects one value at one path and records every violation it
//! finds into an [`IssueSink`]. Rules never fail fast and never panic on bad
//! input; a panic means the rule itself was built wrong.
//!
//! # Examples
//!
//! ```
//! use nuisance_validator::prelude::*;
//! use serde_json::json;
//!
//! let title = text().min_length(3).with_message("title is too short");
//!
//! let mut sink = IssueSink::new();
//! title.check(&json!("ab"), &FieldPath::root().key("title"), &mut sink);
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.issues()[0].message, "title is too short");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::path::FieldPath;
use crate::sink::IssueSink;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A unit of validation logic applied to a value at a path.
///
/// Implementations call [`IssueSink::record`] once per violation, at `path`
/// or at a path derived from it with [`FieldPath::push`]. A single call may
/// record several issues.
pub trait Rule: Send + Sync {
    /// Inspects `value` and records violations.
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink);

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        (**self).check(value, path, sink);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        (**self).check(value, path, sink);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        (**self).check(value, path, sink);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A type-erased, shareable rule.
pub type BoxedRule = Box<dyn Rule>;

/// Every rule in a group runs, in order, against the same value.
impl Rule for Vec<BoxedRule> {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        for rule in self {
            rule.check(value, path, sink);
        }
    }
}

// ============================================================================
// CLOSURE RULES
// ============================================================================

/// Rule backed by a closure.
pub struct FnRule<F> {
    name: &'static str,
    check_fn: F,
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Value, &FieldPath, &mut IssueSink) + Send + Sync,
{
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        (self.check_fn)(value, path, sink);
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Creates a rule from a closure.
///
/// # Examples
///
/// ```
/// use nuisance_validator::prelude::*;
/// use serde_json::json;
///
/// let even = rule_fn("even", |value, path, sink| {
///     if value.as_i64().is_some_and(|n| n % 2 != 0) {
///         sink.record("not_even", "must be even", path);
///     }
/// });
///
/// let mut sink = IssueSink::new();
/// even.check(&json!(3), &FieldPath::root(), &mut sink);
/// assert_eq!(sink.len(), 1);
/// ```
pub fn rule_fn<F>(name: &'static str, check_fn: F) -> FnRule<F>
where
    F: Fn(&Value, &FieldPath, &mut IssueSink) + Send + Sync,
{
    FnRule { name, check_fn }
}

// ============================================================================
// MESSAGE OVERRIDE
// ============================================================================

/// Rewrites the message and/or code of every issue its inner rule records.
///
/// Useful for localized or form-specific wording.
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Option<Cow<'static, str>>,
    code: Option<Cow<'static, str>>,
}

impl<R> WithMessage<R> {
    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Also replaces the issue code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(checked_code(code.into()));
        self
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let mut scratch = IssueSink::new();
        self.inner.check(value, path, &mut scratch);

        sink.extend(scratch.into_iter().map(|mut issue| {
            if let Some(message) = &self.message {
                issue.message = message.clone();
            }
            if let Some(code) = &self.code {
                issue.code = code.clone();
            }
            issue
        }));
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

fn checked_code(code: Cow<'static, str>) -> Cow<'static, str> {
    assert!(!code.is_empty(), "issue code must not be empty");
    code
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Rule`].
pub trait RuleExt: Rule + Sized {
    /// Replaces the message of every issue this rule records.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage {
            inner: self,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Replaces the code of every issue this rule records.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty.
    fn with_code(self, code: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage {
            inner: self,
            message: None,
            code: Some(checked_code(code.into())),
        }
    }

    /// Erases the rule type.
    fn boxed(self) -> BoxedRule
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<R: Rule> RuleExt for R {}
