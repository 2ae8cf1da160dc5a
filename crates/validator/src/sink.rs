//! Issue accumulation

use std::borrow::Cow;

use crate::error::Error;
use crate::issue::Issue;
use crate::path::FieldPath;

/// Collects issues during one validation pass.
///
/// Recording never short-circuits the pass. Issues keep the order in which
/// rules recorded them and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSink {
    issues: Vec<Issue>,
}

impl IssueSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Appends one issue built from its parts.
    pub fn record(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        path: &FieldPath,
    ) {
        self.issues.push(Issue::new(code, message, path.clone()));
    }

    /// Appends a pre-built issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Recorded issues, in recording order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Takes every recorded issue and leaves the sink empty.
    pub fn drain(&mut self) -> Vec<Issue> {
        std::mem::take(&mut self.issues)
    }

    /// Moves every issue of `other` to the end of this sink.
    pub fn append(&mut self, other: &mut IssueSink) {
        self.issues.append(&mut other.issues);
    }

    /// Builds the `validation_failed` error, or `None` when nothing was recorded.
    #[must_use]
    pub fn into_error(mut self) -> Option<Error> {
        if self.is_empty() {
            None
        } else {
            Some(Error::validation_failed(self.drain()))
        }
    }

    /// `Ok(())` when empty, the aggregated error otherwise.
    pub fn into_result(self) -> Result<(), Error> {
        self.into_error().map_or(Ok(()), Err)
    }
}

impl Extend<Issue> for IssueSink {
    fn extend<I: IntoIterator<Item = Issue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl IntoIterator for IssueSink {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
