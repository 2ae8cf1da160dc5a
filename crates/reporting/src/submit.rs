//! Submission collaborator
//!
//! A [`Submitter`] is whatever persists a validated input: a database
//! repository, an HTTP client, a queue producer. The reporter calls it at
//! most once per input and only after validation passed.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

/// Error returned by a [`Submitter`].
///
/// Its display text becomes the message of the `submission_failed` error
/// returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The collaborator refused or failed to store the input.
    #[error("{0}")]
    Failed(String),

    /// The collaborator did not answer within the configured timeout.
    #[error("submission timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),

    /// Any other collaborator failure.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SubmissionError {
    /// Creates a [`SubmissionError::Failed`] with `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wraps an arbitrary error.
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(error))
    }

    /// Returns true if this is a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }
}

/// Persists validated inputs.
///
/// # Examples
///
/// ```rust
/// use std::future::Future;
/// use nuisance_reporting::{SubmissionError, Submitter};
///
/// struct Echo;
///
/// impl Submitter for Echo {
///     type Input = String;
///     type Output = String;
///
///     fn submit(&self, input: String)
///         -> impl Future<Output = Result<String, SubmissionError>> + Send
///     {
///         async move { Ok(input) }
///     }
/// }
/// ```
pub trait Submitter: Send + Sync {
    /// What gets validated and submitted.
    type Input: Serialize + Send;

    /// What the collaborator hands back on success.
    type Output: Send;

    /// Stores `input`.
    fn submit(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::Output, SubmissionError>> + Send;

    /// Name used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T: Submitter + ?Sized> Submitter for &T {
    type Input = T::Input;
    type Output = T::Output;

    fn submit(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::Output, SubmissionError>> + Send {
        (**self).submit(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Submitter + ?Sized> Submitter for std::sync::Arc<T> {
    type Input = T::Input;
    type Output = T::Output;

    fn submit(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::Output, SubmissionError>> + Send {
        (**self).submit(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
