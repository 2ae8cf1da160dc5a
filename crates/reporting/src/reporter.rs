//! Validate-then-submit orchestration
//!
//! [`Reporter::submit`] runs one input through
//!
//! ```text
//! Validating ─┬─> Rejected
//!             └─> Submitting ─┬─> Accepted
//!                             └─> Failed
//! ```
//!
//! Validation is synchronous and completes before the only await point, the
//! collaborator call. Dropping the returned future cancels that call and
//! nothing else.

use std::fmt;

use nuisance_validator::{Error, IssueSink, Validator};
use tracing::{Instrument, Span, field};

use crate::config::{ConfigError, ReporterConfig};
use crate::model::{CreateNuisanceFamily, CreateNuisanceReport, CreateNuisanceType};
use crate::schema;
use crate::submit::{SubmissionError, Submitter};

/// Where a submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Running the validator.
    Validating,
    /// Validation found issues; terminal.
    Rejected,
    /// Waiting on the collaborator.
    Submitting,
    /// The collaborator stored the input; terminal.
    Accepted,
    /// The collaborator failed or timed out; terminal.
    Failed,
}

impl Stage {
    /// Returns true for stages with no successor.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Accepted | Self::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validating => write!(f, "validating"),
            Stage::Rejected => write!(f, "rejected"),
            Stage::Submitting => write!(f, "submitting"),
            Stage::Accepted => write!(f, "accepted"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

/// Validates inputs and hands valid ones to a [`Submitter`].
///
/// Holds only immutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Reporter<S> {
    validator: Validator,
    submitter: S,
    config: ReporterConfig,
}

impl<S: Submitter> Reporter<S> {
    /// Creates a reporter with the default configuration.
    pub fn new(validator: Validator, submitter: S) -> Self {
        Self {
            validator,
            submitter,
            config: ReporterConfig::default(),
        }
    }

    /// Creates a reporter with `config`.
    pub fn with_config(
        validator: Validator,
        submitter: S,
        config: ReporterConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            validator,
            submitter,
            config,
        })
    }

    /// The rule tree this reporter validates against.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// The collaborator.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Active configuration.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Validates `input` without submitting it.
    #[must_use = "the sink holds the validation outcome"]
    pub fn validate(&self, input: &S::Input) -> IssueSink {
        self.validator.validate_serialize(input)
    }

    /// Validates `input` and, if it is valid, submits it exactly once.
    ///
    /// Returns `validation_failed` with every issue found when validation
    /// fails; the collaborator is not called. Returns `submission_failed`
    /// with the collaborator's message, and no issues, when the collaborator
    /// fails or the configured timeout elapses.
    pub async fn submit(&self, input: S::Input) -> Result<S::Output, Error> {
        let span = tracing::info_span!(
            "report",
            submitter = self.submitter.name(),
            stage = field::Empty
        );
        self.run(input).instrument(span).await
    }

    async fn run(&self, input: S::Input) -> Result<S::Output, Error> {
        enter(Stage::Validating);
        if let Some(error) = self.validate(&input).into_error() {
            enter(Stage::Rejected);
            tracing::info!(issues = error.issues.len(), "input rejected");
            return Err(error);
        }

        enter(Stage::Submitting);
        match self.call_submitter(input).await {
            Ok(output) => {
                enter(Stage::Accepted);
                Ok(output)
            }
            Err(e) => {
                enter(Stage::Failed);
                tracing::warn!(error = %e, timeout = e.is_timeout(), "submission failed");
                Err(Error::submission_failed(e.to_string()))
            }
        }
    }

    async fn call_submitter(&self, input: S::Input) -> Result<S::Output, SubmissionError> {
        let submission = self.submitter.submit(input);
        match self.config.submit_timeout() {
            Some(limit) => tokio::time::timeout(limit, submission)
                .await
                .unwrap_or(Err(SubmissionError::TimedOut(limit))),
            None => submission.await,
        }
    }
}

fn enter(stage: Stage) {
    Span::current().record("stage", field::display(stage));
    tracing::debug!(%stage, "stage transition");
}

impl<S: Submitter<Input = CreateNuisanceReport>> Reporter<S> {
    /// Reporter for nuisance reports, validated by [`schema::report_schema`].
    pub fn for_reports(submitter: S) -> Self {
        Self::new(schema::report_validator(), submitter)
    }
}

impl<S: Submitter<Input = CreateNuisanceFamily>> Reporter<S> {
    /// Reporter for nuisance families, validated by [`schema::family_schema`].
    pub fn for_families(submitter: S) -> Self {
        Self::new(schema::family_validator(), submitter)
    }
}

impl<S: Submitter<Input = CreateNuisanceType>> Reporter<S> {
    /// Reporter for nuisance types, validated by [`schema::type_schema`].
    pub fn for_types(submitter: S) -> Self {
        Self::new(schema::type_validator(), submitter)
    }
}
