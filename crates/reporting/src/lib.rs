//! # nuisance-reporting
//!
//! Validates nuisance reports (and the families and types they refer to)
//! against a static rule tree, then hands valid ones to a storage
//! collaborator.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::future::Future;
//! use nuisance_reporting::model::{CreateNuisanceReport, NuisanceReport};
//! use nuisance_reporting::{Reporter, SubmissionError, Submitter, report_nuisance};
//!
//! struct Offline;
//!
//! impl Submitter for Offline {
//!     type Input = CreateNuisanceReport;
//!     type Output = NuisanceReport;
//!
//!     fn submit(&self, _input: CreateNuisanceReport)
//!         -> impl Future<Output = Result<NuisanceReport, SubmissionError>> + Send
//!     {
//!         async { Err(SubmissionError::failed("storage offline")) }
//!     }
//! }
//!
//! # tokio_test_block(async {
//! let reporter = Reporter::for_reports(Offline);
//! let error = report_nuisance(&reporter, CreateNuisanceReport::default())
//!     .await
//!     .unwrap_err();
//!
//! // Nothing was submitted: the missing fields were caught first.
//! assert_eq!(error.code, "validation_failed");
//! assert_eq!(error.issues.len(), 3);
//! # });
//! # fn tokio_test_block(f: impl Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod model;
pub mod reporter;
pub mod schema;
pub mod submit;

pub use config::{ConfigError, ReporterConfig};
pub use nuisance_validator::{Error, Outcome};
pub use reporter::{Reporter, Stage};
pub use submit::{SubmissionError, Submitter};

use model::{
    CreateNuisanceFamily, CreateNuisanceReport, CreateNuisanceType, NuisanceFamily,
    NuisanceReport, NuisanceType,
};

/// Validates `input` and, when valid, stores it through the reporter's
/// collaborator.
///
/// Every problem with the input is returned at once as a
/// `validation_failed` error; a failing collaborator yields
/// `submission_failed`.
pub async fn report_nuisance<S>(
    reporter: &Reporter<S>,
    input: CreateNuisanceReport,
) -> Result<NuisanceReport, Error>
where
    S: Submitter<Input = CreateNuisanceReport, Output = NuisanceReport>,
{
    reporter.submit(input).await
}

/// Validates and stores a new nuisance family.
pub async fn create_nuisance_family<S>(
    reporter: &Reporter<S>,
    input: CreateNuisanceFamily,
) -> Result<NuisanceFamily, Error>
where
    S: Submitter<Input = CreateNuisanceFamily, Output = NuisanceFamily>,
{
    reporter.submit(input).await
}

/// Validates and stores a new nuisance type.
pub async fn create_nuisance_type<S>(
    reporter: &Reporter<S>,
    input: CreateNuisanceType,
) -> Result<NuisanceType, Error>
where
    S: Submitter<Input = CreateNuisanceType, Output = NuisanceType>,
{
    reporter.submit(input).await
}
