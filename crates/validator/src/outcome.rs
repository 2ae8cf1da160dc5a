//! Tagged success/error envelope
//!
//! In-process code works with `Result<D, Error>`. [`Outcome`] is the same
//! discriminated union with an explicit `kind` tag for the wire, so a success
//! payload can never be mistaken for an error that happens to share its
//! shape:
//!
//! ```text
//! { "kind": "ok",  "data":  { ... } }
//! { "kind": "err", "error": { "code": ..., "message": ..., "issues": [...] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Exactly one of a success payload or an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome<D, E = Error> {
    /// The operation succeeded.
    Ok {
        /// Success payload.
        data: D,
    },
    /// The operation failed.
    Err {
        /// Failure detail.
        error: E,
    },
}

impl<D, E> Outcome<D, E> {
    /// Success constructor.
    pub fn ok(data: D) -> Self {
        Self::Ok { data }
    }

    /// Failure constructor.
    pub fn err(error: E) -> Self {
        Self::Err { error }
    }

    /// Returns true for the success variant.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Returns true for the failure variant.
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }

    /// Borrows the payload, if this is a success.
    pub fn data(&self) -> Option<&D> {
        match self {
            Self::Ok { data } => Some(data),
            Self::Err { .. } => None,
        }
    }

    /// Borrows the error, if this is a failure.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { error } => Some(error),
        }
    }

    /// Takes the payload.
    ///
    /// # Panics
    ///
    /// Panics on the failure variant. Callers must branch on the
    /// discriminant first.
    #[track_caller]
    pub fn into_data(self) -> D {
        match self {
            Self::Ok { data } => data,
            Self::Err { .. } => panic!("called `Outcome::into_data` on an `Err` outcome"),
        }
    }

    /// Takes the error.
    ///
    /// # Panics
    ///
    /// Panics on the success variant.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Ok { .. } => panic!("called `Outcome::into_error` on an `Ok` outcome"),
            Self::Err { error } => error,
        }
    }

    /// Transforms the payload, leaving a failure untouched.
    pub fn map<T>(self, f: impl FnOnce(D) -> T) -> Outcome<T, E> {
        match self {
            Self::Ok { data } => Outcome::Ok { data: f(data) },
            Self::Err { error } => Outcome::Err { error },
        }
    }

    /// Transforms the error, leaving a success untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<D, F> {
        match self {
            Self::Ok { data } => Outcome::Ok { data },
            Self::Err { error } => Outcome::Err { error: f(error) },
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<D, E> {
        self.into()
    }
}

impl<D, E> From<Result<D, E>> for Outcome<D, E> {
    fn from(result: Result<D, E>) -> Self {
        match result {
            Ok(data) => Self::Ok { data },
            Err(error) => Self::Err { error },
        }
    }
}

impl<D, E> From<Outcome<D, E>> for Result<D, E> {
    fn from(outcome: Outcome<D, E>) -> Self {
        match outcome {
            Outcome::Ok { data } => Ok(data),
            Outcome::Err { error } => Err(error),
        }
    }
}
