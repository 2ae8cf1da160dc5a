//! # nuisance-validator
//!
//! Path-qualified, issue-accumulating validation for nuisance report inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use nuisance_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(
//!     object()
//!         .required("title", non_empty())
//!         .required("location", any()),
//! );
//!
//! let error = validator
//!     .check(&json!({ "title": "", "location": null }))
//!     .unwrap_err();
//!
//! assert_eq!(error.code, "validation_failed");
//! assert_eq!(error.issues[0].path.to_strings(), ["title"]);
//! assert_eq!(error.issues[1].code, "required");
//! ```
//!
//! ## Building blocks
//!
//! - [`FieldPath`](path::FieldPath) locates a value inside nested input.
//! - [`Issue`](issue::Issue) is one failure: code, message, path.
//! - [`IssueSink`](sink::IssueSink) collects issues without short-circuiting.
//! - [`Rule`](rule::Rule) checks one value; [`rules`] holds the built-ins.
//! - [`Validator`](validator::Validator) walks an input with a rule tree.
//! - [`Error`](error::Error) and [`Outcome`](outcome::Outcome) carry the
//!   result to callers and across the wire.

pub mod error;
pub mod issue;
pub mod outcome;
pub mod path;
pub mod prelude;
pub mod rule;
pub mod rules;
pub mod sink;
pub mod validator;

pub use error::Error;
pub use issue::Issue;
pub use outcome::Outcome;
pub use path::FieldPath;
pub use sink::IssueSink;
pub use validator::Validator;
