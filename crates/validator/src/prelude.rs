//! Prelude module for convenient imports.
//!
//! Provides a single `use nuisance_validator::prelude::*;` import that brings
//! in the engine types, the rule traits and every built-in rule factory.
//!
//! # Examples
//!
//! ```
//! use nuisance_validator::prelude::*;
//!
//! let validator = Validator::new(
//!     object()
//!         .required("title", non_empty())
//!         .optional("tags", each(text().max_length(32)).max_items(5)),
//! );
//! assert!(validator.validate(&serde_json::json!({ "title": "Barking dog" })).is_empty());
//! ```

// ============================================================================
// ENGINE: paths, issues, sinks, errors
// ============================================================================

pub use crate::error::Error;
pub use crate::issue::{Issue, codes};
pub use crate::outcome::Outcome;
pub use crate::path::{FieldPath, PathSegment};
pub use crate::sink::IssueSink;
pub use crate::validator::Validator;

// ============================================================================
// RULES: trait, combinators, built-ins
// ============================================================================

pub use crate::rule::{BoxedRule, FnRule, Rule, RuleExt, WithMessage, rule_fn};
pub use crate::rules::{
    Presence, UnknownFields, any, boolean, each, email, geo_point, integer, non_empty, number,
    object, one_of, pattern, text, uuid,
};
