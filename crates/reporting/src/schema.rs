//! Reference schemas for the nuisance creation inputs
//!
//! Each schema is built once and wrapped in a [`Validator`]; rebuild only
//! when the rule tree itself changes.

use nuisance_validator::Validator;
use nuisance_validator::rules::{self, Object, geo_point, integer, non_empty, object, text};

/// Lowest accepted report intensity.
pub const MIN_INTENSITY: u8 = 1;

/// Highest accepted report intensity.
pub const MAX_INTENSITY: u8 = 5;

/// Longest accepted family label, in characters.
pub const MAX_LABEL_CHARS: usize = 128;

/// Rule tree for [`CreateNuisanceReport`](crate::model::CreateNuisanceReport).
#[must_use]
pub fn report_schema() -> Object {
    object()
        .required("intensity", integer().range(MIN_INTENSITY, MAX_INTENSITY))
        .required("type_id", rules::uuid())
        .required("location", geo_point())
        .optional("user_id", rules::uuid())
}

/// Rule tree for [`CreateNuisanceFamily`](crate::model::CreateNuisanceFamily).
#[must_use]
pub fn family_schema() -> Object {
    object()
        .required("label", non_empty().max_length(MAX_LABEL_CHARS))
        .optional("description", text())
}

/// Rule tree for [`CreateNuisanceType`](crate::model::CreateNuisanceType).
#[must_use]
pub fn type_schema() -> Object {
    object()
        .required("label", non_empty())
        .optional("description", text())
        .required("family_id", rules::uuid())
}

/// [`report_schema`] wrapped in a validator.
#[must_use]
pub fn report_validator() -> Validator {
    Validator::new(report_schema())
}

/// [`family_schema`] wrapped in a validator.
#[must_use]
pub fn family_validator() -> Validator {
    Validator::new(family_schema())
}

/// [`type_schema`] wrapped in a validator.
#[must_use]
pub fn type_validator() -> Validator {
    Validator::new(type_schema())
}
