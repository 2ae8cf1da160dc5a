//! Integration tests for nuisance-validator.

mod properties;
mod scenarios;
