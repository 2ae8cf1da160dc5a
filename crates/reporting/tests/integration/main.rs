//! Integration tests for nuisance-reporting.

mod entities;
mod lifecycle;
mod support;
mod timeout;
