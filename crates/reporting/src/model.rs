//! Nuisance domain models
//!
//! `Create*` types are the raw inputs handed to a [`Reporter`](crate::Reporter);
//! their required members are `Option`s so that a missing value reaches the
//! schema and is reported as `required` instead of failing deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// GeoJSON geometry kind. Only points are modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// `"Point"`
    #[default]
    Point,
}

/// A GeoJSON `Point`: `{"type": "Point", "coordinates": [lon, lat]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Always [`GeometryKind::Point`].
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    /// Longitude, latitude and optional altitude.
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    /// Creates a two-dimensional point.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: GeometryKind::Point,
            coordinates: vec![longitude, latitude],
        }
    }

    /// First coordinate, if present.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    /// Second coordinate, if present.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }
}

/// Input for reporting a nuisance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateNuisanceReport {
    /// Kind of nuisance being reported.
    pub type_id: Option<Uuid>,
    /// Reporting user, absent for anonymous reports.
    pub user_id: Option<Uuid>,
    /// Where the nuisance was observed.
    pub location: Option<GeoPoint>,
    /// Perceived intensity, `1..=5`.
    pub intensity: Option<u8>,
}

/// Input for creating a nuisance family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateNuisanceFamily {
    /// Display label.
    pub label: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// Input for creating a nuisance type inside a family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateNuisanceType {
    /// Display label.
    pub label: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Owning family.
    pub family_id: Option<Uuid>,
}

/// A group of related nuisance types (noise, odour, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuisanceFamily {
    /// Identifier.
    pub id: Uuid,
    /// Display label.
    pub label: String,
    /// Description, empty when none was given.
    pub description: String,
}

/// A nuisance type as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuisanceType {
    /// Identifier.
    pub id: Uuid,
    /// Display label.
    pub label: String,
    /// Description, empty when none was given.
    pub description: String,
    /// Owning family.
    pub family_id: Uuid,
}

/// A nuisance type as embedded in a report, with its family resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuisanceTypeSummary {
    /// Identifier.
    pub id: Uuid,
    /// Display label.
    pub label: String,
    /// Description.
    pub description: String,
    /// Owning family.
    pub family: NuisanceFamily,
}

/// Public view of the user who filed a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUser {
    /// Identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Avatar URL.
    pub avatar: Option<String>,
}

/// A stored nuisance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuisanceReport {
    /// Identifier.
    pub id: Uuid,
    /// What was reported.
    #[serde(rename = "type")]
    pub nuisance_type: NuisanceTypeSummary,
    /// Who reported it, if not anonymous.
    pub user: Option<ReportUser>,
    /// Where it was observed.
    pub location: GeoPoint,
    /// Perceived intensity, `1..=5`.
    pub intensity: u8,
    /// When the report was stored.
    pub created_at: DateTime<Utc>,
}
