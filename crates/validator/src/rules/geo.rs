//! GeoJSON point rule
//!
//! Accepts `{"type": "Point", "coordinates": [longitude, latitude]}` with an
//! optional third altitude coordinate. Problems are reported at the member
//! that carries them (`location.type`, `location.coordinates[1]`, ...).

use serde_json::Value;

use super::record_invalid_type;
use crate::issue::{Issue, codes};
use crate::path::FieldPath;
use crate::rule::Rule;
use crate::sink::IssueSink;

const LONGITUDE: (f64, f64) = (-180.0, 180.0);
const LATITUDE: (f64, f64) = (-90.0, 90.0);

/// Value must be a GeoJSON `Point` with in-bounds WGS84 coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoPoint;

impl Rule for GeoPoint {
    fn check(&self, value: &Value, path: &FieldPath, sink: &mut IssueSink) {
        let Some(geometry) = value.as_object() else {
            record_invalid_type("a GeoJSON object", value, path, sink);
            return;
        };

        let type_path = path.key("type");
        match geometry.get("type") {
            None | Some(Value::Null) => sink.push(Issue::required(type_path)),
            Some(Value::String(kind)) if kind == "Point" => {}
            Some(Value::String(kind)) => sink.record(
                codes::INVALID_GEOMETRY,
                format!("expected a Point geometry, got {kind}"),
                &type_path,
            ),
            Some(other) => record_invalid_type("a string", other, &type_path, sink),
        }

        let coordinates_path = path.key("coordinates");
        let coordinates = match geometry.get("coordinates") {
            None | Some(Value::Null) => {
                sink.push(Issue::required(coordinates_path));
                return;
            }
            Some(Value::Array(coordinates)) => coordinates,
            Some(other) => {
                record_invalid_type("an array", other, &coordinates_path, sink);
                return;
            }
        };

        if !(2..=3).contains(&coordinates.len()) {
            sink.record(
                codes::INVALID_GEOMETRY,
                format!(
                    "a point needs 2 or 3 coordinates, got {}",
                    coordinates.len()
                ),
                &coordinates_path,
            );
            return;
        }

        for (index, coordinate) in coordinates.iter().enumerate() {
            let coordinate_path = coordinates_path.index(index);
            let Some(n) = coordinate.as_f64() else {
                record_invalid_type("a number", coordinate, &coordinate_path, sink);
                continue;
            };

            let bounds = match index {
                0 => Some(("longitude", LONGITUDE)),
                1 => Some(("latitude", LATITUDE)),
                _ => None,
            };
            if let Some((axis, (min, max))) = bounds
                && !(min..=max).contains(&n)
            {
                sink.record(
                    codes::OUT_OF_RANGE,
                    format!("{axis} must be between {min} and {max}"),
                    &coordinate_path,
                );
            }
        }
    }
}

/// Creates a [`GeoPoint`] rule.
#[must_use]
pub fn geo_point() -> GeoPoint {
    GeoPoint
}
