//! Reports two nuisances against an in-memory store, one invalid.
//!
//! ```sh
//! NUISANCE_LOG=debug cargo run -p nuisance-reporting --example report_nuisance
//! ```

use std::future::Future;

use chrono::Utc;
use nuisance_reporting::model::{
    CreateNuisanceReport, GeoPoint, NuisanceFamily, NuisanceReport, NuisanceTypeSummary,
};
use nuisance_reporting::{
    Outcome, Reporter, ReporterConfig, SubmissionError, Submitter, report_nuisance, schema,
};
use uuid::Uuid;

struct MemoryStore {
    kind: NuisanceTypeSummary,
}

impl Submitter for MemoryStore {
    type Input = CreateNuisanceReport;
    type Output = NuisanceReport;

    fn submit(
        &self,
        input: CreateNuisanceReport,
    ) -> impl Future<Output = Result<NuisanceReport, SubmissionError>> + Send {
        async move {
            let (Some(location), Some(intensity)) = (input.location, input.intensity) else {
                return Err(SubmissionError::failed("incomplete report"));
            };
            Ok(NuisanceReport {
                id: Uuid::new_v4(),
                nuisance_type: self.kind.clone(),
                user: None,
                location,
                intensity,
                created_at: Utc::now(),
            })
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = nuisance_log::init_from_env()?;

    let kind = NuisanceTypeSummary {
        id: Uuid::new_v4(),
        label: "Klaxon".to_string(),
        description: String::new(),
        family: NuisanceFamily {
            id: Uuid::new_v4(),
            label: "Bruit".to_string(),
            description: "Nuisances sonores".to_string(),
        },
    };
    let type_id = kind.id;

    let reporter = Reporter::with_config(
        schema::report_validator(),
        MemoryStore { kind },
        ReporterConfig::from_env()?,
    )?;

    let inputs = [
        CreateNuisanceReport {
            type_id: Some(type_id),
            user_id: None,
            location: Some(GeoPoint::new(4.83, 45.76)),
            intensity: Some(4),
        },
        CreateNuisanceReport {
            type_id: None,
            user_id: None,
            location: Some(GeoPoint::new(4.83, 95.0)),
            intensity: Some(7),
        },
    ];

    for input in inputs {
        let outcome: Outcome<NuisanceReport> = report_nuisance(&reporter, input).await.into();
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
