//! Fake collaborators shared by the integration tests.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use nuisance_reporting::model::{
    CreateNuisanceFamily, CreateNuisanceReport, CreateNuisanceType, NuisanceFamily,
    NuisanceReport, NuisanceType, NuisanceTypeSummary,
};
use nuisance_reporting::{SubmissionError, Submitter};
use serde::Serialize;
use uuid::Uuid;

/// Records every input and answers with a fixed result.
pub struct Scripted<I, O> {
    pub answer: Result<O, String>,
    pub delay: Option<Duration>,
    pub seen: Mutex<Vec<I>>,
    pub completed: AtomicUsize,
}

impl<I, O> Scripted<I, O> {
    pub fn ok(output: O) -> Self {
        Self {
            answer: Ok(output),
            delay: None,
            seen: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            delay: None,
            seen: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl<I, O> Submitter for Scripted<I, O>
where
    I: Serialize + Send + Sync,
    O: Clone + Send + Sync,
{
    type Input = I;
    type Output = O;

    fn submit(&self, input: I) -> impl Future<Output = Result<O, SubmissionError>> + Send {
        self.seen.lock().unwrap().push(input);
        async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.completed.fetch_add(1, Ordering::SeqCst);
            self.answer.clone().map_err(SubmissionError::Failed)
        }
    }
}

/// In-memory catalogue that resolves type ids into full reports.
pub struct Catalogue {
    pub family: NuisanceFamily,
    pub kind: NuisanceType,
}

impl Catalogue {
    pub fn noise() -> Self {
        let family = NuisanceFamily {
            id: Uuid::new_v4(),
            label: "Bruit".to_string(),
            description: "Nuisances sonores".to_string(),
        };
        let kind = NuisanceType {
            id: Uuid::new_v4(),
            label: "Klaxon".to_string(),
            description: String::new(),
            family_id: family.id,
        };
        Self { family, kind }
    }
}

impl Submitter for Catalogue {
    type Input = CreateNuisanceReport;
    type Output = NuisanceReport;

    fn submit(
        &self,
        input: CreateNuisanceReport,
    ) -> impl Future<Output = Result<NuisanceReport, SubmissionError>> + Send {
        async move {
            if input.type_id != Some(self.kind.id) {
                return Err(SubmissionError::failed("unknown nuisance type"));
            }
            let (Some(location), Some(intensity)) = (input.location, input.intensity) else {
                return Err(SubmissionError::failed("incomplete report"));
            };
            Ok(NuisanceReport {
                id: Uuid::new_v4(),
                nuisance_type: NuisanceTypeSummary {
                    id: self.kind.id,
                    label: self.kind.label.clone(),
                    description: self.kind.description.clone(),
                    family: self.family.clone(),
                },
                user: None,
                location,
                intensity,
                created_at: Utc::now(),
            })
        }
    }
}

/// Stores families by echoing them back with a fresh id.
pub struct FamilyStore;

impl Submitter for FamilyStore {
    type Input = CreateNuisanceFamily;
    type Output = NuisanceFamily;

    fn submit(
        &self,
        input: CreateNuisanceFamily,
    ) -> impl Future<Output = Result<NuisanceFamily, SubmissionError>> + Send {
        async move {
            Ok(NuisanceFamily {
                id: Uuid::new_v4(),
                label: input.label,
                description: input.description.unwrap_or_default(),
            })
        }
    }
}

/// Stores types by echoing them back with a fresh id.
pub struct TypeStore;

impl Submitter for TypeStore {
    type Input = CreateNuisanceType;
    type Output = NuisanceType;

    fn submit(
        &self,
        input: CreateNuisanceType,
    ) -> impl Future<Output = Result<NuisanceType, SubmissionError>> + Send {
        async move {
            let family_id = input
                .family_id
                .ok_or_else(|| SubmissionError::failed("missing family"))?;
            Ok(NuisanceType {
                id: Uuid::new_v4(),
                label: input.label,
                description: input.description.unwrap_or_default(),
                family_id,
            })
        }
    }
}
