//! Validate-then-submit behaviour of the generic reporter.

use nuisance_reporting::{Outcome, Reporter};
use nuisance_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::support::Scripted;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Stored {
    id: String,
    title: String,
}

fn stored() -> Stored {
    Stored {
        id: "abc123".to_string(),
        title: "Pothole".to_string(),
    }
}

fn title_and_location() -> Validator {
    Validator::new(
        object()
            .required("title", non_empty())
            .required("location", any()),
    )
}

#[tokio::test]
async fn valid_input_returns_the_collaborator_output() {
    let reporter = Reporter::new(title_and_location(), Scripted::<Value, Stored>::ok(stored()));

    let report = reporter
        .submit(json!({ "title": "Pothole", "location": "Main St" }))
        .await
        .unwrap();

    assert_eq!(report.id, "abc123");
    assert_eq!(reporter.submitter().calls(), 1);
    assert_eq!(
        reporter.submitter().seen.lock().unwrap()[0],
        json!({ "title": "Pothole", "location": "Main St" })
    );
}

#[tokio::test]
async fn collaborator_failure_becomes_submission_failed() {
    let reporter = Reporter::new(
        title_and_location(),
        Scripted::<Value, Stored>::failing("database unavailable"),
    );

    let error = reporter
        .submit(json!({ "title": "Pothole", "location": "Main St" }))
        .await
        .unwrap_err();

    assert_eq!(error.code, "submission_failed");
    assert_eq!(error.message, "database unavailable");
    assert!(error.issues.is_empty());
    assert_eq!(reporter.submitter().calls(), 1);
}

#[tokio::test]
async fn every_violation_is_reported_and_nothing_is_submitted() {
    let reporter = Reporter::new(
        Validator::new(
            object()
                .required("title", non_empty())
                .required("location", any())
                .optional("contact", object().required("email", email())),
        ),
        Scripted::<Value, Stored>::ok(stored()),
    );

    let error = reporter
        .submit(json!({ "title": "", "contact": { "email": "bad" } }))
        .await
        .unwrap_err();

    assert_eq!(error.code, "validation_failed");
    assert_eq!(error.message, "validation failed with 3 issues");
    let paths: Vec<_> = error.issues.iter().map(|i| i.path.to_strings()).collect();
    assert_eq!(
        paths,
        [vec!["title"], vec!["location"], vec!["contact", "email"]]
    );
    assert_eq!(reporter.submitter().calls(), 0);
}

#[tokio::test]
async fn validate_does_not_submit() {
    let reporter = Reporter::new(title_and_location(), Scripted::<Value, Stored>::ok(stored()));
    let input = json!({ "title": "" });

    let first = reporter.validate(&input);
    let second = reporter.validate(&input);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(reporter.submitter().calls(), 0);
}

#[tokio::test]
async fn concurrent_calls_share_one_reporter() {
    let reporter = Reporter::new(title_and_location(), Scripted::<Value, Stored>::ok(stored()));

    let (a, b, c) = tokio::join!(
        reporter.submit(json!({ "title": "a", "location": 1 })),
        reporter.submit(json!({ "title": "", "location": 2 })),
        reporter.submit(json!({ "title": "c", "location": 3 })),
    );

    assert!(a.is_ok());
    assert!(b.unwrap_err().is_validation_failure());
    assert!(c.is_ok());
    assert_eq!(reporter.submitter().calls(), 2);
}

#[tokio::test]
async fn outcomes_are_tagged_on_the_wire() {
    let reporter = Reporter::new(
        title_and_location(),
        Scripted::<Value, Stored>::failing("database unavailable"),
    );

    let accepted: Outcome<Stored> = Ok(stored()).into();
    assert_eq!(
        serde_json::to_value(&accepted).unwrap(),
        json!({ "kind": "ok", "data": { "id": "abc123", "title": "Pothole" } })
    );

    let failed: Outcome<Stored> = reporter
        .submit(json!({ "title": "x", "location": "y" }))
        .await
        .into();
    assert_eq!(
        serde_json::to_string(&failed).unwrap(),
        r#"{"kind":"err","error":{"code":"submission_failed","message":"database unavailable","issues":[]}}"#
    );
}
