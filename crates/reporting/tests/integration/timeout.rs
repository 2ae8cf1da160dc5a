//! Submit timeout and cancellation, on paused time.

use std::time::Duration;

use nuisance_reporting::{Reporter, ReporterConfig};
use nuisance_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::support::Scripted;

fn reporter(delay: Duration, config: ReporterConfig) -> Reporter<Scripted<Value, u32>> {
    Reporter::with_config(
        Validator::new(object().required("title", non_empty())),
        Scripted::ok(7).slow(delay),
        config,
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn slow_collaborator_times_out() {
    let config = ReporterConfig::default().with_submit_timeout(Duration::from_secs(5));
    let reporter = reporter(Duration::from_secs(60), config);

    let error = reporter.submit(json!({ "title": "late" })).await.unwrap_err();

    assert_eq!(error.code, "submission_failed");
    assert_eq!(error.message, "submission timed out after 5000ms");
    assert!(error.issues.is_empty());
    assert_eq!(reporter.submitter().calls(), 1);
    assert_eq!(reporter.submitter().completed(), 0);
}

#[tokio::test(start_paused = true)]
async fn collaborator_within_the_limit_succeeds() {
    let config = ReporterConfig::default().with_submit_timeout(Duration::from_secs(5));
    let reporter = reporter(Duration::from_secs(1), config);

    assert_eq!(reporter.submit(json!({ "title": "on time" })).await, Ok(7));
}

#[tokio::test(start_paused = true)]
async fn no_timeout_waits_for_the_collaborator() {
    let reporter = reporter(
        Duration::from_secs(3600),
        ReporterConfig::default().without_submit_timeout(),
    );

    assert_eq!(reporter.submit(json!({ "title": "patient" })).await, Ok(7));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_call_cancels_the_submission() {
    let reporter = reporter(
        Duration::from_secs(30),
        ReporterConfig::default().without_submit_timeout(),
    );

    let abandoned =
        tokio::time::timeout(Duration::from_secs(1), reporter.submit(json!({ "title": "x" }))).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(reporter.submitter().calls(), 1);
    assert_eq!(reporter.submitter().completed(), 0);
}
