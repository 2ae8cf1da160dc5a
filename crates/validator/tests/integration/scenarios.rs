//! End-to-end checks of the issue model against realistic schemas.

use nuisance_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn summary(sink: &IssueSink) -> Vec<(String, Vec<String>)> {
    sink.issues()
        .iter()
        .map(|i| (i.code.to_string(), i.path.to_strings()))
        .collect()
}

fn issue(code: &str, path: &[&str]) -> (String, Vec<String>) {
    (
        code.to_string(),
        path.iter().map(ToString::to_string).collect(),
    )
}

#[test]
fn empty_title_and_null_location() {
    let validator = Validator::new(
        object()
            .required("title", non_empty())
            .required("location", any()),
    );

    let error = validator
        .check(&json!({ "title": "", "location": null }))
        .unwrap_err();

    assert_eq!(error.code, codes::VALIDATION_FAILED);
    let found: Vec<_> = error
        .issues
        .iter()
        .map(|i| (i.code.to_string(), i.path.to_strings()))
        .collect();
    assert_eq!(
        found,
        [issue("too_short", &["title"]), issue("required", &["location"])]
    );
}

#[test]
fn nested_email_path() {
    let validator = Validator::new(object().required("contact", object().required("email", email())));
    let sink = validator.validate(&json!({ "contact": { "email": "bad" } }));

    assert_eq!(summary(&sink), [issue("invalid_email", &["contact", "email"])]);
}

#[test]
fn single_violation_has_exactly_that_path() {
    let validator = Validator::new(
        object()
            .required("title", non_empty())
            .required("intensity", integer().range(1, 5))
            .optional("tags", each(text().max_length(8))),
    );

    let sink = validator.validate(&json!({
        "title": "Loud music",
        "intensity": 3,
        "tags": ["night", "weekend-party"]
    }));

    assert_eq!(summary(&sink), [issue("too_long", &["tags", "1"])]);
}

#[test]
fn one_rule_may_record_several_issues_at_one_path() {
    let validator = Validator::new(object().required(
        "label",
        text().min_length(3).forbid_chars("<>"),
    ));

    let sink = validator.validate(&json!({ "label": "<" }));
    assert_eq!(
        summary(&sink),
        [
            issue("too_short", &["label"]),
            issue("invalid_characters", &["label"]),
        ]
    );
}

#[test]
fn issues_follow_preorder_over_the_schema() {
    let validator = Validator::new(
        object()
            .required("a", non_empty())
            .required(
                "b",
                object()
                    .required("c", non_empty())
                    .required("d", each(non_empty())),
            )
            .required("e", non_empty()),
    );

    let sink = validator.validate(&json!({
        "a": "",
        "b": { "c": "", "d": ["", "x", ""] },
        "e": ""
    }));

    let paths: Vec<String> = sink.issues().iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, ["a", "b.c", "b.d[0]", "b.d[2]", "e"]);
}

#[test]
fn localized_messages() {
    let validator = Validator::new(
        object().required(
            "label",
            non_empty().with_message("le libellé ne doit pas être vide"),
        ),
    );

    let error = validator.check(&json!({ "label": "" })).unwrap_err();
    assert_eq!(error.issues[0].message, "le libellé ne doit pas être vide");
    assert_eq!(error.issues[0].code, "too_short");
}

#[test]
fn custom_rules_compose_with_built_ins() {
    let before_after = rule_fn("chronology", |value: &Value, path: &FieldPath, sink: &mut IssueSink| {
        let start = value.get("start").and_then(Value::as_i64);
        let end = value.get("end").and_then(Value::as_i64);
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            sink.record("invalid_range", "end precedes start", &path.key("end"));
        }
    });

    let validator = Validator::new(
        object()
            .required("period", before_after)
            .required("title", non_empty()),
    );

    let sink = validator.validate(&json!({ "period": { "start": 10, "end": 2 }, "title": "" }));
    assert_eq!(
        summary(&sink),
        [
            issue("invalid_range", &["period", "end"]),
            issue("too_short", &["title"]),
        ]
    );
}

#[test]
fn error_serializes_to_wire_shape() {
    let validator = Validator::new(object().required("items", each(object().required("name", non_empty()))));
    let error = validator
        .check(&json!({ "items": [{ "name": "a" }, { "name": "" }] }))
        .unwrap_err();

    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "code": "validation_failed",
            "message": "validation failed with 1 issue",
            "issues": [
                { "code": "too_short", "message": "must not be empty", "path": ["items", "1", "name"] }
            ]
        })
    );
}
