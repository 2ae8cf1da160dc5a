//! Property-based tests: determinism and no fail-fast truncation.

use nuisance_validator::rules::{non_empty, object};
use nuisance_validator::{IssueSink, Validator};
use proptest::prelude::*;
use serde_json::{Map, Value};

const FIELDS: usize = 8;

fn eight_field_validator() -> Validator {
    let mut schema = object();
    for i in 0..FIELDS {
        schema = schema.required(format!("f{i}"), non_empty());
    }
    Validator::new(schema)
}

fn input(values: &[String]) -> Value {
    let mut map = Map::new();
    for (i, value) in values.iter().enumerate() {
        map.insert(format!("f{i}"), Value::String(value.clone()));
    }
    Value::Object(map)
}

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        ".{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-f]{1,2}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn validation_is_idempotent(value in arbitrary_json()) {
        let validator = Validator::new(
            object()
                .required("a", non_empty())
                .optional("b", object().required("c", non_empty()).deny_unknown_fields())
                .deny_unknown_fields(),
        );
        let first: IssueSink = validator.validate(&value);
        let second: IssueSink = validator.validate(&value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_issue_per_violated_field(values in prop::collection::vec(".{0,3}", FIELDS)) {
        let expected: Vec<Vec<String>> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_empty())
            .map(|(i, _)| vec![format!("f{i}")])
            .collect();
        let sink = eight_field_validator().validate(&input(&values));

        let paths: Vec<Vec<String>> = sink.issues().iter().map(|i| i.path.to_strings()).collect();
        prop_assert_eq!(paths, expected);
        for issue in sink.issues() {
            prop_assert_eq!(issue.code.as_ref(), "too_short");
        }
    }
}
