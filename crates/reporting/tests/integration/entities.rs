//! The nuisance entry points wired to their reference schemas.

use nuisance_reporting::model::{
    CreateNuisanceFamily, CreateNuisanceReport, CreateNuisanceType, GeoPoint,
};
use nuisance_reporting::{
    Reporter, create_nuisance_family, create_nuisance_type, report_nuisance,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use crate::support::{Catalogue, FamilyStore, TypeStore};

#[tokio::test]
async fn report_is_stored_with_its_type_and_family() {
    let catalogue = Catalogue::noise();
    let type_id = catalogue.kind.id;
    let reporter = Reporter::for_reports(catalogue);

    let report = report_nuisance(
        &reporter,
        CreateNuisanceReport {
            type_id: Some(type_id),
            user_id: None,
            location: Some(GeoPoint::new(4.83, 45.76)),
            intensity: Some(4),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.nuisance_type.id, type_id);
    assert_eq!(report.nuisance_type.family.label, "Bruit");
    assert_eq!(report.intensity, 4);
    assert_eq!(report.location.latitude(), Some(45.76));
}

#[rstest]
#[case(Some(0), "out_of_range")]
#[case(Some(9), "out_of_range")]
#[case(None, "required")]
#[tokio::test]
async fn bad_intensity_is_rejected(#[case] intensity: Option<u8>, #[case] code: &str) {
    let catalogue = Catalogue::noise();
    let type_id = catalogue.kind.id;
    let reporter = Reporter::for_reports(catalogue);

    let error = report_nuisance(
        &reporter,
        CreateNuisanceReport {
            type_id: Some(type_id),
            user_id: None,
            location: Some(GeoPoint::new(4.83, 45.76)),
            intensity,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(error.code, "validation_failed");
    assert_eq!(error.issues.len(), 1);
    assert_eq!(error.issues[0].code, code);
    assert_eq!(error.issues[0].path.to_strings(), ["intensity"]);
}

#[tokio::test]
async fn out_of_bounds_location_is_reported_per_coordinate() {
    let reporter = Reporter::for_reports(Catalogue::noise());

    let error = report_nuisance(
        &reporter,
        CreateNuisanceReport {
            type_id: Some(Uuid::new_v4()),
            user_id: None,
            location: Some(GeoPoint::new(190.0, -95.0)),
            intensity: Some(2),
        },
    )
    .await
    .unwrap_err();

    let paths: Vec<_> = error.issues.iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, ["location.coordinates[0]", "location.coordinates[1]"]);
}

#[tokio::test]
async fn unknown_type_is_a_submission_failure() {
    let reporter = Reporter::for_reports(Catalogue::noise());

    let error = report_nuisance(
        &reporter,
        CreateNuisanceReport {
            type_id: Some(Uuid::new_v4()),
            user_id: Some(Uuid::new_v4()),
            location: Some(GeoPoint::new(4.83, 45.76)),
            intensity: Some(1),
        },
    )
    .await
    .unwrap_err();

    assert!(error.is_submission_failure());
    assert_eq!(error.message, "unknown nuisance type");
}

#[tokio::test]
async fn family_creation() {
    let reporter = Reporter::for_families(FamilyStore);

    let family = create_nuisance_family(
        &reporter,
        CreateNuisanceFamily {
            label: "Odeurs".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(family.label, "Odeurs");
    assert_eq!(family.description, "");

    let error = create_nuisance_family(&reporter, CreateNuisanceFamily::default())
        .await
        .unwrap_err();
    assert_eq!(error.issues[0].code, "too_short");
    assert_eq!(error.issues[0].message, "must not be empty");
}

#[tokio::test]
async fn type_creation() {
    let reporter = Reporter::for_types(TypeStore);
    let family_id = Uuid::new_v4();

    let kind = create_nuisance_type(
        &reporter,
        CreateNuisanceType {
            label: "Klaxon".to_string(),
            description: Some("Avertisseurs sonores".to_string()),
            family_id: Some(family_id),
        },
    )
    .await
    .unwrap();
    assert_eq!(kind.family_id, family_id);

    let error = create_nuisance_type(
        &reporter,
        CreateNuisanceType {
            label: "Klaxon".to_string(),
            ..CreateNuisanceType::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(error.issues.len(), 1);
    assert_eq!(error.issues[0].path.to_strings(), ["family_id"]);
}
