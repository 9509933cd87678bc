use serde_json::json;
use vcityjson::{VersionRecord, VersionedDocument, versioning::VersioningError};

use super::helpers::*;

#[test]
fn test_amend_message_keeps_identity() {
    let mut doc = linear_document();

    let name = doc
        .versioning_mut()
        .set_message("main", "second, reworded")
        .unwrap();
    assert_eq!(name, "B");

    let version = doc.versioning().version("B").unwrap();
    assert_eq!(version.message(), "second, reworded");
    assert_eq!(doc.versioning().resolve_ref("main").unwrap(), "B");

    // The change is visible in the serialized document
    let value = doc.to_value().unwrap();
    assert_eq!(
        value["versioning"]["versions"]["B"]["message"],
        "second, reworded"
    );
}

#[test]
fn test_add_version_named_by_content() {
    let mut doc = linear_document();
    let record = VersionRecord::new("tester", "third", buildings(&["b3"]))
        .with_date("2020-06-01T00:00:00Z")
        .with_parents(vec!["B".into()]);

    let name = doc
        .versioning_mut()
        .add_version(record.clone(), None)
        .unwrap();
    assert_eq!(name.len(), 64);
    assert_eq!(name, vcityjson::VersionName::from_content(&record).unwrap());

    // Same content again collides with the existing name
    let err = doc.versioning_mut().add_version(record, None).unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn test_add_version_requires_existing_parents() {
    let mut doc = linear_document();
    let record = VersionRecord::new("tester", "orphan", json!({})).with_parents(vec!["Q".into()]);

    let err = doc
        .versioning_mut()
        .add_version(record, Some("C".into()))
        .unwrap_err();
    assert!(err.is_integrity_error());
    assert!(doc.versioning().version("C").is_none());
}

#[test]
fn test_branches_move_and_tags_do_not() {
    let mut doc = linear_document();
    let versioning = doc.versioning_mut();

    assert_eq!(versioning.set_branch("main", "A").unwrap(), "A");
    assert_eq!(versioning.resolve_ref("main").unwrap(), "A");
    assert_eq!(versioning.set_branch("dev", "v1").unwrap(), "A");

    let err = versioning.create_tag("v1", "B").unwrap_err();
    assert_eq!(
        err.as_versioning_error(),
        Some(&VersioningError::TagAlreadyExists {
            name: "v1".to_string()
        })
    );
    assert_eq!(versioning.create_tag("v2", "B").unwrap(), "B");

    assert_eq!(versioning.delete_branch("dev").unwrap(), "A");
    assert!(versioning.delete_branch("dev").unwrap_err().is_not_found());
    assert_eq!(versioning.delete_tag("v2").unwrap(), "B");
    assert!(versioning.delete_tag("v2").unwrap_err().is_not_found());
}

#[test]
fn test_commit_snapshot_advances_branch() {
    let mut doc = VersionedDocument::new();

    let snapshot = json!({"CityObjects": buildings(&["b1"])});
    let first = doc
        .commit_snapshot(&snapshot, "tester", "one", Some("main"))
        .unwrap();

    let snapshot = json!({"CityObjects": buildings(&["b1", "b2"])});
    let second = doc
        .commit_snapshot(&snapshot, "tester", "two", Some("main"))
        .unwrap();

    assert_eq!(doc.versioning().resolve_ref("main").unwrap(), second);
    let log = doc.log(None).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].name, second);
    assert_eq!(log[0].parents, vec![first.clone()]);
    assert_eq!(log[1].name, first);
}

#[test]
fn test_commit_snapshot_rejects_non_object() {
    let mut doc = VersionedDocument::new();
    let err = doc
        .commit_snapshot(&json!([1, 2, 3]), "tester", "bad", None)
        .unwrap_err();
    assert!(err.is_format_error());
    assert!(doc.versioning().is_empty());
}
