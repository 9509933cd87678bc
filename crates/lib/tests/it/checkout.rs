use serde_json::{Value, json};
use tempfile::tempdir;
use vcityjson::{VersionedDocument, versioning::VersioningError};

use super::helpers::*;

#[test]
fn test_checkout_writes_plain_document() {
    let doc = linear_document();
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.json");

    doc.checkout("A", &out).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(written.get("versioning").is_none());
    assert_eq!(written["CityObjects"], buildings(&["b1"]));
    // Document-level metadata is carried over
    assert_eq!(written["type"], "CityJSON");
    assert_eq!(
        written["metadata"]["referenceSystem"],
        "urn:ogc:def:crs:EPSG::7415"
    );
    assert_eq!(written["transform"]["scale"], json!([0.001, 0.001, 0.001]));
}

#[test]
fn test_checkout_by_branch_and_tag() {
    let doc = linear_document();

    let by_branch = doc.checkout_value("main").unwrap();
    assert_eq!(by_branch["CityObjects"], buildings(&["b1", "b2"]));

    let by_tag = doc.checkout_value("v1").unwrap();
    assert_eq!(by_tag["CityObjects"], buildings(&["b1"]));
}

#[test]
fn test_checkout_does_not_modify_source() {
    let doc = linear_document();
    let before = doc.to_value().unwrap();

    doc.checkout_value("A").unwrap();

    assert_eq!(doc.to_value().unwrap(), before);
}

#[test]
fn test_checkout_unresolved_ref_writes_nothing() {
    let doc = linear_document();
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.json");

    let err = doc.checkout("nope", &out).unwrap_err();
    assert!(matches!(
        err.as_versioning_error(),
        Some(VersioningError::UnresolvedReference { .. })
    ));
    assert!(!out.exists());
}

#[test]
fn test_checkout_to_writer() {
    let doc = merge_document();
    let mut sink = Vec::new();

    doc.checkout_to_writer("feature", &mut sink).unwrap();

    let written: Value = serde_json::from_slice(&sink).unwrap();
    assert_eq!(written["CityObjects"], buildings(&["b1", "right"]));
}

#[test]
fn test_checkout_round_trip_through_fresh_document() {
    let source = merge_document();
    let original = source.versioning().version("T").unwrap().objects().clone();
    let extracted = source.checkout_value("T").unwrap();

    let mut fresh = VersionedDocument::new();
    let name = fresh
        .commit_snapshot(&extracted, "tester", "imported", None)
        .unwrap();
    assert_eq!(fresh.versioning().len(), 1);

    let again = fresh.checkout_value(&name).unwrap();
    assert_eq!(again["CityObjects"], original);
}

#[test]
fn test_checkout_round_trip_without_objects() {
    let source = document(
        json!({"A": {"parents": [], "message": "root"}}),
        json!({"main": "A"}),
        json!({}),
    );
    assert!(source.versioning().version("A").unwrap().objects().is_null());

    let extracted = source.checkout_value("A").unwrap();
    assert!(extracted.get("CityObjects").is_none());
    assert!(extracted.get("versioning").is_none());

    let mut fresh = VersionedDocument::new();
    let name = fresh
        .commit_snapshot(&extracted, "tester", "imported", None)
        .unwrap();
    assert!(fresh.versioning().version(&name).unwrap().objects().is_null());

    let again = fresh.checkout_value(&name).unwrap();
    assert_eq!(again.get("CityObjects"), extracted.get("CityObjects"));
}
