//! Shared fixtures for building versioned documents.

use serde_json::{Value, json};
use vcityjson::VersionedDocument;

/// A version entry for the `versioning.versions` map.
pub fn version(message: &str, parents: &[&str], objects: Value) -> Value {
    json!({
        "author": "tester",
        "message": message,
        "date": "2020-05-01T12:00:00Z",
        "parents": parents,
        "objects": objects,
    })
}

/// Object snapshot containing one building per id.
pub fn buildings(ids: &[&str]) -> Value {
    let mut objects = serde_json::Map::new();
    for id in ids {
        objects.insert(id.to_string(), json!({"type": "Building"}));
    }
    Value::Object(objects)
}

/// Wrap a versioning block into a complete document with city-model metadata.
pub fn document_value(versions: Value, branches: Value, tags: Value) -> Value {
    json!({
        "type": "CityJSON",
        "version": "1.0",
        "metadata": {"referenceSystem": "urn:ogc:def:crs:EPSG::7415"},
        "transform": {"scale": [0.001, 0.001, 0.001], "translate": [0.0, 0.0, 0.0]},
        "CityObjects": {},
        "vertices": [],
        "versioning": {
            "versions": versions,
            "branches": branches,
            "tags": tags,
        }
    })
}

pub fn document(versions: Value, branches: Value, tags: Value) -> VersionedDocument {
    VersionedDocument::from_value(document_value(versions, branches, tags))
        .expect("fixture should be a valid versioned document")
}

/// Two versions `A <- B`, branch `main -> B`, tag `v1 -> A`.
pub fn linear_document() -> VersionedDocument {
    document(
        json!({
            "A": version("root", &[], buildings(&["b1"])),
            "B": version("second", &["A"], buildings(&["b1", "b2"])),
        }),
        json!({"main": "B"}),
        json!({"v1": "A"}),
    )
}

/// A diamond: `R <- L`, `R <- M`, `{L, M} <- T`; `main -> T`, `feature -> M`.
pub fn merge_document() -> VersionedDocument {
    document(
        json!({
            "R": version("root", &[], buildings(&["b1"])),
            "L": version("left", &["R"], buildings(&["b1", "left"])),
            "M": version("right", &["R"], buildings(&["b1", "right"])),
            "T": version("merge", &["L", "M"], buildings(&["b1", "left", "right"])),
        }),
        json!({"main": "T", "feature": "M"}),
        json!({}),
    )
}

/// Names of a history, in order.
pub fn names(history: &[&vcityjson::Version]) -> Vec<String> {
    history.iter().map(|v| v.name().to_string()).collect()
}
