//! Constants used throughout the vcityjson library.
//!
//! Reserved document keys and defaults shared by the document boundary and
//! the versioning core.

/// Top-level key holding the versioning block.
pub const VERSIONING: &str = "versioning";

/// Top-level key holding the city objects of a plain (non-versioned) document.
pub const CITY_OBJECTS: &str = "CityObjects";

/// Branch used when no reference is supplied.
pub const DEFAULT_BRANCH: &str = "main";

/// Value of the `type` key of a CityJSON document.
pub const CITYJSON_TYPE: &str = "CityJSON";

/// CityJSON version written into freshly initialized documents.
pub const CITYJSON_VERSION: &str = "1.0";

/// Identifier of the scheme used to name versions by content.
pub const NAME_HASH_SCHEME: &str = "sha256-json-v1";
