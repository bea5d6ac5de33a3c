//! Error type shared by raw-form parsing and the JSON codec.

/// All errors produced when reading Siren documents.
#[derive(Debug, thiserror::Error)]
pub enum SirenError {
    /// A raw value had the wrong JSON kind, e.g. a number where an array
    /// of strings was required. `found` names the kind actually present.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A required attribute was absent (or null) in the raw map.
    #[error("Key {key} is missing in the map.")]
    MissingKey { key: &'static str },

    /// An href failed URI parsing. Carries the owning entity type and the
    /// offending text; the underlying parse error is attached as source.
    #[error("invalid href in {context}: {value}")]
    InvalidUri {
        context: &'static str,
        value: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The document was not valid JSON text.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}
