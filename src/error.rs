use std::fmt;

/// Error type for engine and store operations.
///
/// Expected business-rule rejections (a duplicate vote, an author who already
/// collaborates) are *not* errors; they are returned as ordinary outcomes by
/// the operations that produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// One or more required fields were missing or empty. Every failing
    /// field is reported, not just the first.
    Validation { fields: Vec<String> },
    /// A reference did not resolve within the addressed aggregate.
    NotFound { entity: &'static str, id: String },
    /// Optimistic write conflict: the document changed between load and
    /// save. Callers may retry by reloading and reapplying.
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },
    /// Document (de)serialization failure inside the store.
    Serde(String),
    /// Fatal storage-level failure; not recovered within the engine.
    Storage(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Validation { fields } => {
                write!(f, "validation failed: {}", fields.join(", "))
            }
            EngineError::NotFound { entity, id } => write!(f, "{} not found: {}", entity, id),
            EngineError::Conflict {
                id,
                expected,
                actual,
            } => write!(
                f,
                "concurrent write detected for document {} (expected version {}, got {})",
                id, expected, actual
            ),
            EngineError::Serde(msg) => write!(f, "document serialization error: {}", msg),
            EngineError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation_lists_every_field() {
        let err = EngineError::Validation {
            fields: vec!["name".into(), "language_from".into()],
        };
        assert_eq!(err.to_string(), "validation failed: name, language_from");
    }

    #[test]
    fn display_conflict_includes_versions() {
        let err = EngineError::Conflict {
            id: "doc-1".into(),
            expected: 3,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("doc-1"));
        assert!(msg.contains("expected version 3"));
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn display_not_found_names_entity() {
        let err = EngineError::NotFound {
            entity: "proposal",
            id: "p-9".into(),
        };
        assert_eq!(err.to_string(), "proposal not found: p-9");
    }
}
