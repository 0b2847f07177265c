use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// A reference does not resolve in the mapping built for its target kind.
    #[error("{context} ({kind} {id})")]
    MappingLookup {
        kind: &'static str,
        id: i64,
        context: String,
    },

    /// A collection location segment is not a valid collection id.
    #[error("Invalid location {location:?} for collection {collection}: {reason}")]
    HierarchyResolution {
        collection: i64,
        location: String,
        reason: String,
    },

    #[error("Source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ExportError {
    pub fn mapping_lookup(kind: &'static str, id: i64, context: impl Into<String>) -> Self {
        Self::MappingLookup {
            kind,
            id,
            context: context.into(),
        }
    }

    pub fn is_mapping_lookup(&self) -> bool {
        matches!(self, Self::MappingLookup { .. })
    }
}
