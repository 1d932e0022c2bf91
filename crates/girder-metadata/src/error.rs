//! Error types for metadata catalog operations.

/// Errors raised while loading or validating a metadata catalog.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Two distinct catalog entries were registered under one id.
    ///
    /// Both entries are named so the offending catalog line can be found
    /// without re-running with extra diagnostics.
    #[error("could not register {incoming}: another architecture already has the '{id}' id: {existing}")]
    DuplicateIdentity {
        id: String,
        existing: String,
        incoming: String,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}
