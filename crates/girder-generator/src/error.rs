//! Error types for project generation.

use girder_buildsystem::ParentAlreadySet;
use girder_metadata::MetadataError;
use std::path::PathBuf;

/// Errors raised while assembling or writing a generated project.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No assembly rule is registered for the resolved architecture id.
    /// Raised before any file is touched.
    #[error("no assembly rule for architecture '{architecture}'")]
    Configuration { architecture: String },

    /// Directory or file creation failed. Not retried; earlier modules'
    /// files are left in place.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Parent(#[from] ParentAlreadySet),
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
