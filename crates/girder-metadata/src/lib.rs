//! # girder-metadata
//!
//! Catalog metadata consumed by the generator:
//! - `ArchitectureMeta` entries and the `ArchitecturesCapability` section
//! - merge semantics (skip by name) and id indexing (duplicate ids rejected)
//! - TOML catalog loading
//!
//! The catalog only supplies defaults and display data. What an architecture
//! id *means* — which modules exist and how they are wired — is decided by
//! `girder-generator`.

pub mod architecture;
pub mod error;

pub use architecture::{ArchitectureMeta, ArchitecturesCapability};
pub use error::MetadataError;
