//! # girder-buildsystem
//!
//! Build-descriptor model for generated projects:
//! - `BuildSpecification` (identity, parent linkage, dependency edges,
//!   bill-of-materials entries, child modules)
//! - `ModuleRegistry` (get-or-create module builds, declaration order)
//! - `IndentingWriter` and the `BuildWriter` rendering seam
//! - `MavenPomWriter` (the stock `pom.xml` renderer)
//!
//! It intentionally does not decide which modules a project needs or where
//! their files land. Those concerns live in `girder-generator`.
//!
//! ## Data model
//!
//! ```text
//! ModuleRegistry                 ← name → BuildSpecification, declared order
//!     │
//! BuildSpecification             ← one module's descriptor, append-only
//!     │
//! BuildWriter (MavenPomWriter)   ← deterministic textual rendering
//! ```

pub mod bom;
pub mod build;
pub mod dependency;
pub mod io;
pub mod maven;
pub mod registry;
pub mod settings;

pub use bom::{BomContainer, BomEntry};
pub use build::BuildSpecification;
pub use dependency::{Dependency, DependencyContainer};
pub use io::IndentingWriter;
pub use maven::{BuildWriter, MavenPomWriter};
pub use registry::ModuleRegistry;
pub use settings::{BuildCoordinates, BuildSettings, ParentAlreadySet, ParentReference};
