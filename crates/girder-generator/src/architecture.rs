//! Architecture identifiers, the two-level fallback resolution, and
//! module-scoped path computation.

use std::path::{Path, PathBuf};

/// String id of the flat single-module layout.
pub const FLAT_ARCHITECTURE: &str = "none";

/// String id of the layered multi-module layout.
pub const LAYERED_ARCHITECTURE: &str = "mvc";

/// The chosen module layout strategy for a generated project.
///
/// Closed over the layouts the engine has assembly rules for; anything else
/// is carried as `Custom` and propagated unchanged, so callers without a
/// rule for it fall back to flat behavior (or reject it at assembly time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchitectureId {
    /// One module, no parent/child structure.
    Flat,
    /// api/common/core/web layers under a root aggregator.
    Layered,
    /// An id this engine has no rule for.
    Custom(String),
}

impl ArchitectureId {
    pub fn parse(id: &str) -> Self {
        match id {
            FLAT_ARCHITECTURE => Self::Flat,
            LAYERED_ARCHITECTURE => Self::Layered,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Flat => FLAT_ARCHITECTURE,
            Self::Layered => LAYERED_ARCHITECTURE,
            Self::Custom(id) => id,
        }
    }

    /// Resolve an architecture id with the documented fallback precedence:
    /// explicit choice, then catalog default, then the built-in default
    /// (layered). Total — an unrecognized string resolves to `Custom`.
    pub fn resolve(explicit: Option<&str>, catalog_default: Option<&str>) -> Self {
        let choice = explicit
            .filter(|id| !id.is_empty())
            .or(catalog_default)
            .unwrap_or(LAYERED_ARCHITECTURE);
        Self::parse(choice)
    }
}

/// One layer of the layered architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Api,
    Common,
    Core,
    Web,
}

impl Layer {
    /// Layers in their fixed creation and serialization order.
    pub const ALL: [Layer; 4] = [Layer::Api, Layer::Common, Layer::Core, Layer::Web];

    pub fn suffix(&self) -> &'static str {
        match self {
            Layer::Api => "-api",
            Layer::Common => "-common",
            Layer::Core => "-core",
            Layer::Web => "-web",
        }
    }

    /// The module name for this layer under `base_name`.
    pub fn module_name(&self, base_name: &str) -> String {
        format!("{base_name}{}", self.suffix())
    }
}

/// The on-disk directory a module-scoped resource belongs under.
///
/// Flat projects keep resources at the project root. Layered projects place
/// them under the `web` module regardless of which layer logically owns
/// them — one insertion point for runtime configuration. Custom layouts get
/// flat behavior.
pub fn module_path(architecture: &ArchitectureId, base_name: &str, project_root: &Path) -> PathBuf {
    match architecture {
        ArchitectureId::Layered => project_root.join(Layer::Web.module_name(base_name)),
        ArchitectureId::Flat | ArchitectureId::Custom(_) => project_root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choice_wins() {
        assert_eq!(
            ArchitectureId::resolve(Some("none"), Some("mvc")),
            ArchitectureId::Flat
        );
    }

    #[test]
    fn empty_choice_falls_through_to_catalog_default() {
        assert_eq!(
            ArchitectureId::resolve(Some(""), Some("none")),
            ArchitectureId::Flat
        );
        assert_eq!(
            ArchitectureId::resolve(None, Some("mvc")),
            ArchitectureId::Layered
        );
    }

    #[test]
    fn built_in_default_is_layered() {
        assert_eq!(ArchitectureId::resolve(None, None), ArchitectureId::Layered);
    }

    #[test]
    fn unrecognized_ids_are_carried_opaque() {
        let id = ArchitectureId::resolve(Some("hexagonal"), None);
        assert_eq!(id, ArchitectureId::Custom("hexagonal".to_string()));
        assert_eq!(id.as_str(), "hexagonal");
    }

    #[test]
    fn layered_resources_live_under_the_web_module() {
        let root = Path::new("/tmp/out");
        assert_eq!(
            module_path(&ArchitectureId::Layered, "shop", root),
            root.join("shop-web")
        );
        assert_eq!(module_path(&ArchitectureId::Flat, "shop", root), root);
        assert_eq!(
            module_path(&ArchitectureId::Custom("hexagonal".into()), "shop", root),
            root
        );
    }
}
