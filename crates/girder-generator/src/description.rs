//! Input contract for one project-generation run.

use serde::{Deserialize, Serialize};

/// What the caller wants generated: a base project name, a group/package
/// identifier, a target version, and an optional architecture choice.
///
/// An absent or empty architecture falls through to the catalog default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl ProjectDescription {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            version: version.into(),
            architecture: None,
        }
    }

    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// The explicit architecture choice, with empty strings treated as
    /// absent.
    pub fn architecture_choice(&self) -> Option<&str> {
        self.architecture
            .as_deref()
            .filter(|choice| !choice.is_empty())
    }
}
