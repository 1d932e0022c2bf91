//! Identity settings of one build descriptor.

/// Maven-style coordinates of a build: group, artifact, version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCoordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl BuildCoordinates {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

/// Reference from a child descriptor to its parent descriptor.
///
/// `relative_path` locates the parent POM file from the child's module
/// directory (`../pom.xml` for the standard one-level layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    pub coordinates: BuildCoordinates,
    pub relative_path: String,
}

impl ParentReference {
    pub fn new(coordinates: BuildCoordinates, relative_path: impl Into<String>) -> Self {
        Self {
            coordinates,
            relative_path: relative_path.into(),
        }
    }
}

/// Mutable identity section of a build specification.
///
/// The parent reference is write-once: module assembly wires each child to
/// the root aggregator exactly once, and nothing may rewire it afterwards.
#[derive(Debug, Clone, Default)]
pub struct BuildSettings {
    group: String,
    artifact: String,
    version: String,
    parent: Option<ParentReference>,
}

impl BuildSettings {
    pub fn group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = group.into();
        self
    }

    pub fn artifact(&mut self, artifact: impl Into<String>) -> &mut Self {
        self.artifact = artifact.into();
        self
    }

    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = version.into();
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact
    }

    pub fn version_id(&self) -> &str {
        &self.version
    }

    pub fn parent(&self) -> Option<&ParentReference> {
        self.parent.as_ref()
    }

    /// Set the parent reference.
    ///
    /// Fails if a different parent was already set for this build.
    pub fn set_parent(&mut self, parent: ParentReference) -> Result<(), ParentAlreadySet> {
        match &self.parent {
            Some(existing) if *existing != parent => Err(ParentAlreadySet {
                artifact: self.artifact.clone(),
                existing: existing.coordinates.artifact.clone(),
                incoming: parent.coordinates.artifact.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.parent = Some(parent);
                Ok(())
            }
        }
    }

    pub fn coordinates(&self) -> BuildCoordinates {
        BuildCoordinates::new(&self.group, &self.artifact, &self.version)
    }
}

/// A second, different parent was assigned to a build that already has one.
#[derive(Debug, thiserror::Error)]
#[error("parent of '{artifact}' is already '{existing}', refusing to rewire to '{incoming}'")]
pub struct ParentAlreadySet {
    pub artifact: String,
    pub existing: String,
    pub incoming: String,
}
