use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::maven::coordinates::MavenGroupId;

/// Include / exclude patterns (`groupId:artifactId:type:classifier`, trailing segments optional)
///  selecting the artifacts that go into a BOM.
///
/// ```json
/// {
///   "includes": ["org.eclipse.jetty:*"],
///   "excludes": ["*:test-*"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSelectionSet {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub includes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub excludes: BTreeSet<String>,
}
impl ArtifactSelectionSet {
    /// The selection used when none is configured: everything from the generating project's
    ///  organization, i.e. `<groupId>*`
    pub fn default_for_group(group_id: &MavenGroupId) -> ArtifactSelectionSet {
        let mut result = ArtifactSelectionSet::default();
        result.add_include(format!("{}*", group_id.0));
        result
    }

    pub fn add_include(&mut self, pattern: impl Into<String>) {
        self.includes.insert(pattern.into());
    }

    pub fn add_exclude(&mut self, pattern: impl Into<String>) {
        self.excludes.insert(pattern.into());
    }
}
