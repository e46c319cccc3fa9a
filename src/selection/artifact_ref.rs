use std::fmt::{Display, Formatter};

use crate::maven::coordinates::MavenArtifact;

pub const WILDCARD: &str = "*";

/// Version-less identity of an artifact: `groupId:artifactId:type:classifier`.
///
/// No field is ever absent. A concrete artifact has blank fields where it lacks a value, a
///  pattern has `*` for every segment it does not specify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactRef {
    pub group_id: String,
    pub artifact_id: String,
    pub artifact_type: String,
    pub classifier: String,
}
impl ArtifactRef {
    pub fn new(group_id: Option<&str>, artifact_id: Option<&str>, artifact_type: Option<&str>, classifier: Option<&str>) -> ArtifactRef {
        ArtifactRef {
            group_id: group_id.unwrap_or("").to_string(),
            artifact_id: artifact_id.unwrap_or("").to_string(),
            artifact_type: artifact_type.unwrap_or("").to_string(),
            classifier: classifier.unwrap_or("").to_string(),
        }
    }

    /// Parses a pattern `groupId:artifactId:type:classifier`. This never fails: omitted trailing
    ///  segments become `*`, segments beyond the fourth are ignored, and a blank pattern is
    ///  `:*:*:*`.
    pub fn parse_pattern(pattern: &str) -> ArtifactRef {
        let mut result = ArtifactRef {
            group_id: "".to_string(),
            artifact_id: WILDCARD.to_string(),
            artifact_type: WILDCARD.to_string(),
            classifier: WILDCARD.to_string(),
        };

        if pattern.trim().is_empty() {
            return result;
        }

        let fields = [
            &mut result.group_id,
            &mut result.artifact_id,
            &mut result.artifact_type,
            &mut result.classifier,
        ];
        for (field, token) in fields.into_iter().zip(pattern.split(':')) {
            *field = token.to_string();
        }
        result
    }
}

impl From<&MavenArtifact> for ArtifactRef {
    fn from(artifact: &MavenArtifact) -> Self {
        ArtifactRef::new(
            Some(&artifact.group_id.0),
            Some(&artifact.artifact_id.0),
            Some(&artifact.artifact_type),
            Some(artifact.classifier.as_str()),
        )
    }
}

impl Display for ArtifactRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type, self.classifier)
    }
}
