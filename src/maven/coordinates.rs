use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BomError;

/// Maven's default packaging, also the type of an artifact declared without one
pub const DEFAULT_TYPE: &str = "jar";

lazy_static! {
    // groupId:artifactId[:type[:classifier]]:version
    static ref COORDINATES_REGEX: Regex = Regex::new(r"^([^:\s]+):([^:\s]+)(?::([^:\s]*))?(?::([^:\s]*))?:([^:\s]+)$").unwrap();
}

#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MavenGroupId(pub String);

#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MavenArtifactId(pub String);

#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MavenVersion(pub String);

#[derive(PartialEq, Eq, Clone, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum MavenClassifier {
    #[default]
    Unclassified,
    Classified(String),
}
impl MavenClassifier {
    pub fn as_str(&self) -> &str {
        match self {
            MavenClassifier::Unclassified => "",
            MavenClassifier::Classified(c) => c,
        }
    }
}
impl From<Option<String>> for MavenClassifier {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => MavenClassifier::Classified(s),
            _ => MavenClassifier::Unclassified,
        }
    }
}
impl From<MavenClassifier> for Option<String> {
    fn from(value: MavenClassifier) -> Self {
        match value {
            MavenClassifier::Unclassified => None,
            MavenClassifier::Classified(s) => Some(s),
        }
    }
}

/// A resolved, versioned artifact as handed over by the build - the unit of selection for a BOM.
///
/// In JSON this is either an object or a coordinate string
///  `groupId:artifactId[:type[:classifier]]:version`.
#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMavenArtifact")]
pub struct MavenArtifact {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: MavenVersion,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub classifier: MavenClassifier,
}
impl MavenArtifact {
    pub fn new(group_id: &str, artifact_id: &str, version: &str, artifact_type: &str, classifier: &str) -> MavenArtifact {
        MavenArtifact {
            group_id: MavenGroupId(group_id.to_string()),
            artifact_id: MavenArtifactId(artifact_id.to_string()),
            version: MavenVersion(version.to_string()),
            artifact_type: artifact_type.to_string(),
            classifier: Some(classifier.to_string()).into(),
        }
    }

    /// `groupId:artifactId`, the identity of a project in the reactor
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id.0, self.artifact_id.0)
    }
}

impl Display for MavenArtifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}:{}", self.group_id.0, self.artifact_id.0, self.version.0, self.artifact_type)?;
        if let MavenClassifier::Classified(c) = &self.classifier {
            write!(f, ":{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for MavenArtifact {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COORDINATES_REGEX.captures(s.trim())
            .ok_or_else(|| BomError::Input(format!("not a valid Maven coordinate: {:?}", s)))?;

        let segment = |i: usize| captures.get(i).map(|m| m.as_str()).unwrap_or("");
        let artifact_type = match segment(3) {
            "" => DEFAULT_TYPE,
            t => t,
        };

        Ok(MavenArtifact::new(segment(1), segment(2), segment(5), artifact_type, segment(4)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMavenArtifact {
    Coordinates(String),
    #[serde(rename_all = "camelCase")]
    Detailed {
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
        #[serde(rename = "type")]
        artifact_type: Option<String>,
        classifier: Option<String>,
    },
}

impl TryFrom<RawMavenArtifact> for MavenArtifact {
    type Error = BomError;

    fn try_from(raw: RawMavenArtifact) -> Result<Self, Self::Error> {
        match raw {
            RawMavenArtifact::Coordinates(s) => s.parse(),
            RawMavenArtifact::Detailed { group_id, artifact_id, version, artifact_type, classifier } => {
                // missing values of a concrete artifact are blank, never absent
                Ok(MavenArtifact {
                    group_id: MavenGroupId(group_id.unwrap_or_default()),
                    artifact_id: MavenArtifactId(artifact_id.unwrap_or_default()),
                    version: MavenVersion(version.unwrap_or_default()),
                    artifact_type: artifact_type.unwrap_or_default(),
                    classifier: classifier.into(),
                })
            }
        }
    }
}
