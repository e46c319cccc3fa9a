use serde::{Deserialize, Serialize};

use crate::maven::coordinates::*;

pub const BOM_PACKAGING: &str = "pom";

/// One `<dependency>` of a `<dependencyManagement>` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDependency {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: MavenVersion,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}
impl ManagedDependency {
    /// The BOM entry for an artifact: the default type `jar` and a blank classifier are left out
    pub fn from_artifact(artifact: &MavenArtifact) -> ManagedDependency {
        let artifact_type = match artifact.artifact_type.trim() {
            "" | DEFAULT_TYPE => None,
            t => Some(t.to_string()),
        };

        ManagedDependency {
            artifact_type,
            classifier: artifact.classifier.clone().into(),
            ..Self::versioned(artifact)
        }
    }

    /// Only group, artifact and version - type and classifier are dropped
    pub fn versioned(artifact: &MavenArtifact) -> ManagedDependency {
        ManagedDependency {
            group_id: artifact.group_id.clone(),
            artifact_id: artifact.artifact_id.clone(),
            version: artifact.version.clone(),
            artifact_type: None,
            classifier: None,
        }
    }
}

/// The BOM's project model: its own identity plus the managed dependencies, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomModel {
    pub model_version: String,
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: MavenVersion,
    pub packaging: String,
    pub dependency_management: Vec<ManagedDependency>,
}
impl BomModel {
    /// One entry per selected artifact, without any merging of repeated coordinates
    pub fn build(model_version: &str, group_id: &MavenGroupId, artifact_id: &MavenArtifactId, version: &MavenVersion, selected: &[MavenArtifact]) -> BomModel {
        BomModel {
            model_version: model_version.to_string(),
            group_id: group_id.clone(),
            artifact_id: artifact_id.clone(),
            version: version.clone(),
            packaging: BOM_PACKAGING.to_string(),
            dependency_management: selected.iter()
                .map(ManagedDependency::from_artifact)
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::*;
    use super::*;

    #[rstest]
    #[case::jar_type_omitted(MavenArtifact::new("g", "a", "1", "jar", ""), None, None)]
    #[case::blank_type_omitted(MavenArtifact::new("g", "a", "1", "", ""), None, None)]
    #[case::other_type_kept(MavenArtifact::new("g", "a", "1", "zip", ""), Some("zip"), None)]
    #[case::pom_type_kept(MavenArtifact::new("g", "a", "1", "pom", ""), Some("pom"), None)]
    #[case::classifier_kept(MavenArtifact::new("g", "a", "1", "jar", "tests"), None, Some("tests"))]
    #[case::blank_classifier_omitted(MavenArtifact::new("g", "a", "1", "jar", "  "), None, None)]
    fn test_from_artifact(#[case] artifact: MavenArtifact, #[case] expected_type: Option<&str>, #[case] expected_classifier: Option<&str>) {
        let dependency = ManagedDependency::from_artifact(&artifact);
        assert_eq!(dependency.group_id, artifact.group_id);
        assert_eq!(dependency.artifact_id, artifact.artifact_id);
        assert_eq!(dependency.version, artifact.version);
        assert_eq!(dependency.artifact_type.as_deref(), expected_type);
        assert_eq!(dependency.classifier.as_deref(), expected_classifier);
    }

    #[test]
    fn test_versioned_drops_type_and_classifier() {
        let dependency = ManagedDependency::versioned(&MavenArtifact::new("g", "a", "1", "zip", "dist"));
        assert_eq!(dependency.artifact_type, None);
        assert_eq!(dependency.classifier, None);
    }

    #[test]
    fn test_build_keeps_order_and_repeats() {
        let selected = vec![
            MavenArtifact::new("org.x", "b", "1.0", "jar", ""),
            MavenArtifact::new("org.x", "a", "1.0", "zip", ""),
            MavenArtifact::new("org.x", "b", "1.0", "jar", ""),
        ];
        let model = BomModel::build(
            "4.0.0",
            &MavenGroupId("org.x".to_string()),
            &MavenArtifactId("bom".to_string()),
            &MavenVersion("1.0".to_string()),
            &selected,
        );

        assert_eq!(model.packaging, "pom");
        assert_eq!(model.artifact_id.0, "bom");
        let artifact_ids = model.dependency_management.iter().map(|d| d.artifact_id.0.as_str()).collect::<Vec<_>>();
        assert_eq!(artifact_ids, vec!["b", "a", "b"]);
        assert_eq!(model.dependency_management[1].artifact_type.as_deref(), Some("zip"));
    }

    #[test]
    fn test_build_empty() {
        let model = BomModel::build(
            "4.0.0",
            &MavenGroupId("org.x".to_string()),
            &MavenArtifactId("bom".to_string()),
            &MavenVersion("1.0".to_string()),
            &[],
        );
        assert!(model.dependency_management.is_empty());
    }
}
