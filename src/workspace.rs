//! The in-memory project model of a build: the reactor's projects with their resolved artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bom::model::ManagedDependency;
use crate::error::{BomError, BomResult};
use crate::maven::coordinates::*;

fn default_packaging() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_model_version() -> String {
    "4.0.0".to_string()
}

fn default_build_directory() -> PathBuf {
    PathBuf::from("target")
}

fn default_file() -> PathBuf {
    PathBuf::from("pom.xml")
}

/// A file produced by the build in addition to the project's main artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedArtifact {
    pub artifact: MavenArtifact,
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenProject {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: MavenVersion,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default = "default_model_version")]
    pub model_version: String,
    #[serde(default = "default_build_directory")]
    pub build_directory: PathBuf,
    /// the project descriptor
    #[serde(default = "default_file")]
    pub file: PathBuf,
    /// direct dependencies, resolved
    #[serde(default)]
    pub dependency_artifacts: Vec<MavenArtifact>,
    /// all resolved dependencies, including transitive ones
    #[serde(default)]
    pub artifacts: Vec<MavenArtifact>,
    #[serde(default)]
    pub dependency_management: Vec<ManagedDependency>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached_artifacts: Vec<AttachedArtifact>,
}
impl MavenProject {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> MavenProject {
        MavenProject {
            group_id: MavenGroupId(group_id.to_string()),
            artifact_id: MavenArtifactId(artifact_id.to_string()),
            version: MavenVersion(version.to_string()),
            packaging: default_packaging(),
            model_version: default_model_version(),
            build_directory: default_build_directory(),
            file: default_file(),
            dependency_artifacts: vec![],
            artifacts: vec![],
            dependency_management: vec![],
            attached_artifacts: vec![],
        }
    }

    /// The project's own artifact: typed by its packaging, unclassified
    pub fn artifact(&self) -> MavenArtifact {
        MavenArtifact {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            artifact_type: self.packaging.clone(),
            classifier: MavenClassifier::Unclassified,
        }
    }

    /// `groupId:artifactId`
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id.0, self.artifact_id.0)
    }

    pub fn is_same_project(&self, other: &MavenProject) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }

    pub fn add_attached_artifact(&mut self, artifact: MavenArtifact, file: PathBuf) {
        trace!("attaching {} ({}) to {}", artifact, file.display(), self.key());
        self.attached_artifacts.push(AttachedArtifact { artifact, file });
    }

    pub fn merge_dependency_management(&mut self, entries: impl IntoIterator<Item = ManagedDependency>) {
        let before = self.dependency_management.len();
        self.dependency_management.extend(entries);
        debug!("added {} dependency management entries to {}", self.dependency_management.len() - before, self.key());
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        if self.build_directory.is_relative() {
            self.build_directory = base_dir.join(&self.build_directory);
        }
        if self.file.is_relative() {
            self.file = base_dir.join(&self.file);
        }
    }
}

/// All projects built together in one session, in build order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub projects: Vec<MavenProject>,
}
impl Workspace {
    pub fn new(projects: Vec<MavenProject>) -> Workspace {
        Workspace { projects }
    }

    /// Reads a workspace from JSON. Relative paths of projects are resolved against the
    ///  directory containing the file.
    pub fn load(path: &Path) -> BomResult<Workspace> {
        trace!("loading workspace from {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| BomError::io(path, e))?;
        let mut workspace: Workspace = serde_json::from_str(&json)
            .map_err(|e| BomError::Input(format!("{} is not a valid workspace: {}", path.display(), e)))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        for project in &mut workspace.projects {
            project.resolve_paths(base_dir);
        }

        debug!("loaded {} projects from {}", workspace.projects.len(), path.display());
        Ok(workspace)
    }

    pub fn save(&self, path: &Path) -> BomResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BomError::Input(format!("failed to serialize workspace: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| BomError::io(path, e))
    }

    fn position(&self, key: &str) -> BomResult<usize> {
        self.projects.iter()
            .position(|p| p.key() == key)
            .ok_or_else(|| BomError::Input(format!("no project {} in workspace", key)))
    }

    pub fn project(&self, key: &str) -> BomResult<&MavenProject> {
        let index = self.position(key)?;
        Ok(&self.projects[index])
    }

    pub fn project_mut(&mut self, key: &str) -> BomResult<&mut MavenProject> {
        let index = self.position(key)?;
        Ok(&mut self.projects[index])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORKSPACE_JSON: &str = r#"{
        "projects": [
            {
                "groupId": "org.x",
                "artifactId": "core",
                "version": "1.0",
                "artifacts": ["org.y:lib:2.0", {"groupId": "org.x", "artifactId": "util", "version": "1.0", "type": "jar"}]
            },
            {
                "groupId": "org.x",
                "artifactId": "bom",
                "version": "1.0",
                "packaging": "pom",
                "buildDirectory": "bom/target",
                "file": "/abs/pom.xml"
            }
        ]
    }"#;

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");
        fs::write(&path, WORKSPACE_JSON).unwrap();

        let workspace = Workspace::load(&path).unwrap();
        assert_eq!(workspace.projects.len(), 2);

        let core = workspace.project("org.x:core").unwrap();
        assert_eq!(core.packaging, "jar");
        assert_eq!(core.model_version, "4.0.0");
        assert_eq!(core.build_directory, dir.path().join("target"));
        assert_eq!(core.artifacts, vec![
            MavenArtifact::new("org.y", "lib", "2.0", "jar", ""),
            MavenArtifact::new("org.x", "util", "1.0", "jar", ""),
        ]);

        let bom = workspace.project("org.x:bom").unwrap();
        assert_eq!(bom.build_directory, dir.path().join("bom/target"));
        assert_eq!(bom.file, PathBuf::from("/abs/pom.xml"));
        assert_eq!(bom.artifact(), MavenArtifact::new("org.x", "bom", "1.0", "pom", ""));
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");
        fs::write(&path, r#"{"projects": [{"groupId": "g", "artifactId": "a", "version": "1", "artifacts": ["g:a"]}]}"#).unwrap();

        assert!(matches!(Workspace::load(&path), Err(BomError::Input(_))));
        assert!(matches!(Workspace::load(&dir.path().join("missing.json")), Err(BomError::Io { .. })));
    }

    #[test]
    fn test_unknown_project() {
        let workspace = Workspace::new(vec![MavenProject::new("g", "a", "1")]);
        assert!(workspace.project("g:a").is_ok());
        assert!(matches!(workspace.project("g:b"), Err(BomError::Input(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut project = MavenProject::new("g", "a", "1");
        project.build_directory = dir.path().join("target");
        project.file = dir.path().join("pom.xml");
        project.merge_dependency_management(vec![ManagedDependency::versioned(&MavenArtifact::new("g", "b", "1", "jar", ""))]);
        let workspace = Workspace::new(vec![project]);

        workspace.save(&path).unwrap();
        assert_eq!(Workspace::load(&path).unwrap(), workspace);
    }
}
