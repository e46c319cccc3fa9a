use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::aggregation::AggregationStrategy;
use crate::bom::model::{BomModel, ManagedDependency, BOM_PACKAGING};
use crate::config::BomSettings;
use crate::error::{BomError, BomResult};
use crate::maven::coordinates::{MavenArtifact, MavenClassifier};
use crate::maven::pom_xml::write_pom;
use crate::selection::artifact_set::ArtifactSelectionSet;
use crate::selection::predicate::SelectionPredicate;
use crate::workspace::{MavenProject, Workspace};

pub const BOM_CLASSIFIER: &str = "bom";

/// The BOM in memory, before it is written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomSelection {
    pub model: BomModel,
    /// entries the generating project has to add to its own dependency management - only ever
    ///  non-empty for [AggregationStrategy::ReactorWithSelfHandling]
    pub upstream_management: Vec<ManagedDependency>,
}

/// A generated and written BOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomOutcome {
    pub model: BomModel,
    pub upstream_management: Vec<ManagedDependency>,
    pub pom_location: PathBuf,
    /// the BOM as an artifact of the generating project, classified `bom`
    pub artifact: MavenArtifact,
}

/// Collects the candidates, filters them and turns the survivors into a BOM model. No I/O.
pub fn select_bom(
    strategy: AggregationStrategy,
    artifact_set: Option<&ArtifactSelectionSet>,
    current: &MavenProject,
    reactor: &[MavenProject],
) -> BomSelection {
    let candidates = strategy.collect(current, reactor);

    let predicate = SelectionPredicate::for_project(artifact_set, &current.group_id);
    let selected = predicate.filter(&candidates.artifacts);

    info!("{} of {} artifacts selected for bom", selected.len(), candidates.artifacts.len());
    for artifact in &selected {
        debug!("Including: {}", artifact);
    }

    BomSelection {
        model: BomModel::build(&current.model_version, &current.group_id, &current.artifact_id, &current.version, &selected),
        upstream_management: candidates.upstream_management,
    }
}

/// Generates the BOM for the project `project_key` (`groupId:artifactId`) and writes it to the
///  configured location. The workspace is not modified, see [apply] for that.
pub fn generate(workspace: &Workspace, project_key: &str, settings: &BomSettings) -> BomResult<BomOutcome> {
    let current = workspace.project(project_key)?;
    let strategy = settings.aggregation_strategy();
    info!("Generating BOM: {}:{}:{} from {}", current.group_id.0, current.artifact_id.0, current.version.0, strategy);

    let selection = select_bom(strategy, settings.artifact_set.as_ref(), current, &workspace.projects);

    let pom_location = settings.pom_location(current);
    write_bom(&selection.model, &pom_location)?;

    Ok(BomOutcome {
        model: selection.model,
        upstream_management: selection.upstream_management,
        pom_location,
        artifact: MavenArtifact {
            artifact_type: BOM_PACKAGING.to_string(),
            classifier: MavenClassifier::Classified(BOM_CLASSIFIER.to_string()),
            ..current.artifact()
        },
    })
}

/// Registers a generated BOM with the project that generated it: the BOM file becomes an attached
///  artifact, and the upstream dependency management entries are merged into the project model.
///
/// The project model is shared by everything running in the build: callers generating BOMs for
///  the same project concurrently have to serialize calls to this.
pub fn apply(outcome: &BomOutcome, project: &mut MavenProject) {
    project.add_attached_artifact(outcome.artifact.clone(), outcome.pom_location.clone());
    if !outcome.upstream_management.is_empty() {
        project.merge_dependency_management(outcome.upstream_management.iter().cloned());
    }
}

/// Writes the BOM, creating missing parent directories. A failed write may leave a partial file.
pub fn write_bom(model: &BomModel, location: &Path) -> BomResult<()> {
    let xml = write_pom(model)?;

    if let Some(parent) = location.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            trace!("creating directory {}", parent.display());
            fs::create_dir_all(parent)
                .map_err(|e| BomError::io(parent, e))?;
        }
    }

    trace!("writing bom to {}", location.display());
    fs::write(location, xml)
        .map_err(|e| BomError::io(location, e))
}
