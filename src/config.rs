//! Settings of a BOM generation, read from a JSON file and overridden from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aggregation::AggregationStrategy;
use crate::error::{BomError, BomResult};
use crate::selection::artifact_set::ArtifactSelectionSet;
use crate::workspace::MavenProject;

pub const DEFAULT_POM_FILE_NAME: &str = "bom-pom.xml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    #[default]
    Dependencies,
    Reactor,
    ReactorWithSelfHandling,
}

/// ```json
/// {
///   "artifactSet": { "includes": ["org.eclipse.jetty:*"], "excludes": ["*:test-*"] },
///   "pomLocation": "target/bom-pom.xml",
///   "strategy": "reactorWithSelfHandling",
///   "includeCurrentProject": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomSettings {
    /// `None` selects everything from the generating project's group
    #[serde(default)]
    pub artifact_set: Option<ArtifactSelectionSet>,
    #[serde(default)]
    pub pom_location: Option<PathBuf>,
    #[serde(default)]
    pub strategy: StrategyKind,
    /// only relevant for [StrategyKind::ReactorWithSelfHandling]
    #[serde(default)]
    pub include_current_project: bool,
}
impl BomSettings {
    pub fn load(path: &Path) -> BomResult<BomSettings> {
        trace!("loading settings from {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| BomError::io(path, e))?;
        serde_json::from_str(&json)
            .map_err(|e| BomError::Input(format!("{} contains invalid settings: {}", path.display(), e)))
    }

    pub fn aggregation_strategy(&self) -> AggregationStrategy {
        match self.strategy {
            StrategyKind::Dependencies => AggregationStrategy::Dependencies,
            StrategyKind::Reactor => AggregationStrategy::Reactor,
            StrategyKind::ReactorWithSelfHandling => AggregationStrategy::ReactorWithSelfHandling {
                include_current_project: self.include_current_project,
            },
        }
    }

    /// Defaults to `bom-pom.xml` in the project's build directory
    pub fn pom_location(&self, project: &MavenProject) -> PathBuf {
        match &self.pom_location {
            Some(location) => location.clone(),
            None => project.build_directory.join(DEFAULT_POM_FILE_NAME),
        }
    }

    pub fn artifact_set_mut(&mut self) -> &mut ArtifactSelectionSet {
        self.artifact_set.get_or_insert_with(ArtifactSelectionSet::default)
    }
}
