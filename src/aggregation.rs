//! Collecting the candidate artifacts for a BOM from the build.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::bom::model::ManagedDependency;
use crate::maven::coordinates::MavenArtifact;
use crate::workspace::MavenProject;

/// Where the candidates for a BOM come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStrategy {
    /// the generating project's resolved direct dependencies
    Dependencies,
    /// every reactor project's own artifact and all of its resolved artifacts
    Reactor,
    /// like [AggregationStrategy::Reactor], but the generating project only contributes if
    ///  `include_current_project` is set, and every candidate is also fed back into the
    ///  generating project's dependency management
    ReactorWithSelfHandling {
        include_current_project: bool,
    },
}

/// The result of collecting: candidates in traversal order, duplicates included, plus the
///  dependency management entries the generating project has to merge into its own model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub artifacts: Vec<MavenArtifact>,
    pub upstream_management: Vec<ManagedDependency>,
}

impl AggregationStrategy {
    /// `reactor` is the list of all projects in build order, `current` is the project
    ///  generating the BOM. An empty result is valid.
    pub fn collect(&self, current: &MavenProject, reactor: &[MavenProject]) -> Candidates {
        match self {
            AggregationStrategy::Dependencies => {
                let artifacts = current.dependency_artifacts.clone();
                debug!("found {} dependency artifacts", artifacts.len());
                Candidates {
                    artifacts,
                    upstream_management: vec![],
                }
            }
            AggregationStrategy::Reactor => {
                let artifacts = Self::collect_reactor(reactor, |_| true);
                debug!("found {} projects ({} overall artifacts)", reactor.len(), artifacts.len());
                Candidates {
                    artifacts,
                    upstream_management: vec![],
                }
            }
            AggregationStrategy::ReactorWithSelfHandling { include_current_project } => {
                let artifacts = Self::collect_reactor(reactor, |project| {
                    *include_current_project || !project.is_same_project(current)
                });
                debug!("found {} projects ({} overall artifacts, current project {})",
                    reactor.len(),
                    artifacts.len(),
                    if *include_current_project { "included" } else { "skipped" },
                );

                let upstream_management = artifacts.iter()
                    .map(ManagedDependency::versioned)
                    .collect();
                Candidates {
                    artifacts,
                    upstream_management,
                }
            }
        }
    }

    fn collect_reactor(reactor: &[MavenProject], include: impl Fn(&MavenProject) -> bool) -> Vec<MavenArtifact> {
        let mut result = Vec::new();
        for project in reactor.iter().filter(|p| include(p)) {
            result.push(project.artifact());
            result.extend(project.artifacts.iter().cloned());
        }
        result
    }
}

impl Display for AggregationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationStrategy::Dependencies => write!(f, "dependencies"),
            AggregationStrategy::Reactor => write!(f, "reactor"),
            AggregationStrategy::ReactorWithSelfHandling { include_current_project } => {
                write!(f, "reactor (current project {})", if *include_current_project { "included" } else { "excluded" })
            }
        }
    }
}
