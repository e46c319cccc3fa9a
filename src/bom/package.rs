use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::bom::generator::BOM_CLASSIFIER;
use crate::error::{BomError, BomResult};
use crate::maven::coordinates::MavenClassifier;
use crate::maven::pom_xml::read_pom;
use crate::workspace::MavenProject;

/// Makes the project's single attached `bom` artifact its descriptor, so the BOM is published in
///  place of the project's own POM. Returns the new descriptor.
///
/// Fails if there is not exactly one such artifact, or if the BOM does not describe this project.
pub fn package_bom(project: &mut MavenProject) -> BomResult<PathBuf> {
    let boms = project.attached_artifacts.iter()
        .filter(|a| a.artifact.classifier == MavenClassifier::Classified(BOM_CLASSIFIER.to_string()))
        .collect::<Vec<_>>();

    let bom_file = match boms.as_slice() {
        [bom] => bom.file.clone(),
        [] => return Err(BomError::Configuration(format!("no bom found attached to {}", project.key()))),
        _ => return Err(BomError::Configuration(format!("{} boms attached to {}, expected exactly one", boms.len(), project.key()))),
    };

    let xml = fs::read_to_string(&bom_file)
        .map_err(|e| BomError::io(&bom_file, e))?;
    let bom = read_pom(&xml)?;
    if bom.group_id != project.group_id || bom.artifact_id != project.artifact_id || bom.version != project.version {
        return Err(BomError::Configuration(format!(
            "bom {} describes {}:{}:{}, not {}:{}",
            bom_file.display(),
            bom.group_id.0, bom.artifact_id.0, bom.version.0,
            project.key(), project.version.0,
        )));
    }

    info!("replacing descriptor of {} with {}", project.key(), bom_file.display());
    project.file = bom_file.clone();
    Ok(bom_file)
}
