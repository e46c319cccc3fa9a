use crate::maven::coordinates::*;

/// The relative path of an artifact inside a Maven repository, e.g.
///  "org/example/core/1.0/core-1.0-bom.pom"
pub fn as_maven_path(artifact: &MavenArtifact) -> String {
    format!(
        "{}/{}/{}/{}",
        artifact.group_id.0.replace('.', "/"),
        artifact.artifact_id.0,
        artifact.version.0,
        maven_file_name(artifact),
    )
}

/// Maps an artifact type to its file extension. Only the common types are known, everything
///  else is taken verbatim.
pub fn file_extension(artifact_type: &str) -> &str {
    match artifact_type {
        "" | "jar" | "ejb" | "maven-plugin" | "test-jar" | "java-source" | "javadoc" => "jar",
        "war" => "war",
        "ear" => "ear",
        "rar" => "rar",
        "pom" => "pom",
        other => other,
    }
}

fn maven_file_name(artifact: &MavenArtifact) -> String {
    let classifier_string = match &artifact.classifier {
        MavenClassifier::Unclassified => "".to_string(),
        MavenClassifier::Classified(c) => format!("-{}", c),
    };

    //  <artifactId>-<version>-<classifier>.<extension>
    format!("{}-{}{}.{}",
            artifact.artifact_id.0,
            artifact.version.0,
            classifier_string,
            file_extension(&artifact.artifact_type),
    )
}
