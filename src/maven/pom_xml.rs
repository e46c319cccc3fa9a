use std::fmt::Display;
use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;

use crate::bom::model::{BomModel, ManagedDependency};
use crate::error::{BomError, BomResult};
use crate::maven::coordinates::*;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

fn xml_error(e: impl Display) -> BomError {
    BomError::Xml(e.to_string())
}

/// Renders a BOM as a `pom.xml` document, 2-space indented.
///
/// The namespace and schema location are derived from the model version, and the
///  `<dependencyManagement>` section is present even if it is empty.
pub fn write_pom(model: &BomModel) -> BomResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let namespace = format!("http://maven.apache.org/POM/{}", model.model_version);
    let schema_location = format!("{} http://maven.apache.org/maven-v{}.xsd", namespace, model.model_version.replace('.', "_"));

    let mut project = BytesStart::new("project");
    project.push_attribute(("xmlns", namespace.as_str()));
    project.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    project.push_attribute(("xsi:schemaLocation", schema_location.as_str()));
    writer.write_event(Event::Start(project))
        .map_err(xml_error)?;

    write_simple(&mut writer, "modelVersion", &model.model_version)?;
    write_simple(&mut writer, "groupId", &model.group_id.0)?;
    write_simple(&mut writer, "artifactId", &model.artifact_id.0)?;
    write_simple(&mut writer, "version", &model.version.0)?;
    write_simple(&mut writer, "packaging", &model.packaging)?;

    write_start(&mut writer, "dependencyManagement")?;
    write_start(&mut writer, "dependencies")?;
    for dependency in &model.dependency_management {
        write_start(&mut writer, "dependency")?;
        write_simple(&mut writer, "groupId", &dependency.group_id.0)?;
        write_simple(&mut writer, "artifactId", &dependency.artifact_id.0)?;
        write_simple(&mut writer, "version", &dependency.version.0)?;
        if let Some(artifact_type) = &dependency.artifact_type {
            write_simple(&mut writer, "type", artifact_type)?;
        }
        if let Some(classifier) = &dependency.classifier {
            write_simple(&mut writer, "classifier", classifier)?;
        }
        write_end(&mut writer, "dependency")?;
    }
    write_end(&mut writer, "dependencies")?;
    write_end(&mut writer, "dependencyManagement")?;

    write_end(&mut writer, "project")?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())
        .map_err(xml_error)?;
    if !xml.ends_with('\n') {
        xml.push('\n');
    }
    Ok(xml)
}

fn write_start(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str) -> BomResult<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)
}

fn write_end(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str) -> BomResult<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)
}

fn write_simple(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, value: &str) -> BomResult<()> {
    write_start(writer, tag)?;
    writer.write_event(Event::Text(BytesText::new(value)))
        .map_err(xml_error)?;
    write_end(writer, tag)
}

/// Reads back identity and managed dependencies of a POM. Everything else in the document is
///  ignored.
pub fn read_pom(xml: &str) -> BomResult<BomModel> {
    let pom: Project = serde_xml_rs::from_str(xml)
        .map_err(|e| BomError::Input(format!("not a valid POM: {}", e)))?;

    Ok(BomModel {
        model_version: pom.modelVersion.unwrap_or_default(),
        group_id: MavenGroupId(pom.groupId),
        artifact_id: MavenArtifactId(pom.artifactId),
        version: MavenVersion(pom.version),
        packaging: pom.packaging.unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        dependency_management: pom.dependencyManagement
            .map(|dm| dm.dependencies.dependency)
            .unwrap_or_default()
            .into_iter()
            .map(|d| ManagedDependency {
                group_id: MavenGroupId(d.groupId),
                artifact_id: MavenArtifactId(d.artifactId),
                version: MavenVersion(d.version.unwrap_or_default()),
                artifact_type: d.r#type,
                classifier: d.classifier,
            })
            .collect(),
    })
}

#[allow(non_snake_case)]
#[derive(Deserialize)]
struct Project {
    modelVersion: Option<String>,
    groupId: String,
    artifactId: String,
    version: String,
    packaging: Option<String>,
    dependencyManagement: Option<DependencyManagement>,
}

#[derive(Deserialize)]
struct DependencyManagement {
    #[serde(default)]
    dependencies: Dependencies,
}

#[derive(Deserialize, Default)]
struct Dependencies {
    #[serde(default)]
    dependency: Vec<Dependency>,
}

#[allow(non_snake_case)]
#[derive(Deserialize)]
struct Dependency {
    groupId: String,
    artifactId: String,
    version: Option<String>,
    r#type: Option<String>,
    classifier: Option<String>,
}
