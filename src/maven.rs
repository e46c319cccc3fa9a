//! Maven concepts: artifact coordinates, repository layout and the POM format.

pub mod coordinates;
pub mod paths;
pub mod pom_xml;
