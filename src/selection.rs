//! Choosing which artifacts go into a BOM: include / exclude patterns in the form
//!  `groupId:artifactId:type:classifier` with `*` wildcards.

pub mod artifact_ref;
pub mod artifact_set;
pub mod glob;
pub mod predicate;
