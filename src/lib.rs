//! Generates Maven BOMs ("bill of materials" POMs) from the artifacts of a build.
//!
//! Candidates are collected from the build ([aggregation]), filtered by include / exclude
//!  patterns ([selection]) and turned into a `<dependencyManagement>` section ([bom]).

pub mod aggregation;
pub mod bom;
pub mod config;
pub mod error;
pub mod maven;
pub mod selection;
pub mod workspace;
