//! Building, writing and publishing the BOM.

pub mod generator;
pub mod install;
pub mod model;
pub mod package;
