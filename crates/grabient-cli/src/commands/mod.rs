//! CLI command implementations

pub mod json_output;
pub mod refine;
pub mod render;
pub mod seed;
pub mod tags;
pub mod validate;
