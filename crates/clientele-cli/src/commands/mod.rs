//! CLI command definitions.

pub mod serve;
pub mod status;
pub mod tools;
