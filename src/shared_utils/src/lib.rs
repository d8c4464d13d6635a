//! Small helpers shared across the workspace: environment lookups and TOML
//! configuration loading.

pub mod config;
pub mod env;
