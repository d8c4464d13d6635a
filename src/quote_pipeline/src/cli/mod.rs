//! Terminal front-end: argument parsing and plain-text rendering.

pub mod commands;
pub mod render;
