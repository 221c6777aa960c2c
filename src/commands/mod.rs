//! Command implementations for the aikit CLI

pub mod clean;
pub mod completions;
pub mod install;
pub mod status;
pub mod version;
