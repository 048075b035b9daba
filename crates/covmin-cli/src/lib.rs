//! CLI library components for the Terra data table converter.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
