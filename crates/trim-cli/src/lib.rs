//! Command-line fuel trim heatmap generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
