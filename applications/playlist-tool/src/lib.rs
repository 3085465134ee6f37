//! Tapedeck playlist tool
//!
//! Headless driver around the playback session: reads playlist text from
//! files or stdin, runs it through the same command surface the browser
//! player uses, and prints the result.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use config::ToolConfig;
pub use error::{Result, ToolError};
