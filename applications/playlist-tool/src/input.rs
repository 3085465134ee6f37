//! Playlist input sources

use crate::error::{Result, ToolError};
use std::io::Read;

/// Path that stands for standard input
pub const STDIN: &str = "-";

/// Read a playlist from a file, or from stdin for `-`
pub fn read_input(path: &str) -> Result<String> {
    let read_error = |source| ToolError::Read {
        path: path.to_string(),
        source,
    };

    if path == STDIN {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(read_error)?;
        return Ok(raw);
    }

    std::fs::read_to_string(path).map_err(read_error)
}
