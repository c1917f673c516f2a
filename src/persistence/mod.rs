//! High score durable storage
//!
//! The whole durable state is one text file holding the decimal high score.
//! Reads degrade to a default instead of failing: a missing file is created
//! holding `"0"`, malformed content reads as 0 without touching the file.
//! Writes are best-effort; the game keeps running if one fails.

use std::fs;
use std::io;
use std::path::Path;

/// Read the high score from `path`, initializing storage if absent
pub fn load_high_score(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(content) => content.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "high score file {} is malformed, treating as 0",
                path.display()
            );
            0
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if let Err(err) = save_high_score(path, 0) {
                log::warn!(
                    "could not initialize high score file {}: {err}",
                    path.display()
                );
            }
            0
        }
        Err(err) => {
            log::warn!("could not read high score file {}: {err}", path.display());
            0
        }
    }
}

/// Overwrite `path` with the decimal string of `value`
pub fn save_high_score(path: &Path, value: u32) -> io::Result<()> {
    fs::write(path, value.to_string())
}
