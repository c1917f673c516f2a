//! Best-score tracking
//!
//! Owns the single persisted high score: loaded once at startup, reconciled
//! against the running score on every game-over transition, written back on
//! each of those transitions and once more on quit.

use std::path::{Path, PathBuf};

use crate::persistence;

/// The persisted best score and where it lives
#[derive(Debug, Clone)]
pub struct Scoreboard {
    best: u32,
    path: PathBuf,
}

impl Scoreboard {
    /// Load the scoreboard from durable storage
    ///
    /// Never fails: absent or corrupt storage yields a best of 0.
    pub fn load(path: &Path) -> Self {
        let best = persistence::load_high_score(path);
        log::info!("loaded high score {best} from {}", path.display());
        Self {
            best,
            path: path.to_path_buf(),
        }
    }

    /// Current best score
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Reconcile a round's final score; returns true if it became the best
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    /// Write the best score back to storage, best-effort
    pub fn save(&self) {
        match persistence::save_high_score(&self.path, self.best) {
            Ok(()) => log::info!("high score saved ({})", self.best),
            Err(err) => log::warn!(
                "could not save high score to {}: {err}",
                self.path.display()
            ),
        }
    }
}
