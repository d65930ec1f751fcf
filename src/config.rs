//! Runtime settings read from the environment.
//!
//! Board size and bomb count are compile-time constants; only settings that
//! do not change the difficulty live here:
//!
//! - `MINESWEEPER_SEED`: `u64` seed for a reproducible bomb layout
//! - `MINESWEEPER_LOG_PATH`: file to write logs to (nothing is logged otherwise)

use std::path::PathBuf;

use crate::core::BombRng;

pub const SEED_VAR: &str = "MINESWEEPER_SEED";
pub const LOG_PATH_VAR: &str = "MINESWEEPER_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unparsable seeds and blank paths are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { seed, log_path }
    }

    /// RNG for the bomb layout: seeded if a seed was given, random otherwise.
    pub fn bomb_rng(&self) -> BombRng {
        match self.seed {
            Some(seed) => BombRng::new(seed),
            None => BombRng::from_entropy(),
        }
    }
}
