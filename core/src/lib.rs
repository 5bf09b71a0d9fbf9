// core: grid placement and hit resolution for the Startup Bust guessing game.
//
// Targets ("startups") occupy contiguous runs of cells on a square grid. The
// `Placer` drops them at random, non-overlapping positions and the
// `TurnResolver` resolves the player's guesses against them until every
// target is destroyed. Everything here is synchronous and owned by a single
// session; randomness is injected through `IndexSource` so games can be
// replayed from a seed or a scripted sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "rand")]
use rand::Rng;

pub mod codec;
pub mod error;
pub mod grid;
pub mod placer;
pub mod session;
pub mod target;

pub use codec::Codec;
pub use error::{Error, Result};
pub use grid::{CellState, OccupancyGrid};
pub use placer::{Placement, Placer};
pub use session::{Session, SessionState, TurnReport, TurnResolver};
pub use target::Target;

/// Default number of columns (and rows) of the grid.
pub const GRID_LENGTH: usize = 7;

/// Widest grid the single-letter column alphabet can label.
pub const MAX_GRID_LENGTH: usize = 26;

/// Number of random anchors the placer tries before giving up on a target.
pub const MAX_ATTEMPTS: u32 = 200;

/// Default cell count of a target.
pub const TARGET_SIZE: usize = 3;

/// At most this many guesses earns the good-score message.
pub const PAR_GUESSES: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation of the `nth` placement of a session (1-indexed): even
    /// placements run horizontally, odd ones vertically.
    pub fn for_placement(nth: u32) -> Self {
        if nth % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Index distance between two consecutive cells of a target.
    pub fn step(self, width: usize) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => width,
        }
    }
}

/// Result of resolving one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Miss,
    Hit,
    Destroyed,
}

impl Outcome {
    pub fn is_miss(self) -> bool {
        self == Outcome::Miss
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Outcome::Miss => "miss",
            Outcome::Hit => "hit",
            Outcome::Destroyed => "kill",
        };
        f.write_str(word)
    }
}

/// Source of uniformly distributed grid indices.
///
/// The placer draws every anchor from one of these, so tests can feed a
/// fixed sequence and the host can feed a seeded RNG.
pub trait IndexSource {
    /// Draw an index in `0..bound`. Callers never pass a zero `bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

#[cfg(feature = "rand")]
impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// A named target and the number of cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub name: String,
    pub size: usize,
}

impl TargetSpec {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self { name: name.into(), size }
    }
}

/// Everything needed to set up one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub max_attempts: u32,
    pub targets: Vec<TargetSpec>,
    pub par_guesses: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            targets: ["Adi", "Golu", "Amore"]
                .into_iter()
                .map(|name| TargetSpec::new(name, TARGET_SIZE))
                .collect(),
            par_guesses: PAR_GUESSES,
        }
    }
}

impl GameConfig {
    /// Reject configurations no session could be built from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_GRID_LENGTH {
            return Err(Error::InvalidConfig(format!(
                "grid width must be between 1 and {MAX_GRID_LENGTH}, got {}",
                self.width
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be positive".into()));
        }
        if self.targets.is_empty() {
            return Err(Error::InvalidConfig("at least one target is required".into()));
        }
        if let Some(bad) = self
            .targets
            .iter()
            .find(|t| t.size == 0 || t.size > self.width)
        {
            return Err(Error::InvalidConfig(format!(
                "target {} has size {}, must be between 1 and {}",
                bad.name, bad.size, self.width
            )));
        }
        Ok(())
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_alternates_by_placement_order() {
        assert_eq!(Orientation::for_placement(1), Orientation::Vertical);
        assert_eq!(Orientation::for_placement(2), Orientation::Horizontal);
        assert_eq!(Orientation::for_placement(3), Orientation::Vertical);
        assert_eq!(Orientation::Horizontal.step(7), 1);
        assert_eq!(Orientation::Vertical.step(7), 7);
    }

    #[test]
    fn outcome_words_match_game_messages() {
        assert_eq!(Outcome::Miss.to_string(), "miss");
        assert_eq!(Outcome::Hit.to_string(), "hit");
        assert_eq!(Outcome::Destroyed.to_string(), "kill");
    }

    #[test]
    fn default_config_is_three_startups_on_seven_by_seven() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 7);
        assert_eq!(config.target_names(), vec!["Adi", "Golu", "Amore"]);
        assert!(config.targets.iter().all(|t| t.size == 3));
    }

    #[test]
    fn validate_rejects_unplaceable_configs() {
        let mut config = GameConfig::default();
        config.width = 27;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.targets[1].size = 8;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.targets.clear();
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[cfg(feature = "rand")]
    fn seeded_rng_is_an_index_source() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(rng.next_index(49) < 49);
        }
    }
}
