// Session setup and per-guess resolution.
//
// A `TurnResolver` owns the live targets and the guess counter. Each guess is
// checked against the targets in order and only the first one it touches is
// affected. A destroyed target is dropped from the collection once the scan
// is over; when none are left the session is finished and further guesses are
// refused.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;
use crate::placer::{Placement, Placer};
use crate::target::Target;
use crate::{GameConfig, IndexSource, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Finished,
}

/// What one guess did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub outcome: Outcome,
    /// Guesses made so far, this one included.
    pub guesses: u32,
    pub state: SessionState,
    /// Name of the target that was hit or destroyed.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResolver {
    targets: Vec<Target>,
    guesses: u32,
}

impl TurnResolver {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets, guesses: 0 }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn state(&self) -> SessionState {
        if self.targets.is_empty() {
            SessionState::Finished
        } else {
            SessionState::Playing
        }
    }

    pub fn submit_guess(&mut self, guess: &str) -> Result<TurnReport> {
        if self.state() == SessionState::Finished {
            return Err(Error::SessionFinished);
        }
        self.guesses += 1;

        let mut outcome = Outcome::Miss;
        let mut matched = None;
        for (index, target) in self.targets.iter_mut().enumerate() {
            outcome = target.resolve(guess);
            if !outcome.is_miss() {
                matched = Some(index);
                break;
            }
        }

        let target = matched.map(|index| {
            if outcome == Outcome::Destroyed {
                self.targets.remove(index).name().to_string()
            } else {
                self.targets[index].name().to_string()
            }
        });

        let state = self.state();
        debug!(guess, %outcome, guesses = self.guesses, ?target, "resolved guess");
        if state == SessionState::Finished {
            info!(guesses = self.guesses, "all targets destroyed");
        }

        Ok(TurnReport { outcome, guesses: self.guesses, state, target })
    }
}

/// A freshly set up game: targets placed and ready for guesses.
#[derive(Debug, Clone)]
pub struct Session {
    pub resolver: TurnResolver,
    /// Placement of every configured target, in configuration order.
    pub placements: Vec<(String, Placement)>,
    pub grid: OccupancyGrid,
}

impl Session {
    /// Place every target in `config` with anchors drawn from `source`.
    pub fn setup<S: IndexSource>(config: &GameConfig, source: S) -> Result<Self> {
        config.validate()?;

        let mut placer = Placer::new(config.width, source)?.with_max_attempts(config.max_attempts);
        let mut targets = Vec::with_capacity(config.targets.len());
        let mut placements = Vec::with_capacity(config.targets.len());
        for spec in &config.targets {
            let placement = placer.place(spec.size)?;
            targets.push(Target::new(spec.name.clone(), placement.labels.clone()));
            placements.push((spec.name.clone(), placement));
        }

        Ok(Self {
            resolver: TurnResolver::new(targets),
            placements,
            grid: placer.into_grid(),
        })
    }
}
