// Randomized, retry-bounded placement of targets on the occupancy grid.
//
// Each call to `Placer::place` draws random anchors until the run of cells
// starting there stays on the board and touches no occupied cell, or until
// `max_attempts` anchors have been tried. Whatever run was tried last gets
// committed: a placer that runs out of attempts still reserves its last
// candidate (which may overlap another target) and reports it with
// `valid == false`. Orientation alternates with every placement, starting
// vertical.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;
use crate::{IndexSource, Orientation, MAX_ATTEMPTS};

/// A committed run of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Labels of the committed cells, in run order.
    pub labels: Vec<String>,
    pub indices: Vec<usize>,
    pub orientation: Orientation,
    /// Anchors drawn before the search stopped.
    pub attempts: u32,
    /// False when the attempt ceiling was hit and the last candidate run was
    /// committed without passing the bounds and collision checks.
    pub valid: bool,
}

pub struct Placer<S> {
    codec: Codec,
    grid: OccupancyGrid,
    source: S,
    placed: u32,
    max_attempts: u32,
}

impl<S: IndexSource> Placer<S> {
    pub fn new(width: usize, source: S) -> Result<Self> {
        let codec = Codec::new(width)?;
        Ok(Self {
            codec,
            grid: OccupancyGrid::new(width),
            source,
            placed: 0,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Override the attempt ceiling; at least one anchor is always drawn.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }

    /// Number of placements made so far.
    pub fn placed(&self) -> u32 {
        self.placed
    }

    pub fn place(&mut self, size: usize) -> Result<Placement> {
        let width = self.codec.width();
        if size == 0 || size > width {
            return Err(Error::InvalidTargetSize { size, width });
        }

        self.placed += 1;
        let orientation = Orientation::for_placement(self.placed);
        let step = orientation.step(width);

        let mut candidates = Vec::with_capacity(size);
        let mut attempts = 0;
        let mut valid = false;
        while !valid && attempts < self.max_attempts {
            attempts += 1;
            let anchor = self.source.next_index(self.grid.size());
            candidates.clear();
            candidates.extend((0..size).map(|offset| anchor + offset * step));
            debug!(?candidates, ?orientation, "trying");

            valid = self.fits(&candidates, orientation) && self.available(&candidates);
        }

        if !valid {
            warn!(
                attempts,
                ?candidates,
                "no free run found, committing the last candidate anyway"
            );
        }

        self.grid.reserve(&candidates)?;
        let labels = candidates
            .iter()
            .map(|&index| self.codec.encode(index))
            .collect::<Result<Vec<_>>>()?;
        debug!(?labels, attempts, "placed");

        Ok(Placement { labels, indices: candidates, orientation, attempts, valid })
    }

    /// Horizontal runs must not wrap onto the next row; vertical runs must
    /// not run off the bottom.
    fn fits(&self, candidates: &[usize], orientation: Orientation) -> bool {
        let (Some(&first), Some(&last)) = (candidates.first(), candidates.last()) else {
            return false;
        };
        let fits = match orientation {
            Orientation::Horizontal => self.codec.row(first) == self.codec.row(last),
            Orientation::Vertical => last < self.grid.size(),
        };
        if !fits {
            debug!(first, last, "run leaves the grid");
        }
        fits
    }

    fn available(&self, candidates: &[usize]) -> bool {
        for &index in candidates {
            if !self.grid.is_free(index).unwrap_or(false) {
                debug!(index, "position already taken");
                return false;
            }
        }
        true
    }
}
