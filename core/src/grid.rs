use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Occupied,
}

/// Which cells of the `width × width` grid already belong to a target.
///
/// The grid only records occupancy. Whether a run of cells is free, or stays
/// on the board, is decided by the placer before it calls `reserve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: usize,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    pub fn new(width: usize) -> Self {
        Self { width, cells: vec![CellState::Empty; width * width] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Result<CellState> {
        self.cells
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, size: self.size() })
    }

    pub fn is_free(&self, index: usize) -> Result<bool> {
        Ok(self.cell(index)? == CellState::Empty)
    }

    /// Mark every index as occupied, whether or not it was free before.
    ///
    /// Fails without writing anything if an index lies outside the grid.
    pub fn reserve(&mut self, indices: &[usize]) -> Result<()> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.size()) {
            return Err(Error::IndexOutOfRange { index, size: self.size() });
        }
        for &index in indices {
            self.cells[index] = CellState::Occupied;
        }
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Occupied).count()
    }
}
