use serde::{Deserialize, Serialize};

use crate::Outcome;

/// A named target and the labels of its cells that have not been hit yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    name: String,
    cells: Vec<String>,
}

impl Target {
    pub fn new(name: impl Into<String>, cells: Vec<String>) -> Self {
        Self { name: name.into(), cells }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Labels still standing, in placement order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn remaining(&self) -> usize {
        self.cells.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check a guess against this target. A hit removes the cell, so the
    /// same label never hits twice.
    pub fn resolve(&mut self, guess: &str) -> Outcome {
        let Some(index) = self.cells.iter().position(|cell| cell == guess) else {
            return Outcome::Miss;
        };
        self.cells.remove(index);
        if self.cells.is_empty() {
            Outcome::Destroyed
        } else {
            Outcome::Hit
        }
    }
}
