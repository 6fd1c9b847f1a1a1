//! Dead-end trimming
//!
//! A passage cell with three or more empty orthogonal neighbours is a
//! cul-de-sac: nothing but rock continues from it. Each round sweeps every
//! passage from its last cell to its first, then every passage from its
//! first cell to its last, removing cul-de-sacs as it meets them. Removing
//! one cell can expose the next, so a sweep eats a dead branch all the way
//! back to its junction. Rounds repeat until one removes nothing.

use crate::consts::CUL_DE_SAC_EMPTY_NEIGHBOURS;
use crate::stage::{GridRead, GridWrite, Passage, Position};

/// Outcome of a trimming run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimReport {
    /// Cells returned to empty
    pub removed: usize,
    /// Rounds run, including the final round that removed nothing
    pub rounds: usize,
}

/// Removes dead ends from carved passages
#[derive(Debug, Clone, Copy, Default)]
pub struct PassageTrimmer;

impl PassageTrimmer {
    pub fn new() -> Self {
        Self
    }

    /// Trim until no passage cell is a cul-de-sac
    pub fn trim(&self, grid: &mut impl GridWrite, passages: &mut [Passage]) -> TrimReport {
        let mut report = TrimReport::default();

        loop {
            let removed = self.sweep_round(grid, passages);
            report.rounds += 1;
            report.removed += removed;
            if removed == 0 {
                break;
            }
        }

        tracing::debug!(removed = report.removed, rounds = report.rounds, "passages trimmed");
        report
    }

    /// One tail-ward sweep over all passages followed by one head-ward sweep
    pub fn sweep_round(&self, grid: &mut impl GridWrite, passages: &mut [Passage]) -> usize {
        let mut removed = 0;
        for passage in passages.iter_mut() {
            removed += sweep_backward(grid, passage);
        }
        for passage in passages.iter_mut() {
            removed += sweep_forward(grid, passage);
        }
        removed
    }
}

/// Check if a cell leads nowhere
pub fn is_cul_de_sac(grid: &impl GridRead, pos: Position) -> bool {
    grid.empty_neighbours(pos) >= CUL_DE_SAC_EMPTY_NEIGHBOURS
}

fn sweep_backward(grid: &mut impl GridWrite, passage: &mut Passage) -> usize {
    let mut removed = 0;
    let mut idx = passage.len();
    while idx > 0 {
        idx -= 1;
        let dead = passage.get(idx).is_some_and(|pos| is_cul_de_sac(&*grid, pos));
        if dead {
            passage.remove(idx, grid);
            removed += 1;
        }
    }
    removed
}

fn sweep_forward(grid: &mut impl GridWrite, passage: &mut Passage) -> usize {
    let mut removed = 0;
    let mut idx = 0;
    while let Some(pos) = passage.get(idx) {
        if is_cul_de_sac(&*grid, pos) {
            passage.remove(idx, grid);
            removed += 1;
        } else {
            idx += 1;
        }
    }
    removed
}
