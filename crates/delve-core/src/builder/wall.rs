//! Wall placement
//!
//! Every empty cell that touches carved geometry through any of its eight
//! neighbours becomes a wall. Candidates are collected before any wall is
//! raised, so new walls never cause further walls.

use crate::stage::{CellType, ElementIds, GridRead, GridWrite, Position, Wall};

/// Encloses rooms, passages and doors in walls
#[derive(Debug, Clone, Copy, Default)]
pub struct WallBuilder;

impl WallBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, grid: &mut impl GridWrite, ids: &mut ElementIds) -> Vec<Wall> {
        let sites = wall_sites(&*grid);
        let walls: Vec<Wall> = sites
            .into_iter()
            .map(|pos| Wall::raise(ids.next_id(), pos, grid))
            .collect();

        tracing::debug!(walls = walls.len(), "walls raised");
        walls
    }
}

/// Empty cells bordering non-wall geometry, row by row
pub fn wall_sites(grid: &impl GridRead) -> Vec<Position> {
    grid.positions()
        .filter(|pos| grid.get(*pos) == CellType::Empty)
        .filter(|pos| {
            pos.neighbours8()
                .into_iter()
                .any(|n| grid.try_get(n).is_some_and(|typ| typ.needs_wall()))
        })
        .collect()
}
