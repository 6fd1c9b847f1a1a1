//! Maze carving
//!
//! Grows passages into every empty pocket left after room placement. Seeds
//! are scanned row by row; each seed runs a randomized depth-first walk that
//! carves straight runs of 2-3 cells at a time. A run is only accepted when
//! every cell in it is empty, uncarved, and isolated from carved geometry on
//! all sides except the one it came from. That isolation keeps a one-cell
//! rock margin between parallel corridors and stops the walk from touching
//! itself diagonally.

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::config::PassageConfig;
use crate::rng::StageRng;
use crate::stage::{CellType, Direction, ElementIds, GridRead, GridWrite, Passage, Position};

/// A direction the walk may take this step, with the cells it would carve
type Way = (Direction, SmallVec<[Position; 4]>);

/// Fills empty space with branching passages
#[derive(Debug, Clone)]
pub struct PassageBuilder<'a> {
    config: &'a PassageConfig,
}

impl<'a> PassageBuilder<'a> {
    pub fn new(config: &'a PassageConfig) -> Self {
        Self { config }
    }

    /// Carve passages from every viable seed
    ///
    /// A seed is an interior empty cell whose four neighbours are also empty.
    /// Walks that never leave their seed produce no passage.
    pub fn build(
        &self,
        grid: &mut impl GridWrite,
        ids: &mut ElementIds,
        rng: &mut StageRng,
    ) -> Vec<Passage> {
        let mut passages = Vec::new();
        let seeds: Vec<Position> = grid.interior().collect();

        for seed in seeds {
            if !is_open(&*grid, seed) {
                continue;
            }

            let geometry = self.walk(&*grid, seed, rng);
            if geometry.len() <= 1 {
                tracing::trace!(?seed, "seed could not grow");
                continue;
            }

            passages.push(Passage::carve(ids.next_id(), geometry, grid));
        }

        tracing::debug!(
            passages = passages.len(),
            cells = passages.iter().map(Passage::len).sum::<usize>(),
            "maze carved"
        );
        passages
    }

    /// Randomized depth-first walk from `start`; returns cells in carve order
    fn walk(&self, grid: &impl GridRead, start: Position, rng: &mut StageRng) -> Vec<Position> {
        let mut geometry = vec![start];
        let mut carved: HashSet<Position> = HashSet::new();
        carved.insert(start);

        let mut stack = vec![start];
        let mut heading: Option<Direction> = None;

        while let Some(&head) = stack.last() {
            let distance = rng.range(self.config.run_min..self.config.run_max);
            let ways: SmallVec<[Way; 4]> = Direction::CARDINAL
                .into_iter()
                .filter_map(|dir| probe(grid, &carved, head, dir, distance).map(|run| (dir, run)))
                .collect();

            if ways.is_empty() {
                stack.pop();
                heading = None;
                continue;
            }

            let straight = heading.and_then(|dir| ways.iter().position(|(d, _)| *d == dir));
            let idx = match straight {
                Some(idx) if !rng.chance(self.config.branch_probability) => idx,
                _ => rng.rn2(ways.len() as u32) as usize,
            };

            let (dir, run) = &ways[idx];
            heading = Some(*dir);
            for pos in run {
                carved.insert(*pos);
                geometry.push(*pos);
            }
            if let Some(&tip) = run.last() {
                stack.push(tip);
            }
        }

        geometry
    }
}

/// Check if a cell and its four neighbours are all on the grid and empty
fn is_open(grid: &impl GridRead, pos: Position) -> bool {
    grid.is_empty_at(pos) && pos.neighbours4().into_iter().all(|n| grid.is_empty_at(n))
}

/// Try to extend the walk `distance` cells from `head` in `dir`
///
/// Returns the run only if every cell in it can be carved.
fn probe(
    grid: &impl GridRead,
    carved: &HashSet<Position>,
    head: Position,
    dir: Direction,
    distance: i32,
) -> Option<SmallVec<[Position; 4]>> {
    let back = dir.opposite();
    let mut run = SmallVec::new();

    for step in 1..=distance {
        let pos = head.offset(dir, step);
        if !grid.is_empty_at(pos) || carved.contains(&pos) {
            return None;
        }

        let isolated = Direction::CARDINAL
            .into_iter()
            .filter(|d| *d != back)
            .map(|d| pos + d)
            .all(|n| grid.try_get(n) == Some(CellType::Empty) && !carved.contains(&n));
        if !isolated {
            return None;
        }

        run.push(pos);
    }

    Some(run)
}
