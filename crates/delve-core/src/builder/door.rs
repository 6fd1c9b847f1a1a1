//! Door placement
//!
//! Connector cells are clustered by 4-adjacency regardless of which regions
//! they join, and one random cell per cluster becomes a door. Opening every
//! connector cell would riddle the stage with holes.

use smallvec::SmallVec;

use crate::config::ConnectorConfig;
use crate::rng::StageRng;
use crate::stage::{Door, ElementIds, GridWrite, Passage, Position, Room};

use super::connector::{ConnectorBuilder, ConnectorMap};

/// Opens one door per cluster of connector cells
#[derive(Debug, Clone)]
pub struct DoorBuilder<'a> {
    config: &'a ConnectorConfig,
}

impl<'a> DoorBuilder<'a> {
    pub fn new(config: &'a ConnectorConfig) -> Self {
        Self { config }
    }

    /// Find connectors, cluster them, and carve a door in each cluster
    pub fn build(
        &self,
        grid: &mut impl GridWrite,
        rooms: &[Room],
        passages: &[Passage],
        ids: &mut ElementIds,
        rng: &mut StageRng,
    ) -> Vec<Door> {
        let connectors = ConnectorBuilder::new(self.config).build(&*grid, rooms, passages);
        let groups = group_cells(&connectors);

        let mut doors = Vec::with_capacity(groups.len());
        for group in &groups {
            if let Some(&pos) = rng.choose(group) {
                doors.push(Door::carve(ids.next_id(), pos, grid));
            }
        }

        tracing::debug!(groups = groups.len(), doors = doors.len(), "doors carved");
        doors
    }
}

/// Cluster every connector cell into 4-connected groups
///
/// Cells are visited in connector order. A cell joins the group it touches;
/// a cell touching several groups merges them into the earliest one.
pub fn group_cells(connectors: &ConnectorMap) -> Vec<Vec<Position>> {
    let mut groups: Vec<Vec<Position>> = Vec::new();

    for pos in connectors.values().flatten().copied() {
        let touching: SmallVec<[usize; 4]> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.iter().any(|p| p.is_adjacent(pos)))
            .map(|(idx, _)| idx)
            .collect();

        match touching.split_first() {
            None => groups.push(vec![pos]),
            Some((&first, rest)) => {
                for &idx in rest.iter().rev() {
                    let merged = groups.remove(idx);
                    groups[first].extend(merged);
                }
                groups[first].push(pos);
            }
        }
    }

    groups
}
