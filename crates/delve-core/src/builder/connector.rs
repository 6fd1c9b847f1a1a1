//! Connector detection
//!
//! A connector cell is an empty interior cell that touches at least
//! `threshold` distinct regions (rooms or passages) through its four edges.
//! Cells are grouped by the exact set of regions they join.

use hashbrown::HashMap;
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::config::ConnectorConfig;
use crate::stage::{CellType, ElementId, GridRead, Passage, Position, Room};

/// Connector cells keyed by the regions they join, in first-seen scan order
pub type ConnectorMap = IndexMap<Connector, Vec<Position>>;

/// Set of distinct regions reachable through one empty cell
///
/// Members are kept sorted by id, so two connectors built from the same
/// regions in any order compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connector {
    members: SmallVec<[ElementId; 4]>,
}

impl Connector {
    pub fn new(members: impl IntoIterator<Item = ElementId>) -> Self {
        let mut members: SmallVec<[ElementId; 4]> = members.into_iter().collect();
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    /// Region ids in ascending order
    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.members.binary_search(&id).is_ok()
    }
}

/// Which region owns each room or passage cell
///
/// Rooms are indexed before passages and the first owner of a cell wins.
#[derive(Debug, Clone, Default)]
struct RegionIndex {
    owners: HashMap<Position, ElementId>,
}

impl RegionIndex {
    fn new(rooms: &[Room], passages: &[Passage]) -> Self {
        let mut owners = HashMap::new();
        for room in rooms {
            for pos in room.rect().positions() {
                owners.entry(pos).or_insert(room.id());
            }
        }
        for passage in passages {
            for pos in passage.iter() {
                owners.entry(pos).or_insert(passage.id());
            }
        }
        Self { owners }
    }

    fn owner(&self, pos: Position) -> Option<ElementId> {
        self.owners.get(&pos).copied()
    }
}

/// Finds the empty cells where separate regions could be joined
#[derive(Debug, Clone)]
pub struct ConnectorBuilder<'a> {
    config: &'a ConnectorConfig,
}

impl<'a> ConnectorBuilder<'a> {
    pub fn new(config: &'a ConnectorConfig) -> Self {
        Self { config }
    }

    /// Scan every interior empty cell and group connector cells by signature
    pub fn build(
        &self,
        grid: &impl GridRead,
        rooms: &[Room],
        passages: &[Passage],
    ) -> ConnectorMap {
        let index = RegionIndex::new(rooms, passages);
        let mut connectors = ConnectorMap::new();

        for pos in grid.interior() {
            if grid.get(pos) != CellType::Empty {
                continue;
            }

            let connector = adjacent_regions(grid, &index, pos);
            if connector.len() >= self.config.threshold {
                connectors.entry(connector).or_default().push(pos);
            }
        }

        tracing::debug!(
            connectors = connectors.len(),
            cells = connectors.values().map(Vec::len).sum::<usize>(),
            "connectors found"
        );
        connectors
    }
}

/// Distinct regions on the four sides of `pos`
fn adjacent_regions(grid: &impl GridRead, index: &RegionIndex, pos: Position) -> Connector {
    Connector::new(
        pos.neighbours4()
            .into_iter()
            .filter(|n| grid.try_get(*n).is_some_and(|typ| typ.is_region()))
            .filter_map(|n| index.owner(n)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{ElementIds, Grid, Rect};
    use hashbrown::HashSet;

    #[test]
    fn test_connector_order_independent() {
        let a = ElementId(4);
        let b = ElementId(9);
        let ab = Connector::new([a, b]);
        let ba = Connector::new([b, a]);
        assert_eq!(ab, ba);

        let mut set = HashSet::new();
        set.insert(ab.clone());
        assert!(!set.insert(ba));
        assert_eq!(ab.members(), &[a, b]);
        assert!(ab.contains(b));
        assert!(!ab.contains(ElementId(5)));
    }

    #[test]
    fn test_connector_dedups_members() {
        let c = Connector::new([ElementId(2), ElementId(2), ElementId(1)]);
        assert_eq!(c.len(), 2);
        assert_ne!(c, Connector::new([ElementId(1)]));
        assert!(Connector::new([]).is_empty());
    }

    /// Two rooms separated by a single empty column, and a passage below
    /// reaching up to the gap.
    fn two_rooms() -> (Grid, Vec<Room>, Vec<Passage>) {
        let mut grid = Grid::new(11, 8);
        let mut ids = ElementIds::new();
        let rooms = vec![
            Room::carve(ids.next_id(), Rect::new(1, 1, 4, 3), &mut grid),
            Room::carve(ids.next_id(), Rect::new(6, 1, 4, 3), &mut grid),
        ];
        let passages = vec![Passage::carve(
            ids.next_id(),
            [Position::new(5, 5), Position::new(5, 6)],
            &mut grid,
        )];
        (grid, rooms, passages)
    }

    #[test]
    fn test_cells_between_rooms() {
        let (grid, rooms, passages) = two_rooms();
        let config = ConnectorConfig::default();
        let connectors = ConnectorBuilder::new(&config).build(&grid, &rooms, &passages);

        let both = Connector::new([rooms[0].id(), rooms[1].id()]);
        assert_eq!(
            connectors.get(&both),
            Some(&vec![
                Position::new(5, 1),
                Position::new(5, 2),
                Position::new(5, 3),
            ])
        );
        // (5, 4) only touches the passage below it.
        assert_eq!(connectors.len(), 1);
    }

    #[test]
    fn test_threshold_one_includes_single_region_cells() {
        let (grid, rooms, passages) = two_rooms();
        let config = ConnectorConfig { threshold: 1 };
        let connectors = ConnectorBuilder::new(&config).build(&grid, &rooms, &passages);

        let passage_only = Connector::new([passages[0].id()]);
        let cells = connectors.get(&passage_only).unwrap();
        assert!(cells.contains(&Position::new(5, 4)));
        assert!(cells.contains(&Position::new(4, 5)));
        assert!(connectors.contains_key(&Connector::new([rooms[0].id()])));
    }

    #[test]
    fn test_three_way_connector() {
        let layout = "\
#######
#.. ..#
#.. ..#
###,###
###,###
#######";
        let mut grid = Grid::from_ascii(layout).unwrap();
        let mut ids = ElementIds::new();
        // Re-register the drawn regions as elements so they have ids.
        let rooms = vec![
            Room::carve(ids.next_id(), Rect::new(1, 1, 2, 2), &mut grid),
            Room::carve(ids.next_id(), Rect::new(4, 1, 2, 2), &mut grid),
        ];
        let passages = vec![Passage::carve(
            ids.next_id(),
            [Position::new(3, 3), Position::new(3, 4)],
            &mut grid,
        )];

        let config = ConnectorConfig::default();
        let connectors = ConnectorBuilder::new(&config).build(&grid, &rooms, &passages);

        let all = Connector::new([ElementId(2), ElementId(0), ElementId(1)]);
        assert_eq!(connectors.get(&all), Some(&vec![Position::new(3, 2)]));
        assert_eq!(
            connectors.get(&Connector::new([ElementId(0), ElementId(1)])),
            Some(&vec![Position::new(3, 1)])
        );
    }

    #[test]
    fn test_no_regions_no_connectors() {
        let grid = Grid::new(10, 10);
        let config = ConnectorConfig::default();
        let connectors = ConnectorBuilder::new(&config).build(&grid, &[], &[]);
        assert!(connectors.is_empty());
    }
}
