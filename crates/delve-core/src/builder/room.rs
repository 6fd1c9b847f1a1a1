//! Room placement by rejection sampling
//!
//! Each attempt samples one rectangle and keeps it only if, grown by the
//! configured gap, it overlaps none of the rooms accepted so far. Failed
//! attempts are simply dropped, so fewer rooms than attempts is normal.

use crate::config::RoomConfig;
use crate::rng::StageRng;
use crate::stage::{ElementIds, GridWrite, Rect, Room};

/// Places non-overlapping rooms onto an empty grid
#[derive(Debug, Clone)]
pub struct RoomBuilder<'a> {
    config: &'a RoomConfig,
}

impl<'a> RoomBuilder<'a> {
    pub fn new(config: &'a RoomConfig) -> Self {
        Self { config }
    }

    /// Run every attempt and stamp the accepted rooms
    pub fn build(
        &self,
        grid: &mut impl GridWrite,
        ids: &mut ElementIds,
        rng: &mut StageRng,
    ) -> Vec<Room> {
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..self.config.attempts {
            let rect = self.random_rect(grid.width(), grid.height(), rng);

            if self.overlaps(&rect, &rooms) {
                tracing::trace!(?rect, "room rejected");
                continue;
            }

            rooms.push(Room::carve(ids.next_id(), rect, grid));
        }

        tracing::debug!(
            placed = rooms.len(),
            attempts = self.config.attempts,
            "rooms placed"
        );
        rooms
    }

    /// Sample a rectangle that stays clear of the border row and column
    fn random_rect(&self, stage_width: i32, stage_height: i32, rng: &mut StageRng) -> Rect {
        let width = rng.range(self.config.width_min..self.config.width_max);
        let height = rng.range(self.config.height_min..self.config.height_max);
        let x = rng.range(1..stage_width - width);
        let y = rng.range(1..stage_height - height);

        Rect::new(x, y, width, height)
    }

    /// Check the rectangle, grown by the gap, against every accepted room
    fn overlaps(&self, rect: &Rect, rooms: &[Room]) -> bool {
        let padded = rect.expand(self.config.gap);
        rooms.iter().any(|other| padded.overlaps(&other.rect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{CellType, Grid, GridRead, Position};

    fn config(attempts: u32, size: core::ops::Range<i32>, gap: i32) -> RoomConfig {
        RoomConfig {
            attempts,
            width_min: size.start,
            width_max: size.end,
            height_min: size.start,
            height_max: size.end,
            gap,
        }
    }

    #[test]
    fn test_single_room_fills_interior() {
        let mut grid = Grid::new(7, 7);
        let mut ids = ElementIds::new();
        let mut rng = StageRng::new(1);
        let config = config(1, 5..6, 0);

        let rooms = RoomBuilder::new(&config).build(&mut grid, &mut ids, &mut rng);

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].rect(), Rect::new(1, 1, 5, 5));
        assert_eq!(grid.count(CellType::Room), 25);
        for pos in grid.positions() {
            let border = pos.x == 0 || pos.y == 0 || pos.x == 6 || pos.y == 6;
            assert_eq!(grid.get(pos) == CellType::Empty, border, "{pos:?}");
        }
    }

    #[test]
    fn test_rooms_never_touch_border() {
        let mut grid = Grid::new(40, 30);
        let mut ids = ElementIds::new();
        let mut rng = StageRng::new(5);
        let config = config(200, 2..9, 1);

        let rooms = RoomBuilder::new(&config).build(&mut grid, &mut ids, &mut rng);

        assert!(!rooms.is_empty());
        for x in 0..40 {
            assert_eq!(grid.get(Position::new(x, 0)), CellType::Empty);
            assert_eq!(grid.get(Position::new(x, 29)), CellType::Empty);
        }
        for y in 0..30 {
            assert_eq!(grid.get(Position::new(0, y)), CellType::Empty);
            assert_eq!(grid.get(Position::new(39, y)), CellType::Empty);
        }
    }

    #[test]
    fn test_gap_is_respected() {
        let mut grid = Grid::new(60, 40);
        let mut ids = ElementIds::new();
        let mut rng = StageRng::new(77);
        let config = config(300, 3..8, 2);

        let rooms = RoomBuilder::new(&config).build(&mut grid, &mut ids, &mut rng);

        assert!(rooms.len() > 1);
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                assert!(
                    !a.rect().expand(2).overlaps(&b.rect()),
                    "{:?} too close to {:?}",
                    a.rect(),
                    b.rect()
                );
            }
        }
    }

    #[test]
    fn test_zero_attempts_places_nothing() {
        let mut grid = Grid::new(20, 20);
        let mut ids = ElementIds::new();
        let mut rng = StageRng::new(3);
        let config = config(0, 2..4, 1);

        let rooms = RoomBuilder::new(&config).build(&mut grid, &mut ids, &mut rng);

        assert!(rooms.is_empty());
        assert_eq!(grid.count(CellType::Empty), 400);
        assert_eq!(ids.allocated(), 0);
    }

    #[test]
    fn test_ids_follow_acceptance_order() {
        let mut grid = Grid::new(50, 50);
        let mut ids = ElementIds::new();
        let mut rng = StageRng::new(11);
        let config = config(50, 2..6, 1);

        let rooms = RoomBuilder::new(&config).build(&mut grid, &mut ids, &mut rng);

        for (idx, room) in rooms.iter().enumerate() {
            assert_eq!(room.id().0 as usize, idx);
        }
    }
}
