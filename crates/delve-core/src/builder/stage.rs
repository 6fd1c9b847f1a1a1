//! Full stage pipeline
//!
//! Runs the passes in their fixed order on one fresh grid: rooms, maze,
//! doors, dead-end trimming, walls. Every pass draws from the same RNG, so a
//! seed and a configuration determine the stage completely.

use crate::config::StageConfig;
use crate::error::ConfigError;
use crate::rng::StageRng;
use crate::stage::{CellType, Element, ElementIds, Grid, Stage};

use super::{DoorBuilder, PassageBuilder, PassageTrimmer, RoomBuilder, WallBuilder};

/// Builds complete stages from a configuration
#[derive(Debug, Clone, Default)]
pub struct StageBuilder {
    config: StageConfig,
}

impl StageBuilder {
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Build a stage with a fresh RNG seeded from `seed`
    pub fn build_seeded(&self, seed: u64) -> Result<Stage, ConfigError> {
        self.build(&mut StageRng::new(seed))
    }

    /// Build a stage, drawing every random choice from `rng`
    ///
    /// The configuration is validated before anything is generated.
    pub fn build(&self, rng: &mut StageRng) -> Result<Stage, ConfigError> {
        self.config.validate()?;

        let config = &self.config;
        let mut grid = Grid::new(config.width, config.height);
        let mut ids = ElementIds::new();

        let rooms = RoomBuilder::new(&config.rooms).build(&mut grid, &mut ids, rng);
        let mut passages = PassageBuilder::new(&config.passages).build(&mut grid, &mut ids, rng);
        let doors = DoorBuilder::new(&config.connectors).build(
            &mut grid,
            &rooms,
            &passages,
            &mut ids,
            rng,
        );
        PassageTrimmer::new().trim(&mut grid, &mut passages);
        passages.retain(|passage| !passage.is_empty());
        let walls = WallBuilder::new().build(&mut grid, &mut ids);

        tracing::info!(
            seed = rng.seed(),
            width = config.width,
            height = config.height,
            rooms = rooms.len(),
            passages = passages.len(),
            doors = doors.len(),
            walls = walls.len(),
            passage_cells = grid.count(CellType::Passage),
            "stage generated"
        );

        let elements: Vec<Element> = rooms
            .into_iter()
            .map(Element::from)
            .chain(passages.into_iter().map(Element::from))
            .chain(doors.into_iter().map(Element::from))
            .chain(walls.into_iter().map(Element::from))
            .collect();

        Ok(Stage::new(grid, elements, rng.seed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomConfig;
    use crate::stage::{GridRead, Passage, Rect};

    fn small() -> StageConfig {
        StageConfig::new(41, 31).with_rooms(RoomConfig {
            attempts: 40,
            width_min: 3,
            width_max: 8,
            height_min: 3,
            height_max: 7,
            gap: 1,
        })
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let builder = StageBuilder::new(StageConfig::new(2, 40));
        let err = builder.build_seeded(1).unwrap_err();
        assert!(matches!(err, ConfigError::StageTooSmall { .. }));
    }

    #[test]
    fn test_single_room_scenario() {
        let config = StageConfig::new(7, 7).with_rooms(RoomConfig {
            attempts: 1,
            width_min: 5,
            width_max: 6,
            height_min: 5,
            height_max: 6,
            gap: 1,
        });
        let stage = StageBuilder::new(config).build_seeded(3).unwrap();

        let rooms: Vec<_> = stage.rooms().collect();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].rect(), Rect::new(1, 1, 5, 5));
        assert_eq!(stage.passages().count(), 0);
        assert_eq!(stage.doors().count(), 0);
        assert_eq!(stage.walls().count(), 24);
        for pos in stage.positions() {
            let border = pos.x == 0 || pos.y == 0 || pos.x == 6 || pos.y == 6;
            let expected = if border { CellType::Wall } else { CellType::Room };
            assert_eq!(stage.get(pos), expected, "{pos:?}");
        }
    }

    #[test]
    fn test_same_seed_same_stage() {
        let builder = StageBuilder::new(small());
        let a = builder.build_seeded(2024).unwrap();
        let b = builder.build_seeded(2024).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.elements(), b.elements());
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn test_elements_match_grid() {
        let stage = StageBuilder::new(small()).build_seeded(17).unwrap();
        let grid = stage.grid();

        let passage_cells: usize = stage.passages().map(Passage::len).sum();
        assert_eq!(passage_cells, grid.count(CellType::Passage));
        assert_eq!(stage.doors().count(), grid.count(CellType::Door));
        assert_eq!(stage.walls().count(), grid.count(CellType::Wall));
        let room_cells: i32 = stage.rooms().map(|r| r.rect().area()).sum();
        assert_eq!(room_cells as usize, grid.count(CellType::Room));
        assert!(stage.passages().all(|p| !p.is_empty()));

        // Trimmed-away passages leave gaps, but ids stay strictly ordered.
        for pair in stage.elements().windows(2) {
            assert!(pair[0].id() < pair[1].id());
        }
    }

    #[test]
    fn test_no_dead_ends_or_open_edges() {
        let stage = StageBuilder::new(small()).build_seeded(99).unwrap();

        for pos in stage.positions() {
            let typ = stage.get(pos);
            if typ == CellType::Passage {
                let blocked = pos
                    .neighbours4()
                    .iter()
                    .filter(|n| !stage.try_get(**n).is_some_and(|t| t.is_passable()))
                    .count();
                assert!(blocked < 3, "dead end at {pos:?}");
            }
            if typ.needs_wall() {
                assert!(
                    pos.neighbours8()
                        .iter()
                        .all(|n| stage.try_get(*n) != Some(CellType::Empty)),
                    "{pos:?} is not enclosed"
                );
            }
        }
    }
}
