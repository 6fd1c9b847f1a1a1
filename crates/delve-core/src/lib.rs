//! Procedural dungeon stage generation
//!
//! A stage is a rectangular grid carved in passes: rooms are scattered by
//! rejection sampling, a maze fills the rock between them, doors join the
//! regions, dead ends are trimmed away, and walls close off everything that
//! was carved.
//!
//! ```
//! use delve_core::{CellType, GridRead, StageBuilder, StageConfig};
//!
//! let stage = StageBuilder::new(StageConfig::new(41, 31))
//!     .build_seeded(7)
//!     .unwrap();
//! assert_eq!(stage.width(), 41);
//! assert!(stage.grid().count(CellType::Room) > 0);
//! ```

pub mod builder;
pub mod config;
pub mod consts;
pub mod error;
mod rng;
pub mod stage;

pub use builder::StageBuilder;
pub use config::{ConnectorConfig, PassageConfig, RoomConfig, StageConfig};
pub use error::{ConfigError, GridError};
pub use rng::StageRng;
pub use stage::{
    CellType, Direction, Element, ElementId, Grid, GridRead, GridWrite, Position, Rect, Stage,
};
