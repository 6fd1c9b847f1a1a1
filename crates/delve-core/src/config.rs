//! Stage generation tunables
//!
//! All fields are public and (de)serializable with defaults, so an embedding
//! application can load partial configurations from its own files.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Room placement tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Number of rectangles sampled; each either fits or is discarded
    pub attempts: u32,
    /// Room widths are drawn from `width_min..width_max`
    pub width_min: i32,
    pub width_max: i32,
    /// Room heights are drawn from `height_min..height_max`
    pub height_min: i32,
    pub height_max: i32,
    /// Minimum number of cells kept free between two rooms
    pub gap: i32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            attempts: ROOM_ATTEMPTS,
            width_min: ROOM_WIDTH_MIN,
            width_max: ROOM_WIDTH_MAX,
            height_min: ROOM_HEIGHT_MIN,
            height_max: ROOM_HEIGHT_MAX,
            gap: ROOM_GAP,
        }
    }
}

/// Maze carving tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassageConfig {
    /// Chance of turning even when going straight is still possible
    pub branch_probability: f64,
    /// Cells carved per step are drawn from `run_min..run_max`
    pub run_min: i32,
    pub run_max: i32,
}

impl Default for PassageConfig {
    fn default() -> Self {
        Self {
            branch_probability: BRANCH_PROBABILITY,
            run_min: RUN_LENGTH_MIN,
            run_max: RUN_LENGTH_MAX,
        }
    }
}

/// Connector detection tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Distinct rooms/passages an empty cell must touch
    pub threshold: usize,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            threshold: CONNECTOR_THRESHOLD,
        }
    }
}

/// Everything needed to build one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub width: i32,
    pub height: i32,
    pub rooms: RoomConfig,
    pub passages: PassageConfig,
    pub connectors: ConnectorConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: STAGE_WIDTH,
            height: STAGE_HEIGHT,
            rooms: RoomConfig::default(),
            passages: PassageConfig::default(),
            connectors: ConnectorConfig::default(),
        }
    }
}

impl StageConfig {
    /// Default tunables on a stage of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rooms(mut self, rooms: RoomConfig) -> Self {
        self.rooms = rooms;
        self
    }

    #[must_use]
    pub fn with_passages(mut self, passages: PassageConfig) -> Self {
        self.passages = passages;
        self
    }

    #[must_use]
    pub fn with_connectors(mut self, connectors: ConnectorConfig) -> Self {
        self.connectors = connectors;
        self
    }

    /// Check every tunable; nothing is generated from an invalid config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_STAGE_SIZE || self.height < MIN_STAGE_SIZE {
            return Err(ConfigError::StageTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_STAGE_SIZE,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::StageTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        let rooms = &self.rooms;
        check_range("room width", rooms.width_min, rooms.width_max)?;
        check_range("room height", rooms.height_min, rooms.height_max)?;
        // Rooms stay off the border, so the widest one must fit in width - 2.
        check_fits("width", rooms.width_max - 1, self.width - 2)?;
        check_fits("height", rooms.height_max - 1, self.height - 2)?;
        if rooms.gap < 0 {
            return Err(ConfigError::NegativeGap { gap: rooms.gap });
        }

        let passages = &self.passages;
        if !(0.0..=1.0).contains(&passages.branch_probability) {
            return Err(ConfigError::InvalidProbability {
                probability: passages.branch_probability,
            });
        }
        check_range("passage run length", passages.run_min, passages.run_max)?;

        if self.connectors.threshold == 0 {
            return Err(ConfigError::ZeroConnectorThreshold);
        }

        Ok(())
    }
}

fn check_range(what: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min < 1 {
        return Err(ConfigError::NonPositive { what, value: min });
    }
    if min >= max {
        return Err(ConfigError::EmptyRange { what, min, max });
    }
    Ok(())
}

fn check_fits(what: &'static str, largest: i32, interior: i32) -> Result<(), ConfigError> {
    if largest > interior {
        return Err(ConfigError::RoomTooLarge {
            what,
            largest,
            interior,
        });
    }
    Ok(())
}
