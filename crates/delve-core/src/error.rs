//! Error types for stage generation
//!
//! Configuration problems are reported before any grid is allocated.
//! Grid errors cover out-of-bounds access and malformed ASCII layouts.

use thiserror::Error;

use crate::stage::Position;

/// Invalid tunables rejected by [`StageConfig::validate`](crate::StageConfig::validate)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("stage {width}x{height} is smaller than the {min}x{min} minimum")]
    StageTooSmall { width: i32, height: i32, min: i32 },

    #[error("stage {width}x{height} has more cells than can be addressed")]
    StageTooLarge { width: i32, height: i32 },

    #[error("{what} range [{min}, {max}) is empty")]
    EmptyRange {
        what: &'static str,
        min: i32,
        max: i32,
    },

    #[error("{what} must be at least 1, got {value}")]
    NonPositive { what: &'static str, value: i32 },

    #[error("room {what} up to {largest} does not fit inside a stage interior of {interior}")]
    RoomTooLarge {
        what: &'static str,
        largest: i32,
        interior: i32,
    },

    #[error("room gap must not be negative, got {gap}")]
    NegativeGap { gap: i32 },

    #[error("branch probability must lie in [0, 1], got {probability}")]
    InvalidProbability { probability: f64 },

    #[error("connector threshold must be at least 1")]
    ZeroConnectorThreshold,
}

/// Grid access and layout errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position ({}, {}) is outside the {width}x{height} grid", .position.x, .position.y)]
    OutOfBounds {
        position: Position,
        width: i32,
        height: i32,
    },

    #[error("layout has no rows")]
    Empty,

    #[error("layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
}
