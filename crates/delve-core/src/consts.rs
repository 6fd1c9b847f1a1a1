//! Default tunables for stage generation

/// Default stage dimensions
pub const STAGE_WIDTH: i32 = 89;
pub const STAGE_HEIGHT: i32 = 49;

/// Smallest stage that still has an interior cell
pub const MIN_STAGE_SIZE: i32 = 3;

/// Room placement defaults
pub const ROOM_ATTEMPTS: u32 = 100;
pub const ROOM_WIDTH_MIN: i32 = 10;
pub const ROOM_WIDTH_MAX: i32 = 30;
pub const ROOM_HEIGHT_MIN: i32 = 10;
pub const ROOM_HEIGHT_MAX: i32 = 20;
pub const ROOM_GAP: i32 = 1;

/// Chance of turning at a junction even when going straight is still possible
pub const BRANCH_PROBABILITY: f64 = 0.25;

/// Cells carved per maze step, sampled from `RUN_LENGTH_MIN..RUN_LENGTH_MAX`
pub const RUN_LENGTH_MIN: i32 = 2;
pub const RUN_LENGTH_MAX: i32 = 4;

/// Distinct regions an empty cell must touch to become a connector
pub const CONNECTOR_THRESHOLD: usize = 2;

/// Empty orthogonal neighbours that make a passage cell a cul-de-sac
pub const CUL_DE_SAC_EMPTY_NEIGHBOURS: usize = 3;
