//! Cell classification

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a grid cell
///
/// Every cell holds exactly one of these at all times; reclassifying a cell
/// is the only way the grid changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty = 0,
    Wall = 1,
    Room = 2,
    Passage = 3,
    Door = 4,
}

impl CellType {
    /// Check if this is a room or a passage, the cell types a connector can join
    pub const fn is_region(&self) -> bool {
        matches!(self, CellType::Room | CellType::Passage)
    }

    /// Check if a wall belongs next to this cell
    pub const fn needs_wall(&self) -> bool {
        !matches!(self, CellType::Empty | CellType::Wall)
    }

    /// Check if this is walkable once the stage is finished
    pub const fn is_passable(&self) -> bool {
        matches!(self, CellType::Room | CellType::Passage | CellType::Door)
    }

    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Empty => ' ',
            CellType::Wall => '#',
            CellType::Room => '.',
            CellType::Passage => ',',
            CellType::Door => '+',
        }
    }

    /// Inverse of [`symbol`](Self::symbol)
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(CellType::Empty),
            '#' => Some(CellType::Wall),
            '.' => Some(CellType::Room),
            ',' => Some(CellType::Passage),
            '+' => Some(CellType::Door),
            _ => None,
        }
    }
}
