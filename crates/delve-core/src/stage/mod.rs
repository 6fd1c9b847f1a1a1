//! Stage data model
//!
//! Contains the cell grid, coordinates, and the elements builders carve.

mod cell;
mod element;
mod grid;
mod layout;
mod position;
mod rect;

pub use cell::CellType;
pub use element::{Door, Element, ElementId, ElementIds, Passage, Room, Wall};
pub use grid::{Grid, GridRead, GridWrite};
pub use layout::Stage;
pub use position::{Direction, Position};
pub use rect::Rect;
