//! Stage elements: the geometry each builder carves into the grid
//!
//! Constructing an element stamps its cell type onto the grid. Elements own
//! their geometry but never the grid itself.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{CellType, GridWrite, Position, Rect};

/// Identifier of an element within one stage
///
/// Ids are handed out in creation order, so they also give connectors a
/// stable total order over their members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// Hands out sequential [`ElementId`]s
#[derive(Debug, Clone, Default)]
pub struct ElementIds {
    next: u32,
}

impl ElementIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids allocated so far
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// Rectangular room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: ElementId,
    rect: Rect,
}

impl Room {
    /// Create the room and mark every covered cell as [`CellType::Room`]
    pub fn carve(id: ElementId, rect: Rect, grid: &mut impl GridWrite) -> Self {
        for pos in rect.positions() {
            grid.set(pos, CellType::Room);
        }
        Self { id, rect }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.rect.contains(pos)
    }
}

/// Maze passage: cells in carve order, trimmable from either end
///
/// Consecutive cells inside one carved run are adjacent; after the maze walk
/// backtracks, the next run starts beside an earlier cell instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    id: ElementId,
    cells: VecDeque<Position>,
}

impl Passage {
    /// Create the passage and mark its cells as [`CellType::Passage`]
    pub fn carve(
        id: ElementId,
        cells: impl IntoIterator<Item = Position>,
        grid: &mut impl GridWrite,
    ) -> Self {
        let cells: VecDeque<Position> = cells.into_iter().collect();
        for pos in &cells {
            grid.set(*pos, CellType::Passage);
        }
        Self { id, cells }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First carved cell
    pub fn front(&self) -> Option<Position> {
        self.cells.front().copied()
    }

    /// Last carved cell
    pub fn back(&self) -> Option<Position> {
        self.cells.back().copied()
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    /// Cells front to back; call `.rev()` for back to front
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Remove the first cell, returning it to [`CellType::Empty`]
    pub fn pop_front(&mut self, grid: &mut impl GridWrite) -> Option<Position> {
        let pos = self.cells.pop_front()?;
        grid.set(pos, CellType::Empty);
        Some(pos)
    }

    /// Remove the last cell, returning it to [`CellType::Empty`]
    pub fn pop_back(&mut self, grid: &mut impl GridWrite) -> Option<Position> {
        let pos = self.cells.pop_back()?;
        grid.set(pos, CellType::Empty);
        Some(pos)
    }

    /// Remove the cell at `index`, returning it to [`CellType::Empty`]
    pub fn remove(&mut self, index: usize, grid: &mut impl GridWrite) -> Option<Position> {
        if index == 0 {
            return self.pop_front(grid);
        }
        if index + 1 == self.cells.len() {
            return self.pop_back(grid);
        }
        let pos = self.cells.remove(index)?;
        grid.set(pos, CellType::Empty);
        Some(pos)
    }
}

/// Single wall cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    id: ElementId,
    position: Position,
}

impl Wall {
    /// Create the wall and mark its cell as [`CellType::Wall`]
    pub fn raise(id: ElementId, position: Position, grid: &mut impl GridWrite) -> Self {
        grid.set(position, CellType::Wall);
        Self { id, position }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Single door cell joining two or more regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    id: ElementId,
    position: Position,
}

impl Door {
    /// Create the door and mark its cell as [`CellType::Door`]
    pub fn carve(id: ElementId, position: Position, grid: &mut impl GridWrite) -> Self {
        grid.set(position, CellType::Door);
        Self { id, position }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Any element of a finished stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Room(Room),
    Passage(Passage),
    Wall(Wall),
    Door(Door),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Room(room) => room.id(),
            Element::Passage(passage) => passage.id(),
            Element::Wall(wall) => wall.id(),
            Element::Door(door) => door.id(),
        }
    }

    /// Check if the element's geometry covers the position
    pub fn contains(&self, pos: Position) -> bool {
        match self {
            Element::Room(room) => room.contains(pos),
            Element::Passage(passage) => passage.contains(pos),
            Element::Wall(wall) => wall.position() == pos,
            Element::Door(door) => door.position() == pos,
        }
    }

    /// The classification this element stamps onto the grid
    pub const fn cell_type(&self) -> CellType {
        match self {
            Element::Room(_) => CellType::Room,
            Element::Passage(_) => CellType::Passage,
            Element::Wall(_) => CellType::Wall,
            Element::Door(_) => CellType::Door,
        }
    }

    pub fn as_room(&self) -> Option<&Room> {
        match self {
            Element::Room(room) => Some(room),
            _ => None,
        }
    }

    pub fn as_passage(&self) -> Option<&Passage> {
        match self {
            Element::Passage(passage) => Some(passage),
            _ => None,
        }
    }

    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Element::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn as_door(&self) -> Option<&Door> {
        match self {
            Element::Door(door) => Some(door),
            _ => None,
        }
    }
}

impl From<Room> for Element {
    fn from(room: Room) -> Self {
        Element::Room(room)
    }
}

impl From<Passage> for Element {
    fn from(passage: Passage) -> Self {
        Element::Passage(passage)
    }
}

impl From<Wall> for Element {
    fn from(wall: Wall) -> Self {
        Element::Wall(wall)
    }
}

impl From<Door> for Element {
    fn from(door: Door) -> Self {
        Element::Door(door)
    }
}
