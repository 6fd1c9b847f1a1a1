//! Finished stage handed to consumers

use super::{CellType, Door, Element, ElementId, Grid, GridRead, Passage, Position, Room, Wall};

/// A generated stage: the settled grid plus the elements that carved it
///
/// Read-only once built. It implements [`GridRead`] itself, so a renderer can
/// walk it directly.
#[derive(Debug, Clone)]
pub struct Stage {
    grid: Grid,
    /// Sorted by id
    elements: Vec<Element>,
    seed: u64,
}

impl Stage {
    pub(crate) fn new(grid: Grid, mut elements: Vec<Element>, seed: u64) -> Self {
        elements.sort_by_key(Element::id);
        Self {
            grid,
            elements,
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Seed of the RNG the stage was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All elements in id order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements
            .binary_search_by_key(&id, Element::id)
            .ok()
            .map(|idx| &self.elements[idx])
    }

    /// The element covering a position, if any
    pub fn element_at(&self, pos: Position) -> Option<&Element> {
        let typ = self.grid.try_get(pos)?;
        if typ == CellType::Empty {
            return None;
        }
        self.elements
            .iter()
            .find(|e| e.cell_type() == typ && e.contains(pos))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.elements.iter().filter_map(Element::as_room)
    }

    /// Passages that still have cells after trimming
    pub fn passages(&self) -> impl Iterator<Item = &Passage> {
        self.elements.iter().filter_map(Element::as_passage)
    }

    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.elements.iter().filter_map(Element::as_door)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.elements.iter().filter_map(Element::as_wall)
    }
}

impl GridRead for Stage {
    fn width(&self) -> i32 {
        self.grid.width()
    }

    fn height(&self) -> i32 {
        self.grid.height()
    }

    fn get(&self, pos: Position) -> CellType {
        self.grid.get(pos)
    }
}
