//! Cell grid and the capabilities builders use to access it
//!
//! Builders that only inspect the stage take `&impl GridRead`; builders that
//! carve take `&mut impl GridWrite`. [`Grid`] implements both.

use core::fmt;

use crate::error::GridError;

use super::{CellType, Position};

/// Read-only view of a stage grid
///
/// This is everything a renderer needs: dimensions, a bounds test, and the
/// classification of each cell.
pub trait GridRead {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Check if the position lies on the grid
    fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }

    /// Classification of an in-bounds cell
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid. Callers probing near the edge
    /// should use [`try_get`](Self::try_get).
    fn get(&self, pos: Position) -> CellType;

    /// Classification of the cell, or `None` outside the grid
    fn try_get(&self, pos: Position) -> Option<CellType> {
        self.contains(pos).then(|| self.get(pos))
    }

    /// Check if the cell is on the grid and empty
    fn is_empty_at(&self, pos: Position) -> bool {
        self.try_get(pos) == Some(CellType::Empty)
    }

    /// Every position, row by row
    fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Positions not on the outer border, row by row
    fn interior(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width(), self.height());
        (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| Position::new(x, y)))
    }

    /// Number of orthogonal neighbours that are on the grid and empty
    fn empty_neighbours(&self, pos: Position) -> usize {
        pos.neighbours4()
            .into_iter()
            .filter(|n| self.is_empty_at(*n))
            .count()
    }
}

/// Mutable access to a stage grid
pub trait GridWrite: GridRead {
    /// Reclassify an in-bounds cell
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn set(&mut self, pos: Position, typ: CellType);

    /// Reclassify a cell, reporting out-of-bounds positions instead of panicking
    fn try_set(&mut self, pos: Position, typ: CellType) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                position: pos,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set(pos, typ);
        Ok(())
    }
}

/// Fixed-size grid of cell classifications, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create an all-empty grid
    ///
    /// Dimensions are validated by the stage configuration; non-positive
    /// values here yield a grid with no cells.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![CellType::Empty; width as usize * height as usize],
        }
    }

    /// Parse a layout drawn with [`CellType::symbol`] characters
    ///
    /// Each line is one row; all rows must have the same length.
    pub fn from_ascii(layout: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout.lines().collect();
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.chars().count();
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let typ = CellType::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row,
                    column,
                })?;
                cells.push(typ);
            }
        }

        Ok(Self {
            width: expected as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    /// Count cells with the given classification
    pub fn count(&self, typ: CellType) -> usize {
        self.cells.iter().filter(|c| **c == typ).count()
    }

    /// Cells row by row
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    fn index(&self, pos: Position) -> usize {
        if !self.contains(pos) {
            let err = GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            };
            panic!("{err}");
        }
        (pos.y * self.width + pos.x) as usize
    }
}

impl GridRead for Grid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get(&self, pos: Position) -> CellType {
        self.cells[self.index(pos)]
    }
}

impl GridWrite for Grid {
    fn set(&mut self, pos: Position, typ: CellType) {
        let idx = self.index(pos);
        self.cells[idx] = typ;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.count(CellType::Empty), 35);
        assert_eq!(grid.positions().count(), 35);
        assert_eq!(grid.interior().count(), 15);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(4, 4);
        let p = Position::new(3, 1);
        grid.set(p, CellType::Room);
        assert_eq!(grid.get(p), CellType::Room);
        assert_eq!(grid.get(Position::new(1, 3)), CellType::Empty);
        assert_eq!(grid.count(CellType::Room), 1);
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(3, 2);
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 1)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert_eq!(grid.try_get(Position::new(-1, 0)), None);
        assert_eq!(grid.try_get(Position::new(0, 0)), Some(CellType::Empty));

        let err = grid.try_set(Position::new(5, 5), CellType::Wall).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                position: Position::new(5, 5),
                width: 3,
                height: 2,
            }
        );
        assert!(grid.try_set(Position::new(1, 1), CellType::Wall).is_ok());
        assert_eq!(grid.get(Position::new(1, 1)), CellType::Wall);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(3, 3);
        grid.get(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(0, -1), CellType::Wall);
    }

    #[test]
    fn test_empty_neighbours() {
        let grid = Grid::from_ascii(
            "\
#####
#   #
# , #
#####",
        )
        .unwrap();
        assert_eq!(grid.empty_neighbours(Position::new(2, 2)), 3);
        assert_eq!(grid.empty_neighbours(Position::new(1, 1)), 2);
        // Off-grid neighbours never count as empty.
        assert_eq!(Grid::new(1, 1).empty_neighbours(Position::new(0, 0)), 0);
    }

    #[test]
    fn test_ascii_round_trip() {
        let layout = "\
#####
#..+,
#####
";
        let grid = Grid::from_ascii(layout).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(Position::new(3, 1)), CellType::Door);
        assert_eq!(grid.get(Position::new(4, 1)), CellType::Passage);
        assert_eq!(grid.to_string(), layout);
    }

    #[test]
    fn test_ascii_errors() {
        assert_eq!(Grid::from_ascii(""), Err(GridError::Empty));
        assert_eq!(
            Grid::from_ascii("###\n##"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            Grid::from_ascii("#x#"),
            Err(GridError::UnknownSymbol {
                symbol: 'x',
                row: 0,
                column: 1,
            })
        );
    }
}
