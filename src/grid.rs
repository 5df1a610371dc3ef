use crate::config::{CELL_SIZE, FIELD_HEIGHT, FIELD_WIDTH};
use crate::input::Direction;

/// Top-left pixel corner of one grid square.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one `cell_size` step towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.unit();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Play-field geometry: cell size and pixel extents.
///
/// Replaces loose width/height literals so every bounds check goes through
/// the same predicate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Field {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Field {
    /// The 800x600 field of 20-unit cells.
    pub const CLASSIC: Self = Self {
        cell_size: CELL_SIZE,
        width: FIELD_WIDTH,
        height: FIELD_HEIGHT,
    };

    /// Number of cell columns.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Largest legal x coordinate for a cell.
    #[must_use]
    pub fn max_x(self) -> i32 {
        self.width - self.cell_size
    }

    /// Largest legal y coordinate for a cell.
    #[must_use]
    pub fn max_y(self) -> i32 {
        self.height - self.cell_size
    }

    /// Returns true when `cell` lies fully inside the field.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        (0..=self.max_x()).contains(&cell.x) && (0..=self.max_y()).contains(&cell.y)
    }

    /// Returns true when both coordinates are multiples of the cell size.
    #[must_use]
    pub fn is_aligned(self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Field centre snapped down onto the grid.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: self.columns() / 2 * self.cell_size,
            y: self.rows() / 2 * self.cell_size,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, Field};

    #[test]
    fn classic_field_is_forty_by_thirty() {
        let field = Field::CLASSIC;

        assert_eq!(field.columns(), 40);
        assert_eq!(field.rows(), 30);
        assert_eq!(field.center(), Cell::new(400, 300));
    }

    #[test]
    fn bounds_include_last_cell_and_exclude_edges() {
        let field = Field::CLASSIC;

        assert!(field.in_bounds(Cell::new(0, 0)));
        assert!(field.in_bounds(Cell::new(780, 580)));
        assert!(!field.in_bounds(Cell::new(-20, 0)));
        assert!(!field.in_bounds(Cell::new(800, 0)));
        assert!(!field.in_bounds(Cell::new(0, -20)));
        assert!(!field.in_bounds(Cell::new(0, 600)));
    }

    #[test]
    fn stepping_moves_one_cell_along_one_axis() {
        let origin = Cell::new(400, 300);

        assert_eq!(origin.stepped(Direction::Up, 20), Cell::new(400, 280));
        assert_eq!(origin.stepped(Direction::Down, 20), Cell::new(400, 320));
        assert_eq!(origin.stepped(Direction::Left, 20), Cell::new(380, 300));
        assert_eq!(origin.stepped(Direction::Right, 20), Cell::new(420, 300));
    }

    #[test]
    fn alignment_checks_both_axes() {
        let field = Field::CLASSIC;

        assert!(field.is_aligned(Cell::new(40, 560)));
        assert!(!field.is_aligned(Cell::new(41, 560)));
        assert!(!field.is_aligned(Cell::new(40, 565)));
    }
}
