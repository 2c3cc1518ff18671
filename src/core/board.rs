use crate::core::Player;

/// A single field of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub occupied_by: Option<Player>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.occupied_by.is_none()
    }
}

/// Square grid stored in row-major order (`index = row * row_size + column`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    row_size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(row_size: usize) -> Self {
        Self {
            row_size,
            cells: vec![Cell::default(); row_size * row_size],
        }
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn occupant(&self, index: usize) -> Option<Player> {
        self.get(index).and_then(|cell| cell.occupied_by)
    }

    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.get(index), Some(cell) if cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// `(row, column)` of an index, both 0-based.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.row_size, index % self.row_size)
    }

    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.row_size + column
    }

    /// Occupies an empty cell. Returns false if the cell is taken or out of range.
    pub(crate) fn mark(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                cell.occupied_by = Some(player);
                true
            }
            _ => false,
        }
    }
}
