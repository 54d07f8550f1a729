use super::types::{CELL_COUNT, Cell, Mark};

/// 3x3 board stored row-major: 0,1,2 top row, 3,4,5 middle, 6,7,8 bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// # Panics
    /// If `index` is not in `0..9`.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// # Panics
    /// If `index` is not in `0..9`.
    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        self.set(index, Cell::Marked(mark));
    }

    pub fn clear(&mut self, index: usize) {
        self.set(index, Cell::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Builds a board from a 9-char picture, `X`, `O` or `.` per cell, whitespace ignored.
    #[cfg(test)]
    pub(crate) fn parse(picture: &str) -> Self {
        let cells: Vec<Cell> = picture
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                '.' => Cell::Empty,
                other => panic!("unexpected board char {other:?}"),
            })
            .collect();
        Self::from_cells(cells.try_into().expect("board picture must have 9 cells"))
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}
