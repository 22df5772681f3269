//! Board - the 10x20 well of landed cells
//!
//! Each cell is empty or holds the colour of the piece that landed there.
//! Storage is one flat row-major array, so copies are cheap and nothing allocates.
//! `x` grows to the right (0..10), `y` grows downwards (0..20).
//!
//! `is_valid_placement` is the only collision rule: a placement is legal iff
//! every cell is inside the grid and empty.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major copy of the board, `grid[y][x]`
pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Indices of rows removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Landed cells. Only [`Board::flatten`] fills cells during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// `cells[y * BOARD_WIDTH + x]`
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index, or `None` outside the grid.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// `None` outside the grid, `Some(cell)` inside it.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite one cell. Out-of-grid writes are refused with `false`.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the grid and empty.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Inside the grid and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every cell is inside the grid and currently empty.
    pub fn is_valid_placement(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_valid(x, y))
    }

    /// Write a landed piece's colour into all of its cells.
    ///
    /// Returns false without touching the board if any cell is out of bounds
    /// or already filled.
    pub fn flatten(&mut self, piece: &Piece) -> bool {
        let cells = piece.occupied_cells();
        if !self.is_valid_placement(&cells) {
            return false;
        }
        for (x, y) in cells {
            self.set(x, y, Some(piece.color()));
        }
        true
    }

    /// Fill cells with a colour, ignoring what was there.
    ///
    /// Used to set up boards; gameplay only fills cells via [`Board::flatten`].
    pub fn fill(&mut self, cells: &[(i8, i8)], color: Color) {
        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }
    }

    /// A row with no empty cell. Rows outside the grid are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row; returns their original indices, bottom first.
    ///
    /// Single two-pointer pass from the bottom: kept rows are copied down to
    /// the write position, then the freed rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Remove complete rows, returning how many were removed.
    pub fn clear_complete_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major copy of the grid
    pub fn grid(&self) -> BoardGrid {
        let width = BOARD_WIDTH as usize;
        let mut grid: BoardGrid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
        grid
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from a row-major grid
    pub fn from_grid(grid: &BoardGrid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
