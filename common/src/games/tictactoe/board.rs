use std::fmt;
use std::str::FromStr;

use super::error::TicTacToeError;
use super::types::{BOARD_CELLS, BOARD_SIDE, CellIndex, Mark};

// Row-major: cells 0-2 are the top row, 6-8 the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn place(&mut self, index: CellIndex, mark: Mark) -> Result<(), TicTacToeError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TicTacToeError::OutOfBounds {
                index,
                limit: BOARD_CELLS,
            })?;

        if !cell.is_empty() {
            return Err(TicTacToeError::CellOccupied { index });
        }

        *cell = mark;
        Ok(())
    }

    pub fn clear(&mut self, index: CellIndex) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Result<Board, TicTacToeError> {
        let mut next = *self;
        next.place(index, mark)?;
        Ok(next)
    }

    // Search-only fast path: callers guarantee the index is in range and empty.
    pub(crate) fn set(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; BOARD_CELLS];
        let mut count = 0;

        for ch in s.chars() {
            if ch == '/' || (ch.is_ascii_whitespace() && ch != ' ') {
                continue;
            }
            let mark = Mark::try_from(ch)?;
            if count >= BOARD_CELLS {
                return Err(TicTacToeError::invalid_board(format!(
                    "expected {} cells, found more",
                    BOARD_CELLS
                )));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != BOARD_CELLS {
            return Err(TicTacToeError::invalid_board(format!(
                "expected {} cells, found {}",
                BOARD_CELLS, count
            )));
        }

        Ok(Self { cells })
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = TicTacToeError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.len() != BOARD_CELLS {
            return Err(TicTacToeError::invalid_board(format!(
                "expected {} cells, found {}",
                BOARD_CELLS,
                values.len()
            )));
        }

        let mut cells = [Mark::Empty; BOARD_CELLS];
        for (cell, &value) in cells.iter_mut().zip(values) {
            *cell = Mark::try_from(value)?;
        }
        Ok(Self { cells })
    }
}

impl TryFrom<[u8; BOARD_CELLS]> for Board {
    type Error = TicTacToeError;

    fn try_from(values: [u8; BOARD_CELLS]) -> Result<Self, Self::Error> {
        Board::try_from(&values[..])
    }
}
