use super::error::TicTacToeError;

pub type CellIndex = usize;
pub type Score = i32;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

pub const X_WIN_SCORE: Score = 10;
pub const O_WIN_SCORE: Score = -10;
pub const DRAW_SCORE: Score = 0;

// Rows, columns, then the main and anti diagonal. Scan order matters: the
// evaluator reports the first completed line.
pub const LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn win_score(&self) -> Option<Score> {
        match self {
            Mark::X => Some(X_WIN_SCORE),
            Mark::O => Some(O_WIN_SCORE),
            Mark::Empty => None,
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = TicTacToeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '-' | '_' | ' ' => Ok(Mark::Empty),
            other => Err(TicTacToeError::invalid_board(format!(
                "unknown cell mark '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<u8> for Mark {
    type Error = TicTacToeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mark::Empty),
            1 => Ok(Mark::X),
            2 => Ok(Mark::O),
            other => Err(TicTacToeError::invalid_board(format!(
                "unknown cell value {}",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn from_score(score: Option<Score>) -> Self {
        match score {
            None => GameStatus::InProgress,
            Some(X_WIN_SCORE) => GameStatus::XWon,
            Some(O_WIN_SCORE) => GameStatus::OWon,
            Some(_) => GameStatus::Draw,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [CellIndex; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [CellIndex; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_mark_from_char() {
        assert_eq!(Mark::try_from('x').unwrap(), Mark::X);
        assert_eq!(Mark::try_from('O').unwrap(), Mark::O);
        assert_eq!(Mark::try_from('-').unwrap(), Mark::Empty);
        assert!(matches!(
            Mark::try_from('Z'),
            Err(TicTacToeError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_mark_from_u8_rejects_unknown_value() {
        assert_eq!(Mark::try_from(2u8).unwrap(), Mark::O);
        assert!(Mark::try_from(3u8).is_err());
    }

    #[test]
    fn test_winning_line_contains() {
        let line = WinningLine::new(Mark::X, [2, 4, 6]);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn test_lines_cover_every_cell() {
        let mut seen = [0usize; BOARD_CELLS];
        for line in LINES {
            for index in line {
                seen[index] += 1;
            }
        }
        assert_eq!(seen, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_status_from_score() {
        assert_eq!(GameStatus::from_score(None), GameStatus::InProgress);
        assert_eq!(GameStatus::from_score(Some(X_WIN_SCORE)), GameStatus::XWon);
        assert_eq!(GameStatus::from_score(Some(O_WIN_SCORE)), GameStatus::OWon);
        assert_eq!(GameStatus::from_score(Some(DRAW_SCORE)), GameStatus::Draw);
        assert!(!GameStatus::InProgress.is_over());
    }
}
