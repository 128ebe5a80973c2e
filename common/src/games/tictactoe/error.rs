use super::types::CellIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    InvalidBoard { reason: String },
    NoLegalMove,
    OutOfBounds { index: usize, limit: usize },
    CellOccupied { index: CellIndex },
    GameOver,
}

impl TicTacToeError {
    pub fn invalid_board(reason: impl Into<String>) -> Self {
        TicTacToeError::InvalidBoard {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidBoard { reason } => write!(f, "Invalid board: {}", reason),
            TicTacToeError::NoLegalMove => {
                write!(f, "No legal move: board is full or the game is already decided")
            }
            TicTacToeError::OutOfBounds { index, limit } => {
                write!(f, "Index {} is out of bounds (must be below {})", index, limit)
            }
            TicTacToeError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
