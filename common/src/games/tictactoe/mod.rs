mod board;
mod error;
mod evaluator;
mod game_state;
mod search;
mod types;

pub use board::Board;
pub use error::TicTacToeError;
pub use evaluator::{evaluate, find_winning_line, status};
pub use game_state::{MoveOutcome, TicTacToeGame};
pub use search::{analyze, minimax, select_best_move, MoveAnalysis};
pub use types::{
    CellIndex, GameStatus, Mark, Score, WinningLine, BOARD_CELLS, BOARD_SIDE,
    DRAW_SCORE, LINES, O_WIN_SCORE, X_WIN_SCORE,
};
