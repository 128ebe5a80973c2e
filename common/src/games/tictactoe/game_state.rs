use crate::log_debug;
use super::board::Board;
use super::error::TicTacToeError;
use super::evaluator::{evaluate, find_winning_line};
use super::search::{MoveAnalysis, analyze};
use super::types::{BOARD_CELLS, CellIndex, GameStatus, Mark, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub human_move: CellIndex,
    pub engine_move: Option<CellIndex>,
    pub analysis: Option<MoveAnalysis>,
    pub status: GameStatus,
}

// Playing from an earlier step drops the history after it.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    history: Vec<Board>,
    step_number: usize,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    pub fn current(&self) -> &Board {
        &self.history[self.step_number]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_score(evaluate(self.current()))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(self.current())
    }

    pub fn status_text(&self) -> &'static str {
        match self.status() {
            GameStatus::InProgress => "Choose your next move",
            GameStatus::XWon => "X Wins",
            GameStatus::OWon => "O Wins",
            GameStatus::Draw => "Tie",
        }
    }

    pub fn play(&mut self, index: CellIndex) -> Result<MoveOutcome, TicTacToeError> {
        let mut board = *self.current();

        if self.status().is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if index >= BOARD_CELLS {
            return Err(TicTacToeError::OutOfBounds {
                index,
                limit: BOARD_CELLS,
            });
        }

        board.place(index, Mark::X)?;

        let analysis = if evaluate(&board).is_none() {
            let analysis = analyze(&board)?;
            board.place(analysis.best_move, Mark::O)?;
            Some(analysis)
        } else {
            None
        };
        let engine_move = analysis.as_ref().map(|analysis| analysis.best_move);

        self.history.truncate(self.step_number + 1);
        self.history.push(board);
        self.step_number = self.history.len() - 1;

        let status = self.status();
        log_debug!(
            "Step {}: X at {}, O at {:?}, status {:?}",
            self.step_number,
            index,
            engine_move,
            status
        );

        Ok(MoveOutcome {
            human_move: index,
            engine_move,
            analysis,
            status,
        })
    }

    pub fn jump_to(&mut self, step: usize) -> Result<(), TicTacToeError> {
        if step >= self.history.len() {
            return Err(TicTacToeError::OutOfBounds {
                index: step,
                limit: self.history.len(),
            });
        }
        self.step_number = step;
        Ok(())
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
