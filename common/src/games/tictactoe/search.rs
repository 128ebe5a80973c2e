use crate::log_debug;
use super::board::Board;
use super::error::TicTacToeError;
use super::evaluator::evaluate;
use super::types::{BOARD_CELLS, CellIndex, Mark, Score};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAnalysis {
    pub best_move: CellIndex,
    pub score: Score,
    pub candidates: Vec<(CellIndex, Score)>,
    pub nodes_visited: u64,
}

#[derive(Default)]
struct Searcher {
    nodes_visited: u64,
}

impl Searcher {
    fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes_visited += 1;

        if let Some(score) = evaluate(board) {
            return score;
        }

        if maximizing {
            let mut best = Score::MIN;
            for index in 0..BOARD_CELLS {
                if !board.is_empty_at(index) {
                    continue;
                }
                board.set(index, Mark::X);
                best = best.max(self.minimax(board, false, alpha, beta));
                alpha = alpha.max(best);
                board.set(index, Mark::Empty);

                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = Score::MAX;
            for index in 0..BOARD_CELLS {
                if !board.is_empty_at(index) {
                    continue;
                }
                board.set(index, Mark::O);
                best = best.min(self.minimax(board, true, alpha, beta));
                beta = beta.min(best);
                board.set(index, Mark::Empty);

                if alpha >= beta {
                    break;
                }
            }
            best
        }
    }
}

/// Place/undo on `board`: it holds its original contents again on return.
/// `Score::MIN` and `Score::MAX` stand in for the infinite window.
pub fn minimax(board: &mut Board, maximizing: bool, alpha: Score, beta: Score) -> Score {
    Searcher::default().minimax(board, maximizing, alpha, beta)
}

// Lowest score for X wins; ties go to the lowest cell index.
pub fn select_best_move(board: &Board) -> Result<CellIndex, TicTacToeError> {
    analyze(board).map(|analysis| analysis.best_move)
}

pub fn analyze(board: &Board) -> Result<MoveAnalysis, TicTacToeError> {
    if evaluate(board).is_some() {
        return Err(TicTacToeError::NoLegalMove);
    }

    let mut scratch = *board;
    let mut searcher = Searcher::default();
    let mut candidates = Vec::with_capacity(BOARD_CELLS);
    let mut best: Option<(CellIndex, Score)> = None;

    for index in 0..BOARD_CELLS {
        if !scratch.is_empty_at(index) {
            continue;
        }

        scratch.set(index, Mark::O);
        let score = searcher.minimax(&mut scratch, true, Score::MIN, Score::MAX);
        scratch.set(index, Mark::Empty);

        candidates.push((index, score));
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }

    debug_assert_eq!(&scratch, board);

    let (best_move, score) = best.ok_or(TicTacToeError::NoLegalMove)?;

    log_debug!(
        "Engine picked cell {} (score {}) after {} nodes; candidates: {:?}",
        best_move,
        score,
        searcher.nodes_visited,
        candidates
    );

    Ok(MoveAnalysis {
        best_move,
        score,
        candidates,
        nodes_visited: searcher.nodes_visited,
    })
}
