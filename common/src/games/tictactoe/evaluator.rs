use super::board::Board;
use super::types::{DRAW_SCORE, GameStatus, LINES, Mark, Score, WinningLine};

/// The first completed line in [`LINES`] order decides, read from its first
/// cell. `None` while the game continues.
pub fn evaluate(board: &Board) -> Option<Score> {
    if let Some(line) = find_winning_line(board) {
        return line.mark.win_score();
    }

    if board.is_full() {
        return Some(DRAW_SCORE);
    }

    None
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }

    None
}

pub fn status(board: &Board) -> GameStatus {
    GameStatus::from_score(evaluate(board))
}
