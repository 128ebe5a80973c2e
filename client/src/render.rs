use common::games::tictactoe::{BOARD_SIDE, Board, Mark, MoveAnalysis, WinningLine};

pub fn render_board(
    board: &Board,
    empty_cell: char,
    show_numbers: bool,
    winning_line: Option<&WinningLine>,
) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * BOARD_SIDE + col;
                    match cell {
                        Mark::Empty if show_numbers => format!(" {} ", index),
                        Mark::Empty => format!(" {} ", empty_cell),
                        mark if winning_line.is_some_and(|line| line.contains(index)) => {
                            format!("[{}]", mark.symbol())
                        }
                        mark => format!(" {} ", mark.symbol()),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_history(history: &[Board], step_number: usize) -> String {
    history
        .iter()
        .enumerate()
        .map(|(step, board)| {
            let marker = if step == step_number { '>' } else { ' ' };
            let label = if step == 0 {
                "Go to game start".to_string()
            } else {
                format!("Go to move #{}", step)
            };
            let compact: String = board.cells().iter().map(|cell| cell.symbol()).collect();
            format!("{} {:>2}. {:<18} {}", marker, step, label, compact)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_analysis(analysis: &MoveAnalysis) -> String {
    let candidates = analysis
        .candidates
        .iter()
        .map(|(index, score)| format!("{}:{:+}", index, score))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Engine evaluation: {} [{} nodes]",
        candidates, analysis.nodes_visited
    )
}
