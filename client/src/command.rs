use common::games::tictactoe::{BOARD_CELLS, CellIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(CellIndex),
    Jump(usize),
    History,
    New,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands:
  0-8       place X on that cell (0 is top left, 8 is bottom right)
  jump <n>  show the board after move n (0 is the game start)
  history   list the moves played so far
  new       start a new game
  help      show this text
  quit      leave the game";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err("Empty command".to_string());
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "jump" | "j" => {
            let step = words
                .next()
                .ok_or_else(|| "jump needs a move number".to_string())?;
            let step = step
                .parse::<usize>()
                .map_err(|_| format!("Invalid move number: {}", step))?;
            Command::Jump(step)
        }
        "history" | "h" => Command::History,
        "new" | "n" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            let index = other
                .parse::<CellIndex>()
                .map_err(|_| format!("Unknown command: {}", other))?;
            if index >= BOARD_CELLS {
                return Err(format!("Cell must be between 0 and {}", BOARD_CELLS - 1));
            }
            Command::Place(index)
        }
    };

    if words.next().is_some() {
        return Err(format!("Too many arguments for: {}", first));
    }

    Ok(command)
}

pub fn parse_move_list(list: &str) -> Result<Vec<CellIndex>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match parse_command(item)? {
            Command::Place(index) => Ok(index),
            _ => Err(format!("Not a cell index: {}", item)),
        })
        .collect()
}
