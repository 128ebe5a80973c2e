use std::io::{self, BufRead, Write};

use common::games::tictactoe::{CellIndex, TicTacToeGame};
use common::log;

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::DisplayConfig;
use crate::render::{render_analysis, render_board, render_history};

pub struct Session<W: Write> {
    game: TicTacToeGame,
    display: DisplayConfig,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(display: DisplayConfig, output: W) -> Self {
        Self {
            game: TicTacToeGame::new(),
            display,
            output,
        }
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        writeln!(self.output, "You are X. Type 'help' for commands.")?;
        self.show_position()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    pub fn run_scripted(&mut self, moves: &[CellIndex]) -> io::Result<()> {
        for &index in moves {
            if !self.place(index)? {
                break;
            }
        }
        self.show_position()
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Place(index) => {
                if self.place(index)? {
                    self.show_position()?;
                }
            }
            Command::Jump(step) => match self.game.jump_to(step) {
                Ok(()) => self.show_position()?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Command::History => {
                let history = render_history(self.game.history(), self.game.step_number());
                writeln!(self.output, "{}", history)?;
            }
            Command::New => {
                self.game.restart();
                log!("New game started");
                self.show_position()?;
            }
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn place(&mut self, index: CellIndex) -> io::Result<bool> {
        match self.game.play(index) {
            Ok(outcome) => {
                match outcome.engine_move {
                    Some(reply) => writeln!(self.output, "X -> {}, O -> {}", index, reply)?,
                    None => writeln!(self.output, "X -> {}", index)?,
                }
                if let Some(analysis) = &outcome.analysis
                    && self.display.show_evaluation
                {
                    writeln!(self.output, "{}", render_analysis(analysis))?;
                }
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn show_position(&mut self) -> io::Result<()> {
        let show_numbers = !self.game.status().is_over();
        let winning_line = self.game.winning_line();
        let board = render_board(
            self.game.current(),
            self.display.empty_cell,
            show_numbers,
            winning_line.as_ref(),
        );
        writeln!(self.output, "{}", board)?;
        if self.display.show_history && self.game.history().len() > 1 {
            let history = render_history(self.game.history(), self.game.step_number());
            writeln!(self.output, "{}", history)?;
        }
        writeln!(self.output, "{}", self.game.status_text())
    }
}
