#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Cursor, Write};
use std::string::{String, ToString};

use crate::{
    board::Board,
    cell::Cell,
    common::{GameError, Shot},
    config::{ship_kind_from_name, SHIPS},
    placement,
    resolver::Resolution,
    ui, BoardError,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Where a human player's typed lines come from.
pub trait LineInput {
    /// Read one line into `buf`, returning the number of bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Locks stdin per line so two players can share the terminal.
impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A human at the keyboard.
pub struct CliPlayer<I = io::Stdin, W = io::Stdout> {
    name: String,
    input: I,
    output: W,
    output_failed: bool,
}

impl CliPlayer {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio(name: &str) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<I: LineInput, W: Write> CliPlayer<I, W> {
    pub fn new(name: &str, input: I, output: W) -> Self {
        Self {
            name: name.to_string(),
            input,
            output,
            output_failed: false,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write to the player. After the first failed write the output is
    /// treated as gone and every later prompt reports closed input.
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.output_failed {
            return;
        }
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.flush()) {
            log::warn!("output to {} failed: {}", self.name, e);
            self.output_failed = true;
        }
    }

    fn show(&mut self, text: &str) {
        self.emit(format_args!("{}", text));
    }

    fn say(&mut self, text: &str) {
        self.emit(format_args!("{}\n", text));
    }

    /// Show `text` and read one trimmed line. `None` once input or output is closed.
    fn prompt(&mut self, text: &str) -> Option<String> {
        self.show(text);
        if self.output_failed {
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("input from {} failed: {}", self.name, e);
                None
            }
        }
    }

    /// Ask a yes/no question until answered. Closed input counts as no.
    pub fn confirm(&mut self, question: &str) -> bool {
        loop {
            let Some(answer) = self.prompt(&std::format!("{} (Y/N): ", question)) else {
                return false;
            };
            match answer.to_ascii_uppercase().as_str() {
                "Y" | "YES" => return true,
                "N" | "NO" => return false,
                _ => self.say("Please answer Y or N."),
            }
        }
    }

    /// Block until the player presses enter, used when handing the terminal over.
    pub fn wait_for_enter(&mut self, text: &str) {
        self.prompt(text);
    }
}

/// Parse "A1 A5" into its two cells.
fn parse_run(line: &str) -> Result<(Cell, Cell), BoardError> {
    let mut parts = line.split_whitespace();
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BoardError::InvalidPosition);
    };
    Ok((start.parse()?, end.parse()?))
}

impl<I: LineInput, W: Write> Player for CliPlayer<I, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.say(&std::format!("{}, place your ships.", self.name));
        while !board.fleet_placed() {
            let shown = ui::render_ships(board);
            self.show(&shown);
            self.say("Ships left to place:");
            for kind in SHIPS.into_iter().filter(|k| !board.is_placed(*k)) {
                self.say(&std::format!("  ({}) {} ({} spaces)", kind.marker(), kind.name(), kind.length()));
            }
            let Some(choice) = self.prompt(
                "Which piece do you want to place? (first letter, enter to place the rest randomly): ",
            ) else {
                self.say("Input closed, placing the remaining ships randomly.");
                return placement::place_fleet(rng, board);
            };
            if choice.is_empty() {
                return placement::place_fleet(rng, board);
            }
            let kind = match ship_kind_from_name(&choice) {
                Some(kind) if board.is_placed(kind) => {
                    self.say("Ship already placed!");
                    continue;
                }
                Some(kind) => kind,
                None => {
                    self.say("No such ship.");
                    continue;
                }
            };
            loop {
                let text = std::format!(
                    "Start and end of your {} (e.g. A1 A{}), enter for random: ",
                    kind.name(),
                    kind.length()
                );
                let Some(line) = self.prompt(&text) else {
                    self.say("Input closed, placing the remaining ships randomly.");
                    return placement::place_fleet(rng, board);
                };
                let (start, end) = if line.is_empty() {
                    placement::random_placement(rng, board, kind)?
                } else {
                    match parse_run(&line) {
                        Ok(run) => run,
                        Err(e) => {
                            self.say(&std::format!("{}. Try again.", e));
                            continue;
                        }
                    }
                };
                match board.place_ship(kind, start, end) {
                    Ok(()) => break,
                    Err(e) => self.say(&std::format!("{}. Try again.", e)),
                }
            }
        }
        let shown = ui::render_ships(board);
        self.show(&shown);
        self.say("All ships placed!");
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, board: &Board) -> Result<Cell, GameError> {
        let shown = ui::render_guesses(board);
        self.show(&shown);
        loop {
            let text = std::format!("{}, enter your guess (e.g. B7): ", self.name);
            let line = self.prompt(&text).ok_or(GameError::Aborted)?;
            match line.parse::<Cell>() {
                Ok(cell) if board.is_guessed(cell) => self.say("Already guessed at this position."),
                Ok(cell) => return Ok(cell),
                Err(e) => self.say(&std::format!("{}. Try again.", e)),
            }
        }
    }

    fn handle_guess_result(&mut self, _rng: &mut SmallRng, board: &Board, result: &Resolution) {
        let shown = ui::render_guesses(board);
        self.show(&shown);
        match result.shot {
            Shot::Hit => self.say(&std::format!("{} is a HIT!", result.cell)),
            Shot::Miss => self.say(&std::format!("{} is a MISS!", result.cell)),
        }
        if let Some(kind) = result.sunk {
            self.say(&std::format!("You sunk their {}!", kind));
        }
    }

    fn handle_opponent_guess(&mut self, mine: &Board, theirs: &Board, result: &Resolution) {
        let verdict = match result.shot {
            Shot::Hit => "HIT",
            Shot::Miss => "MISS",
        };
        self.say(&std::format!("\nOpponent guessed {}: {}", result.cell, verdict));
        if let Some(kind) = result.sunk {
            self.say(&std::format!("They sunk your {}!", kind));
        }
        let shown = ui::render_merged(mine, theirs);
        self.show(&shown);
    }
}
