/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use log::{error, warn};

use crate::{
    scored_moves, Board, EngineCommand, Search, SearchConfig, Square, Tour, DEFAULT_BOARD_SIZE,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

/// A line-oriented front end for the tour solver.
///
/// Commands arrive over a channel, either queued up front with [`Engine::send_command`]
/// or read from `stdin` once [`Engine::run`] is called.
#[derive(Debug)]
pub struct Engine {
    /// Length of one side of the board that tours are searched on.
    size: usize,

    /// The most recent tour found, if the last search succeeded.
    ///
    /// This is cleared whenever a search fails or the board size changes.
    tour: Option<Tour>,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with [`Engine::run`].
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            size: DEFAULT_BOARD_SIZE,
            tour: None,
            sender,
            receiver,
        }
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Length of one side of the current board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The most recent tour found, if any.
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Sends an [`EngineCommand`] to the engine to be executed.
    pub fn send_command(&self, command: EngineCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Failed to send command to engine")
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits on received commands.
    pub fn run(&mut self) -> Result<()> {
        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                warn!("Input handler thread stopping: {err:#}");
            }
        });

        // Loop on user input
        while let Ok(cmd) = self.receiver.recv() {
            if cmd == EngineCommand::Exit {
                break;
            }

            // Keep running, even on error
            if let Err(e) = self.execute(cmd) {
                error!("{e:#}");
                eprintln!("Error: {e:#}");
            }
        }

        Ok(())
    }

    /// Handle the execution of a single [`EngineCommand`].
    ///
    /// [`EngineCommand::Exit`] is handled by [`Engine::run`] and does nothing here.
    pub fn execute(&mut self, cmd: EngineCommand) -> Result<()> {
        match cmd {
            EngineCommand::Bench { pretty } => self.bench(pretty)?,

            EngineCommand::Display => self.display(),

            EngineCommand::Exit => {}

            EngineCommand::Moves { square } => self.moves(square)?,

            EngineCommand::Size { size: None } => println!("{}", self.size),

            EngineCommand::Size { size: Some(size) } => self.set_size(size)?,

            EngineCommand::Step { steps } => self.step(steps)?,

            EngineCommand::Tour { square, path } => self.search(square, path)?,
        }

        Ok(())
    }

    /// Configuration for a search over the current board.
    fn config(&self) -> SearchConfig {
        SearchConfig::new(self.size)
    }

    /// Executes the `tour` command, searching for a tour from `start` and printing the result.
    fn search(&mut self, start: Square, show_path: bool) -> Result<()> {
        let result = Search::new(self.config()).start(start)?;

        let Some(tour) = result.tour else {
            self.tour = None;
            println!("no tour found from {start} ({} nodes)", result.nodes);
            return Ok(());
        };

        println!("{}", tour.to_board(self.size));
        println!();

        let kind = if tour.is_closed() { "closed" } else { "open" };
        println!("{kind} tour found from {start} ({} nodes)", result.nodes);
        if show_path {
            println!("{tour}");
        }

        self.tour = Some(tour);
        Ok(())
    }

    /// Executes the `display` command, printing the board of the most recent tour.
    fn display(&self) {
        match &self.tour {
            Some(tour) => println!("{}", tour.to_board(self.size)),
            None => println!("{}", Board::new(self.size)),
        }
    }

    /// Executes the `step` command, printing the first `steps` squares of the most recent tour.
    fn step(&self, steps: usize) -> Result<()> {
        let Some(tour) = &self.tour else {
            bail!("No tour to step through. Run `tour <SQUARE>` first");
        };

        println!("{}", tour.to_board_upto(self.size, steps));
        if let Some(square) = steps.checked_sub(1).and_then(|i| tour.squares().get(i)) {
            println!("\nstep {steps}/{}: {square}", tour.len());
        }

        Ok(())
    }

    /// Executes the `moves` command, listing the Warnsdorff order of moves from `square` on an empty board.
    fn moves(&self, square: Square) -> Result<()> {
        let board = Board::new(self.size);
        if !board.contains(square) {
            bail!(
                "{square} is not on the {size}x{size} board",
                size = self.size
            );
        }

        let moves = scored_moves(&board, square);

        // If there are none, print "(none)"
        let moves_string = if moves.is_empty() {
            String::from("(none)")
        } else {
            // Otherwise, join them by comma-space
            moves
                .into_iter()
                .map(|(mv, degree)| format!("{mv} [{degree}]"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{moves_string}");

        Ok(())
    }

    /// Executes the `size` command, changing the board size and discarding the most recent tour.
    fn set_size(&mut self, size: usize) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            bail!(
                "{} only supports board sizes from {MIN_BOARD_SIZE} to {MAX_BOARD_SIZE}. Got {size}",
                self.name()
            );
        }

        if size != self.size {
            self.size = size;
            self.tour = None;
        }

        Ok(())
    }

    /// Execute the `bench` command, searching from every square of the board and displaying the results.
    fn bench(&self, pretty: bool) -> Result<()> {
        let starttime = Instant::now();
        let mut nodes = 0;
        let mut found = 0;

        for start in Square::iter(self.size) {
            let res = Search::new(self.config()).start(start)?;
            nodes += res.nodes;
            found += usize::from(res.is_found());
        }

        // Compute results
        let squares = self.size * self.size;
        let missed = squares - found;
        let elapsed = starttime.elapsed();
        let nps = (nodes as f32 / elapsed.as_secs_f32()) as u64;
        let ms = elapsed.as_millis();

        if pretty {
            // Display the results in a nice table
            println!();
            println!("+--- Benchmark Complete ---+");
            println!("| board      : {:<12}|", format!("{0}x{0}", self.size));
            println!("| found      : {found:<12}|");
            println!("| not found  : {missed:<12}|");
            println!("| time (ms)  : {ms:<12}|");
            println!("| nodes      : {nodes:<12}|");
            println!("| nps        : {nps:<12}|");
            println!("+--------------------------+");
        } else {
            println!("{found}/{squares} tours found, {nodes} nodes {nps} nps");
        }

        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            // Send the Exit command and exit this function
            sender
                .send(EngineCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            bail!("Engine received input of 0 bytes and is quitting");
        }

        // Trim any leading/trailing whitespace
        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match buf.parse::<EngineCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            // If an invalid command was received, just print the error and continue running
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_changes() {
        let mut engine = Engine::new();
        assert_eq!(engine.size(), DEFAULT_BOARD_SIZE);

        engine.execute(EngineCommand::Size { size: Some(6) }).unwrap();
        assert_eq!(engine.size(), 6);

        // Out-of-range sizes are rejected and leave the board alone
        assert!(engine.execute(EngineCommand::Size { size: Some(4) }).is_err());
        assert!(engine.execute(EngineCommand::Size { size: Some(31) }).is_err());
        assert_eq!(engine.size(), 6);
    }

    #[test]
    fn test_tour_is_kept_until_size_changes() {
        let mut engine = Engine::new();
        let tour = EngineCommand::Tour {
            square: Square::ORIGIN,
            path: false,
        };

        engine.execute(tour).unwrap();
        assert_eq!(engine.tour().map(Tour::len), Some(64));
        assert!(engine.execute(EngineCommand::Step { steps: 10 }).is_ok());

        // Same size, nothing changes
        engine.execute(EngineCommand::Size { size: Some(8) }).unwrap();
        assert!(engine.tour().is_some());

        engine.execute(EngineCommand::Size { size: Some(5) }).unwrap();
        assert!(engine.tour().is_none());
        assert!(engine.execute(EngineCommand::Step { steps: 1 }).is_err());
    }

    #[test]
    fn test_failed_search_clears_tour() {
        let mut engine = Engine::new();
        engine
            .execute(EngineCommand::Tour {
                square: Square::new(3, 3),
                path: true,
            })
            .unwrap();
        assert!(engine.tour().is_some());

        // (5, 3) is a dead end on an 8x8 board
        engine
            .execute(EngineCommand::Tour {
                square: Square::new(5, 3),
                path: false,
            })
            .unwrap();
        assert!(engine.tour().is_none());
    }

    #[test]
    fn test_off_board_squares_are_errors() {
        let mut engine = Engine::new();
        let tour = EngineCommand::Tour {
            square: Square::new(8, 0),
            path: false,
        };

        assert!(engine.execute(tour).is_err());
        assert!(engine
            .execute(EngineCommand::Moves {
                square: Square::new(0, 8)
            })
            .is_err());
        assert!(engine
            .execute(EngineCommand::Moves {
                square: Square::ORIGIN
            })
            .is_ok());
    }

    #[test]
    fn test_queued_commands() {
        let engine = Engine::new();
        engine.send_command(EngineCommand::Display).unwrap();
        engine.send_command(EngineCommand::Exit).unwrap();

        assert_eq!(engine.receiver.try_recv(), Ok(EngineCommand::Display));
        assert_eq!(engine.receiver.try_recv(), Ok(EngineCommand::Exit));
    }
}
