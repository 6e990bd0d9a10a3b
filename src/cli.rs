/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use clap::Parser;

use crate::Square;

/// A command to be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<COMMAND>")
)]
pub enum EngineCommand {
    /// Search for a tour from every square of the current board and summarize the results.
    Bench {
        /// If set, the benchmarking results will be printed in a well-formatted table.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Print the board of the most recent tour, or an empty board if there is none.
    #[command(alias = "d")]
    Display,

    /// Quit the engine.
    #[command(aliases = ["quit", "q"])]
    Exit,

    /// Shows the legal moves from a square on an empty board, in the order the search would try them.
    ///
    /// Each move is followed by its onward degree: the number of moves available from it.
    Moves { square: Square },

    /// Display the current board size, or change it.
    ///
    /// Changing the size discards the most recent tour.
    #[command(alias = "n")]
    Size { size: Option<usize> },

    /// Print the board of the most recent tour, showing only its first `steps` squares.
    Step { steps: usize },

    /// Search for a knight's tour of the current board, starting on `square`.
    ///
    /// Squares are written as `col,row`, counting from 0.
    #[command(aliases = ["solve", "t"])]
    Tour {
        square: Square,

        /// If set, the tour will also be printed as a sequence of squares.
        #[arg(short, long, default_value = "false")]
        path: bool,
    },
}

impl FromStr for EngineCommand {
    type Err = clap::Error;
    /// Attempt to parse an [`EngineCommand`] from a single line of input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}
