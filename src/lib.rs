/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The visit-order grid a search fills in.
mod board;

/// Commands understood by the engine, parsed with `clap`.
mod cli;

/// Line-oriented front end; user input handling.
mod engine;

/// Errors returned when the solver is called with bad inputs.
mod error;

/// Knight move generation and Warnsdorff ordering.
mod movegen;

/// Main solver logic; all search related code.
mod search;

/// Squares on an `NxN` board.
mod square;

/// Completed tours and their validation.
mod tour;

/// Misc constants.
mod utils;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use error::*;
pub use movegen::*;
pub use search::*;
pub use square::*;
pub use tour::*;
pub use utils::*;
