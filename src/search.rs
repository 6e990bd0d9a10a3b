/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use log::{debug, info, trace};

use crate::{ordered_moves, Board, Square, Tour, TourError, DEFAULT_BOARD_SIZE};

/// Attempt to find a knight's tour of an `size x size` board, starting on `start`.
///
/// Returns `Ok(None)` if the search gave up without covering the board.
/// This is an ordinary outcome: the search never revisits a decision, so it can miss tours that exist.
///
/// # Example
/// ```
/// # use knights_tour::{solve, Square};
/// let tour = solve(Square::new(0, 0), 8).unwrap().unwrap();
/// assert_eq!(tour.len(), 64);
/// assert_eq!(tour.start(), Square::new(0, 0));
///
/// // Some squares simply don't work out
/// assert!(solve(Square::new(5, 3), 8).unwrap().is_none());
///
/// // And some aren't on the board at all
/// assert!(solve(Square::new(8, 8), 8).is_err());
/// ```
pub fn solve(start: Square, size: usize) -> Result<Option<Tour>, TourError> {
    let result = Search::new(SearchConfig::new(size)).start(start)?;
    Ok(result.tour)
}

/// The result of a search, containing the tour found (if any) and the number of squares the knight entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchResult {
    /// Number of squares the knight entered, including the start square.
    ///
    /// On failure, this is how far the knight got before it was stuck.
    pub nodes: u64,

    /// The completed tour, or `None` if the knight got stuck first.
    pub tour: Option<Tour>,
}

impl SearchResult {
    /// Returns `true` if a complete tour was found.
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        self.tour.is_some()
    }
}

/// Configuration variables for executing a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Length of one side of the board.
    pub size: usize,
}

impl SearchConfig {
    /// Constructs a new [`SearchConfig`] for an `size x size` board.
    pub const fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Executes a Warnsdorff walk over a single board.
///
/// At every step the knight jumps to the legal square with the fewest onward moves.
/// Only that one candidate is ever tried: if the knight gets stuck, the whole search fails,
/// without undoing any step or trying a sibling square.
#[derive(Debug)]
pub struct Search {
    /// Visit order of every square entered so far.
    board: Board,

    /// Squares entered so far, in order. Grows in lock-step with `board`.
    path: Vec<Square>,

    /// Configuration of this search.
    config: SearchConfig,
}

impl Search {
    /// Construct a new [`Search`] over an empty board, as described by `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            board: Board::new(config.size),
            path: Vec::with_capacity(config.size * config.size),
            config,
        }
    }

    /// Start the search from `start`, consuming the search.
    ///
    /// Will return an error if the board is empty or `start` is not on it.
    pub fn start(mut self, start: Square) -> Result<SearchResult, TourError> {
        let size = self.config.size;
        if size == 0 {
            return Err(TourError::InvalidSize(size));
        }
        if !self.board.contains(start) {
            return Err(TourError::InvalidStart {
                square: start,
                size,
            });
        }

        self.enter(start);
        let found = self.walk(start);
        let nodes = self.path.len() as u64;

        if found {
            info!("found a tour of the {size}x{size} board from {start} after {nodes} nodes");
        } else {
            info!("no tour of the {size}x{size} board from {start}; stuck after {nodes} nodes");
        }

        Ok(SearchResult {
            nodes,
            tour: found.then(|| Tour::new(self.path)),
        })
    }

    /// Walks the knight forward from `square` until the board is full or the knight is stuck.
    ///
    /// Returns `true` if every square was visited.
    fn walk(&mut self, mut square: Square) -> bool {
        loop {
            if self.board.is_full() {
                return true;
            }

            // Only the most constrained candidate is tried
            let Some(&next) = ordered_moves(&self.board, square).first() else {
                debug!(
                    "no legal moves from {square} after {} squares",
                    self.board.visited()
                );
                return false;
            };

            trace!("{square} -> {next}");
            self.enter(next);
            square = next;
        }
    }

    /// Marks `square` as the next step of the path.
    #[inline(always)]
    fn enter(&mut self, square: Square) {
        self.board.visit(square, self.path.len());
        self.path.push(square);
    }
}
