/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashSet, fmt, ops::Index};

use crate::{Board, Square, TourError};

/// An ordered sequence of squares visited by a knight, first square first.
///
/// Tours produced by [`crate::solve`] always cover their board exactly once.
/// A [`Tour`] built by hand can be checked with [`Tour::validate`].
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Tour(Vec<Square>);

impl Tour {
    /// Wraps a sequence of squares. No validation is performed.
    #[inline(always)]
    pub fn new(squares: Vec<Square>) -> Self {
        Self(squares)
    }

    /// The squares of this tour, in the order they are visited.
    #[inline(always)]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Consumes the tour, returning its squares.
    #[inline(always)]
    pub fn into_inner(self) -> Vec<Square> {
        self.0
    }

    /// Number of squares in this tour.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this tour contains no squares.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Square the knight started on.
    ///
    /// # Panics
    /// If the tour is empty.
    #[inline(always)]
    pub fn start(&self) -> Square {
        self.0[0]
    }

    /// Square the knight finished on.
    ///
    /// # Panics
    /// If the tour is empty.
    #[inline(always)]
    pub fn end(&self) -> Square {
        self.0[self.0.len() - 1]
    }

    /// Returns an iterator over the squares of this tour, in order.
    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.0.iter()
    }

    /// Returns `true` if the knight could jump from the final square back to the first.
    ///
    /// Single-square tours are not considered closed.
    pub fn is_closed(&self) -> bool {
        self.len() > 1 && self.end().is_knight_move_from(self.start())
    }

    /// Builds a [`Board`] of side `size` showing the first `steps` squares of this tour.
    ///
    /// Squares of the tour that don't fit on the board are skipped.
    pub fn to_board_upto(&self, size: usize, steps: usize) -> Board {
        let mut board = Board::new(size);
        for (order, &square) in self.0.iter().enumerate().take(steps) {
            if board.contains(square) && !board.is_visited(square) {
                board.visit(square, order);
            }
        }
        board
    }

    /// Builds a [`Board`] of side `size` showing the order in which this tour visits every square.
    #[inline(always)]
    pub fn to_board(&self, size: usize) -> Board {
        self.to_board_upto(size, self.len())
    }

    /// Checks that this is a complete knight's tour of an `size x size` board.
    ///
    /// Every square must be on the board and appear exactly once,
    /// and every step must be a legal knight move.
    pub fn validate(&self, size: usize) -> Result<(), TourError> {
        let area = size * size;
        if self.len() != area {
            return Err(TourError::IllegalTour(format!(
                "expected {area} squares, found {}",
                self.len()
            )));
        }

        let mut seen = HashSet::with_capacity(area);
        for (i, &square) in self.0.iter().enumerate() {
            if !square.is_within(size) {
                return Err(TourError::IllegalTour(format!(
                    "step {} at {square} is off the {size}x{size} board",
                    i + 1
                )));
            }

            if !seen.insert(square) {
                return Err(TourError::IllegalTour(format!(
                    "step {} revisits {square}",
                    i + 1
                )));
            }
        }

        if let Some(pair) = self
            .0
            .windows(2)
            .find(|pair| !pair[1].is_knight_move_from(pair[0]))
        {
            return Err(TourError::IllegalTour(format!(
                "{} -> {} is not a knight move",
                pair[0], pair[1]
            )));
        }

        Ok(())
    }
}

impl Index<usize> for Tour {
    type Output = Square;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tour {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Tour> for Vec<Square> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl fmt::Display for Tour {
    /// Displays the squares joined by ` -> `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .0
            .iter()
            .map(|sq| sq.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        write!(f, "{path}")
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
