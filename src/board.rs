/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::Square;

/// An `NxN` grid recording the order in which a knight visited each square.
///
/// Each entry is either `None` (unvisited) or the 0-based step at which the knight landed there.
/// A [`Board`] is only ever mutated by the search that owns it, and only by marking squares visited.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    orders: Vec<Option<usize>>,
    visited: usize,
}

impl Board {
    /// Creates an empty `size x size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            orders: vec![None; size * size],
            visited: 0,
        }
    }

    /// Length of one side of the board.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares on the board.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        self.size * self.size
    }

    /// Number of squares that have been visited so far.
    #[inline(always)]
    pub const fn visited(&self) -> usize {
        self.visited
    }

    /// Returns `true` once every square has been visited.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.visited == self.area()
    }

    /// Returns `true` if `square` lies on this board.
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        square.is_within(self.size)
    }

    /// Returns `true` if the knight has already landed on `square`.
    ///
    /// Squares off the board are never visited.
    #[inline(always)]
    pub fn is_visited(&self, square: Square) -> bool {
        self.order_at(square).is_some()
    }

    /// Fetch the 0-based step at which `square` was visited, if it was.
    #[inline(always)]
    pub fn order_at(&self, square: Square) -> Option<usize> {
        if self.contains(square) {
            self.orders[square.index(self.size)]
        } else {
            None
        }
    }

    /// Mark `square` as visited at step `order`.
    ///
    /// # Panics
    /// If `square` is not on this board. Marking the same square twice is a logic error.
    pub fn visit(&mut self, square: Square, order: usize) {
        let idx = square.index(self.size);
        debug_assert!(
            self.orders[idx].is_none(),
            "{square} was already visited at step {:?}",
            self.orders[idx]
        );

        self.orders[idx] = Some(order);
        self.visited += 1;
    }
}

impl fmt::Display for Board {
    /// Renders the board with 1-based step numbers, highest row first.
    ///
    /// Unvisited squares are shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.area().to_string().len();
        let label_width = self.size.saturating_sub(1).to_string().len();

        for row in (0..self.size).rev() {
            write!(f, "{row:>label_width$}|")?;
            for col in 0..self.size {
                match self.order_at(Square::new(col, row)) {
                    Some(order) => write!(f, " {:>width$}", order + 1)?,
                    None => write!(f, " {:>width$}", '.')?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "{:>label_width$}+", "")?;
        writeln!(f, "{}", "-".repeat(self.size * (width + 1)))?;

        write!(f, "{:>label_width$} ", "")?;
        for col in 0..self.size {
            write!(f, " {col:>width$}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
