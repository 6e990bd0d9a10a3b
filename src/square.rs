/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

/// Represents a single square on an `NxN` board, addressed by column and row.
///
/// Both coordinates are 0-based. A [`Square`] carries no knowledge of the board it lives on,
/// so whether it is *on* a given board is answered by [`Square::is_within`].
/// ```text
/// row
///  2| (0, 2) (1, 2) (2, 2)
///  1| (0, 1) (1, 1) (2, 1)
///  0| (0, 0) (1, 0) (2, 0)
///   +---------------------
///      0      1      2     col
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square {
    col: usize,
    row: usize,
}

impl Square {
    /// The corner square every board has, regardless of size.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new [`Square`] at `(col, row)`.
    #[inline(always)]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns an iterator over every square of an `size x size` board, in row-major order.
    ///
    /// # Example
    /// ```
    /// # use knights_tour::Square;
    /// let squares = Square::iter(2).collect::<Vec<_>>();
    /// assert_eq!(
    ///     squares,
    ///     [Square::new(0, 0), Square::new(1, 0), Square::new(0, 1), Square::new(1, 1)]
    /// );
    /// ```
    pub fn iter(size: usize) -> impl ExactSizeIterator<Item = Self> {
        (0..size * size).map(move |i| Self::new(i % size, i / size))
    }

    /// Column (x coordinate) of this square.
    #[inline(always)]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Row (y coordinate) of this square.
    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns `true` if this square lies on an `size x size` board.
    ///
    /// # Example
    /// ```
    /// # use knights_tour::Square;
    /// assert!(Square::new(7, 7).is_within(8));
    /// assert!(!Square::new(8, 0).is_within(8));
    /// ```
    #[inline(always)]
    pub const fn is_within(&self, size: usize) -> bool {
        self.col < size && self.row < size
    }

    /// Row-major index of this square on an `size x size` board.
    #[inline(always)]
    pub const fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Attempt to offset this [`Square`] by the column and row deltas.
    ///
    /// If the result would fall off an `size x size` board, then `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use knights_tour::Square;
    /// assert_eq!(Square::new(2, 3).offset(1, -2, 8), Some(Square::new(3, 1)));
    /// assert_eq!(Square::new(0, 0).offset(-1, 2, 8), None);
    /// assert_eq!(Square::new(6, 6).offset(2, 1, 8), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, col_delta: i8, row_delta: i8, size: usize) -> Option<Self> {
        let Some(col) = self.col.checked_add_signed(col_delta as isize) else {
            return None;
        };

        let Some(row) = self.row.checked_add_signed(row_delta as isize) else {
            return None;
        };

        let square = Self::new(col, row);
        if square.is_within(size) {
            Some(square)
        } else {
            None
        }
    }

    /// Returns the number of columns away `self` is from `other`.
    #[inline(always)]
    pub const fn distance_cols(&self, other: Self) -> usize {
        self.col.abs_diff(other.col)
    }

    /// Returns the number of rows away `self` is from `other`.
    #[inline(always)]
    pub const fn distance_rows(&self, other: Self) -> usize {
        self.row.abs_diff(other.row)
    }

    /// Returns `true` if a knight standing on `self` could jump to `other`.
    ///
    /// # Example
    /// ```
    /// # use knights_tour::Square;
    /// assert!(Square::new(0, 0).is_knight_move_from(Square::new(1, 2)));
    /// assert!(!Square::new(0, 0).is_knight_move_from(Square::new(2, 2)));
    /// ```
    #[inline(always)]
    pub const fn is_knight_move_from(&self, other: Self) -> bool {
        matches!(
            (self.distance_cols(other), self.distance_rows(other)),
            (1, 2) | (2, 1)
        )
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Parses a square written as `col,row`, optionally wrapped in parentheses.
    ///
    /// # Example
    /// ```
    /// # use knights_tour::Square;
    /// assert_eq!("3,4".parse::<Square>().unwrap(), Square::new(3, 4));
    /// assert_eq!("(0, 7)".parse::<Square>().unwrap(), Square::new(0, 7));
    /// assert!("3".parse::<Square>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');

        let Some((col, row)) = inner.split_once(',') else {
            bail!("Invalid Square string: expected `col,row`. Got {s:?}");
        };

        let col = col
            .trim()
            .parse()
            .with_context(|| format!("Invalid column in Square string {s:?}"))?;
        let row = row
            .trim()
            .parse()
            .with_context(|| format!("Invalid row in Square string {s:?}"))?;

        Ok(Self::new(col, row))
    }
}

impl From<(usize, usize)> for Square {
    #[inline(always)]
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        assert_eq!(Square::new(3, 4), "3,4".parse().unwrap());
        assert_eq!(Square::new(3, 4), "(3,4)".parse().unwrap());
        assert_eq!(Square::new(12, 0), " ( 12 , 0 ) ".parse().unwrap());

        assert!("".parse::<Square>().is_err());
        assert!("a,1".parse::<Square>().is_err());
        assert!("-1,2".parse::<Square>().is_err());
        assert!("1,2,3".parse::<Square>().is_err());
    }

    #[test]
    fn test_display() {
        let square = Square::new(5, 2);
        assert_eq!(square.to_string(), "(5, 2)");
        assert_eq!(square.to_string().parse::<Square>().unwrap(), square);
    }

    #[test]
    fn test_offsets_stay_on_board() {
        let corner = Square::new(4, 4);
        assert_eq!(corner.offset(-2, -1, 5), Some(Square::new(2, 3)));
        assert_eq!(corner.offset(1, 0, 5), None);
        assert_eq!(corner.offset(0, 1, 5), None);
        assert_eq!(corner.offset(0, 0, 4), None);
    }

    #[test]
    fn test_iter_covers_board() {
        let size = 6;
        let squares = Square::iter(size).collect::<Vec<_>>();
        assert_eq!(squares.len(), size * size);

        for (i, square) in squares.iter().enumerate() {
            assert!(square.is_within(size));
            assert_eq!(square.index(size), i);
        }
    }

    #[test]
    fn test_knight_moves() {
        let center = Square::new(3, 3);
        let jumps = Square::iter(8)
            .filter(|sq| sq.is_knight_move_from(center))
            .count();
        assert_eq!(jumps, 8);

        assert!(!center.is_knight_move_from(center));
        assert!(!center.is_knight_move_from(Square::new(4, 4)));
    }
}
