/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arrayvec::ArrayVec;

use crate::{Board, Square};

/// Maximum number of moves a knight can have from any square.
pub const MAX_KNIGHT_MOVES: usize = 8;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_KNIGHT_MOVES`] destination squares.
pub type MoveList = ArrayVec<Square, MAX_KNIGHT_MOVES>;

/// Deltas `(col, row)` for the movement of the Knight.
///
/// The order of this table decides which candidate is preferred when two have the same onward degree.
pub const KNIGHT_DELTAS: [(i8, i8); MAX_KNIGHT_MOVES] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Generates every square a knight on `square` can legally jump to.
///
/// A destination is legal if it lies on the board and has not been visited yet.
/// Moves are produced in the order of [`KNIGHT_DELTAS`].
pub fn legal_moves(board: &Board, square: Square) -> MoveList {
    KNIGHT_DELTAS
        .iter()
        .filter_map(|&(dc, dr)| square.offset(dc, dr, board.size()))
        .filter(|&dest| !board.is_visited(dest))
        .collect()
}

/// Number of legal moves a knight on `square` would have, given the current occupancy of `board`.
#[inline(always)]
pub fn onward_degree(board: &Board, square: Square) -> usize {
    legal_moves(board, square).len()
}

/// Generates legal moves from `square`, paired with their onward degree, ordered by Warnsdorff's rule.
///
/// Candidates with fewer onward moves come first.
/// Ties keep the order in which [`legal_moves`] produced them.
/// All degrees are computed against `board` as it is, before any candidate is taken.
pub fn scored_moves(board: &Board, square: Square) -> ArrayVec<(Square, usize), MAX_KNIGHT_MOVES> {
    let mut scored = legal_moves(board, square)
        .into_iter()
        .map(|dest| (dest, onward_degree(board, dest)))
        .collect::<ArrayVec<_, MAX_KNIGHT_MOVES>>();

    // Must remain a stable sort.
    scored.sort_by_key(|&(_, degree)| degree);

    scored
}

/// Generates legal moves from `square`, ordered by Warnsdorff's rule.
///
/// See [`scored_moves`] for the ordering.
#[inline(always)]
pub fn ordered_moves(board: &Board, square: Square) -> MoveList {
    scored_moves(board, square)
        .into_iter()
        .map(|(dest, _)| dest)
        .collect()
}
