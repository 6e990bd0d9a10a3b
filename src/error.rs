/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::Square;

/// Ways a call into the solver can be rejected.
///
/// Failing to find a tour is *not* an error; see [`crate::SearchResult::tour`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourError {
    /// The start square does not lie on the board.
    #[error("start square {square} is not on a {size}x{size} board")]
    InvalidStart { square: Square, size: usize },

    /// A board must have at least one square.
    #[error("invalid board size {0}: must be at least 1")]
    InvalidSize(usize),

    /// A sequence of squares failed [`crate::Tour::validate`].
    #[error("illegal tour: {0}")]
    IllegalTour(String),
}
