/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board size used when none has been chosen.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest board size the command loop will accept.
///
/// Boards smaller than `5x5` have no knight's tours at all.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board size the command loop will accept.
pub const MAX_BOARD_SIZE: usize = 30;
