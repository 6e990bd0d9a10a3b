/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use knights_tour::{solve, Search, SearchConfig, Square, Tour, TourError};

/// Checks every property a completed tour must have, independently of [`Tour::validate`].
fn assert_complete_tour(tour: &Tour, start: Square, size: usize) {
    assert_eq!(tour.len(), size * size, "tour from {start} has the wrong length");
    assert_eq!(tour.start(), start, "tour does not begin on {start}");

    let distinct = tour.iter().copied().collect::<HashSet<_>>();
    assert_eq!(distinct.len(), tour.len(), "tour from {start} revisits a square");
    assert!(tour.iter().all(|sq| sq.is_within(size)));

    for pair in tour.squares().windows(2) {
        let cols = pair[0].col().abs_diff(pair[1].col());
        let rows = pair[0].row().abs_diff(pair[1].row());
        let mut jump = [cols, rows];
        jump.sort();
        assert_eq!(jump, [1, 2], "{} -> {} is not a knight move", pair[0], pair[1]);
    }

    assert_eq!(tour.validate(size), Ok(()));
}

/// Runs the solver from every square of an `size x size` board, checking each tour found.
///
/// Returns the number of starting squares that produced a tour.
fn tours_found(size: usize) -> usize {
    Square::iter(size)
        .filter(|&start| match solve(start, size) {
            Ok(Some(tour)) => {
                assert_complete_tour(&tour, start, size);
                true
            }
            Ok(None) => false,
            Err(e) => panic!("{start} on {size}x{size} was rejected: {e}"),
        })
        .count()
}

#[test]
fn test_tours_found_per_board_size() {
    let expected = [(5, 12), (6, 35), (7, 18), (8, 63), (9, 41), (10, 98), (11, 61), (12, 138)];

    for (size, found) in expected {
        assert_eq!(tours_found(size), found, "{size}x{size}");
    }
}

#[test]
fn test_odd_boards_need_even_starts() {
    // An odd board has one more square of the corner's colour, so tours must start on that colour
    for size in [5, 7, 9] {
        for start in Square::iter(size) {
            if (start.col() + start.row()) % 2 == 1 {
                assert_eq!(solve(start, size), Ok(None), "{start} on {size}x{size}");
            }
        }
    }
}

#[test]
fn test_standard_board() {
    let start = Square::new(0, 0);
    let tour = solve(start, 8).unwrap().expect("a tour from the corner of an 8x8 board");
    assert_complete_tour(&tour, start, 8);
    assert!(!tour.is_closed());

    let board = tour.to_board(8);
    assert!(board.is_full());
    for (order, &square) in tour.iter().enumerate() {
        assert_eq!(board.order_at(square), Some(order));
    }
}

#[test]
fn test_single_square() {
    let tour = solve(Square::new(0, 0), 1).unwrap().unwrap();
    assert_eq!(tour.into_inner(), vec![Square::new(0, 0)]);
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(
        solve(Square::new(8, 8), 8),
        Err(TourError::InvalidStart { .. })
    ));
    assert_eq!(solve(Square::new(0, 0), 0), Err(TourError::InvalidSize(0)));
}

#[test]
fn test_search_is_repeatable() {
    for start in Square::iter(8) {
        let first = Search::new(SearchConfig::default()).start(start).unwrap();
        let second = Search::new(SearchConfig::new(8)).start(start).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_searches_on_separate_threads() {
    let handles = Square::iter(6)
        .map(|start| std::thread::spawn(move || (start, solve(start, 6))))
        .collect::<Vec<_>>();

    for handle in handles {
        let (start, result) = handle.join().unwrap();
        assert_eq!(result, solve(start, 6));
    }
}
