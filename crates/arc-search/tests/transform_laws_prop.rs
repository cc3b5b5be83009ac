//! Property tests for the transform library.
//!
//! Invariants covered:
//! - `hmirror` is an involution and `rot90` has order four on rectangular grids.
//! - `compress` is a fixpoint once no uniform row or column remains.
//! - `lshift` keeps dimensions and the order of non-zero cells.
//! - `mapcolor` keeps dimensions and touches only the renamed color.
//! - `legal_actions` has the documented size and never repeats an action.
use std::collections::HashSet;

use arc_search::transform::{compress, hmirror, lshift, mapcolor, rot90, tophalf, trim, vmirror};
use arc_search::{legal_actions, Color, ColorSpace, Grid, State};
use proptest::prelude::*;

fn rect_grid(max_side: usize, colors: Color) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0..colors, cols), rows)
    })
}

fn ragged_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(0..3u8, 0..4), 0..4)
}

fn dims(grid: &Grid) -> Vec<usize> {
    grid.iter().map(Vec::len).collect()
}

fn has_uniform_line(grid: &Grid) -> bool {
    let uniform_row = grid
        .iter()
        .any(|row| !row.is_empty() && row.iter().all(|&c| c == row[0]));
    let width = grid.first().map_or(0, Vec::len);
    let uniform_col = (0..width).any(|j| grid.iter().all(|row| row[j] == grid[0][j]));
    uniform_row || uniform_col
}

proptest! {
    #[test]
    fn hmirror_is_an_involution(grid in rect_grid(5, 10)) {
        prop_assert_eq!(hmirror(&hmirror(&grid)), grid.clone());
        prop_assert_eq!(vmirror(&grid), hmirror(&grid));
    }

    #[test]
    fn rot90_has_order_four(grid in rect_grid(5, 10)) {
        let once = rot90(&grid);
        prop_assert_eq!(once.len(), grid[0].len());
        prop_assert!(once.iter().all(|row| row.len() == grid.len()));

        let back = rot90(&rot90(&rot90(&once)));
        prop_assert_eq!(back, grid);
    }

    #[test]
    fn compress_reaches_fixpoint(grid in rect_grid(5, 3)) {
        let compressed = compress(&grid);
        prop_assert!(compressed.len() <= grid.len());
        if !has_uniform_line(&compressed) {
            prop_assert_eq!(compress(&compressed), compressed);
        }
    }

    #[test]
    fn lshift_preserves_shape_and_order(grid in rect_grid(5, 4)) {
        let shifted = lshift(&grid);
        prop_assert_eq!(dims(&shifted), dims(&grid));

        for (before, after) in grid.iter().zip(&shifted) {
            let nonzero: Vec<Color> = before.iter().copied().filter(|&c| c != 0).collect();
            prop_assert_eq!(&after[..nonzero.len()], nonzero.as_slice());
            prop_assert!(after[nonzero.len()..].iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn mapcolor_renames_only_one_color(grid in rect_grid(5, 5), from in 0..5u8, to in 0..5u8) {
        let mapped = mapcolor(&grid, from, to);
        prop_assert_eq!(dims(&mapped), dims(&grid));

        for (before, after) in grid.iter().flatten().zip(mapped.iter().flatten()) {
            if *before == from {
                prop_assert_eq!(*after, to);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn transforms_tolerate_ragged_grids(grid in ragged_grid()) {
        let _ = tophalf(&grid);
        let _ = rot90(&grid);
        let _ = compress(&grid);
        let _ = trim(&grid);
        prop_assert_eq!(dims(&lshift(&grid)), dims(&grid));
    }

    #[test]
    fn legal_actions_are_distinct_and_counted(grid in rect_grid(4, 6)) {
        let state = State::new(grid.clone());
        let space = ColorSpace::from_grids([&grid, &vec![vec![7, 8]]]);
        let actions = legal_actions(&state, &space);

        let present = state.colors().len();
        prop_assert_eq!(actions.len(), 6 + present * (space.len() - 1));

        let distinct: HashSet<_> = actions.iter().collect();
        prop_assert_eq!(distinct.len(), actions.len());
    }
}
