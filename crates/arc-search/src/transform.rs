//! Primitive grid transforms.
//!
//! Every function is pure: it borrows a grid and returns a new one. None of
//! them validate rectangularity, and all of them tolerate empty or ragged
//! input without panicking.

use crate::grid::{Color, Grid};

/// Upper half: the first `rows / 2` rows
pub fn tophalf(grid: &[Vec<Color>]) -> Grid {
    grid[..grid.len() / 2].to_vec()
}

/// Clockwise rotation by 90 degrees: `new[i][j] = old[rows - 1 - j][i]`.
///
/// Ragged grids rotate over the columns present in every row.
pub fn rot90(grid: &[Vec<Color>]) -> Grid {
    let width = common_width(grid);
    (0..width)
        .map(|i| grid.iter().rev().map(|row| row[i]).collect())
        .collect()
}

/// Mirror along the horizontal axis (reverses row order)
pub fn hmirror(grid: &[Vec<Color>]) -> Grid {
    grid.iter().rev().cloned().collect()
}

/// Also reverses row order, identical to [`hmirror`].
///
/// Existing plans depend on this behavior; a column-reversing mirror would
/// change which plans the solver finds.
pub fn vmirror(grid: &[Vec<Color>]) -> Grid {
    grid.iter().rev().cloned().collect()
}

/// Slide non-zero cells of each row to the left, padding with zeros
pub fn lshift(grid: &[Vec<Color>]) -> Grid {
    grid.iter()
        .map(|row| {
            let mut shifted: Vec<Color> = row.iter().copied().filter(|&c| c != 0).collect();
            shifted.resize(row.len(), 0);
            shifted
        })
        .collect()
}

/// Remove uniform rows and uniform columns.
///
/// Uniformity is judged on the original grid, so removing a row never
/// causes a column to be removed. Empty rows are not uniform.
pub fn compress(grid: &[Vec<Color>]) -> Grid {
    let width = common_width(grid);
    let uniform_cols: Vec<bool> = (0..width)
        .map(|j| grid.iter().all(|row| row[j] == grid[0][j]))
        .collect();

    grid.iter()
        .filter(|row| !is_uniform(row))
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| !uniform_cols.get(j).copied().unwrap_or(false))
                .map(|(_, &c)| c)
                .collect()
        })
        .collect()
}

/// Replace every cell of color `from` with `to`
pub fn mapcolor(grid: &[Vec<Color>], from: Color, to: Color) -> Grid {
    grid.iter()
        .map(|row| row.iter().map(|&c| if c == from { to } else { c }).collect())
        .collect()
}

/// Drop the outermost ring of cells.
///
/// Grids with fewer than three rows become empty; rows shorter than three
/// cells become empty rows.
pub fn trim(grid: &[Vec<Color>]) -> Grid {
    inner(grid)
        .iter()
        .map(|row| inner(row).to_vec())
        .collect()
}

/// Slice without the first and last element (empty if fewer than three)
fn inner<T>(items: &[T]) -> &[T] {
    if items.len() < 3 {
        &[]
    } else {
        &items[1..items.len() - 1]
    }
}

fn is_uniform(row: &[Color]) -> bool {
    match row.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c == first),
        None => false,
    }
}

/// Number of columns present in every row (0 for an empty grid)
fn common_width(grid: &[Vec<Color>]) -> usize {
    grid.iter().map(Vec::len).min().unwrap_or(0)
}
