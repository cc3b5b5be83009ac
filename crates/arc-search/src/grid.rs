//! Grid representation types that match the ARC JSON format.
//!
//! A grid is a list of rows of small color codes. `State` wraps a grid as an
//! immutable value with structural equality so it can key the solver's
//! discovery map.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A color code (ARC uses 0-9)
pub type Color = u8;

/// Rows of color codes. Rectangularity is not enforced.
pub type Grid = Vec<Vec<Color>>;

/// Colors present in a single grid, ascending
pub type PresentColors = SmallVec<[Color; 10]>;

/// An immutable grid state.
///
/// Cloning is cheap (the rows are shared). Two states are equal iff their
/// grids are equal cell for cell, and equal states hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Grid", into = "Grid")]
pub struct State {
    grid: Rc<Grid>,
}

impl State {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid: Rc::new(grid),
        }
    }

    /// Borrow the underlying rows
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy the rows out as a plain nested vector
    pub fn to_grid(&self) -> Grid {
        self.grid.as_ref().clone()
    }

    /// Distinct colors present in the grid, ascending
    pub fn colors(&self) -> PresentColors {
        let mut seen = [false; 256];
        for &cell in self.grid.iter().flatten() {
            seen[cell as usize] = true;
        }
        (0..=Color::MAX).filter(|&c| seen[c as usize]).collect()
    }
}

impl From<Grid> for State {
    fn from(grid: Grid) -> Self {
        State::new(grid)
    }
}

impl From<&[Vec<Color>]> for State {
    fn from(grid: &[Vec<Color>]) -> Self {
        State::new(grid.to_vec())
    }
}

impl From<State> for Grid {
    fn from(state: State) -> Self {
        Rc::try_unwrap(state.grid).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.iter() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

/// The fixed universe of colors considered by one search.
///
/// Iteration is ascending so action enumeration is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpace(BTreeSet<Color>);

impl ColorSpace {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }

    /// The standard ARC palette, 0 through 9
    pub fn palette() -> Self {
        Self::new(0..=9)
    }

    /// Union of every color appearing in the given grids
    pub fn from_grids<'a>(grids: impl IntoIterator<Item = &'a Grid>) -> Self {
        Self(
            grids
                .into_iter()
                .flat_map(|g| g.iter().flatten().copied())
                .collect(),
        )
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ColorSpace {
    fn default() -> Self {
        Self::palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(state: &State) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_state_structural_equality() {
        let a = State::new(vec![vec![1, 2], vec![3, 4]]);
        let rows: &[Vec<Color>] = &[vec![1, 2], vec![3, 4]];
        let b = State::from(rows);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, State::new(vec![vec![1, 2], vec![4, 3]]));
        assert_ne!(a, State::new(vec![vec![1, 2, 3, 4]]));
    }

    #[test]
    fn test_state_colors_sorted_and_distinct() {
        let state = State::new(vec![vec![5, 0, 5], vec![2, 0, 9]]);
        assert_eq!(state.colors().as_slice(), &[0, 2, 5, 9]);
        assert!(State::new(vec![]).colors().is_empty());
    }

    #[test]
    fn test_state_display() {
        let state = State::new(vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(state.to_string(), "[1, 0]\n[0, 1]\n");
    }

    #[test]
    fn test_state_serde_as_plain_grid() {
        let state: State = serde_json::from_str("[[1,2],[3,4]]").unwrap();
        assert_eq!(state.grid(), &vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(serde_json::to_string(&state).unwrap(), "[[1,2],[3,4]]");
    }

    #[test]
    fn test_color_space_from_grids() {
        let input = vec![vec![0, 5], vec![5, 0]];
        let output = vec![vec![2, 0]];
        let space = ColorSpace::from_grids([&input, &output]);

        assert_eq!(space.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
        assert!(space.contains(5));
        assert!(!space.contains(1));
        assert_eq!(ColorSpace::default().len(), 10);
    }
}
