//! Plan replay and verification.
//!
//! Replay applies actions one after another to a copy of the starting grid;
//! the caller's grid is never modified.

use crate::action::{parse_actions, Action};
use crate::error::ActionError;
use crate::grid::{Grid, State};
use crate::task::Example;

/// Apply `actions` in order to `start`, returning the final grid.
///
/// Accepts a [`State`] or raw rows (`Grid` or `&[Vec<Color>]`).
pub fn replay(start: impl Into<State>, actions: &[Action]) -> Grid {
    let start: State = start.into();
    actions
        .iter()
        .fold(start, |state, action| action.apply(&state))
        .into()
}

/// Decode textual actions and replay them.
///
/// Fails on the first action that is not part of the vocabulary, before
/// anything is applied.
pub fn replay_encoded<S: AsRef<str>>(start: impl Into<State>, encoded: &[S]) -> Result<Grid, ActionError> {
    let actions = parse_actions(encoded)?;
    Ok(replay(start, &actions))
}

/// Which example pairs a plan reproduces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    /// Indices of pairs whose output the plan reproduces
    pub passed: Vec<usize>,
    /// Indices of pairs whose output differs from the replayed grid
    pub failed: Vec<usize>,
}

impl Verification {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Replay `plan` on every example input and compare with its output
pub fn verify_plan(plan: &[Action], examples: &[Example]) -> Verification {
    let mut verification = Verification::default();

    for (index, example) in examples.iter().enumerate() {
        if replay(example.input.as_slice(), plan) == example.output {
            verification.passed.push(index);
        } else {
            verification.failed.push(index);
        }
    }

    verification
}
