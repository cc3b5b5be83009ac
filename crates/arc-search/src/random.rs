//! Random action walks for generating exercise puzzles.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::action::{legal_actions, Action};
use crate::grid::{ColorSpace, State};

/// Apply `steps` uniformly random legal actions to `state`.
///
/// Returns the final state and the actions taken. Every state has the six
/// fixed transforms available, so a walk never gets stuck.
pub fn randomize<R: Rng + ?Sized>(
    state: &State,
    steps: usize,
    color_space: &ColorSpace,
    rng: &mut R,
) -> (State, Vec<Action>) {
    let mut current = state.clone();
    let mut taken = Vec::with_capacity(steps);

    for _ in 0..steps {
        let actions = legal_actions(&current, color_space);
        let Some(&action) = actions.choose(rng) else {
            break;
        };
        current = action.apply(&current);
        taken.push(action);
    }

    (current, taken)
}
