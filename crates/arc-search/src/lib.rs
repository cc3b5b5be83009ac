//! Program synthesis for ARC grid puzzles.
//!
//! This crate finds the shortest sequence of primitive grid transforms
//! (rotation, mirroring, shifting, compression, recoloring) that turns an
//! input grid into a target grid, using a bounded breadth-first search over
//! grid states.

pub mod action;
pub mod error;
pub mod executor;
pub mod grid;
pub mod random;
pub mod solver;
pub mod task;
pub mod transform;

// Re-export main types
pub use action::{legal_actions, parse_actions, parse_plan, Action, FIXED_ACTIONS};
pub use error::ActionError;
pub use executor::{replay, replay_encoded, verify_plan, Verification};
pub use grid::{Color, ColorSpace, Grid, State};
pub use random::randomize;
pub use solver::{
    explore, search, search_with_config, solve_task, Discovery, DiscoveryMap, Exploration,
    SearchConfig, SearchResult, TaskResult, DEFAULT_MAX_DEPTH,
};
pub use task::{Example, Task, TaskInput, TestInput};
