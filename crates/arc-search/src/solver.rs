//! Bounded breadth-first search for transformation plans.
//!
//! The search expands grid states level by level from the input grid, using
//! the legal actions of each state in a fixed order. Every discovered state
//! is recorded once in a [`DiscoveryMap`] together with the state and action
//! it was reached from, so the first discovery of the target is a shortest
//! plan. The map doubles as the visited set.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use log::{debug, trace};
use serde::Serialize;

use crate::action::{legal_actions, Action};
use crate::executor::{replay, verify_plan};
use crate::grid::{Color, ColorSpace, Grid, State};
use crate::task::Task;

/// Default bound on plan length
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// States at this depth are not expanded
    pub max_depth: usize,
    /// Color universe for recolor actions; derived from the input and
    /// target grids when `None`
    pub color_space: Option<ColorSpace>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            color_space: None,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// How a state was first reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The input state
    Root,
    /// Reached by applying `action` to `parent`
    Step { parent: State, action: Action },
}

/// Backpointers from every discovered state to its predecessor
#[derive(Debug, Default)]
pub struct DiscoveryMap {
    entries: HashMap<State, Discovery>,
}

impl DiscoveryMap {
    fn with_root(root: State) -> Self {
        let mut entries = HashMap::new();
        entries.insert(root, Discovery::Root);
        Self { entries }
    }

    pub fn get(&self, state: &State) -> Option<&Discovery> {
        self.entries.get(state)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.entries.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk backpointers from `target` to the root.
    ///
    /// Returns an empty plan if `target` was never discovered (or is the
    /// root itself).
    pub fn reconstruct(&self, target: &State) -> Vec<Action> {
        let mut plan = Vec::new();
        let mut current = target;

        while let Some(Discovery::Step { parent, action }) = self.entries.get(current) {
            plan.push(*action);
            current = parent;
        }

        plan.reverse();
        plan
    }
}

/// Outcome of a single traversal
#[derive(Debug)]
pub struct Exploration {
    pub discovered: DiscoveryMap,
    /// States popped from the frontier and expanded
    pub states_expanded: usize,
    /// Deepest level that produced a discovery
    pub max_depth_reached: usize,
    /// The frontier ran dry before hitting the depth bound
    pub search_exhausted: bool,
}

/// Run the bounded breadth-first traversal from `input` toward `target`.
///
/// Stops as soon as the target is discovered, when a state at
/// `max_depth` reaches the front of the queue, or when the frontier is
/// empty.
pub fn explore(input: &State, target: &State, max_depth: usize, color_space: &ColorSpace) -> Exploration {
    let mut discovered = DiscoveryMap::with_root(input.clone());
    let mut frontier: VecDeque<(State, usize)> = VecDeque::new();
    frontier.push_back((input.clone(), 0));

    let mut states_expanded = 0;
    let mut max_depth_reached = 0;
    let mut search_exhausted = true;

    'search: while let Some((current, depth)) = frontier.pop_front() {
        if depth >= max_depth {
            debug!("depth bound {} reached with {} states discovered", max_depth, discovered.len());
            search_exhausted = false;
            break;
        }
        // Only possible when the input already equals the target
        if current == *target {
            search_exhausted = false;
            break;
        }

        states_expanded += 1;
        for action in legal_actions(&current, color_space) {
            let next = action.apply(&current);

            match discovered.entries.entry(next.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(Discovery::Step {
                        parent: current.clone(),
                        action,
                    });
                }
            }

            max_depth_reached = depth + 1;
            if next == *target {
                debug!(
                    "target discovered at depth {} after expanding {} states",
                    depth + 1,
                    states_expanded
                );
                search_exhausted = false;
                break 'search;
            }
            frontier.push_back((next, depth + 1));
        }
        trace!("expanded state at depth {}, frontier size {}", depth, frontier.len());
    }

    Exploration {
        discovered,
        states_expanded,
        max_depth_reached,
        search_exhausted,
    }
}

/// Result of the solver search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Shortest plan found (empty when none, or when input equals target)
    pub plan: Vec<Action>,
    /// Whether the target was reached
    pub solved: bool,
    /// Whether every reachable state was explored before the depth bound
    pub search_exhausted: bool,
    /// Number of distinct states discovered, including the input
    pub states_discovered: usize,
    /// Number of states expanded
    pub states_expanded: usize,
    /// Deepest level at which a new state was discovered
    pub max_depth_reached: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Find a shortest plan turning `input` into `target`, with full statistics.
pub fn search_with_config(input: &[Vec<Color>], target: &[Vec<Color>], config: &SearchConfig) -> SearchResult {
    let start_time = Instant::now();

    let input_state = State::from(input);
    let target_state = State::from(target);
    let color_space = match &config.color_space {
        Some(space) => space.clone(),
        None => ColorSpace::from_grids([input_state.grid(), target_state.grid()]),
    };

    let exploration = explore(&input_state, &target_state, config.max_depth, &color_space);
    let plan = exploration.discovered.reconstruct(&target_state);

    SearchResult {
        plan,
        solved: exploration.discovered.contains(&target_state),
        search_exhausted: exploration.search_exhausted,
        states_discovered: exploration.discovered.len(),
        states_expanded: exploration.states_expanded,
        max_depth_reached: exploration.max_depth_reached,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

/// Find a shortest plan of at most `max_depth` actions turning `input` into
/// `target`.
///
/// An empty plan means no plan was found (or the grids are already equal).
pub fn search(input: &[Vec<Color>], target: &[Vec<Color>], max_depth: usize) -> Vec<Action> {
    search_with_config(input, target, &SearchConfig::with_max_depth(max_depth)).plan
}

/// Result of solving a whole task
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Search on the first training pair
    pub search: SearchResult,
    /// Whether the plan reproduces every training output
    pub consistent: bool,
    /// Indices of training pairs the plan fails on
    pub failed_pairs: Vec<usize>,
    /// The plan replayed on every test input
    pub test_predictions: Vec<Grid>,
}

/// Search on the first training pair of a task, then check the plan on the
/// remaining pairs and apply it to the test inputs.
///
/// Returns `None` for a task without training pairs.
pub fn solve_task(task: &Task, config: &SearchConfig) -> Option<TaskResult> {
    let first = task.train.first()?;
    let search = search_with_config(&first.input, &first.output, config);

    let verification = verify_plan(&search.plan, &task.train);
    let test_predictions = if search.solved {
        task.test
            .iter()
            .map(|pair| replay(pair.input.as_slice(), &search.plan))
            .collect()
    } else {
        Vec::new()
    };

    Some(TaskResult {
        consistent: search.solved && verification.all_passed(),
        failed_pairs: verification.failed,
        search,
        test_predictions,
    })
}
