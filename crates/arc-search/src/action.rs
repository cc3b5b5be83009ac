//! Actions and legal-action enumeration.
//!
//! Internally an action is a tagged value; the textual form
//! (`rot90`, `mapcolor(5,2)`, ...) is only used at the JSON/CLI boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;
use crate::grid::{Color, ColorSpace, Grid, State};
use crate::transform;

/// One grid transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    Tophalf,
    Rot90,
    Hmirror,
    Vmirror,
    Lshift,
    Compress,
    Recolor { from: Color, to: Color },
    /// Replay only, never enumerated by [`legal_actions`]
    Trim,
}

/// Parameterless actions tried first from every state, in this order
pub const FIXED_ACTIONS: [Action; 6] = [
    Action::Tophalf,
    Action::Rot90,
    Action::Hmirror,
    Action::Vmirror,
    Action::Lshift,
    Action::Compress,
];

impl Action {
    /// Apply this action to a grid, producing a new grid
    pub fn apply_grid(self, grid: &[Vec<Color>]) -> Grid {
        match self {
            Action::Tophalf => transform::tophalf(grid),
            Action::Rot90 => transform::rot90(grid),
            Action::Hmirror => transform::hmirror(grid),
            Action::Vmirror => transform::vmirror(grid),
            Action::Lshift => transform::lshift(grid),
            Action::Compress => transform::compress(grid),
            Action::Recolor { from, to } => transform::mapcolor(grid, from, to),
            Action::Trim => transform::trim(grid),
        }
    }

    /// Apply this action to a state, producing the successor state
    pub fn apply(self, state: &State) -> State {
        State::new(self.apply_grid(state.grid()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tophalf => f.write_str("tophalf"),
            Action::Rot90 => f.write_str("rot90"),
            Action::Hmirror => f.write_str("hmirror"),
            Action::Vmirror => f.write_str("vmirror"),
            Action::Lshift => f.write_str("lshift"),
            Action::Compress => f.write_str("compress"),
            Action::Recolor { from, to } => write!(f, "mapcolor({},{})", from, to),
            Action::Trim => f.write_str("trim"),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tophalf" => return Ok(Action::Tophalf),
            "rot90" => return Ok(Action::Rot90),
            "hmirror" => return Ok(Action::Hmirror),
            "vmirror" => return Ok(Action::Vmirror),
            "lshift" => return Ok(Action::Lshift),
            "compress" => return Ok(Action::Compress),
            "trim" => return Ok(Action::Trim),
            _ => {}
        }

        let args = s
            .strip_prefix("mapcolor(")
            .ok_or_else(|| ActionError::Unknown(s.to_string()))?
            .strip_suffix(')')
            .ok_or_else(|| ActionError::MalformedRecolor(s.to_string()))?;
        let (from, to) = args
            .split_once(',')
            .ok_or_else(|| ActionError::MalformedRecolor(s.to_string()))?;

        Ok(Action::Recolor {
            from: parse_color(from).ok_or_else(|| ActionError::MalformedRecolor(s.to_string()))?,
            to: parse_color(to).ok_or_else(|| ActionError::MalformedRecolor(s.to_string()))?,
        })
    }
}

/// Decimal digits only; rejects signs and whitespace
fn parse_color(text: &str) -> Option<Color> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl TryFrom<String> for Action {
    type Error = ActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

/// Decode a list of textual actions, failing on the first bad one
pub fn parse_actions<S: AsRef<str>>(encoded: &[S]) -> Result<Vec<Action>, ActionError> {
    encoded.iter().map(|s| s.as_ref().parse()).collect()
}

/// Decode a comma-separated plan such as `rot90, mapcolor(1,2)`.
///
/// Commas inside parentheses belong to the action; whitespace around each
/// action is ignored. An empty string is the empty plan.
pub fn parse_plan(text: &str) -> Result<Vec<Action>, ActionError> {
    let mut actions = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                actions.push(text[start..i].trim().parse()?);
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = text[start..].trim();
    if !last.is_empty() || !actions.is_empty() {
        actions.push(last.parse()?);
    }
    Ok(actions)
}

/// Get the legal actions from a state, in search order.
///
/// The six fixed transforms come first, then `Recolor { from, to }` for every
/// color `from` present in the grid and every other color `to` of the color
/// space, both ascending.
pub fn legal_actions(state: &State, color_space: &ColorSpace) -> Vec<Action> {
    let present = state.colors();
    let mut actions = Vec::with_capacity(FIXED_ACTIONS.len() + present.len() * color_space.len());
    actions.extend_from_slice(&FIXED_ACTIONS);

    for &from in &present {
        for to in color_space.iter() {
            if from == to {
                continue;
            }
            actions.push(Action::Recolor { from, to });
        }
    }

    actions
}
