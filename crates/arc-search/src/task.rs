//! Task types that match the ARC JSON format.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// An input grid with its expected output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: Grid,
    pub output: Grid,
}

/// A test input; the output is absent in evaluation sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInput {
    pub input: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

/// A complete ARC task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub train: Vec<Example>,
    #[serde(default)]
    pub test: Vec<TestInput>,
}

/// Either a full task or a single input/output pair
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskInput {
    Task(Task),
    Pair(Example),
}

impl From<TaskInput> for Task {
    fn from(input: TaskInput) -> Self {
        match input {
            TaskInput::Task(task) => task,
            TaskInput::Pair(example) => Task {
                train: vec![example],
                test: vec![],
            },
        }
    }
}
