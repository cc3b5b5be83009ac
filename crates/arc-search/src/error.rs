use thiserror::Error;

/// Failure to decode the textual form of an action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("not an action: {0:?}")]
    Unknown(String),

    #[error("malformed recolor arguments in {0:?}, expected mapcolor(<from>,<to>)")]
    MalformedRecolor(String),
}
