//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::NodeError;

/// Errors surfaced by the crate outside of pure node operations.
#[derive(Error, Debug)]
pub enum ArborError {
    #[error("{0}")]
    Node(#[from] NodeError),

    #[error("config error: {message}")]
    Config { message: String },
}

pub type ArborResult<T> = Result<T, ArborError>;
