//! This module defines the error types surfaced by the solve pipeline.

use thiserror::Error;

/// Errors reported when solving a scramble.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The scramble contained a token outside the 18-move alphabet.
    #[error("unrecognized move token `{0}`")]
    UnknownMove(String),
    /// Both parity attempts exhausted the final phase, so the input cannot be
    /// a legally scrambled cube.
    #[error("scramble is not a reachable cube configuration")]
    Unsolvable,
}
