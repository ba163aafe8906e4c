//! The cubie-level description of a cube configuration.

use crate::error::SolveError;
use crate::moves::Move;

/// A cube configuration, tracking the orientation and permutation of the 8
/// corners and 12 edges.
///
/// Orientation is the twist (corners, mod 3) or flip (edges, mod 2) of the
/// piece occupying each position, relative to the solved reference. The
/// permutation arrays record which piece identity occupies each position and
/// are always bijections; every move preserves these invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeState {
    /// Corner orientation per position, each in `{0, 1, 2}`.
    pub co: [u8; 8],
    /// Edge orientation per position, each in `{0, 1}`.
    pub eo: [u8; 12],
    /// Corner identity per position, a permutation of `0..8`.
    pub cp: [u8; 8],
    /// Edge identity per position, a permutation of `0..12`.
    pub ep: [u8; 12],
}

impl CubeState {
    /// The solved cube: no piece twisted, flipped or displaced.
    pub const SOLVED: Self = CubeState {
        co: [0; 8],
        eo: [0; 12],
        cp: [0, 1, 2, 3, 4, 5, 6, 7],
        ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    };

    /// Build the state reached by applying a whitespace-separated scramble to
    /// the solved cube. The empty string denotes the solved state.
    pub fn from_scramble(scramble: &str) -> Result<CubeState, SolveError> {
        scramble
            .split_whitespace()
            .try_fold(CubeState::SOLVED, |state, token| {
                let mv = Move::from_name(token)
                    .ok_or_else(|| SolveError::UnknownMove(token.to_owned()))?;
                Ok(state.apply(mv))
            })
    }
}
