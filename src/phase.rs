//! The four reduction phases and their coordinate encodings.
//!
//! A coordinate collapses a [`CubeState`] into a dense integer that is zero
//! exactly when the phase's partial goal holds. Phase 3 additionally folds in
//! the single-turn parity counter, which distinguishes two states the corner
//! and edge data alone cannot tell apart. The index tables and weights below
//! are domain data: they fix which cubies each phase tracks and in what
//! positional order, and the phases only compose correctly because every
//! encoding uses the same tables.

use crate::cube::CubeState;

/// An immutable descriptor of one reduction phase.
pub struct Phase {
    /// Exclusive upper bound of the coordinate space.
    pub size: usize,
    /// Indices into [`crate::moves::MOVES`] legal within this phase. Each
    /// phase's set contains the next phase's; the listed order fixes the
    /// tie-breaking between equal-length solutions.
    pub moves: &'static [usize],
    coordinate: fn(&CubeState, u32) -> usize,
}

impl Phase {
    /// Evaluate this phase's coordinate for a state and quarter-turn count.
    pub fn coordinate(&self, state: &CubeState, single_turns: u32) -> usize {
        (self.coordinate)(state, single_turns)
    }
}

/// The four phases in solving order.
pub static PHASES: [Phase; 4] = [
    Phase {
        size: 2048,
        moves: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
        coordinate: edge_orientation,
    },
    Phase {
        size: 1_082_565,
        moves: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 14, 17],
        coordinate: corner_orientation_and_slice,
    },
    Phase {
        size: 33_554_432,
        moves: &[0, 1, 2, 3, 4, 5, 8, 11, 14, 17],
        coordinate: subgroup_placement_and_parity,
    },
    Phase {
        size: 22_663_552,
        moves: &[2, 5, 8, 11, 14, 17],
        coordinate: tetrad_slice_rank,
    },
];

/// Which of the three slices each edge belongs to; slice 2 is the equatorial
/// slice fixed by phase 2.
const SLICES: [u8; 12] = [0, 1, 0, 1, 2, 2, 2, 2, 0, 1, 0, 1];

/// The edge positions of each slice, in coordinate scan order. Reverse of
/// [`SLICES`].
const SLICE_EDGES: [[usize; 4]; 3] = [[0, 2, 10, 8], [1, 3, 11, 9], [4, 5, 6, 7]];

/// Rank of each non-equatorial edge within the phase-3 slice mask. The four
/// equatorial edges carry a sentinel; once phase 2 has placed them they can
/// no longer occupy the masked positions.
const SLICE_ORDER: [i8; 12] = [0, 4, 1, 5, -1, -1, -1, -1, 3, 7, 2, 6];

/// Rank of each corner within the phase-3 tetrad mask.
const TETRAD_ORDER: [u8; 8] = [0, 4, 1, 5, 6, 2, 7, 3];

/// The corner positions of each tetrad, in coordinate scan order.
const TETRAD_CORNERS: [[usize; 4]; 2] = [[0, 2, 5, 7], [1, 3, 4, 6]];

/// Which duo each corner belongs to.
const DUOS: [u8; 8] = [0, 0, 1, 1, 2, 2, 3, 3];

/// `COMBINATIONS[r][c]` is `C(r, c)`, the running combinations table ranking
/// a 4-subset placement among 12 positions.
const COMBINATIONS: [[usize; 4]; 12] = [
    [1, 0, 0, 0],
    [1, 1, 0, 0],
    [1, 2, 1, 0],
    [1, 3, 3, 1],
    [1, 4, 6, 4],
    [1, 5, 10, 10],
    [1, 6, 15, 20],
    [1, 7, 21, 35],
    [1, 8, 28, 56],
    [1, 9, 36, 84],
    [1, 10, 45, 120],
    [1, 11, 55, 165],
];

const POW3: [usize; 7] = [1, 3, 9, 27, 81, 243, 729];

/// Positional weights of the five factorial-system ranks in phase 4: two
/// corner tetrads then three edge slices, 24 states each.
const CORNER_WEIGHTS: [usize; 2] = [331_776, 13_824];
const EDGE_WEIGHTS: [usize; 3] = [576, 24, 1];

/// Digit weights of a rank over four elements.
const FACTORIALS: [usize; 4] = [6, 2, 1, 1];

/// Phase 1: the 11 independent edge-orientation bits read as a binary number.
/// The twelfth bit is determined by the others and excluded.
fn edge_orientation(state: &CubeState, _single_turns: u32) -> usize {
    state.eo[..11]
        .iter()
        .fold(0, |acc, &bit| (acc << 1) | bit as usize)
}

/// Phase 2: seven independent corner-orientation digits in base 3, scaled
/// past the combinatorial rank of which positions hold the four equatorial
/// edges.
fn corner_orientation_and_slice(state: &CubeState, _single_turns: u32) -> usize {
    let mut coord = 0;
    for i in 0..7 {
        coord += 495 * POW3[6 - i] * state.co[i] as usize;
    }

    let mut edges_found = 0;
    for (i, slice) in SLICE_EDGES.iter().enumerate() {
        for (j, &pos) in slice.iter().enumerate() {
            if SLICES[state.ep[pos] as usize] == 2 {
                edges_found += 1;
            } else if edges_found > 0 {
                coord += COMBINATIONS[4 * i + j][edges_found - 1];
            }
        }
    }

    coord
}

/// Phase 3: slice membership of four edge positions, tetrad membership of
/// four corner positions and the two corner duo placements, each ranked as a
/// bit mask minus its minimal value, packed into disjoint fields with the
/// raw single-turn parity as the lowest bit.
///
/// The duo term can dip below zero mid-rank, so the fields combine by signed
/// arithmetic rather than OR.
fn subgroup_placement_and_parity(state: &CubeState, single_turns: u32) -> usize {
    let coord = 131_072 * slice_placement(state)
        + 512 * tetrad_placement(state)
        + 2 * corner_duo_placement(state)
        + (single_turns % 2) as i32;
    coord as usize
}

fn slice_placement(state: &CubeState) -> i32 {
    let mut mask = 1i32 << SLICE_ORDER[state.ep[0] as usize];
    mask |= 1 << SLICE_ORDER[state.ep[2] as usize];
    mask |= 1 << SLICE_ORDER[state.ep[8] as usize];
    mask |= 1 << SLICE_ORDER[state.ep[10] as usize];
    mask - 15
}

fn tetrad_placement(state: &CubeState) -> i32 {
    let mut mask = 1i32 << TETRAD_ORDER[state.cp[0] as usize];
    mask |= 1 << TETRAD_ORDER[state.cp[2] as usize];
    mask |= 1 << TETRAD_ORDER[state.cp[5] as usize];
    mask |= 1 << TETRAD_ORDER[state.cp[7] as usize];
    mask - 15
}

fn corner_duo_placement(state: &CubeState) -> i32 {
    let mut mask = 1i32 << DUOS[state.cp[0] as usize];
    mask |= 1 << DUOS[state.cp[2] as usize];
    mask -= 3;
    mask <<= 4;
    mask |= 1 << DUOS[state.cp[1] as usize];
    mask |= 1 << DUOS[state.cp[3] as usize];
    mask - 3
}

/// Phase 4: the lexicographic rank of the corner permutation within its two
/// tetrads and the edge permutation within its three slices, each a
/// factorial-number-system rank weighted by powers of 24.
fn tetrad_slice_rank(state: &CubeState, _single_turns: u32) -> usize {
    let mut corner_order: [usize; 8] = [0, 0, 1, 1, 2, 2, 3, 3];
    let mut edge_order: [usize; 12] = [0, 0, 1, 1, 0, 1, 2, 3, 3, 3, 2, 2];
    let mut coord = 0;

    for (i, tetrad) in TETRAD_CORNERS.iter().enumerate() {
        for (j, &pos) in tetrad.iter().enumerate() {
            let rank = corner_order[state.cp[pos] as usize];
            coord += CORNER_WEIGHTS[i] * FACTORIALS[j] * rank;
            // Close the gap left by the consumed rank.
            for &other in tetrad {
                let piece = state.cp[other] as usize;
                if corner_order[piece] > rank {
                    corner_order[piece] -= 1;
                }
            }
        }
    }

    for (i, slice) in SLICE_EDGES.iter().enumerate() {
        for (j, &pos) in slice.iter().enumerate() {
            let rank = edge_order[state.ep[pos] as usize];
            coord += EDGE_WEIGHTS[i] * FACTORIALS[j] * rank;
            for &other in slice {
                let piece = state.ep[other] as usize;
                if edge_order[piece] > rank {
                    edge_order[piece] -= 1;
                }
            }
        }
    }

    coord
}
