//! The 18 face turns and their effect on a [`CubeState`].
//!
//! Every move is one row of a fixed table: a permutation source index per
//! corner/edge slot (`new[i] = old[perm[i]]`) plus an orientation delta per
//! slot, reduced mod 3 for corners and mod 2 for edges. Half turns carry
//! their own rows rather than being two applications of the quarter turn;
//! the two must agree, which the tests check face by face.

use std::fmt;

use crate::cube::CubeState;

/// One of the 18 legal face turns, defined once in [`MOVES`] and shared by
/// reference everywhere else.
#[derive(PartialEq, Eq)]
pub struct Move {
    /// Token naming this move in scramble and solution notation.
    pub name: &'static str,
    cp_offsets: [u8; 8],
    co_offsets: [u8; 8],
    ep_offsets: [u8; 12],
    eo_offsets: [u8; 12],
    inverse: usize,
    single_turns: u32,
}

impl Move {
    /// Look up a move by its token, e.g. `R` or `F2`.
    pub fn from_name(name: &str) -> Option<&'static Move> {
        MOVES.iter().find(|m| m.name == name)
    }

    /// The move undoing this one. Quarter turns pair up with their reverse;
    /// half turns are self-inverse.
    pub fn inverse(&self) -> &'static Move {
        &MOVES[self.inverse]
    }

    /// How many quarter turns this move contributes to the single-turn parity
    /// counter: 1 for quarter turns, 0 for half turns.
    pub fn single_turns(&self) -> u32 {
        self.single_turns
    }
}

// The token already identifies the move completely.
impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl CubeState {
    /// Apply a single move, returning the resulting state.
    pub fn apply(self, mv: &Move) -> CubeState {
        let mut co = [0; 8];
        let mut cp = [0; 8];
        let mut eo = [0; 12];
        let mut ep = [0; 12];

        for i in 0..8 {
            co[i] = (self.co[mv.cp_offsets[i] as usize] + mv.co_offsets[i]) % 3;
            cp[i] = self.cp[mv.cp_offsets[i] as usize];
        }

        for i in 0..12 {
            eo[i] = (self.eo[mv.ep_offsets[i] as usize] + mv.eo_offsets[i]) % 2;
            ep[i] = self.ep[mv.ep_offsets[i] as usize];
        }

        CubeState { co, eo, cp, ep }
    }

    /// Fold a sequence of moves over this state.
    pub fn apply_all<'a>(self, moves: impl IntoIterator<Item = &'a Move>) -> CubeState {
        moves.into_iter().fold(self, |state, mv| state.apply(mv))
    }
}

/// The move table. Index order is the scramble alphabet order
/// U U' U2 D D' D2 R R' R2 L L' L2 F F' F2 B B' B2, which also fixes the
/// tie-breaking order of the phase searches.
pub static MOVES: [Move; 18] = [
    Move {
        name: "U",
        cp_offsets: [3, 0, 1, 2, 4, 5, 6, 7],
        co_offsets: [0; 8],
        ep_offsets: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        eo_offsets: [0; 12],
        inverse: 1,
        single_turns: 1,
    },
    Move {
        name: "U'",
        cp_offsets: [1, 2, 3, 0, 4, 5, 6, 7],
        co_offsets: [0; 8],
        ep_offsets: [1, 2, 3, 0, 4, 5, 6, 7, 8, 9, 10, 11],
        eo_offsets: [0; 12],
        inverse: 0,
        single_turns: 1,
    },
    Move {
        name: "U2",
        cp_offsets: [2, 3, 0, 1, 4, 5, 6, 7],
        co_offsets: [0; 8],
        ep_offsets: [2, 3, 0, 1, 4, 5, 6, 7, 8, 9, 10, 11],
        eo_offsets: [0; 12],
        inverse: 2,
        single_turns: 0,
    },
    Move {
        name: "D",
        cp_offsets: [0, 1, 2, 3, 5, 6, 7, 4],
        co_offsets: [0; 8],
        ep_offsets: [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 8],
        eo_offsets: [0; 12],
        inverse: 4,
        single_turns: 1,
    },
    Move {
        name: "D'",
        cp_offsets: [0, 1, 2, 3, 7, 4, 5, 6],
        co_offsets: [0; 8],
        ep_offsets: [0, 1, 2, 3, 4, 5, 6, 7, 11, 8, 9, 10],
        eo_offsets: [0; 12],
        inverse: 3,
        single_turns: 1,
    },
    Move {
        name: "D2",
        cp_offsets: [0, 1, 2, 3, 6, 7, 4, 5],
        co_offsets: [0; 8],
        ep_offsets: [0, 1, 2, 3, 4, 5, 6, 7, 10, 11, 8, 9],
        eo_offsets: [0; 12],
        inverse: 5,
        single_turns: 0,
    },
    Move {
        name: "R",
        cp_offsets: [4, 1, 2, 0, 7, 5, 6, 3],
        co_offsets: [2, 0, 0, 1, 1, 0, 0, 2],
        ep_offsets: [0, 1, 2, 4, 11, 5, 6, 3, 8, 9, 10, 7],
        eo_offsets: [0; 12],
        inverse: 7,
        single_turns: 1,
    },
    Move {
        name: "R'",
        cp_offsets: [3, 1, 2, 7, 0, 5, 6, 4],
        co_offsets: [2, 0, 0, 1, 1, 0, 0, 2],
        ep_offsets: [0, 1, 2, 7, 3, 5, 6, 11, 8, 9, 10, 4],
        eo_offsets: [0; 12],
        inverse: 6,
        single_turns: 1,
    },
    Move {
        name: "R2",
        cp_offsets: [7, 1, 2, 4, 3, 5, 6, 0],
        co_offsets: [0; 8],
        ep_offsets: [0, 1, 2, 11, 7, 5, 6, 4, 8, 9, 10, 3],
        eo_offsets: [0; 12],
        inverse: 8,
        single_turns: 0,
    },
    Move {
        name: "L",
        cp_offsets: [0, 2, 6, 3, 4, 1, 5, 7],
        co_offsets: [0, 1, 2, 0, 0, 2, 1, 0],
        ep_offsets: [0, 6, 2, 3, 4, 1, 9, 7, 8, 5, 10, 11],
        eo_offsets: [0; 12],
        inverse: 10,
        single_turns: 1,
    },
    Move {
        name: "L'",
        cp_offsets: [0, 5, 1, 3, 4, 6, 2, 7],
        co_offsets: [0, 1, 2, 0, 0, 2, 1, 0],
        ep_offsets: [0, 5, 2, 3, 4, 9, 1, 7, 8, 6, 10, 11],
        eo_offsets: [0; 12],
        inverse: 9,
        single_turns: 1,
    },
    Move {
        name: "L2",
        cp_offsets: [0, 6, 5, 3, 4, 2, 1, 7],
        co_offsets: [0; 8],
        ep_offsets: [0, 9, 2, 3, 4, 6, 5, 7, 8, 1, 10, 11],
        eo_offsets: [0; 12],
        inverse: 11,
        single_turns: 0,
    },
    Move {
        name: "F",
        cp_offsets: [1, 5, 2, 3, 0, 4, 6, 7],
        co_offsets: [1, 2, 0, 0, 2, 1, 0, 0],
        ep_offsets: [5, 1, 2, 3, 0, 8, 6, 7, 4, 9, 10, 11],
        eo_offsets: [1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0],
        inverse: 13,
        single_turns: 1,
    },
    Move {
        name: "F'",
        cp_offsets: [4, 0, 2, 3, 5, 1, 6, 7],
        co_offsets: [1, 2, 0, 0, 2, 1, 0, 0],
        ep_offsets: [4, 1, 2, 3, 8, 0, 6, 7, 5, 9, 10, 11],
        eo_offsets: [1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0],
        inverse: 12,
        single_turns: 1,
    },
    Move {
        name: "F2",
        cp_offsets: [5, 4, 2, 3, 1, 0, 6, 7],
        co_offsets: [0; 8],
        ep_offsets: [8, 1, 2, 3, 5, 4, 6, 7, 0, 9, 10, 11],
        eo_offsets: [0; 12],
        inverse: 14,
        single_turns: 0,
    },
    Move {
        name: "B",
        cp_offsets: [0, 1, 3, 7, 4, 5, 2, 6],
        co_offsets: [0, 0, 1, 2, 0, 0, 2, 1],
        ep_offsets: [0, 1, 7, 3, 4, 5, 2, 10, 8, 9, 6, 11],
        eo_offsets: [0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0],
        inverse: 16,
        single_turns: 1,
    },
    Move {
        name: "B'",
        cp_offsets: [0, 1, 6, 2, 4, 5, 7, 3],
        co_offsets: [0, 0, 1, 2, 0, 0, 2, 1],
        ep_offsets: [0, 1, 6, 3, 4, 5, 10, 2, 8, 9, 7, 11],
        eo_offsets: [0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0],
        inverse: 15,
        single_turns: 1,
    },
    Move {
        name: "B2",
        cp_offsets: [0, 1, 7, 6, 4, 5, 3, 2],
        co_offsets: [0; 8],
        ep_offsets: [0, 1, 10, 3, 4, 5, 7, 6, 8, 9, 2, 11],
        eo_offsets: [0; 12],
        inverse: 17,
        single_turns: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_loop() {
        let mut cube = CubeState::SOLVED;
        for _ in 0..4 {
            cube = cube.apply(Move::from_name("B").unwrap());
        }
        assert_eq!(cube, CubeState::SOLVED);
    }

    #[test]
    fn inverse_round_trip() {
        let seed = CubeState::from_scramble("R U F2 L' D B").unwrap();
        for mv in &MOVES {
            assert_eq!(
                CubeState::SOLVED.apply(mv).apply(mv.inverse()),
                CubeState::SOLVED,
                "{} from solved",
                mv.name
            );
            assert_eq!(seed.apply(mv).apply(mv.inverse()), seed, "{} from seed", mv.name);
        }
    }

    #[test]
    fn quarter_twice_is_half() {
        let seed = CubeState::from_scramble("D2 B R' U L F'").unwrap();
        for face in ["U", "D", "R", "L", "F", "B"] {
            let quarter = Move::from_name(face).unwrap();
            let half = Move::from_name(&format!("{face}2")).unwrap();
            assert_eq!(seed.apply(quarter).apply(quarter), seed.apply(half), "{face}");
        }
    }

    #[test]
    fn single_turn_weights() {
        for mv in &MOVES {
            let expected = if mv.name.ends_with('2') { 0 } else { 1 };
            assert_eq!(mv.single_turns(), expected, "{}", mv.name);
        }
    }

    #[test]
    fn tokens_round_trip() {
        for mv in &MOVES {
            assert_eq!(Move::from_name(mv.name), Some(mv));
        }
        assert_eq!(Move::from_name("X"), None);
        assert_eq!(Move::from_name("u"), None);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sequence_inverts(indices in vec(0..18usize, 0..20)) {
            let scrambled = indices
                .iter()
                .fold(CubeState::SOLVED, |state, &i| state.apply(&MOVES[i]));
            let restored = indices
                .iter()
                .rev()
                .fold(scrambled, |state, &i| state.apply(MOVES[i].inverse()));
            assert_eq!(restored, CubeState::SOLVED);
        }
    }
}
