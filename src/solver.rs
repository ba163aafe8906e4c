//! The per-phase breadth-first search and the four-phase solve orchestration.

use std::fmt;

use log::{debug, info};

use crate::cube::CubeState;
use crate::error::SolveError;
use crate::moves::{Move, MOVES};
use crate::phase::{Phase, PHASES};

/// A complete solution, kept as one move segment per phase. The split is
/// presentational only; applying the segments in order to the scrambled cube
/// restores the solved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    segments: [Vec<&'static Move>; 4],
}

impl Solution {
    /// Total number of moves across all phases, excluding separators.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    /// Whether the solution contains no moves at all.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Vec::is_empty)
    }

    /// Iterate over the moves in application order, phase by phase.
    pub fn moves(&self) -> impl Iterator<Item = &'static Move> + '_ {
        self.segments.iter().flatten().copied()
    }
}

/// Renders the move tokens with an inert `.` between non-empty phase
/// segments.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for segment in self.segments.iter().filter(|s| !s.is_empty()) {
            f.write_str(sep)?;
            sep = " . ";
            let mut space = "";
            for mv in segment {
                write!(f, "{space}{}", mv.name)?;
                space = " ";
            }
        }
        Ok(())
    }
}

/// Solve a scramble, producing a move sequence that returns the scrambled
/// cube to the solved state.
///
/// The search first assumes an even single-turn parity. If the final phase
/// exhausts its coordinate space under that assumption the whole solve is
/// retried once from the scrambled state with the counter seeded odd; a
/// second exhaustion means the input was not a reachable configuration.
pub fn solve(scramble: &str) -> Result<Solution, SolveError> {
    let scrambled = CubeState::from_scramble(scramble)?;

    attempt(&scrambled, 0)
        .or_else(|| {
            info!("search exhausted, retrying with adjusted single-turn parity");
            attempt(&scrambled, 1)
        })
        .ok_or(SolveError::Unsolvable)
}

/// Run the four phases in order, threading the state and the single-turn
/// counter from each phase into the next.
fn attempt(scrambled: &CubeState, single_turns: u32) -> Option<Solution> {
    let mut state = *scrambled;
    let mut turns = single_turns;
    let mut segments = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

    for (i, phase) in PHASES.iter().enumerate() {
        let (segment, next_turns) = reduce(&mut state, phase, turns)?;
        debug!(
            "phase {} reduced in {} moves, {} single turns so far",
            i + 1,
            segment.len(),
            next_turns
        );
        segments[i] = segment;
        turns = next_turns;
    }

    Some(Solution { segments })
}

/// One breadth-first search node: an independent copy of the cube, the moves
/// taken within the current phase, and the quarter-turn count.
struct Node {
    state: CubeState,
    moves: Vec<&'static Move>,
    single_turns: u32,
}

/// Breadth-first search over the phase's coordinate classes, from `state`
/// toward any state with coordinate zero.
///
/// States sharing a coordinate are treated as one search node. Levels are
/// expanded as a batch: every successor of the current frontier is generated
/// before any newly found coordinate is marked visited, so sibling nodes on
/// the same level are never pruned against each other. On success the
/// caller's state is replaced with the goal state and the phase's move
/// segment is returned together with the updated single-turn count; if the
/// reachable space is exhausted first, `None`.
fn reduce(
    state: &mut CubeState,
    phase: &Phase,
    single_turns: u32,
) -> Option<(Vec<&'static Move>, u32)> {
    let mut visited = vec![false; phase.size];
    visited[phase.coordinate(state, single_turns)] = true;

    let mut frontier = vec![Node {
        state: *state,
        moves: Vec::new(),
        single_turns,
    }];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        let mut discovered = Vec::new();

        for node in &frontier {
            if phase.coordinate(&node.state, node.single_turns) == 0 {
                *state = node.state;
                return Some((node.moves.clone(), node.single_turns));
            }

            for &index in phase.moves {
                let mv = &MOVES[index];
                let successor = node.state.apply(mv);
                let turns = node.single_turns + mv.single_turns();
                let coord = phase.coordinate(&successor, turns);

                if !visited[coord] {
                    discovered.push(coord);
                    let mut moves = node.moves.clone();
                    moves.push(mv);
                    next.push(Node {
                        state: successor,
                        moves,
                        single_turns: turns,
                    });
                }
            }
        }

        for coord in discovered {
            visited[coord] = true;
        }
        frontier = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_input_needs_no_moves() {
        let mut state = CubeState::SOLVED;
        for phase in &PHASES {
            let (segment, turns) = reduce(&mut state, phase, 0).unwrap();
            assert!(segment.is_empty());
            assert_eq!(turns, 0);
        }
    }

    #[test]
    fn final_phase_undoes_a_half_turn() {
        let mut state = CubeState::from_scramble("U2").unwrap();
        let (segment, turns) = reduce(&mut state, &PHASES[3], 0).unwrap();
        assert_eq!(segment, vec![Move::from_name("U2").unwrap()]);
        assert_eq!(turns, 0);
        assert_eq!(state, CubeState::SOLVED);
    }

    #[test]
    fn each_phase_reaches_its_goal_and_later_moves_keep_it() {
        let scrambled = CubeState::from_scramble("U R").unwrap();
        let mut state = scrambled;
        let mut turns = 0;

        for (i, phase) in PHASES.iter().enumerate() {
            let (_, next_turns) = reduce(&mut state, phase, turns).unwrap();
            turns = next_turns;
            assert_eq!(phase.coordinate(&state, turns), 0, "phase {}", i + 1);

            // The next phase's restricted move set keeps this goal solved.
            if let Some(next_phase) = PHASES.get(i + 1) {
                for &index in next_phase.moves {
                    let mv = &MOVES[index];
                    let probe = state.apply(mv);
                    assert_eq!(
                        phase.coordinate(&probe, turns + mv.single_turns()),
                        0,
                        "phase {} broken by {}",
                        i + 1,
                        mv.name
                    );
                }
            }
        }

        assert_eq!(state, CubeState::SOLVED);
    }

    #[test]
    fn odd_scramble_fails_under_even_parity_seed() {
        let scrambled = CubeState::from_scramble("U").unwrap();
        assert!(attempt(&scrambled, 0).is_none());

        let solution = attempt(&scrambled, 1).unwrap();
        assert_eq!(scrambled.apply_all(solution.moves()), CubeState::SOLVED);
    }

    #[test]
    fn display_skips_empty_segments() {
        let solution = Solution {
            segments: [
                vec![Move::from_name("R").unwrap(), Move::from_name("U'").unwrap()],
                Vec::new(),
                vec![Move::from_name("F2").unwrap()],
                Vec::new(),
            ],
        };
        assert_eq!(solution.to_string(), "R U' . F2");
        assert_eq!(solution.len(), 3);
        assert!(!solution.is_empty());
    }
}
