//! End-to-end solves: apply the scramble, apply the returned solution, and
//! require the exact solved state back.

use thistle::cube::CubeState;
use thistle::error::SolveError;
use thistle::solver::solve;

fn assert_solves(scramble: &str) {
    let solution = solve(scramble).unwrap();
    let state = CubeState::from_scramble(scramble)
        .unwrap()
        .apply_all(solution.moves());
    assert_eq!(state, CubeState::SOLVED, "scramble `{scramble}`");
}

#[test]
fn empty_scramble_yields_empty_solution() {
    let solution = solve("").unwrap();
    assert!(solution.is_empty());
    assert_eq!(solution.len(), 0);
    assert_eq!(solution.to_string(), "");
}

#[test]
fn all_half_turns_round_trip() {
    // Even single-turn parity, solved on the first attempt.
    assert_solves("U2 D2 R2 L2 F2 B2");
}

#[test]
fn two_quarter_turns_round_trip() {
    assert_solves("U R");
}

#[test]
fn single_quarter_turn_takes_the_retry_path() {
    // One quarter turn leaves the first parity attempt unable to finish the
    // final phase; the retry must still produce a correct solve.
    assert_solves("R");
}

#[test]
fn fixed_example_scramble_solves_exactly() {
    assert_solves("R U R' U' R' F R2 U' R' U' R U R' F'");
}

#[test]
fn unknown_token_is_fatal() {
    assert_eq!(
        solve("R X U"),
        Err(SolveError::UnknownMove("X".to_owned()))
    );
}

#[test]
fn separators_do_not_count_toward_length() {
    let solution = solve("U R").unwrap();
    let rendered = solution.to_string();
    let tokens = rendered.split_whitespace().filter(|&t| t != ".").count();
    assert_eq!(tokens, solution.len());
}
