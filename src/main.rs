//! Command-line front end: read a scramble, print the solution and timing.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

/// Solve a scrambled 3x3x3 cube with Thistlethwaite's four-phase reduction.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Scramble in face-turn notation, e.g. "R U R' U2 F".
    /// Read from standard input when omitted.
    scramble: Option<String>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let scramble = match args.scramble {
        Some(scramble) => scramble,
        None => {
            let mut line = String::new();
            if let Err(err) = io::stdin().lock().read_line(&mut line) {
                eprintln!("error: failed to read scramble: {err}");
                return ExitCode::FAILURE;
            }
            line
        }
    };

    let start = Instant::now();
    match thistle::solver::solve(scramble.trim()) {
        Ok(solution) => {
            println!("Solution: {solution}");
            println!("Length: {}", solution.len());
            println!("Total time: {} ms", start.elapsed().as_millis());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
