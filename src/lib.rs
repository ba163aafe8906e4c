//! A solver for the 3x3x3 Rubik's cube using Thistlethwaite's four-phase
//! group reduction. Each phase collapses the cube into a dense integer
//! coordinate, and a breadth-first search drives that coordinate to zero
//! using the phase's restricted move set.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
pub mod phase;
pub mod solver;
