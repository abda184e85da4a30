//! Contains command line extensions built on top of the core solver.

pub mod solve;
