//! Exhaustive tour search.
//!
//! Fixes city 0 as the anchor and evaluates every ordering of the remaining
//! `n - 1` cities, so `(n - 1)!` tours are measured. A tour and its mirror
//! image are both evaluated: reversal symmetry is deliberately left in
//! place so that tie-breaking follows plain lexicographic order.

mod config;
mod runner;

pub use config::{ExactConfig, DEFAULT_MAX_CITIES};
pub use runner::{ExactResult, ExactRunner};
