//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp((E_current - E_neighbor) / T)` (Metropolis criterion), and the
//! temperature `T` decays geometrically every iteration.
//!
//! [`SaRunner`] is generic over [`SaProblem`]; [`TourProblem`] plugs a
//! [`Cities`](crate::cities::Cities) set into it using pairwise swaps.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod tour;
mod types;

pub use config::SaConfig;
pub use runner::{AnnealingTrace, SaResult, SaRunner};
pub use tour::{SwapMove, TourProblem};
pub use types::SaProblem;
