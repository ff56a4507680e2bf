//! Euclidean travelling salesman solvers.
//!
//! Two interchangeable strategies over the same distance model:
//!
//! - **Exact** ([`exact`]): exhaustive search over every tour with city 0
//!   fixed as the anchor. Guaranteed optimal, refuses instances above a
//!   configurable ceiling.
//! - **Simulated Annealing** ([`sa`]): pairwise-swap neighborhood,
//!   Metropolis acceptance and geometric cooling. Scales to instances the
//!   exact search cannot touch.
//!
//! # Architecture
//!
//! [`metric`] holds the distance model, [`cities`] the validated city set
//! and solution types. Both solvers borrow a [`Cities`] read-only and own
//! their working state for the duration of a single call. Randomness is
//! always an explicitly seeded generator, never global state.
//!
//! City generation, plotting and CLI wiring are left to callers.

pub mod cities;
pub mod error;
pub mod exact;
pub mod metric;
pub mod sa;

pub use cities::{Cities, Solution};
pub use error::{Result, TspError};
pub use metric::Point;
