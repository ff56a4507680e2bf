//! Core trait for Simulated Annealing.

use crate::error::Result;
use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The problem supplies a starting point, an energy function and a move
/// operator. The runner owns temperature management, the Metropolis
/// acceptance rule and cooling.
///
/// Moves are split into [`propose`](SaProblem::propose) and
/// [`apply`](SaProblem::apply) so the runner can log which moves were
/// accepted.
///
/// # Minimization
///
/// SA minimizes energy. For maximization, negate it.
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// A single perturbation of a solution.
    type Move: Clone;

    /// Deterministic starting solution.
    fn initial_solution(&self) -> Self::Solution;

    /// Energy of a solution. Lower is better.
    fn energy(&self, solution: &Self::Solution) -> Result<f64>;

    /// Draws a random move from the neighborhood of `solution`.
    ///
    /// Returns `None` when the neighborhood is empty; the runner then stops.
    fn propose<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Option<Self::Move>;

    /// Applies `mv` to `solution` in place.
    fn apply(&self, solution: &mut Self::Solution, mv: &Self::Move);
}
