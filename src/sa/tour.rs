//! Tour neighborhood: pairwise swaps over the non-anchor cities.

use super::runner::SaResult;
use super::types::SaProblem;
use crate::cities::{Cities, Solution};
use crate::error::Result;
use rand::seq::index;
use rand::Rng;

/// Swap of the cities at two positions of the visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    /// First position.
    pub a: usize,
    /// Second position, distinct from `a`.
    pub b: usize,
}

/// TSP over a borrowed city set, annealed with pairwise swaps.
///
/// Solutions are visiting orders of cities `1..n`; city 0 is the fixed
/// anchor. The walk starts from the identity order.
///
/// # Examples
///
/// ```
/// use u_tsp::cities::Cities;
/// use u_tsp::sa::{SaConfig, SaRunner, TourProblem};
///
/// let cities = Cities::from_grid(&[(0, 0), (4, 1), (2, 5), (7, 3), (1, 2), (6, 6)]).unwrap();
/// let config = SaConfig::default()
///     .with_start_temp(100.0)
///     .with_end_temp(0.01)
///     .with_cooling_rate(0.01)
///     .with_seed(3);
///
/// let result = SaRunner::run(&TourProblem::new(&cities), &config).unwrap();
/// let solution = result.solution();
/// assert_eq!(solution.order.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourProblem<'a> {
    cities: &'a Cities,
}

impl<'a> TourProblem<'a> {
    /// Anneals tours over `cities`.
    pub fn new(cities: &'a Cities) -> Self {
        Self { cities }
    }

    /// The borrowed city set.
    pub fn cities(&self) -> &'a Cities {
        self.cities
    }
}

impl SaProblem for TourProblem<'_> {
    type Solution = Vec<usize>;
    type Move = SwapMove;

    fn initial_solution(&self) -> Vec<usize> {
        self.cities.identity_order()
    }

    fn energy(&self, order: &Vec<usize>) -> Result<f64> {
        self.cities.tour_length(order)
    }

    /// Two distinct positions, uniformly at random without replacement.
    fn propose<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Option<SwapMove> {
        if order.len() < 2 {
            return None;
        }
        let picked = index::sample(rng, order.len(), 2);
        Some(SwapMove {
            a: picked.index(0),
            b: picked.index(1),
        })
    }

    fn apply(&self, order: &mut Vec<usize>, mv: &SwapMove) {
        order.swap(mv.a, mv.b);
    }
}

impl SaResult<Vec<usize>, SwapMove> {
    /// The best tour as a [`Solution`].
    pub fn solution(&self) -> Solution {
        Solution::new(self.best.clone(), self.best_energy)
    }
}
