//! Exhaustive search loop.

use super::config::ExactConfig;
use crate::cities::{Cities, Solution};
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Shortest tour found. Ties keep the first tour in lexicographic order.
    pub solution: Solution,

    /// Number of tours measured.
    pub evaluated: u64,

    /// Whether cancelled externally before the search space was exhausted.
    pub cancelled: bool,
}

/// Executes the exhaustive search.
pub struct ExactRunner;

impl ExactRunner {
    /// Finds the shortest closed tour over `cities`.
    ///
    /// # Errors
    ///
    /// [`TspError::SearchSpaceTooLarge`](crate::TspError::SearchSpaceTooLarge)
    /// if `cities` exceeds [`ExactConfig::max_cities`]. Nothing is evaluated
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::cities::Cities;
    /// use u_tsp::exact::{ExactConfig, ExactRunner};
    ///
    /// let cities = Cities::from_grid(&[(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
    /// let result = ExactRunner::run(&cities, &ExactConfig::default()).unwrap();
    /// assert!((result.solution.cost - 4.0).abs() < 1e-12);
    /// assert_eq!(result.evaluated, 6);
    /// ```
    pub fn run(cities: &Cities, config: &ExactConfig) -> Result<ExactResult> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled between permutations, after the first tour has
    /// been measured, so a cancelled run still carries a valid tour.
    pub fn run_with_cancel(
        cities: &Cities,
        config: &ExactConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExactResult> {
        if let Err(err) = config.check_size(cities.len()) {
            tracing::warn!(
                cities = cities.len(),
                max_cities = config.max_cities,
                "refusing exhaustive search"
            );
            return Err(err);
        }

        tracing::debug!(
            cities = cities.len(),
            tours = %ExactConfig::search_space(cities.len()),
            "starting exhaustive search"
        );

        let mut order = cities.identity_order();
        let mut best_order = order.clone();
        let mut best_cost = cities.closing_length(&order)?;
        let mut evaluated = 1u64;
        let mut cancelled = false;

        while next_permutation(&mut order) {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let cost = cities.closing_length(&order)?;
            evaluated += 1;

            if cost < best_cost {
                tracing::trace!(cost, evaluated, "new best tour");
                best_cost = cost;
                best_order.copy_from_slice(&order);
            }
        }

        tracing::info!(cost = best_cost, evaluated, cancelled, "exhaustive search finished");

        Ok(ExactResult {
            solution: Solution::new(best_order, best_cost),
            evaluated,
            cancelled,
        })
    }
}

/// Advances `perm` to the next permutation in lexicographic order.
///
/// Returns `false` once `perm` is the last (descending) permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut pivot = perm.len() - 1;
    while pivot > 0 && perm[pivot - 1] >= perm[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = perm.len() - 1;
    while perm[successor] <= perm[pivot - 1] {
        successor -= 1;
    }
    perm.swap(pivot - 1, successor);
    perm[pivot..].reverse();
    true
}
