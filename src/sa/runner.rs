//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-iteration history of an annealing run.
///
/// The three sequences are parallel: entry `i` holds the state after
/// iteration `i`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingTrace {
    /// Energy of the current solution.
    pub energies: Vec<f64>,

    /// Temperature the iteration ran at.
    pub temperatures: Vec<f64>,

    /// Best energy seen so far.
    pub best_energies: Vec<f64>,
}

impl AnnealingTrace {
    fn record(&mut self, energy: f64, temperature: f64, best_energy: f64) {
        self.energies.push(energy);
        self.temperatures.push(temperature);
        self.best_energies.push(best_energy);
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// Whether no iteration ran.
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// `(energy, temperature)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies
            .iter()
            .copied()
            .zip(self.temperatures.iter().copied())
    }

    /// Lowest current energy recorded.
    pub fn min_energy(&self) -> Option<f64> {
        self.energies.iter().copied().reduce(f64::min)
    }
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone, M: Clone> {
    /// The best solution found.
    pub best: S,

    /// Energy of the best solution.
    pub best_energy: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted moves in the order they were applied.
    pub accepted: Vec<M>,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the wall-clock limit was hit.
    pub timed_out: bool,

    /// Per-iteration energy and temperature history.
    pub trace: AnnealingTrace,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from [`SaConfig::seed`].
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidAnnealingSchedule`](crate::TspError::InvalidAnnealingSchedule)
    /// before any iteration if the schedule cannot terminate, or whatever
    /// the problem's energy function reports.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution, P::Move>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked before every iteration; a cancelled run returns
    /// the best solution found so far.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution, P::Move>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs SA drawing all randomness from `rng`. [`SaConfig::seed`] is
    /// ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution, P::Move>> {
        config.validate()?;

        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut current = problem.initial_solution();
        let mut current_energy = problem.energy(&current)?;
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut temperature = config.start_temp;
        let mut trace = AnnealingTrace::default();
        let mut accepted = Vec::new();
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        tracing::debug!(
            start_temp = config.start_temp,
            end_temp = config.end_temp,
            cooling_rate = config.cooling_rate,
            energy = current_energy,
            "starting annealing"
        );

        while temperature > config.end_temp {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }

            let Some(mv) = problem.propose(&current, rng) else {
                tracing::debug!("empty neighborhood, nothing to anneal");
                break;
            };
            let mut neighbor = current.clone();
            problem.apply(&mut neighbor, &mv);
            let neighbor_energy = problem.energy(&neighbor)?;

            // Metropolis acceptance criterion
            let accept = if neighbor_energy < current_energy {
                improving_moves += 1;
                true
            } else {
                let probability = ((current_energy - neighbor_energy) / temperature).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                current = neighbor;
                current_energy = neighbor_energy;
                accepted.push(mv);
            }

            if current_energy < best_energy {
                tracing::trace!(energy = current_energy, temperature, "new best");
                best = current.clone();
                best_energy = current_energy;
            }

            trace.record(current_energy, temperature, best_energy);

            temperature *= 1.0 - config.cooling_rate;
        }

        let iterations = trace.len();
        tracing::info!(
            best_energy,
            iterations,
            accepted = accepted.len(),
            cancelled,
            timed_out,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_energy,
            iterations,
            final_temperature: temperature,
            accepted,
            improving_moves,
            cancelled,
            timed_out,
            trace,
        })
    }
}
