//! Derivative-free outer-loop optimizers.
//!
//! Two strategies implement one interface and return the same result
//! shape, so the simulator can swap them at construction time:
//!
//! - [`NelderMead`] — bounded simplex direct search (primary). Suitable for
//!   variational objectives where gradients are expensive or noisy.
//! - [`RandomPerturbation`] — seeded bounded random local search that only
//!   accepts improving moves (fallback).
//!
//! Both check their iteration budget and optional wall-clock budget once
//! per iteration; exhausting a budget is cooperative cancellation, not an
//! error — the best-found result comes back with `converged = false`.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Optimal parameter values.
    pub optimal_params: Vec<f64>,
    /// Optimal objective value.
    pub optimal_value: f64,
    /// Number of objective evaluations.
    pub num_evaluations: usize,
    /// Number of iterations.
    pub num_iterations: usize,
    /// History of best objective values.
    pub history: Vec<f64>,
    /// Whether the run converged before its budget ran out.
    pub converged: bool,
}

/// Which optimizer strategy a simulator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizerKind {
    /// Simplex direct search.
    NelderMead,
    /// Bounded random-perturbation local search.
    RandomPerturbation,
}

/// A derivative-free minimizer over a flat parameter vector.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial_params`.
    fn minimize<F>(&self, objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64;
}

/// Strategy resolved from an [`OptimizerKind`] at construction time.
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    NelderMead(NelderMead),
    RandomPerturbation(RandomPerturbation),
}

impl Strategy {
    pub(crate) fn minimize<F>(&self, objective: F, initial: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        match self {
            Strategy::NelderMead(nm) => nm.minimize(objective, initial),
            Strategy::RandomPerturbation(rp) => rp.minimize(objective, initial),
        }
    }
}

// ---------------------------------------------------------------------------
// Nelder-Mead simplex
// ---------------------------------------------------------------------------

/// Bounded Nelder-Mead simplex search.
#[derive(Debug, Clone)]
pub struct NelderMead {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence tolerance on the simplex value spread.
    pub tolerance: f64,
    /// Initial step (simplex edge and trust radius).
    pub initial_step: f64,
    /// Final trust radius; convergence requires the radius contracted here.
    pub final_step: f64,
    /// Optional wall-clock budget, checked once per iteration.
    pub time_budget: Option<Duration>,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-6,
            initial_step: 0.5,
            final_step: 1e-4,
            time_budget: None,
        }
    }
}

impl NelderMead {
    /// Create a simplex optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

impl Optimizer for NelderMead {
    fn minimize<F>(&self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let start = Instant::now();
        let deadline = self.time_budget.map(|b| start + b);

        let f_init = objective(&initial_params);
        let mut num_evaluations = 1;
        let mut history = vec![f_init];

        // Simplex: the start point plus one step along each axis.
        let mut simplex: Vec<Vec<f64>> = vec![initial_params.clone()];
        let mut values: Vec<f64> = vec![f_init];
        for i in 0..n {
            let mut point = initial_params.clone();
            point[i] += self.initial_step;
            values.push(objective(&point));
            num_evaluations += 1;
            simplex.push(point);
        }

        let mut radius = self.initial_step;
        let mut converged = false;
        let mut num_iterations = 0;

        for iteration in 0..self.max_iterations {
            num_iterations = iteration + 1;
            if deadline.is_some_and(|d| Instant::now() >= d) {
                debug!(iteration, "simplex search hit its time budget");
                break;
            }

            let mut order: Vec<usize> = (0..=n).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            let best = order[0];
            let worst = order[n];

            let spread = values[worst] - values[best];
            if spread < self.tolerance && radius <= self.final_step {
                converged = true;
                break;
            }

            // Value spread exhausted at this radius: contract and rebuild
            // the simplex around the incumbent.
            if spread < self.tolerance {
                radius = (radius * 0.5).max(self.final_step);
                let anchor = simplex[best].clone();
                let f_anchor = values[best];
                simplex = vec![anchor.clone()];
                values = vec![f_anchor];
                for i in 0..n {
                    let mut point = anchor.clone();
                    point[i] += radius;
                    values.push(objective(&point));
                    num_evaluations += 1;
                    simplex.push(point);
                }
                continue;
            }

            // Centroid of all points but the worst.
            let mut centroid = vec![0.0; n];
            for &idx in &order[..n] {
                for (c, x) in centroid.iter_mut().zip(&simplex[idx]) {
                    *c += x;
                }
            }
            for c in &mut centroid {
                *c /= n as f64;
            }

            // Reflect the worst point, step-limited to the trust radius.
            let mut reflected: Vec<f64> = centroid
                .iter()
                .zip(&simplex[worst])
                .map(|(c, w)| 2.0 * c - w)
                .collect();
            for (r, c) in reflected.iter_mut().zip(&centroid) {
                let step = *r - *c;
                if step.abs() > radius {
                    *r = c + radius * step.signum();
                }
            }
            let f_reflected = objective(&reflected);
            num_evaluations += 1;

            if f_reflected < values[best] {
                // Try expanding past the reflection.
                let expanded: Vec<f64> = centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(c, r)| c + 2.0 * (r - c))
                    .collect();
                let f_expanded = objective(&expanded);
                num_evaluations += 1;
                if f_expanded < f_reflected {
                    simplex[worst] = expanded;
                    values[worst] = f_expanded;
                } else {
                    simplex[worst] = reflected;
                    values[worst] = f_reflected;
                }
            } else if f_reflected < values[order[n - 1]] {
                simplex[worst] = reflected;
                values[worst] = f_reflected;
            } else {
                // Contract towards the centroid; shrink everything if even
                // that fails.
                let contracted: Vec<f64> = centroid
                    .iter()
                    .zip(&simplex[worst])
                    .map(|(c, w)| 0.5 * (c + w))
                    .collect();
                let f_contracted = objective(&contracted);
                num_evaluations += 1;
                if f_contracted < values[worst] {
                    simplex[worst] = contracted;
                    values[worst] = f_contracted;
                } else {
                    let anchor = simplex[best].clone();
                    for idx in 0..=n {
                        if idx == best {
                            continue;
                        }
                        for (x, a) in simplex[idx].iter_mut().zip(&anchor) {
                            *x = 0.5 * (a + *x);
                        }
                        values[idx] = objective(&simplex[idx]);
                        num_evaluations += 1;
                    }
                }
            }

            let round_best = values.iter().copied().fold(f64::INFINITY, f64::min);
            if round_best < *history.last().unwrap_or(&f64::INFINITY) {
                history.push(round_best);
            }
        }

        let (best_idx, _) = values
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap_or((0, &f_init));

        debug!(
            iterations = num_iterations,
            evaluations = num_evaluations,
            value = values[best_idx],
            converged,
            "simplex search finished"
        );
        OptimizationResult {
            optimal_params: simplex[best_idx].clone(),
            optimal_value: values[best_idx],
            num_evaluations,
            num_iterations,
            history,
            converged,
        }
    }
}

// ---------------------------------------------------------------------------
// Random-perturbation local search
// ---------------------------------------------------------------------------

/// Iterations without improvement after which the random search stops and
/// reports convergence.
const STALL_LIMIT: usize = 64;

/// Seeded bounded random-perturbation local search.
///
/// Each iteration perturbs the incumbent by a uniform draw from
/// `[−step, step]` per coordinate and keeps the candidate only if it
/// improves the objective. The same seed reproduces the same trajectory
/// bit for bit.
#[derive(Debug, Clone)]
pub struct RandomPerturbation {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Perturbation bound per coordinate.
    pub step: f64,
    /// RNG seed.
    pub seed: u64,
    /// Optional wall-clock budget, checked once per iteration.
    pub time_budget: Option<Duration>,
}

impl Default for RandomPerturbation {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            step: 0.25,
            seed: 42,
            time_budget: None,
        }
    }
}

impl RandomPerturbation {
    /// Create a random-perturbation optimizer with default settings.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the perturbation bound.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

impl Optimizer for RandomPerturbation {
    fn minimize<F>(&self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let start = Instant::now();
        let deadline = self.time_budget.map(|b| start + b);
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut best = initial_params;
        let mut best_value = objective(&best);
        let mut num_evaluations = 1;
        let mut history = vec![best_value];
        let mut stall = 0usize;
        let mut converged = false;
        let mut num_iterations = 0;

        for iteration in 0..self.max_iterations {
            num_iterations = iteration + 1;
            if deadline.is_some_and(|d| Instant::now() >= d) {
                debug!(iteration, "random search hit its time budget");
                break;
            }

            let candidate: Vec<f64> = best
                .iter()
                .map(|&x| {
                    let delta: f64 = rng.r#gen::<f64>() * 2.0 - 1.0;
                    x + self.step * delta
                })
                .collect();
            let value = objective(&candidate);
            num_evaluations += 1;

            if value < best_value {
                best = candidate;
                best_value = value;
                history.push(best_value);
                stall = 0;
            } else {
                stall += 1;
                if stall >= STALL_LIMIT {
                    converged = true;
                    break;
                }
            }
        }

        debug!(
            iterations = num_iterations,
            evaluations = num_evaluations,
            value = best_value,
            converged,
            "random search finished"
        );
        OptimizationResult {
            optimal_params: best,
            optimal_value: best_value,
            num_evaluations,
            num_iterations,
            history,
            converged,
        }
    }
}
