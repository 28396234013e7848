//! The variational simulator: layered evolution, objective, outer loop,
//! sampling.

use std::time::Duration;

use ndarray::Array1;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use alsvid_ham::{EigenDecomposition, Operator, basis};

use crate::distribution::MeasurementDistribution;
use crate::error::{SimError, SimResult};
use crate::optimizer::{
    NelderMead, OptimizationResult, OptimizerKind, RandomPerturbation, Strategy,
};
use crate::params::Parameters;
use crate::state::StateVector;

/// Tolerance on the evolved state norm. Eigendecomposition-based
/// exponentials are unitary to floating precision, so anything beyond
/// accumulated rounding indicates a broken operator.
const NORM_TOL: f64 = 1e-8;

/// Deterministic starting angles for the outer-loop search.
const INITIAL_GAMMA: f64 = 0.5;
const INITIAL_BETA: f64 = 0.5;

/// Immutable configuration for one simulator, passed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Number of alternating evolution layers p.
    pub layers: usize,
    /// Number of measurement samples drawn from the optimized state.
    pub shots: usize,
    /// Seed for every stochastic path (fallback optimizer and sampling).
    pub seed: u64,
    /// Iteration budget for the outer-loop search.
    pub max_iterations: usize,
    /// Optional wall-clock budget, checked once per optimizer iteration.
    /// Setting it trades bit-identical reproducibility for a hard stop.
    pub time_budget: Option<Duration>,
    /// Outer-loop strategy, resolved at construction.
    pub optimizer: OptimizerKind,
    /// Convergence tolerance for the outer loop.
    pub tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            layers: 1,
            shots: 1024,
            seed: 42,
            max_iterations: 200,
            time_budget: None,
            optimizer: OptimizerKind::NelderMead,
            tolerance: 1e-6,
        }
    }
}

impl SimulatorConfig {
    /// Set the layer depth.
    #[must_use]
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    /// Set the shot count.
    #[must_use]
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the wall-clock budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Select the outer-loop strategy.
    #[must_use]
    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Set the outer-loop convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Terminal result of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Best parameters found.
    pub parameters: Parameters,
    /// Expectation value at the best parameters.
    pub cost: f64,
    /// Outer-loop iterations used.
    pub iterations: usize,
    /// Objective evaluations used.
    pub evaluations: usize,
    /// False when an iteration or time budget ran out first.
    pub converged: bool,
    /// Best objective value per improvement step.
    pub history: Vec<f64>,
    /// Sampled measurement distribution of the optimized state.
    pub distribution: MeasurementDistribution,
}

/// Classical QAOA-style simulator over one problem/mixing operator pair.
///
/// Both operators are eigendecomposed once at construction and never
/// mutated afterwards, so one simulator can serve concurrent [`run`]
/// calls from separate threads.
///
/// [`run`]: VariationalSimulator::run
pub struct VariationalSimulator {
    problem: Operator,
    problem_eigen: EigenDecomposition,
    mixing_eigen: EigenDecomposition,
    config: SimulatorConfig,
    strategy: Strategy,
}

impl VariationalSimulator {
    /// Build a simulator for a problem/mixing operator pair.
    ///
    /// Fails on mismatched registers, zero layers or zero shots; the
    /// eigendecompositions happen here, once.
    pub fn new(problem: Operator, mixing: Operator, config: SimulatorConfig) -> SimResult<Self> {
        if problem.num_qubits() != mixing.num_qubits() {
            return Err(SimError::OperatorMismatch {
                problem: problem.num_qubits(),
                mixing: mixing.num_qubits(),
            });
        }
        if config.layers == 0 {
            return Err(SimError::ZeroLayers);
        }
        if config.shots == 0 {
            return Err(SimError::ZeroShots);
        }

        let strategy = match config.optimizer {
            OptimizerKind::NelderMead => {
                let mut nm = NelderMead::new()
                    .with_max_iterations(config.max_iterations)
                    .with_tolerance(config.tolerance);
                if let Some(budget) = config.time_budget {
                    nm = nm.with_time_budget(budget);
                }
                Strategy::NelderMead(nm)
            }
            OptimizerKind::RandomPerturbation => {
                let mut rp =
                    RandomPerturbation::new(config.seed).with_max_iterations(config.max_iterations);
                if let Some(budget) = config.time_budget {
                    rp = rp.with_time_budget(budget);
                }
                Strategy::RandomPerturbation(rp)
            }
        };

        debug!(
            num_qubits = problem.num_qubits(),
            layers = config.layers,
            optimizer = ?config.optimizer,
            "diagonalizing operators for simulation"
        );
        let problem_eigen = problem.eigendecompose()?;
        let mixing_eigen = mixing.eigendecompose()?;

        Ok(Self {
            problem,
            problem_eigen,
            mixing_eigen,
            config,
            strategy,
        })
    }

    /// The simulator configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// The problem operator.
    pub fn problem(&self) -> &Operator {
        &self.problem
    }

    /// Evolve the uniform initial state through all layers.
    ///
    /// Each layer applies `exp(−iγ·H_problem)` then `exp(−iβ·H_mixing)`
    /// through the cached eigendecompositions; one scratch buffer serves
    /// the whole call. The final norm is asserted.
    pub fn evolve(&self, params: &Parameters) -> SimResult<StateVector> {
        let n = self.problem.num_qubits();
        let mut state = StateVector::uniform(n);
        let mut scratch = Array1::<Complex64>::zeros(state.dim());

        for layer in 0..params.depth() {
            self.problem_eigen.evolve(
                params.gammas()[layer],
                state.amplitudes_mut(),
                &mut scratch,
            );
            self.mixing_eigen.evolve(
                params.betas()[layer],
                state.amplitudes_mut(),
                &mut scratch,
            );
        }

        let norm = state.norm();
        if (norm - 1.0).abs() > NORM_TOL {
            return Err(SimError::NormDrift { norm });
        }
        Ok(state)
    }

    /// The objective `Re(ψ†·H_problem·ψ)` at the given parameters.
    pub fn cost(&self, params: &Parameters) -> SimResult<f64> {
        let state = self.evolve(params)?;
        Ok(self.problem.expectation(state.amplitudes())?)
    }

    /// Run the outer-loop search and sample the optimized state.
    pub fn run(&self) -> SimResult<SimulationOutcome> {
        let depth = self.config.layers;
        let initial = Parameters::constant(depth, INITIAL_GAMMA, INITIAL_BETA)?;

        // Numerical failures inside the objective cannot surface through
        // the optimizer's f64 interface; capture the first one and fail
        // the run after the search returns.
        let mut failure: Option<SimError> = None;
        let objective = |flat: &[f64]| -> f64 {
            if failure.is_some() {
                return f64::INFINITY;
            }
            match Parameters::from_flat(depth, flat).and_then(|p| self.cost(&p)) {
                Ok(value) => value,
                Err(err) => {
                    failure = Some(err);
                    f64::INFINITY
                }
            }
        };

        let result: OptimizationResult = self.strategy.minimize(objective, initial.to_flat());
        if let Some(err) = failure {
            return Err(err);
        }

        let parameters = Parameters::from_flat(depth, &result.optimal_params)?;
        let state = self.evolve(&parameters)?;
        let distribution = self.sample(&state);

        debug!(
            cost = result.optimal_value,
            iterations = result.num_iterations,
            converged = result.converged,
            outcomes = distribution.num_outcomes(),
            "simulation run finished"
        );
        Ok(SimulationOutcome {
            parameters,
            cost: result.optimal_value,
            iterations: result.num_iterations,
            evaluations: result.num_evaluations,
            converged: result.converged,
            history: result.history,
            distribution,
        })
    }

    /// Draw `shots` categorical samples from the state's probabilities.
    fn sample(&self, state: &StateVector) -> MeasurementDistribution {
        let probs = state.probabilities();
        let n = state.num_qubits();
        // Separate stream from the fallback optimizer's RNG.
        let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(1));
        let mut distribution = MeasurementDistribution::new(n);

        for _ in 0..self.config.shots {
            let u: f64 = rng.r#gen();
            let mut cumsum = 0.0;
            let mut chosen = probs.len() - 1;
            for (k, &p) in probs.iter().enumerate() {
                cumsum += p;
                if u < cumsum {
                    chosen = k;
                    break;
                }
            }
            distribution.record(basis::bits_of(chosen, n));
        }
        distribution
    }
}
