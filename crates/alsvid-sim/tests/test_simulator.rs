//! Integration tests: encoded problems through the full variational loop.

use alsvid_encode::encode_cut;
use alsvid_ham::{BuilderConfig, Operator, OperatorBuilder, Pauli};
use alsvid_sim::{OptimizerKind, Parameters, SimulatorConfig, VariationalSimulator};
use ndarray::array;

/// Unit-weight 4-cycle; maximum cut 4, operator ground energy −2.
fn ring_operators() -> (Operator, Operator, f64) {
    let ising = encode_cut(&array![
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 0.0],
    ])
    .unwrap();
    let builder = OperatorBuilder::new(BuilderConfig::default());
    let problem = builder.problem_operator(&ising).unwrap();
    let mixing = builder.mixing_operator(4).unwrap();
    (problem, mixing, ising.offset())
}

#[test]
fn single_layer_grid_approaches_the_ground_state() {
    let (problem, mixing, _) = ring_operators();
    let (ground_energy, _) = problem.ground_state().unwrap();
    let sim = VariationalSimulator::new(problem, mixing, SimulatorConfig::default()).unwrap();

    // Exhaustive 17×17 grid over [0, π]² for the single layer.
    let steps = 17;
    let mut best = f64::INFINITY;
    for gi in 0..steps {
        for bi in 0..steps {
            let gamma = std::f64::consts::PI * gi as f64 / (steps - 1) as f64;
            let beta = std::f64::consts::PI * bi as f64 / (steps - 1) as f64;
            let params = Parameters::new(vec![gamma], vec![beta]).unwrap();
            let cost = sim.cost(&params).unwrap();
            if cost < best {
                best = cost;
            }
        }
    }

    // Variational bound: no parameter choice beats the ground state.
    assert!(best >= ground_energy - 1e-9);
    // Single-layer evolution is approximate; on this ring it reaches
    // expectation −1 against a ground energy of −2 (expected cut 3 of 4),
    // so the documented gap is ground + 1.05.
    assert!(best <= ground_energy + 1.05, "grid best {best}");
}

#[test]
fn simplex_run_finds_a_good_cut_expectation() {
    let (problem, mixing, _) = ring_operators();
    let sim = VariationalSimulator::new(
        problem,
        mixing,
        SimulatorConfig::default()
            .with_max_iterations(200)
            .with_shots(512),
    )
    .unwrap();
    let outcome = sim.run().unwrap();

    assert!(outcome.cost <= -0.5, "cost {}", outcome.cost);
    assert_eq!(outcome.distribution.total_shots(), 512);
    assert!(outcome.iterations >= 1);
    assert!(outcome.evaluations >= outcome.iterations);
    // History tracks best-so-far, so it never increases.
    for window in outcome.history.windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn identical_seeds_reproduce_bit_identical_runs() {
    for kind in [OptimizerKind::NelderMead, OptimizerKind::RandomPerturbation] {
        let config = SimulatorConfig::default()
            .with_seed(1234)
            .with_optimizer(kind)
            .with_max_iterations(80)
            .with_shots(256);

        let (p1, m1, _) = ring_operators();
        let first = VariationalSimulator::new(p1, m1, config.clone())
            .unwrap()
            .run()
            .unwrap();
        let (p2, m2, _) = ring_operators();
        let second = VariationalSimulator::new(p2, m2, config)
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(first.parameters, second.parameters);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.iterations, second.iterations);
        assert_eq!(first.distribution, second.distribution);
    }
}

#[test]
fn budget_exhaustion_returns_a_degraded_result() {
    let (problem, mixing, _) = ring_operators();
    let sim = VariationalSimulator::new(
        problem,
        mixing,
        SimulatorConfig::default().with_max_iterations(2),
    )
    .unwrap();
    let outcome = sim.run().unwrap();
    assert!(!outcome.converged);
    assert!(outcome.cost.is_finite());
}

#[test]
fn alternative_driver_works_end_to_end() {
    let (problem, _, _) = ring_operators();
    let mixing = OperatorBuilder::new(BuilderConfig::default())
        .mixing_operator_with(4, Pauli::Y)
        .unwrap();
    let sim = VariationalSimulator::new(
        problem,
        mixing,
        SimulatorConfig::default().with_max_iterations(60),
    )
    .unwrap();
    let outcome = sim.run().unwrap();
    assert!(outcome.cost.is_finite());
    assert_eq!(outcome.distribution.num_bits(), 4);
}

#[test]
fn deeper_layers_do_not_regress() {
    let (problem, mixing, _) = ring_operators();
    let shallow = VariationalSimulator::new(
        problem.clone(),
        mixing.clone(),
        SimulatorConfig::default().with_max_iterations(150),
    )
    .unwrap()
    .run()
    .unwrap();
    let deep = VariationalSimulator::new(
        problem,
        mixing,
        SimulatorConfig::default()
            .with_layers(2)
            .with_max_iterations(300),
    )
    .unwrap()
    .run()
    .unwrap();

    // p=2 starts from a richer ansatz; allow slack for the finite budget.
    assert!(deep.cost <= shallow.cost + 0.5);
}
