// tests/integration_test.rs
use path_exotics::analytics::exotic_analytic;
use path_exotics::mc::mc_engine::{OptionParameters, PricingResult};
use path_exotics::mc::path_generator::PathGenerator;
use path_exotics::mc::payoffs::OptionVariant;
use path_exotics::rng::DEFAULT_SEED;
use path_exotics::session::{SimulationConfig, SimulationSession};
use std::rc::Rc;

/// Baseline plus maturity sweep for every variant, all on one stream
fn full_run(seed: u64, simulations: usize) -> Vec<PricingResult> {
    let config = SimulationConfig {
        simulations,
        timesteps: 64,
        seed,
        ..Default::default()
    };
    let generator = PathGenerator::shared(config.seed);
    let mut results = Vec::new();

    for variant in OptionVariant::ALL {
        let mut session =
            SimulationSession::from_config(variant.to_string(), &config, Rc::clone(&generator));
        results.push(session.simulate(variant).expect("Valid configuration"));
        for t in [0.5, 0.75, 1.5] {
            session.reset_params(&config.params);
            session.set_maturity(t);
            results.push(session.simulate(variant).expect("Valid configuration"));
        }
    }
    results
}

#[test]
fn test_full_run_is_deterministic() {
    let first = full_run(DEFAULT_SEED, 500);
    let second = full_run(DEFAULT_SEED, 500);
    assert_eq!(first.len(), 16);
    assert_eq!(first, second);

    let other_seed = full_run(DEFAULT_SEED + 1, 500);
    assert_ne!(first, other_seed);
}

#[test]
fn test_stream_continues_across_calls() {
    let params = OptionParameters::default();

    // continuing stream: second call starts where the first stopped
    let shared = PathGenerator::shared(7);
    let mut session = SimulationSession::new("continuing", 32, 200, shared, params);
    session.simulate_asian_fixed_strike().unwrap();
    let continued = session.simulate_asian_fixed_strike().unwrap();

    // reset stream: second call replays the first
    let mut fresh = SimulationSession::new("fresh", 32, 200, PathGenerator::shared(7), params);
    let replayed = fresh.simulate_asian_fixed_strike().unwrap();

    assert_ne!(continued, replayed);
}

#[test]
fn test_asian_fixed_strike_reference_scenario() {
    let config = SimulationConfig::default();
    let mut session =
        SimulationSession::from_config("Asian Option Fixed Strike", &config, PathGenerator::shared(config.seed));
    let result = session.simulate_asian_fixed_strike().expect("Valid configuration");

    let p = config.params;
    let geometric = exotic_analytic::geometric_asian_call(p.s0, p.e, p.r, p.sigma, p.t).unwrap();
    let se = result.err_call.standard_error;

    println!("\nAsian fixed call (MC): {} ± {}", result.price_call, se);
    println!("Geometric Asian call (closed form): {}", geometric);

    // arithmetic average dominates the geometric one
    assert!(
        result.price_call > geometric - 4.0 * se,
        "Asian call {} below geometric reference {}",
        result.price_call,
        geometric
    );
    assert!(
        result.price_call > 5.3 && result.price_call < 6.1,
        "Asian call {} outside the reference range",
        result.price_call
    );
    assert!(
        result.price_put > 3.0 && result.price_put < 3.9,
        "Asian put {} outside the reference range",
        result.price_put
    );
    assert!(se > 0.0 && se < 0.15, "Unexpected standard error {}", se);
}

#[test]
fn test_lookback_floating_strike_vs_continuous_reference() {
    let config = SimulationConfig::default();
    let mut session = SimulationSession::from_config(
        "Lookback Option floating Strike",
        &config,
        PathGenerator::shared(config.seed),
    );
    let result = session
        .simulate_lookback_floating_strike()
        .expect("Valid configuration");

    let p = config.params;
    let call = exotic_analytic::lookback_floating_call(p.s0, p.r, p.sigma, p.t).unwrap();
    let put = exotic_analytic::lookback_floating_put(p.s0, p.r, p.sigma, p.t).unwrap();

    println!("\nLookback floating call (MC): {} vs continuous {}", result.price_call, call);
    println!("Lookback floating put (MC): {} vs continuous {}", result.price_put, put);

    // discrete monitoring can only miss extremes, never add them
    assert!(result.price_call < call + 3.0 * result.err_call.standard_error);
    assert!(result.price_put < put + 3.0 * result.err_put.standard_error);
    assert!(result.price_call > call - 2.0, "call {} too far below {}", result.price_call, call);
    assert!(result.price_put > put - 2.0, "put {} too far below {}", result.price_put, put);
}

#[test]
fn test_parallel_agrees_statistically_with_serial() {
    let config = SimulationConfig {
        timesteps: 64,
        simulations: 20_000,
        ..Default::default()
    };
    let mut session =
        SimulationSession::from_config("parallel", &config, PathGenerator::shared(config.seed));

    for variant in OptionVariant::ALL {
        let serial = session.simulate(variant).unwrap();
        let parallel = session.simulate_parallel(variant, config.seed).unwrap();

        let tolerance = 4.0
            * (serial.err_call.standard_error.powi(2) + parallel.err_call.standard_error.powi(2))
                .sqrt();
        assert!(
            (serial.price_call - parallel.price_call).abs() < tolerance,
            "{}: serial {} vs parallel {}",
            variant,
            serial.price_call,
            parallel.price_call
        );
    }
}
