// tests/properties_test.rs
use approx::{assert_abs_diff_eq, assert_relative_eq};
use path_exotics::mc::mc_engine::{
    evaluate_path, summarize_payoffs, OptionParameters, PricingEngine, CRITICAL_VALUE,
};
use path_exotics::mc::path_generator::PathGenerator;
use path_exotics::mc::payoffs::{OptionVariant, PayoffStrategy};
use path_exotics::session::SimulationSession;
use path_exotics::stats;
use path_exotics::McError;

#[test]
fn test_lookback_ordering_on_generated_paths() {
    let params = OptionParameters {
        sigma: 0.4,
        ..Default::default()
    };
    let mut generator = PathGenerator::new(99);
    let mut path = vec![0.0; 100];
    let asian = PayoffStrategy::AsianFixed { strike: params.e };
    let lookback = PayoffStrategy::LookbackFixed { strike: params.e };

    for _ in 0..500 {
        generator
            .simulate_price_path(&mut path, params.s0, params.r, params.sigma, params.t)
            .unwrap();
        let lo = stats::min(&path).unwrap();
        let avg = stats::mean(&path).unwrap();
        let hi = stats::max(&path).unwrap();
        assert!(lo <= avg && avg <= hi, "min {} mean {} max {}", lo, avg, hi);

        let (asian_call, asian_put) = evaluate_path(&asian, &path).unwrap();
        let (lookback_call, lookback_put) = evaluate_path(&lookback, &path).unwrap();
        assert!(lookback_call >= asian_call);
        assert!(lookback_put >= asian_put);
    }
}

#[test]
fn test_degenerate_parameters_price_to_zero() {
    let params = OptionParameters {
        s0: 100.0,
        e: 100.0,
        t: 1.0,
        sigma: 0.0,
        r: 0.0,
    };
    let mut session = SimulationSession::new("flat", 252, 100, PathGenerator::shared(1), params);

    for variant in OptionVariant::ALL {
        let result = session.simulate(variant).unwrap();
        for (price, err) in [
            (result.price_call, result.err_call),
            (result.price_put, result.err_put),
        ] {
            assert_eq!(price, 0.0, "{}", variant);
            assert_eq!(err.standard_error, 0.0, "{}", variant);
            assert_eq!(err.confidence_interval_low, 0.0);
            assert_eq!(err.confidence_interval_high, 0.0);
        }
    }
}

#[test]
fn test_confidence_interval_consistency() {
    let mut session = SimulationSession::new(
        "ci",
        50,
        1_000,
        PathGenerator::shared(5),
        OptionParameters::default(),
    );
    for variant in OptionVariant::ALL {
        let result = session.simulate(variant).unwrap();
        for (price, err) in [
            (result.price_call, result.err_call),
            (result.price_put, result.err_put),
        ] {
            assert_eq!(err.confidence, 95);
            assert_abs_diff_eq!(
                err.confidence_interval_high - err.confidence_interval_low,
                2.0 * CRITICAL_VALUE * err.standard_error,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(
                0.5 * (err.confidence_interval_high + err.confidence_interval_low),
                price,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_standard_error_halves_with_four_times_the_paths() {
    // fixed payoff distribution, injected directly
    let params = OptionParameters::default();
    let sample = [0.0, 0.0, 3.0, 8.5, 1.25, 0.0, 12.0, 4.0];
    let n: Vec<f64> = sample.repeat(250);
    let four_n: Vec<f64> = sample.repeat(1_000);

    let (_, err_n) = summarize_payoffs(&params, &n).unwrap();
    let (_, err_4n) = summarize_payoffs(&params, &four_n).unwrap();
    assert_relative_eq!(err_4n.standard_error, 0.5 * err_n.standard_error, max_relative = 1e-10);
}

#[test]
fn test_standard_error_shrinks_with_more_simulations() {
    let params = OptionParameters::default();
    let strategy = OptionVariant::AsianFixedStrike.strategy(params.e);

    let small = PricingEngine::new(PathGenerator::shared(10), strategy, params)
        .price(32, 5_000)
        .unwrap();
    let large = PricingEngine::new(PathGenerator::shared(11), strategy, params)
        .price(32, 10_000)
        .unwrap();

    let ratio = large.err_call.standard_error / small.err_call.standard_error;
    assert!(
        (ratio - 1.0 / 2f64.sqrt()).abs() < 0.08,
        "Standard error ratio {} not close to 1/sqrt(2)",
        ratio
    );
}

#[test]
fn test_discounting_identity() {
    let params = OptionParameters {
        r: 0.03,
        t: 2.0,
        ..Default::default()
    };
    let payoffs = [4.0, 6.0];
    let (price, _) = summarize_payoffs(&params, &payoffs).unwrap();
    assert_relative_eq!(price, 5.0 * (-0.06f64).exp(), max_relative = 1e-15);
}

#[test]
fn test_empty_input_failure() {
    assert!(matches!(stats::mean(&[]), Err(McError::EmptySequence { .. })));
    assert!(matches!(
        stats::population_variance(&[]),
        Err(McError::EmptySequence { .. })
    ));
    assert!(matches!(stats::max(&[]), Err(McError::EmptySequence { .. })));
    assert!(matches!(stats::min(&[]), Err(McError::EmptySequence { .. })));
}

#[test]
fn test_zero_timesteps_aborts_without_result() {
    let mut session = SimulationSession::new(
        "empty buffer",
        0,
        10,
        PathGenerator::shared(1),
        OptionParameters::default(),
    );
    let err = session.simulate_lookback_fixed_strike().unwrap_err();
    assert_eq!(err, McError::InvalidBuffer { length: 0 });
    assert!(session.last_result().is_none());
}
