// src/mc/mc_engine.rs
use crate::error::{validation::validate_finite, McError, McResult};
use crate::mc::path_generator::{PathGenerator, SharedPathGenerator};
use crate::mc::payoffs::PayoffStrategy;
use crate::rng::RngFactory;
use crate::stats;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Two-sided normal quantile for the reported confidence level
pub const CRITICAL_VALUE: f64 = 1.96;
/// Confidence level, in percent, matching `CRITICAL_VALUE`
pub const CONFIDENCE: u32 = 95;

/// Contract and market inputs shared by all variants
///
/// No validation is applied: `sigma = 0` is a deterministic drift path and
/// any finite `r` is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    pub s0: f64,    // Initial price
    pub e: f64,     // Strike (fixed-strike variants only)
    pub t: f64,     // Maturity in years
    pub sigma: f64, // Volatility
    pub r: f64,     // Risk-free rate
}

impl OptionParameters {
    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    pub fn discount(&self, value: f64) -> f64 {
        self.discount_factor() * value
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        OptionParameters {
            s0: 100.0,
            e: 100.0,
            t: 1.0,
            sigma: 0.2,
            r: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorEstimate {
    pub standard_error: f64,
    pub confidence: u32,
    pub confidence_interval_low: f64,
    pub confidence_interval_high: f64,
}

impl ErrorEstimate {
    /// Symmetric interval `price ± CRITICAL_VALUE * standard_error`
    pub fn new(price: f64, standard_error: f64) -> Self {
        let half_width = CRITICAL_VALUE * standard_error;
        ErrorEstimate {
            standard_error,
            confidence: CONFIDENCE,
            confidence_interval_low: price - half_width,
            confidence_interval_high: price + half_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    pub price_call: f64,
    pub price_put: f64,
    pub err_call: ErrorEstimate,
    pub err_put: ErrorEstimate,
}

/// Discounted price and error estimate of one payoff leg
///
/// # Math
///
/// ```text
/// price = e^(-rT) * mean(payoffs)
/// SE    = sqrt(e^(-2rT) * Var_pop(payoffs) / N)
/// ```
///
/// The normal critical value assumes the sample mean is asymptotically
/// normal, so the interval is only meaningful for large N.
///
/// A non-finite price or standard error (overflowing parameters, e.g. a
/// huge negative rate) fails with `NumericalInstability` instead of being
/// reported as `inf`/`NaN` the way a plain floating-point run would print it.
pub fn summarize_payoffs(
    params: &OptionParameters,
    payoffs: &[f64],
) -> McResult<(f64, ErrorEstimate)> {
    let expected = stats::mean(payoffs)?;
    let price = params.discount(expected);

    let variance = stats::population_variance(payoffs)?;
    let discounted_variance = (-2.0 * params.r * params.t).exp() * variance;
    let standard_error = (discounted_variance / payoffs.len() as f64).sqrt();

    validate_finite("Monte Carlo", "price", price)?;
    validate_finite("Monte Carlo", "standard error", standard_error)?;

    trace!(expected, variance, price, standard_error, "leg summary");
    Ok((price, ErrorEstimate::new(price, standard_error)))
}

/// Call and put payoffs of one materialized path
///
/// The terminal price is only read for floating-strike strategies. An empty
/// path is rejected with `InvalidBuffer` for every strategy.
pub fn evaluate_path(strategy: &PayoffStrategy, path: &[f64]) -> McResult<(f64, f64)> {
    let (call_stat, put_stat) = strategy.statistics();
    let last = *path
        .last()
        .ok_or(McError::InvalidBuffer { length: path.len() })?;
    let terminal = if strategy.needs_terminal() {
        last
    } else {
        f64::NAN
    };

    let call = strategy.call(call_stat.apply(path)?, terminal);
    let put = strategy.put(put_stat.apply(path)?, terminal);
    Ok((call, put))
}

/// Monte Carlo pricer for one path-dependent variant
///
/// An engine captures a copy of the parameters when it is built, so a later
/// change to the owning session cannot leak into a running computation.
/// Engines are meant to be built per pricing call and dropped afterwards.
pub struct PricingEngine {
    generator: SharedPathGenerator,
    strategy: PayoffStrategy,
    params: OptionParameters,
}

impl PricingEngine {
    pub fn new(
        generator: SharedPathGenerator,
        strategy: PayoffStrategy,
        params: OptionParameters,
    ) -> Self {
        PricingEngine {
            generator,
            strategy,
            params,
        }
    }

    /// Price both legs from `simulations` paths of `timesteps` points each.
    ///
    /// # Algorithm
    ///
    /// 1. Reuse one path buffer of length `timesteps` for every simulation
    /// 2. Draw the path from the shared generator, reduce it to the call and
    ///    put statistics and evaluate both payoffs
    /// 3. Discount the mean payoff of each leg and attach its standard error
    ///    and 95% interval
    ///
    /// # Errors
    ///
    /// - `InvalidBuffer` when `timesteps == 0` and at least one path is drawn
    /// - `EmptySequence` when `simulations == 0`
    /// - `NumericalInstability` when a price or error is not finite
    pub fn price(&self, timesteps: usize, simulations: usize) -> McResult<PricingResult> {
        debug!(
            variant = %self.strategy.variant(),
            timesteps,
            simulations,
            "pricing with shared stream"
        );
        let p = self.params;
        let mut path = vec![0.0; timesteps];
        let mut payoffs_call = Vec::with_capacity(simulations);
        let mut payoffs_put = Vec::with_capacity(simulations);

        {
            let mut generator = self.generator.borrow_mut();
            for _ in 0..simulations {
                generator.simulate_price_path(&mut path, p.s0, p.r, p.sigma, p.t)?;
                let (call, put) = evaluate_path(&self.strategy, &path)?;
                payoffs_call.push(call);
                payoffs_put.push(put);
            }
        }

        self.compute_pricing_results(&payoffs_call, &payoffs_put)
    }

    /// Parallel variant of [`price`](Self::price).
    ///
    /// Simulation `i` draws from its own stream seeded `seed + i`, so the
    /// result is reproducible for a given seed whatever the thread count,
    /// but it does not match the serial shared-stream result. The shared
    /// generator is not advanced.
    pub fn price_parallel(
        &self,
        timesteps: usize,
        simulations: usize,
        seed: u64,
    ) -> McResult<PricingResult> {
        debug!(
            variant = %self.strategy.variant(),
            timesteps,
            simulations,
            seed,
            threads = rayon::current_num_threads(),
            "pricing with per-path streams"
        );
        let factory = RngFactory::new(seed);
        let strategy = self.strategy;
        let p = self.params;

        let legs = (0..simulations)
            .into_par_iter()
            .map_init(
                || vec![0.0; timesteps],
                |path, i| {
                    let mut generator =
                        PathGenerator::from_rng(factory.create_std_rng(i as u64));
                    generator.simulate_price_path(
                        path.as_mut_slice(),
                        p.s0,
                        p.r,
                        p.sigma,
                        p.t,
                    )?;
                    evaluate_path(&strategy, path.as_slice())
                },
            )
            .collect::<McResult<Vec<(f64, f64)>>>()?;

        let (payoffs_call, payoffs_put): (Vec<f64>, Vec<f64>) = legs.into_iter().unzip();
        self.compute_pricing_results(&payoffs_call, &payoffs_put)
    }

    fn compute_pricing_results(
        &self,
        payoffs_call: &[f64],
        payoffs_put: &[f64],
    ) -> McResult<PricingResult> {
        let (price_call, err_call) = summarize_payoffs(&self.params, payoffs_call)?;
        let (price_put, err_put) = summarize_payoffs(&self.params, payoffs_put)?;

        Ok(PricingResult {
            price_call,
            price_put,
            err_call,
            err_put,
        })
    }
}
