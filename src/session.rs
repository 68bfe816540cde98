// src/session.rs
//! Sensitivity-study session around the pricing engine
//!
//! A session owns the live option parameters, mutates them between runs and
//! keeps the last successful result for reporting. Each `simulate_*` call
//! builds a fresh engine from a copy of the current parameters.

use crate::error::McResult;
use crate::mc::mc_engine::{OptionParameters, PricingEngine, PricingResult};
use crate::mc::path_generator::SharedPathGenerator;
use crate::mc::payoffs::OptionVariant;
use crate::rng::DEFAULT_SEED;
use std::rc::Rc;
use tracing::{info, warn};

/// Startup constants for a sweep run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub params: OptionParameters,
    pub timesteps: usize,
    pub simulations: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            params: OptionParameters::default(),
            timesteps: 252,
            simulations: 10_000,
            seed: DEFAULT_SEED,
        }
    }
}

pub struct SimulationSession {
    name: String,
    params: OptionParameters,
    timesteps: usize,
    simulations: usize,
    generator: SharedPathGenerator,
    last_result: Option<PricingResult>,
}

impl SimulationSession {
    pub fn new(
        name: impl Into<String>,
        timesteps: usize,
        simulations: usize,
        generator: SharedPathGenerator,
        params: OptionParameters,
    ) -> Self {
        SimulationSession {
            name: name.into(),
            params,
            timesteps,
            simulations,
            generator,
            last_result: None,
        }
    }

    pub fn from_config(
        name: impl Into<String>,
        config: &SimulationConfig,
        generator: SharedPathGenerator,
    ) -> Self {
        Self::new(
            name,
            config.timesteps,
            config.simulations,
            generator,
            config.params,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    pub fn timesteps(&self) -> usize {
        self.timesteps
    }

    pub fn simulations(&self) -> usize {
        self.simulations
    }

    pub fn last_result(&self) -> Option<&PricingResult> {
        self.last_result.as_ref()
    }

    pub fn set_s0(&mut self, s0: f64) {
        self.params.s0 = s0;
    }

    pub fn set_strike(&mut self, e: f64) {
        self.params.e = e;
    }

    pub fn set_maturity(&mut self, t: f64) {
        self.params.t = t;
    }

    pub fn set_sigma(&mut self, sigma: f64) {
        self.params.sigma = sigma;
    }

    pub fn set_rate(&mut self, r: f64) {
        self.params.r = r;
    }

    /// Overwrite every parameter from a baseline snapshot
    pub fn reset_params(&mut self, baseline: &OptionParameters) {
        self.params = *baseline;
    }

    fn engine(&self, variant: OptionVariant) -> PricingEngine {
        PricingEngine::new(
            Rc::clone(&self.generator),
            variant.strategy(self.params.e),
            self.params,
        )
    }

    /// Price `variant` on the shared stream and store the result.
    ///
    /// On error the previously stored result is kept and the error is
    /// returned to the caller, which decides whether the run continues.
    pub fn simulate(&mut self, variant: OptionVariant) -> McResult<PricingResult> {
        let outcome = self.engine(variant).price(self.timesteps, self.simulations);
        self.store(variant, outcome)
    }

    /// Price `variant` with independent per-path streams derived from `seed`
    pub fn simulate_parallel(
        &mut self,
        variant: OptionVariant,
        seed: u64,
    ) -> McResult<PricingResult> {
        let outcome = self
            .engine(variant)
            .price_parallel(self.timesteps, self.simulations, seed);
        self.store(variant, outcome)
    }

    fn store(
        &mut self,
        variant: OptionVariant,
        outcome: McResult<PricingResult>,
    ) -> McResult<PricingResult> {
        match outcome {
            Ok(result) => {
                info!(
                    session = %self.name,
                    %variant,
                    price_call = result.price_call,
                    price_put = result.price_put,
                    "stored pricing result"
                );
                self.last_result = Some(result);
                Ok(result)
            }
            Err(e) => {
                warn!(session = %self.name, %variant, error = %e, "pricing failed");
                Err(e)
            }
        }
    }

    pub fn simulate_asian_fixed_strike(&mut self) -> McResult<PricingResult> {
        self.simulate(OptionVariant::AsianFixedStrike)
    }

    pub fn simulate_asian_floating_strike(&mut self) -> McResult<PricingResult> {
        self.simulate(OptionVariant::AsianFloatingStrike)
    }

    pub fn simulate_lookback_fixed_strike(&mut self) -> McResult<PricingResult> {
        self.simulate(OptionVariant::LookbackFixedStrike)
    }

    pub fn simulate_lookback_floating_strike(&mut self) -> McResult<PricingResult> {
        self.simulate(OptionVariant::LookbackFloatingStrike)
    }
}
