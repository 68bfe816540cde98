//! Closed-form references for continuously monitored exotics
//!
//! # Generalized Black-Scholes
//!
//! With cost of carry `b`:
//! ```text
//! C = S e^((b-r)T) Φ(d₁) - K e^(-rT) Φ(d₂)
//! d₁ = [ln(S/K) + (b + σ²/2)T] / (σ√T),  d₂ = d₁ - σ√T
//! ```
//!
//! # Geometric Asian (Kemna-Vorst)
//!
//! The continuous geometric average of a GBM is lognormal, so a fixed-strike
//! geometric Asian is a generalized Black-Scholes option with
//! `σ_A = σ/√3` and `b_A = (r - σ²/6)/2`. The arithmetic Asian always prices
//! at or above it, which makes it a lower anchor for Monte Carlo estimates.
//!
//! # Floating-Strike Lookback (Goldman-Sosin-Gatto)
//!
//! Priced at inception, where the observed extremum equals spot. Discrete
//! monitoring misses part of the path's range, so a simulated lookback sits
//! slightly below these values.

use crate::error::{McError, McResult};
use crate::math_utils::norm_cdf;

fn validate_inputs(s: f64, sigma: f64, t: f64) -> McResult<()> {
    for (name, value) in [("s0", s), ("sigma", sigma), ("t", t)] {
        if value.is_nan() || value <= 0.0 {
            return Err(McError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("must be positive for a closed-form price, got {}", value),
            });
        }
    }
    Ok(())
}

fn d1_d2(s: f64, k: f64, t: f64, b: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (b + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

pub fn generalized_bs_call(s: f64, k: f64, t: f64, r: f64, b: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, t, b, sigma);
    s * ((b - r) * t).exp() * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

pub fn generalized_bs_put(s: f64, k: f64, t: f64, r: f64, b: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, t, b, sigma);
    k * (-r * t).exp() * norm_cdf(-d2) - s * ((b - r) * t).exp() * norm_cdf(-d1)
}

fn geometric_asian_inputs(r: f64, sigma: f64) -> (f64, f64) {
    let sigma_a = sigma / 3f64.sqrt();
    let b_a = 0.5 * (r - sigma * sigma / 6.0);
    (sigma_a, b_a)
}

pub fn geometric_asian_call(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> McResult<f64> {
    validate_inputs(s0, sigma, t)?;
    let (sigma_a, b_a) = geometric_asian_inputs(r, sigma);
    Ok(generalized_bs_call(s0, k, t, r, b_a, sigma_a))
}

pub fn geometric_asian_put(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> McResult<f64> {
    validate_inputs(s0, sigma, t)?;
    let (sigma_a, b_a) = geometric_asian_inputs(r, sigma);
    Ok(generalized_bs_put(s0, k, t, r, b_a, sigma_a))
}

fn validate_rate(r: f64) -> McResult<()> {
    if r == 0.0 || !r.is_finite() {
        return Err(McError::InvalidConfiguration {
            field: "r".to_string(),
            reason: format!("lookback closed form needs a finite non-zero rate, got {}", r),
        });
    }
    Ok(())
}

/// Floating-strike lookback call at inception, payoff `S_T - min S_t`
pub fn lookback_floating_call(s0: f64, r: f64, sigma: f64, t: f64) -> McResult<f64> {
    validate_inputs(s0, sigma, t)?;
    validate_rate(r)?;
    let b = r;
    let (a1, a2) = d1_d2(s0, s0, t, b, sigma);
    let ratio = sigma * sigma / (2.0 * b);
    let discount = (-r * t).exp();

    Ok(s0 * norm_cdf(a1) - s0 * discount * norm_cdf(a2)
        + s0 * discount
            * ratio
            * (norm_cdf(-a1 + 2.0 * b * t.sqrt() / sigma) - (b * t).exp() * norm_cdf(-a1)))
}

/// Floating-strike lookback put at inception, payoff `max S_t - S_T`
pub fn lookback_floating_put(s0: f64, r: f64, sigma: f64, t: f64) -> McResult<f64> {
    validate_inputs(s0, sigma, t)?;
    validate_rate(r)?;
    let b = r;
    let (b1, b2) = d1_d2(s0, s0, t, b, sigma);
    let ratio = sigma * sigma / (2.0 * b);
    let discount = (-r * t).exp();

    Ok(s0 * discount * norm_cdf(-b2) - s0 * norm_cdf(-b1)
        + s0 * discount
            * ratio
            * ((b * t).exp() * norm_cdf(b1) - norm_cdf(b1 - 2.0 * b * t.sqrt() / sigma)))
}
