// src/stats.rs
//! Reductions over a materialized price path or payoff sample.
//!
//! Every function rejects an empty slice with [`McError::EmptySequence`]
//! instead of returning NaN or an infinite extremum.

use crate::error::{validation::validate_non_empty, McResult};

/// Arithmetic average
pub fn mean(xs: &[f64]) -> McResult<f64> {
    validate_non_empty("mean", xs)?;
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Average squared deviation from the mean (denominator N, not N-1)
pub fn population_variance(xs: &[f64]) -> McResult<f64> {
    validate_non_empty("population variance", xs)?;
    let avg = mean(xs)?;
    let sum_sq: f64 = xs.iter().map(|x| (x - avg) * (x - avg)).sum();
    Ok(sum_sq / xs.len() as f64)
}

pub fn max(xs: &[f64]) -> McResult<f64> {
    validate_non_empty("max", xs)?;
    Ok(xs.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

pub fn min(xs: &[f64]) -> McResult<f64> {
    validate_non_empty("min", xs)?;
    Ok(xs.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Path statistic feeding one payoff leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Max,
    Min,
}

impl Statistic {
    pub fn apply(self, path: &[f64]) -> McResult<f64> {
        match self {
            Statistic::Mean => mean(path),
            Statistic::Max => max(path),
            Statistic::Min => min(path),
        }
    }
}
