// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;
use std::time::Instant;

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Wall-clock stopwatch, running from the moment it is started
pub struct Timer {
    started: Instant,
}

impl Timer {
    pub fn start() -> Timer {
        Timer {
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}
