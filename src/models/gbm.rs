// src/models/gbm.rs
//! Geometric Brownian Motion under the risk-neutral measure
//!
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! S_{t+dt} = S_t * exp((r - σ²/2)dt + σ√dt * Z)
//! ```

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact lognormal step over `dt` driven by one standard normal draw
    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }
}
