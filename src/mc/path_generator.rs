// src/mc/path_generator.rs
//! Price path generation from one continuing random stream
//!
//! # Discretization
//!
//! For a buffer of length L the step size is `dt = T / L`, i.e. the divisor
//! is the number of stored points rather than the L - 1 intervals between
//! them. Reference outputs depend on this convention, so it is kept as is.
//!
//! # Sharing
//!
//! One generator is created per run and handed to every engine through a
//! [`SharedPathGenerator`]. Its stream is never reseeded or snapshotted
//! mid-run; each path consumes exactly L - 1 draws.

use crate::error::{validation::validate_buffer, McResult};
use crate::models::gbm::Gbm;
use crate::rng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded handle to the run-wide generator
pub type SharedPathGenerator = Rc<RefCell<PathGenerator>>;

#[derive(Debug, Clone)]
pub struct PathGenerator {
    rng: StdRng,
}

impl PathGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rng::seed_rng_from_u64(seed),
        }
    }

    /// Generator over an already seeded stream
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Wrap a fresh generator in a shareable handle
    pub fn shared(seed: u64) -> SharedPathGenerator {
        Rc::new(RefCell::new(Self::new(seed)))
    }

    pub fn next_standard_normal(&mut self) -> f64 {
        rng::get_normal_draw(&mut self.rng)
    }

    /// Overwrite `path` with a GBM trajectory starting at `s0`.
    ///
    /// `path[0] = s0` and every later slot is one exact lognormal step from
    /// its predecessor. Fails with `InvalidBuffer` if `path` is empty.
    pub fn simulate_price_path(
        &mut self,
        path: &mut [f64],
        s0: f64,
        r: f64,
        sigma: f64,
        t: f64,
    ) -> McResult<()> {
        validate_buffer(path)?;
        let gbm = Gbm::new(r, sigma);
        let dt = t / path.len() as f64;

        path[0] = s0;
        for i in 1..path.len() {
            let z = self.next_standard_normal();
            path[i] = gbm.exact_step(path[i - 1], dt, z);
        }
        Ok(())
    }
}
