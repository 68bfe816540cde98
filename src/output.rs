// src/output.rs
//! Plain-text experiment report
//!
//! ```text
//! ================= <name> =================
//! S0: <S0>, E: <E>, T: <T>, sigma: <sigma>, r: <r>, simulations: <N>, timesteps: <T>
//! CALL: Price: <p>, Std error: <se>, Confidence interval 95%: [<lo> - <hi>]
//! PUT: Price: <p>, Std error: <se>, Confidence interval 95%: [<lo> - <hi>]
//! ```
//!
//! Reals print in general notation with six significant digits.

use crate::mc::mc_engine::{ErrorEstimate, OptionParameters};
use crate::session::SimulationSession;
use std::fmt;

/// Significant digits of every real in the report
pub const SIGNIFICANT_DIGITS: usize = 6;

/// General notation with `digits` significant digits and trailing zeros
/// removed. Decimal exponents below -5 or at least `digits` switch to
/// scientific notation (`1.5e+07`).
pub fn format_general(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);

    // exponent after rounding to `digits` significant digits
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -5 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

struct General(f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_general(self.0, SIGNIFICANT_DIGITS))
    }
}

impl fmt::Display for OptionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S0: {}, E: {}, T: {}, sigma: {}, r: {}",
            General(self.s0),
            General(self.e),
            General(self.t),
            General(self.sigma),
            General(self.r)
        )
    }
}

impl fmt::Display for ErrorEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Std error: {}, Confidence interval {}%: [{} - {}]",
            General(self.standard_error),
            self.confidence,
            General(self.confidence_interval_low),
            General(self.confidence_interval_high)
        )
    }
}

impl fmt::Display for SimulationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================= {} =================", self.name())?;
        writeln!(
            f,
            "{}, simulations: {}, timesteps: {}",
            self.params(),
            self.simulations(),
            self.timesteps()
        )?;
        match self.last_result() {
            Some(result) => {
                writeln!(
                    f,
                    "CALL: Price: {}, {}",
                    General(result.price_call),
                    result.err_call
                )?;
                writeln!(
                    f,
                    "PUT: Price: {}, {}",
                    General(result.price_put),
                    result.err_put
                )
            }
            None => writeln!(f, "(not priced yet)"),
        }
    }
}
