// scripts/sweep.rs
//! Parameter-sweep driver
//!
//! Runs one session per option variant on a single shared generator. Each
//! session prices the baseline, then every selected sensitivity after
//! resetting to the baseline, and prints the report for each experiment.

use bitflags::bitflags;
use clap::{Parser, ValueEnum};
use path_exotics::analytics::exotic_analytic;
use path_exotics::error::{McError, McResult};
use path_exotics::mc::mc_engine::OptionParameters;
use path_exotics::mc::path_generator::{PathGenerator, SharedPathGenerator};
use path_exotics::mc::payoffs::{OptionVariant, StrikeMode};
use path_exotics::rng::DEFAULT_SEED;
use path_exotics::session::{SimulationConfig, SimulationSession};
use std::rc::Rc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Sweeps: u32 {
        const NONE       = 0;
        const SPOT       = 1 << 0;
        const STRIKE     = 1 << 1;
        const MATURITY   = 1 << 2;
        const VOLATILITY = 1 << 3;
        const RATE       = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SweepArg {
    Spot,
    Strike,
    Maturity,
    Volatility,
    Rate,
    All,
}

impl SweepArg {
    fn flags(self) -> Sweeps {
        match self {
            SweepArg::Spot => Sweeps::SPOT,
            SweepArg::Strike => Sweeps::STRIKE,
            SweepArg::Maturity => Sweeps::MATURITY,
            SweepArg::Volatility => Sweeps::VOLATILITY,
            SweepArg::Rate => Sweeps::RATE,
            SweepArg::All => Sweeps::all(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    AsianFixed,
    AsianFloating,
    LookbackFixed,
    LookbackFloating,
}

impl From<VariantArg> for OptionVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::AsianFixed => OptionVariant::AsianFixedStrike,
            VariantArg::AsianFloating => OptionVariant::AsianFloatingStrike,
            VariantArg::LookbackFixed => OptionVariant::LookbackFixedStrike,
            VariantArg::LookbackFloating => OptionVariant::LookbackFloatingStrike,
        }
    }
}

/// Monte Carlo sensitivity sweeps for Asian and Lookback options
#[derive(Parser)]
#[command(name = "sweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulated paths per experiment
    #[arg(long, default_value_t = 10_000)]
    simulations: usize,

    /// Points per path, including the initial price
    #[arg(long, default_value_t = 252)]
    timesteps: usize,

    /// Seed of the run-wide random stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Sensitivities to run after the baseline
    #[arg(long, value_enum, value_delimiter = ',', default_value = "maturity")]
    sweep: Vec<SweepArg>,

    /// Variants to price (all when omitted)
    #[arg(long, value_enum, value_delimiter = ',')]
    variant: Vec<VariantArg>,

    /// Print closed-form reference prices for the baseline
    #[arg(long)]
    reference: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

const SPOT_SWEEP: [f64; 3] = [90.0, 95.0, 110.0];
const STRIKE_SWEEP: [f64; 3] = [90.0, 95.0, 110.0];
const MATURITY_SWEEP: [f64; 3] = [0.5, 0.75, 1.5];
const VOLATILITY_SWEEP: [f64; 1] = [0.1];
const RATE_SWEEP: [f64; 3] = [0.01, 0.03, 0.07];

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Price once and print the report. A failed experiment is logged and
/// skipped so the rest of the sweep still runs.
fn run_experiment(session: &mut SimulationSession, variant: OptionVariant) {
    match session.simulate(variant) {
        Ok(_) => println!("{}", session),
        Err(e) => error!(session = %session.name(), error = %e, "experiment skipped"),
    }
}

fn run_sweep(
    session: &mut SimulationSession,
    variant: OptionVariant,
    baseline: &OptionParameters,
    values: &[f64],
    apply: fn(&mut SimulationSession, f64),
) {
    for &value in values {
        session.reset_params(baseline);
        apply(session, value);
        run_experiment(session, variant);
    }
}

fn run_variant(
    variant: OptionVariant,
    config: &SimulationConfig,
    sweeps: Sweeps,
    generator: SharedPathGenerator,
) {
    let baseline = config.params;
    let mut session = SimulationSession::from_config(variant.to_string(), config, generator);
    info!(%variant, ?sweeps, "starting session");

    run_experiment(&mut session, variant);

    if sweeps.contains(Sweeps::SPOT) {
        run_sweep(&mut session, variant, &baseline, &SPOT_SWEEP, SimulationSession::set_s0);
    }
    // the strike only moves fixed-strike payoffs
    if sweeps.contains(Sweeps::STRIKE) && variant.strike_mode() == StrikeMode::Fixed {
        run_sweep(
            &mut session,
            variant,
            &baseline,
            &STRIKE_SWEEP,
            SimulationSession::set_strike,
        );
    }
    if sweeps.contains(Sweeps::MATURITY) {
        run_sweep(
            &mut session,
            variant,
            &baseline,
            &MATURITY_SWEEP,
            SimulationSession::set_maturity,
        );
    }
    if sweeps.contains(Sweeps::VOLATILITY) {
        run_sweep(
            &mut session,
            variant,
            &baseline,
            &VOLATILITY_SWEEP,
            SimulationSession::set_sigma,
        );
    }
    if sweeps.contains(Sweeps::RATE) {
        run_sweep(
            &mut session,
            variant,
            &baseline,
            &RATE_SWEEP,
            SimulationSession::set_rate,
        );
    }
}

fn print_references(p: &OptionParameters) -> McResult<()> {
    println!("================= Closed-form references =================");
    println!(
        "Geometric Asian Fixed Strike (continuous): CALL: {:.6}, PUT: {:.6}",
        exotic_analytic::geometric_asian_call(p.s0, p.e, p.r, p.sigma, p.t)?,
        exotic_analytic::geometric_asian_put(p.s0, p.e, p.r, p.sigma, p.t)?
    );
    println!(
        "Lookback Floating Strike (continuous): CALL: {:.6}, PUT: {:.6}",
        exotic_analytic::lookback_floating_call(p.s0, p.r, p.sigma, p.t)?,
        exotic_analytic::lookback_floating_put(p.s0, p.r, p.sigma, p.t)?
    );
    println!();
    Ok(())
}

fn main() -> McResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.simulations == 0 {
        return Err(McError::InvalidConfiguration {
            field: "simulations".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    if cli.timesteps == 0 {
        return Err(McError::InvalidConfiguration {
            field: "timesteps".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let config = SimulationConfig {
        timesteps: cli.timesteps,
        simulations: cli.simulations,
        seed: cli.seed,
        ..Default::default()
    };
    let sweeps = cli
        .sweep
        .iter()
        .fold(Sweeps::NONE, |acc, arg| acc | arg.flags());
    let variants: Vec<OptionVariant> = if cli.variant.is_empty() {
        OptionVariant::ALL.to_vec()
    } else {
        cli.variant.iter().map(|&v| v.into()).collect()
    };

    if cli.reference {
        print_references(&config.params)?;
    }

    let generator = PathGenerator::shared(config.seed);
    for variant in variants {
        run_variant(variant, &config, sweeps, Rc::clone(&generator));
    }

    Ok(())
}
