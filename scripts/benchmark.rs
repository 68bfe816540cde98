// scripts/benchmark.rs
use clap::Parser;
use path_exotics::math_utils::Timer;
use path_exotics::mc::mc_engine::{OptionParameters, PricingEngine, PricingResult};
use path_exotics::mc::path_generator::PathGenerator;
use path_exotics::mc::payoffs::OptionVariant;
use path_exotics::rng::DEFAULT_SEED;
use path_exotics::McResult;
use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Time serial shared-stream pricing against parallel per-path pricing
#[derive(Parser)]
#[command(name = "benchmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Points per path
    #[arg(long, default_value_t = 252)]
    timesteps: usize,

    /// Path counts to benchmark
    #[arg(long, value_delimiter = ',', default_values_t = [10_000usize, 100_000])]
    simulations: Vec<usize>,

    /// Seed for both the shared stream and the per-path streams
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    variant: OptionVariant,
    paths: usize,
    serial_ms: f64,
    parallel_ms: f64,
    serial_call: f64,
    parallel_call: f64,
}

impl BenchmarkResult {
    fn speedup(&self) -> f64 {
        self.serial_ms / self.parallel_ms
    }
}

fn time_run<F>(run: F) -> McResult<(PricingResult, f64)>
where
    F: FnOnce() -> McResult<PricingResult>,
{
    let timer = Timer::start();
    let result = run()?;
    Ok((result, timer.elapsed_ms()))
}

fn run_benchmarks(cli: &Cli) -> McResult<Vec<BenchmarkResult>> {
    let params = OptionParameters::default();
    let generator = PathGenerator::shared(cli.seed);
    let mut results = Vec::new();

    for &paths in &cli.simulations {
        println!("Running benchmarks with {} paths...", paths);
        for variant in OptionVariant::ALL {
            let engine =
                PricingEngine::new(generator.clone(), variant.strategy(params.e), params);

            let (serial, serial_ms) = time_run(|| engine.price(cli.timesteps, paths))?;
            let (parallel, parallel_ms) =
                time_run(|| engine.price_parallel(cli.timesteps, paths, cli.seed))?;
            info!(%variant, paths, serial_ms, parallel_ms, "benchmarked");

            results.push(BenchmarkResult {
                variant,
                paths,
                serial_ms,
                parallel_ms,
                serial_call: serial.price_call,
                parallel_call: parallel.price_call,
            });
        }
    }

    Ok(results)
}

fn main() -> McResult<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    println!("path-exotics Benchmark Suite");
    println!("============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_benchmarks(&cli)?;

    println!("\n{:=<96}", "");
    println!("BENCHMARK RESULTS ({} points per path)", cli.timesteps);
    println!("{:=<96}", "");
    println!(
        "{:<34} {:>9} {:>11} {:>11} {:>8} {:>9} {:>9}",
        "Variant", "Paths", "Serial ms", "Par. ms", "Speedup", "Call", "Call par."
    );
    println!("{:-<96}", "");
    for r in &results {
        println!(
            "{:<34} {:>9} {:>11.2} {:>11.2} {:>7.2}x {:>9.4} {:>9.4}",
            r.variant.to_string(),
            r.paths,
            r.serial_ms,
            r.parallel_ms,
            r.speedup(),
            r.serial_call,
            r.parallel_call
        );
    }
    println!("{:=<96}", "");

    Ok(())
}
