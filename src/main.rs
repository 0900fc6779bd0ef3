#[macro_use]
extern crate slog;

use std::error::Error;
use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::Local;
use colored::Colorize;
use slog::{Drain, Level, Logger};

mod constants;
mod quadrature;
mod particle;
mod ics;
mod spectrum;
mod input;
mod output;

use input::*;
use output::*;
use spectrum::*;

/// Terminal logger for diagnostics, at the level given by
/// the environment variable `ICS_FLUX_LOG` (default `info`).
fn default_log() -> Logger {
    let level = std::env::var("ICS_FLUX_LOG").ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::Info);
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build()
        .filter_level(level)
        .fuse();
    Logger::root(drain, o!())
}

fn main() -> Result<(), Box<dyn Error>> {
    let logger = default_log();

    let version = option_env!("VERGEN_GIT_SHA_SHORT")
        .or(option_env!("VERGEN_SHA_SHORT"))
        .map(|sha| format!("v{}, git hash {}", env!("CARGO_PKG_VERSION"), sha))
        .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION")));
    let features = env!("ICS_FLUX_ACTIVE_FEATURES");
    println!(
        "{} {}, features: [{}]",
        "ics-flux".bold(), version,
        if features.is_empty() {"none"} else {features}
    );
    println!("{}\n", "Inverse Compton scattering of the CMB by non-thermal electrons".italic());

    let params = match std::env::args().nth(1) {
        Some(path) => {
            println!("{} run parameters from {}...", "Reading".bold().cyan(), path.bold().blue());
            let mut config = Config::from_file(Path::new(&path))?;
            config.with_context("constants")?;
            RunParams::from_config(&config)?
        },
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Prompt::new(stdin.lock(), stdout.lock()).run_params()?
        },
    };

    info!(logger, "run parameters";
        "kernel" => params.kernel.to_string(),
        "norm" => params.electrons.norm(),
        "power" => params.electrons.power(),
        "gamma_max" => params.electrons.gamma_max(),
        "lower" => params.energies.lower(),
        "upper" => params.energies.upper(),
        "on_failure" => params.policy.to_string()
    );

    let sweep = params.sweep()?;
    let total = sweep.len();

    let start = Local::now();
    let mut log = SpectrumLog::create(&params.output_dir, params.kernel, &start)?;
    println!("Start Time : {}\n", WallClock(start));

    let timer = Instant::now();
    let mut sink = |index: usize, sample: SpectrumSample| -> Result<(), Box<dyn Error>> {
        println!("{}", ProgressLine { index, total, sample });
        log.write(sample)?;
        Ok(())
    };

    #[cfg(feature = "parallel")]
    let emitted = if params.parallel {
        sweep.run_parallel(&logger, &mut sink)?
    } else {
        sweep.run(&logger, &mut sink)?
    };

    #[cfg(not(feature = "parallel"))]
    let emitted = {
        if params.parallel {
            warn!(logger, "parallel sweep requested, but not enabled at compile time: running sequentially");
        }
        sweep.run(&logger, &mut sink)?
    };

    let path = log.finish()?;

    println!("\nEnd Time : {}\n", WallClock(Local::now()));
    println!(
        "{} {} of {} points written to {} in {}.",
        "Completed".bold().bright_green(),
        emitted, total,
        path.display().to_string().bold().blue(),
        PrettyDuration::from(timer.elapsed()),
    );

    Ok(())
}
