#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug};

use motus_domain::read_package;

/// Sensor packages processed when no packages are given.
const SAMPLE_PACKAGES: [&str; 3] = ["SWM:720,1,80,25,40", "RUN:15000,1,75", "WLK:9000,1,75,180"];

#[derive(Parser, Debug)]
#[command(
    name = "motus",
    about = "Render workout summaries from raw fitness-tracker sensor packages"
)]
struct Cli {
    /// Sensor packages of the form CODE:v1,v2,... (e.g. RUN:15000,1,75).
    ///
    /// Without arguments, a built-in set of sample packages is processed.
    #[arg(value_name = "PACKAGE")]
    packages: Vec<String>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let packages = if cli.packages.is_empty() {
        SAMPLE_PACKAGES.map(String::from).to_vec()
    } else {
        cli.packages
    };

    for package in &packages {
        let (workout_type, data) =
            parse_package(package).with_context(|| format!("invalid package `{package}`"))?;
        debug!("package code={workout_type} values={data:?}");

        let workout = read_package(workout_type, &data)
            .with_context(|| format!("unusable package `{package}`"))?;
        println!("{}", workout.summary());
    }

    Ok(())
}

/// Splits a `CODE:v1,v2,...` argument into its code and sensor values.
fn parse_package(package: &str) -> Result<(&str, Vec<f64>)> {
    let (workout_type, values) = package
        .split_once(':')
        .context("expected CODE:v1,v2,...")?;

    let data = values
        .split(',')
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid sensor value `{value}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((workout_type, data))
}

/// Initialize logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
fn init_logging(verbose: u8, quiet: u8) {
    let level = match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => LevelFilter::Error,
        -1 => LevelFilter::Warn,
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
