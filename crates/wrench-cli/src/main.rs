mod bump;
mod compare;
mod config;
mod parse;
mod sort;
mod strip;
mod validate;

use config::SemverConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Parse, compare and bump semantic versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the fields of a version
    Parse(parse::ParseArgs),

    /// Compare two versions, printing -1, 0 or 1
    #[command(alias = "cmp")]
    Compare(compare::CompareArgs),

    /// Compute the next major, minor or patch version
    Bump(bump::BumpArgs),

    /// Remove prerelease and/or build metadata
    Strip(strip::StripArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Check whether a string is a valid version
    Validate(validate::ValidateArgs),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load semver.toml config if present
    let config = SemverConfig::load_from_cwd()?.unwrap_or_default();
    log::trace!("Effective config: {:?}", config);

    log::debug!("Running {:?}", args.command);
    match args.command {
        Commands::Parse(parse_args) => parse::execute(parse_args, &config),
        Commands::Compare(compare_args) => compare::execute(compare_args),
        Commands::Bump(bump_args) => bump::execute(bump_args, &config.bump),
        Commands::Strip(strip_args) => strip::execute(strip_args),
        Commands::Sort(sort_args) => sort::execute(sort_args),
        Commands::Validate(validate_args) => validate::execute(validate_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
