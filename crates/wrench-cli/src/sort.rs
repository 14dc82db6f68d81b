//! Sort command - order versions by precedence.

use anyhow::{Context, Result};
use clap::Args;

use wrench_semver::{Semver, Version};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short = 'r', long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sort(&args.versions, args.reverse)? {
        println!("{}", version);
    }
    Ok(0)
}

pub fn sort(versions: &[String], reverse: bool) -> Result<Vec<Version>> {
    let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
    log::debug!("Sorting {} versions", versions.len());

    let sorted = if reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };
    sorted.context("Failed to sort versions")
}
