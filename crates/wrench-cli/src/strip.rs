//! Strip command - drop prerelease and/or build metadata.

use anyhow::{Context, Result};
use clap::Args;

use wrench_semver::Version;

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Version to strip
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Remove the prerelease
    #[arg(long)]
    pub prerelease: bool,

    /// Remove the build metadata
    #[arg(long)]
    pub buildmetadata: bool,
}

pub fn execute(args: StripArgs) -> Result<i32> {
    let version = Version::from_string(&args.version)
        .with_context(|| format!("Failed to parse \"{}\"", args.version))?;
    println!("{}", strip(&version, args.prerelease, args.buildmetadata));
    Ok(0)
}

/// Without either flag both fields are removed
pub fn strip(version: &Version, prerelease: bool, buildmetadata: bool) -> Version {
    let (prerelease, buildmetadata) = if prerelease || buildmetadata {
        (prerelease, buildmetadata)
    } else {
        (true, true)
    };

    let mut stripped = version.clone();
    if prerelease {
        stripped = stripped.without_prerelease();
    }
    if buildmetadata {
        stripped = stripped.without_buildmetadata();
    }
    stripped
}
