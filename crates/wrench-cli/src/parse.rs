//! Parse command - show the fields of a version.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fmt::Write;

use wrench_semver::Version;

use crate::config::{OutputFormat, SemverConfig};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse (e.g., 1.0.0-rc.1+build.5)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also show absent prerelease and build metadata
    #[arg(long)]
    pub include_none: bool,
}

pub fn execute(args: ParseArgs, config: &SemverConfig) -> Result<i32> {
    let version = Version::from_string(&args.version)
        .with_context(|| format!("Failed to parse \"{}\"", args.version))?;

    let format = args.format.unwrap_or(config.output.format);
    let exclude_none = config.output.exclude_none && !args.include_none;
    log::debug!("Rendering {} as {:?} (exclude_none: {})", version, format, exclude_none);

    print!("{}", render(&version, format, exclude_none)?);
    Ok(0)
}

pub fn render(version: &Version, format: OutputFormat, exclude_none: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&Value::Object(version.to_dict(exclude_none)))?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "major: {}", version.major())?;
            writeln!(out, "minor: {}", version.minor())?;
            writeln!(out, "patch: {}", version.patch())?;
            for (name, field) in [("prerelease", version.prerelease()), ("buildmetadata", version.buildmetadata())] {
                match field {
                    Some(ids) => writeln!(out, "{}: {}", name, ids)?,
                    None if !exclude_none => writeln!(out, "{}: none", name)?,
                    None => {}
                }
            }
            Ok(out)
        }
    }
}
