//! Bump command - compute the next major, minor or patch version.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use wrench_semver::{Keep, Version};

use crate::config::BumpConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Component to increment
    #[arg(value_enum)]
    pub component: Component,

    /// Version to bump
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Keep the prerelease (overrides semver.toml)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub keep_prerelease: Option<bool>,

    /// Keep the build metadata (overrides semver.toml)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub keep_buildmetadata: Option<bool>,
}

pub fn execute(args: BumpArgs, config: &BumpConfig) -> Result<i32> {
    let version = Version::from_string(&args.version)
        .with_context(|| format!("Failed to parse \"{}\"", args.version))?;

    // CLI flags take precedence over semver.toml
    let keep = Keep {
        prerelease: args.keep_prerelease.unwrap_or(config.keep_prerelease),
        buildmetadata: args.keep_buildmetadata.unwrap_or(config.keep_buildmetadata),
    };

    println!("{}", bump(&version, args.component, keep)?);
    Ok(0)
}

pub fn bump(version: &Version, component: Component, keep: Keep) -> Result<Version> {
    log::debug!("Bumping {:?} of {} ({:?})", component, version, keep);
    let next = match component {
        Component::Major => version.next_major_keeping(keep),
        Component::Minor => version.next_minor_keeping(keep),
        Component::Patch => version.next_patch_keeping(keep),
    };
    next.with_context(|| format!("Failed to bump {}", version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_bump_drops_optional_fields() {
        let version = v("1.2.3-rc.1+build");
        assert_eq!(bump(&version, Component::Major, Keep::NONE).unwrap(), v("2.0.0"));
        assert_eq!(bump(&version, Component::Minor, Keep::NONE).unwrap(), v("1.3.0"));
        assert_eq!(bump(&version, Component::Patch, Keep::NONE).unwrap(), v("1.2.4"));
    }

    #[test]
    fn test_bump_keeping() {
        let version = v("1.2.3-rc.1+build");
        assert_eq!(bump(&version, Component::Patch, Keep::ALL).unwrap(), v("1.2.4-rc.1+build"));
    }

    #[test]
    fn test_bump_overflow() {
        let version = Version::new(1, 2, u64::MAX);
        let err = bump(&version, Component::Patch, Keep::NONE).unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to bump 1.2.{}", u64::MAX));
    }
}
