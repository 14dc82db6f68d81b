//! Validate command - exit with 0 for a valid version, 1 otherwise.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use console::style;

use wrench_semver::Version;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version to check
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Do not print anything, only set the exit code
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    report(&args.version, args.quiet, &mut io::stdout(), &mut io::stderr())
}

/// Check `version`, writing the verdict to `out` or the parse error to `err`.
pub fn report(version: &str, quiet: bool, out: &mut impl Write, err: &mut impl Write) -> Result<i32> {
    match Version::from_string(version) {
        Ok(version) => {
            if !quiet {
                writeln!(out, "{} {}", style("valid").green(), version)?;
            }
            Ok(0)
        }
        Err(e) => {
            log::debug!("Rejected {:?}: {:?}", version, e);
            if !quiet {
                writeln!(err, "{} {}", style("invalid").red(), e)?;
            }
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(version: &str, quiet: bool) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(version, quiet, &mut out, &mut err).unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_valid_version() {
        let (code, out, err) = run("1.0.0-rc.1+build.5", false);
        assert_eq!(code, 0);
        assert!(out.contains("valid"));
        assert!(out.contains("1.0.0-rc.1+build.5"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_invalid_version() {
        let (code, out, err) = run("1.0", false);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("invalid"));
        assert!(err.contains("1.0"));
    }

    #[test]
    fn test_quiet_only_sets_exit_code() {
        assert_eq!(run("1.2.3", true), (0, String::new(), String::new()));
        assert_eq!(run("01.2.3", true), (1, String::new(), String::new()));
    }
}
