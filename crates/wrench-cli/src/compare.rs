//! Compare command - print -1, 0 or 1.

use anyhow::{Context, Result};
use clap::Args;

use wrench_semver::{Comparator, Version};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub right: String,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    println!("{}", compare(&args.left, &args.right)?);
    Ok(0)
}

pub fn compare(left: &str, right: &str) -> Result<i32> {
    let left = Version::from_string(left).with_context(|| format!("Failed to parse \"{}\"", left))?;
    let right = Version::from_string(right).with_context(|| format!("Failed to parse \"{}\"", right))?;
    log::debug!("Comparing {} with {}", left, right);
    Ok(Comparator::compare(&left, &right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert_eq!(compare("1.0.0-alpha.2", "1.0.0-alpha.10").unwrap(), -1);
        assert_eq!(compare("1.0.0", "1.0.0").unwrap(), 0);
        assert_eq!(compare("1.0.0", "1.0.0-rc.1").unwrap(), 1);
    }

    #[test]
    fn test_compare_invalid() {
        let err = compare("1.0.0", "1.0").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse \"1.0\"");
    }
}
