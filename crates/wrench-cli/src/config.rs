use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "semver.toml";

/// The configuration file structure (semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Defaults for the bump command
    pub bump: BumpConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Which optional fields survive a bump unless overridden on the command line
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BumpConfig {
    pub keep_prerelease: bool,
    pub keep_buildmetadata: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for the parse command
    pub format: OutputFormat,

    /// Omit absent prerelease and build metadata from structured output
    pub exclude_none: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            exclude_none: true,
        }
    }
}

impl SemverConfig {
    /// Load configuration from semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Loading config from {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: SemverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            // Move to parent directory
            if !current.pop() {
                log::trace!("No {} found above {}", CONFIG_FILE, start_dir.display());
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: SemverConfig = toml::from_str("").unwrap();
        assert!(!config.bump.keep_prerelease);
        assert!(!config.bump.keep_buildmetadata);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.exclude_none);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[bump]
keep_prerelease = true
keep_buildmetadata = true

[output]
format = "json"
exclude_none = false
"#;
        let config: SemverConfig = toml::from_str(toml).unwrap();
        assert!(config.bump.keep_prerelease);
        assert!(config.bump.keep_buildmetadata);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.exclude_none);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result: Result<SemverConfig, _> = toml::from_str("[output]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[bump]\nkeep_prerelease = true\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SemverConfig::load(&nested).unwrap().unwrap();
        assert!(config.bump.keep_prerelease);
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[bump\n").unwrap();
        assert!(SemverConfig::load(dir.path()).is_err());
    }
}
