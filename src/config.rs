use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{parse_version, TagPattern};
use crate::error::{Result, SemrelError};
use semver::Version;

/// File name looked up in the project directory
pub const CONFIG_FILE_NAME: &str = ".semrel.toml";

/// Represents the complete configuration for git-semrel.
///
/// Contains the commit format, the branch to release channel mapping, version tag
/// naming and changelog settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_commit_format")]
    pub commit_format: String,

    /// Branch name (or prefix) -> release channel
    #[serde(default = "default_branches")]
    pub branches: BTreeMap<String, String>,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_version")]
    pub default_version: String,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Configuration for changelog rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChangelogConfig {
    /// Also list commit types that are hidden by default (docs, chore, ...)
    #[serde(default)]
    pub print_all: bool,

    /// Commit link template, e.g. "https://github.com/acme/app/commit/{hash}"
    #[serde(default)]
    pub commit_url: String,

    /// Compare link template, e.g.
    /// "https://github.com/acme/app/compare/{previous_tag}...{next_tag}"
    ///
    /// `{previous}` and `{next}` give the bare versions.
    #[serde(default)]
    pub compare_url: String,
}

fn default_commit_format() -> String {
    "conventional".to_string()
}

fn default_branches() -> BTreeMap<String, String> {
    let mut branches = BTreeMap::new();
    branches.insert("main".to_string(), "release".to_string());
    branches.insert("master".to_string(), "release".to_string());
    branches
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            commit_format: default_commit_format(),
            branches: default_branches(),
            tag_pattern: default_tag_pattern(),
            default_version: default_version(),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl ReleaseConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SemrelError::config(e.to_string()))
    }

    /// Release channel name for a branch.
    ///
    /// An exact key match wins; otherwise the longest key that is a prefix of
    /// `branch` is used (key "release/" matches "release/1.x").
    pub fn channel_for_branch(&self, branch: &str) -> Option<&str> {
        if let Some(channel) = self.branches.get(branch) {
            return Some(channel.as_str());
        }

        self.branches
            .iter()
            .filter(|(key, _)| !key.is_empty() && branch.starts_with(key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, channel)| channel.as_str())
    }

    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(&self.tag_pattern)
    }

    /// Baseline version used when no version tag exists yet
    pub fn default_version(&self) -> Result<Version> {
        parse_version(&self.default_version).map_err(|e| {
            SemrelError::config(format!(
                "Invalid default_version '{}': {}",
                self.default_version, e
            ))
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.semrel.toml` in current directory
/// 3. `git-semrel/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<ReleaseConfig> {
    load_project_config(config_path, Path::new("."))
}

/// Same lookup as [`load_config`], with `.semrel.toml` resolved against
/// `project_dir` instead of the current directory
pub fn load_project_config(
    config_path: Option<&Path>,
    project_dir: &Path,
) -> Result<ReleaseConfig> {
    match locate_config(config_path, project_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            ReleaseConfig::from_toml(&content)
        }
        None => Ok(ReleaseConfig::default()),
    }
}

fn locate_config(config_path: Option<&Path>, project_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = project_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("git-semrel").join("config.toml"))
        .filter(|path| path.exists())
}
