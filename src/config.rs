use crate::domain::BranchTaxonomy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete configuration for git-autotag
///
/// Everything has a working default: the stock taxonomy (feature/ and fix/
/// prefixes, main as the integration branch, release as the release branch),
/// the origin remote, and the Cargo manifest for the base version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_manifest")]
    pub manifest: String,
}

/// Branch naming configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    #[serde(default = "default_feature_prefix")]
    pub feature_prefix: String,

    #[serde(default = "default_fix_prefix")]
    pub fix_prefix: String,

    #[serde(default = "default_integration")]
    pub integration: String,

    #[serde(default = "default_release")]
    pub release: String,
}

fn default_feature_prefix() -> String {
    "feature/".to_string()
}

fn default_fix_prefix() -> String {
    "fix/".to_string()
}

fn default_integration() -> String {
    "main".to_string()
}

fn default_release() -> String {
    "release".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_manifest() -> String {
    "Cargo.toml".to_string()
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            feature_prefix: default_feature_prefix(),
            fix_prefix: default_fix_prefix(),
            integration: default_integration(),
            release: default_release(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: BranchesConfig::default(),
            remote: default_remote(),
            manifest: default_manifest(),
        }
    }
}

impl Config {
    /// Branch taxonomy for the classifier
    pub fn taxonomy(&self) -> BranchTaxonomy {
        BranchTaxonomy {
            feature_prefix: self.branches.feature_prefix.clone(),
            fix_prefix: self.branches.fix_prefix.clone(),
            integration_branch: self.branches.integration.clone(),
            release_branch: self.branches.release.clone(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autotag.toml` in current directory
/// 3. `autotag.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autotag.toml").exists() {
        fs::read_to_string("./autotag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("autotag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
