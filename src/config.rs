use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::domain::Flags;
use crate::error::{GitCommitError, Result};

/// Environment variable overriding `ai.base_url`
pub const ENV_BASE_URL: &str = "GIT_COMMIT_AI_URL";
/// Environment variable overriding `ai.model`
pub const ENV_MODEL: &str = "GIT_COMMIT_AI_MODEL";

/// Represents the complete configuration for git-commit-ai.
///
/// Contains the draft generator settings and default flag values.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    2_000
}

fn default_generate_timeout_ms() -> u64 {
    60_000
}

fn default_max_diff_chars() -> usize {
    12_000
}

fn default_temperature() -> f32 {
    0.2
}

/// Settings for the local model server that drafts commit messages.
///
/// Passed explicitly to the generator and the workflow; nothing is global.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    #[serde(default = "default_generate_timeout_ms")]
    pub generate_timeout_ms: u64,

    #[serde(default = "default_max_diff_chars")]
    pub max_diff_chars: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AiConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn generate_timeout(&self) -> Duration {
        Duration::from_millis(self.generate_timeout_ms)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            base_url: default_base_url(),
            model: default_model(),
            probe_timeout_ms: default_probe_timeout_ms(),
            generate_timeout_ms: default_generate_timeout_ms(),
            max_diff_chars: default_max_diff_chars(),
            temperature: default_temperature(),
        }
    }
}

/// Flag values applied on every run, in addition to command line flags.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub publish: bool,

    #[serde(default)]
    pub no_scope: bool,

    #[serde(default)]
    pub branch_in_header: bool,

    #[serde(default)]
    pub no_ai: bool,
}

impl From<DefaultsConfig> for Flags {
    fn from(defaults: DefaultsConfig) -> Self {
        Flags {
            publish: defaults.publish,
            no_scope: defaults.no_scope,
            branch_in_header: defaults.branch_in_header,
            no_ai: defaults.no_ai,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitcommit.toml` in current directory
/// 3. `.gitcommit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides ([`ENV_BASE_URL`], [`ENV_MODEL`]) are applied last.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let mut config = match find_config_file(config_path)? {
        Some(contents) => parse_config(&contents)?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn find_config_file(config_path: Option<&str>) -> Result<Option<String>> {
    if let Some(path) = config_path {
        let contents = fs::read_to_string(path)
            .map_err(|e| GitCommitError::config(format!("Cannot read {}: {}", path, e)))?;
        return Ok(Some(contents));
    }

    if Path::new("./gitcommit.toml").exists() {
        return Ok(Some(fs::read_to_string("./gitcommit.toml")?));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitcommit.toml");
        if config_path.exists() {
            return Ok(Some(fs::read_to_string(config_path)?));
        }
    }

    Ok(None)
}

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| GitCommitError::config(e.to_string()))
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = std::env::var(ENV_BASE_URL) {
        if !url.trim().is_empty() {
            config.ai.base_url = url.trim().to_string();
        }
    }
    if let Ok(model) = std::env::var(ENV_MODEL) {
        if !model.trim().is_empty() {
            config.ai.model = model.trim().to_string();
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.ai.model.trim().is_empty() {
        return Err(GitCommitError::config("ai.model cannot be empty"));
    }
    if config.ai.probe_timeout_ms == 0 || config.ai.generate_timeout_ms == 0 {
        return Err(GitCommitError::config("ai timeouts must be greater than zero"));
    }
    Ok(())
}
