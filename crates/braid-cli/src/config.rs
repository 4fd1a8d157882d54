//! Configuration for the console, and loading it from TOML files
//!
//! Configuration files are looked up in several locations (explicit path,
//! local directory, system directory); every setting has a default.
//!
//! ```toml
//! [repl]
//! prompt = "braid> "
//! exit_command = "quit"
//! rule = "expression"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::{error::CliError, grammar::Rule};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Console configuration section.
    #[serde(default)]
    repl: ReplConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified console configuration.
    pub fn new(repl: ReplConfig) -> Self {
        Self { repl }
    }

    /// Returns the console configuration.
    pub fn repl(&self) -> &ReplConfig {
        &self.repl
    }
}

/// Console behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Text printed before reading each line.
    prompt: String,

    /// Line that ends the session, compared case-insensitively.
    exit_command: String,

    /// Grammar rule used to parse each line.
    rule: Rule,
}

impl ReplConfig {
    /// Creates a new [`ReplConfig`].
    pub fn new(prompt: impl Into<String>, exit_command: impl Into<String>, rule: Rule) -> Self {
        Self {
            prompt: prompt.into(),
            exit_command: exit_command.into(),
            rule,
        }
    }

    /// Returns the prompt written before each line.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the command that ends the session.
    pub fn exit_command(&self) -> &str {
        &self.exit_command
    }

    /// Returns the grammar rule lines are parsed with.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns a copy using `rule` instead of the configured one.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Returns `true` if `line` is the exit command.
    pub fn is_exit(&self, line: &str) -> bool {
        line.to_lowercase() == self.exit_command.to_lowercase()
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self::new("> ", "exit", Rule::default())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (braid/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("braid/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("rs", "braid", "braid") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if config.repl.exit_command.trim().is_empty() {
        return Err(ConfigError::Validation("repl.exit_command must not be empty".into()).into());
    }

    Ok(config)
}
