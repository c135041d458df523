//! # Jflyz Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the presentation settings of the
//! terminal chat shell. Configuration never reaches the responder: the rule
//! table and the response pools are fixed at compile time.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. The file given by `--config` or `JFLYZ_CONFIG`, if set (used on its own, over defaults)
//! 2. Project-specific `.jflyz.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [shell]
//! bot_label = "Jflyz"
//! user_label = "James"
//! show_timestamps = false
//! timestamp_format = "%H:%M"
//! ```
//!
//! ```rust,no_run
//! let cfg = jflyz::core::config::load_config(None)?;
//! println!("Talking to {}", cfg.shell.bot_label);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{JflyzError, Result};
use anyhow::{anyhow, Context};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file (`--config`).
pub const CONFIG_ENV_VAR: &str = "JFLYZ_CONFIG";

const PROJECT_CONFIG_FILENAME: &str = ".jflyz.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
}

/// How the terminal shell presents the conversation.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Label printed in front of the bot's messages.
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
    /// Label printed in front of the user's messages.
    #[serde(default = "default_user_label")]
    pub user_label: String,
    /// Prefix each rendered message with its creation time.
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
    /// chrono `strftime` pattern used for the timestamp prefix.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            bot_label: default_bot_label(),
            user_label: default_user_label(),
            show_timestamps: default_show_timestamps(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_bot_label() -> String {
    "Jflyz".to_string()
}
fn default_user_label() -> String {
    "You".to_string()
}
fn default_show_timestamps() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

/// Loads the effective configuration for this process. `explicit` is the
/// `--config` value, which clap also fills from `JFLYZ_CONFIG`.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    load_config_with(explicit, &current_dir)
}

/// Loads configuration given an optional explicit file and the directory the
/// project search starts from.
pub fn load_config_with(explicit: Option<&str>, start_dir: &Path) -> Result<Config> {
    let config = match explicit.filter(|p| !p.trim().is_empty()) {
        Some(raw_path) => {
            let path = PathBuf::from(shellexpand::tilde(raw_path).into_owned());
            if !path.is_file() {
                return Err(anyhow!(JflyzError::Config(format!(
                    "Config file '{}' is not a readable file.",
                    path.display()
                ))));
            }
            info!("Loading explicit configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config(start_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "JamesFlyzone", "jflyz") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.jflyz.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = ShellConfig::default();
    let pick = |project: String, user: String, default: &str| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        shell: ShellConfig {
            bot_label: pick(
                project.shell.bot_label,
                user.shell.bot_label,
                &defaults.bot_label,
            ),
            user_label: pick(
                project.shell.user_label,
                user.shell.user_label,
                &defaults.user_label,
            ),
            show_timestamps: if project.shell.show_timestamps != defaults.show_timestamps {
                project.shell.show_timestamps
            } else {
                user.shell.show_timestamps
            },
            timestamp_format: pick(
                project.shell.timestamp_format,
                user.shell.timestamp_format,
                &defaults.timestamp_format,
            ),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let shell = &config.shell;
    if shell.bot_label.trim().is_empty() {
        return Err(anyhow!(JflyzError::Config(
            "shell.bot_label must not be empty.".to_string()
        )));
    }
    if shell.user_label.trim().is_empty() {
        return Err(anyhow!(JflyzError::Config(
            "shell.user_label must not be empty.".to_string()
        )));
    }
    if shell.timestamp_format.is_empty()
        || StrftimeItems::new(&shell.timestamp_format).any(|item| matches!(item, Item::Error))
    {
        return Err(anyhow!(JflyzError::Config(format!(
            "Invalid shell.timestamp_format: '{}'.",
            shell.timestamp_format
        ))));
    }
    Ok(())
}
