// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast engine configuration, including loading and saving
//! tuning values to a `toasts.toml` file.
//!
//! # Configuration Sections
//!
//! - `[dismissal]` - Auto-dismiss countdown
//! - `[gesture]` - Swipe-to-dismiss tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOAST_STACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Keep toasts around a little longer
//! config.dismissal.delay_secs = Some(5);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::toast::{DismissDelay, FlingThreshold, VelocityMultiplier};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastStack";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_STACK_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Auto-dismiss settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DismissalConfig {
    /// Seconds a collapsed toast stays on screen before it is removed.
    #[serde(
        default = "default_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub delay_secs: Option<u32>,
}

impl Default for DismissalConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
        }
    }
}

impl DismissalConfig {
    /// Returns the validated auto-dismiss delay.
    #[must_use]
    pub fn delay(&self) -> DismissDelay {
        self.delay_secs.map(DismissDelay::new).unwrap_or_default()
    }
}

/// Swipe-to-dismiss settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Upward projected distance required to dismiss a toast.
    #[serde(
        default = "default_fling_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub fling_threshold: Option<f32>,

    /// Factor applied to release velocity when projecting a fling.
    #[serde(
        default = "default_velocity_multiplier",
        skip_serializing_if = "Option::is_none"
    )]
    pub velocity_multiplier: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fling_threshold: default_fling_threshold(),
            velocity_multiplier: default_velocity_multiplier(),
        }
    }
}

impl GestureConfig {
    /// Returns the validated fling threshold.
    #[must_use]
    pub fn threshold(&self) -> FlingThreshold {
        self.fling_threshold
            .map(FlingThreshold::new)
            .unwrap_or_default()
    }

    /// Returns the validated velocity multiplier.
    #[must_use]
    pub fn multiplier(&self) -> VelocityMultiplier {
        self.velocity_multiplier
            .map(VelocityMultiplier::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast engine configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Auto-dismiss settings.
    #[serde(default)]
    pub dismissal: DismissalConfig,

    /// Swipe-to-dismiss settings.
    #[serde(default)]
    pub gesture: GestureConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_delay_secs() -> Option<u32> {
    Some(DEFAULT_DISMISS_DELAY_SECS)
}

fn default_fling_threshold() -> Option<f32> {
    Some(DEFAULT_FLING_THRESHOLD)
}

fn default_velocity_multiplier() -> Option<f32> {
    Some(DEFAULT_VELOCITY_MULTIPLIER)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// Priority: explicit override, then `TOAST_STACK_CONFIG_DIR`, then the
/// platform config directory with the app name appended.
fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default toast config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
