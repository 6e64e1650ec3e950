// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Force-directed layout settings
    pub layout: LayoutSettings,
    /// Default renderer (tui, dot, json)
    pub renderer: String,
}

/// Settings for the force-directed layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Number of force iterations to run
    pub iterations: usize,
    /// Frame width in layout units
    pub width: f64,
    /// Frame height in layout units
    pub height: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            iterations: 250,
            width: 100.0,
            height: 100.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            renderer: "tui".to_string(),
        }
    }
}

/// Load configuration from a TOML file, or use defaults when none is given
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read {}", p.display()))?;
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", p.display()))
        }
        None => Ok(Config::default()),
    }
}
