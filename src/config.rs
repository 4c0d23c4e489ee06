// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Settings are read once at start-up from the file named by the
//! `ARCHITAI_CONFIG` environment variable. Every field has a default, so
//! a config file only needs the keys it changes.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "ARCHITAI_CONFIG";

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Used as the prefix of downloaded sketch file names.
    pub app_name: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Distance between grid lines, in pixels.
    pub grid_spacing: u32,
    /// Drafts with a side shorter than this are discarded.
    pub min_room_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            app_name: "architai".to_string(),
            canvas_width: 600,
            canvas_height: 400,
            grid_spacing: 20,
            min_room_size: 10.0,
        }
    }
}

impl EditorConfig {
    /// Reject values the renderer and editor cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            bail!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_width,
                self.canvas_height
            );
        }
        if self.canvas_width > MAX_CANVAS_SIZE || self.canvas_height > MAX_CANVAS_SIZE {
            bail!(
                "canvas size {}x{} exceeds the {} px limit",
                self.canvas_width,
                self.canvas_height,
                MAX_CANVAS_SIZE
            );
        }
        if self.grid_spacing == 0 {
            bail!("grid spacing must be non-zero");
        }
        if !(self.min_room_size > 0.0 && self.min_room_size.is_finite()) {
            bail!("minimum room size must be positive, got {}", self.min_room_size);
        }
        if self.app_name.trim().is_empty() {
            bail!("app name must not be empty");
        }
        Ok(())
    }

    /// Load and validate a config file (YAML or JSON, chosen by extension).
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = crate::io::serialization::import(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the start-up config: the file named by `ARCHITAI_CONFIG`, or
    /// defaults when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };

        let path = std::path::PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }
}
