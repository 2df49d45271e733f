// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for the demos.
//!
//! ```toml
//! [layout]
//! center = { x = 300.0, y = 30.0 }
//! diameter = 30.0
//! level_height = 50.0
//! child_separation = 10.0
//!
//! [theme]
//! node_fill = { r = 173, g = 216, b = 230, a = 255 }
//! ```
//!
//! Missing tables and fields fall back to their defaults.

use std::path::{Path, PathBuf};

use grove_layout::{LayoutParams, ParamError, Theme};
use serde::Deserialize;

/// Layout parameters and theme for a demo run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Geometry.
    pub layout: LayoutParams,
    /// Colors.
    pub theme: Theme,
}

/// Failure to load a [`DemoConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    /// A layout value is out of range.
    #[error("invalid layout")]
    Invalid(#[from] ParamError),
}

impl DemoConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&text)
    }
}
