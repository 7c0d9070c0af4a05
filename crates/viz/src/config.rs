//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <PATH>` on the command line
//! 2. `$PI_VIZ_CONFIG` environment variable
//! 3. `<config dir>/pi-viz/config.toml`
//! 4. Built-in defaults (everything is optional)
//!
//! ```toml
//! [display]
//! initial_terms = 20
//! marker = "braille"
//! show_inspector = true
//! inspector_width = 28
//!
//! [log]
//! filter = "warn"
//! ```

use std::path::{Path, PathBuf};

use leibniz_series::TermCount;
use ratatui::symbols::Marker;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, VizError};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PI_VIZ_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

/// Chart and pane settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Term count the slider starts at. Validated into 1..=50.
    pub initial_terms: Option<usize>,
    /// Glyph used to draw the chart lines.
    pub marker: MarkerKind,
    /// Show the value inspector next to the chart.
    pub show_inspector: bool,
    /// Percentage of the chart row given to the inspector, clamped to 10..=60.
    pub inspector_width: Option<u16>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

/// Chart line glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    #[default]
    Braille,
    Dot,
    Block,
    Bar,
    HalfBlock,
}

impl MarkerKind {
    pub fn marker(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::Dot => Marker::Dot,
            Self::Block => Marker::Block,
            Self::Bar => Marker::Bar,
            Self::HalfBlock => Marker::HalfBlock,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            initial_terms: None,
            marker: MarkerKind::default(),
            show_inspector: true,
            inspector_width: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".into(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| e.to_string())
    }

    /// Load config from `explicit`, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (Some(p.to_path_buf()), true),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) => (Some(PathBuf::from(p)), true),
                None => (default_config_path(), false),
            },
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !required && !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| VizError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content).map_err(|message| VizError::Config {
            path: path.clone(),
            message,
        })?;
        config.validate().map_err(|e| VizError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.initial_terms().map(|_| ())
    }

    /// The configured starting term count, or the default.
    pub fn initial_terms(&self) -> Result<TermCount> {
        match self.display.initial_terms {
            Some(n) => Ok(TermCount::new(n)?),
            None => Ok(TermCount::default()),
        }
    }
}

/// `<config dir>/pi-viz/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pi-viz").join("config.toml"))
}
