//! Width configuration for the sidebar and loading it from RON files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width the sidebar starts with, in logical pixels.
pub const DEFAULT_WIDTH: f32 = 250.0;

/// Narrowest the sidebar can be dragged to.
pub const DEFAULT_MIN_WIDTH: f32 = 100.0;

/// Widest the sidebar can be dragged to.
pub const DEFAULT_MAX_WIDTH: f32 = 400.0;

const CONFIG_DIR_NAME: &str = "resizable-sidebar";
const CONFIG_FILE_NAME: &str = "sidebar.ron";

/// Errors that can occur when loading a sidebar config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse sidebar config: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
}

/// Configuration that is accepted but resolved before use.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BoundsWarning {
    #[error("min width {min} is larger than max width {max}; using {min} for both")]
    Inverted { min: f32, max: f32 },
    #[error("default width {default} is outside {min}..={max}; clamping")]
    DefaultOutOfRange { default: f32, min: f32, max: f32 },
}

/// Inclusive range the sidebar width is kept in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    min: f32,
    max: f32,
}

impl WidthBounds {
    /// Creates bounds from a min/max pair.
    ///
    /// An inverted pair resolves in favour of `min`: the range collapses to
    /// `min..=min`.
    pub fn new(min: f32, max: f32) -> Self {
        if min > max {
            log::warn!("{}", BoundsWarning::Inverted { min, max });
            return Self { min, max: min };
        }
        Self { min, max }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamps `width` into the range as `max(min, min(width, max))`.
    ///
    /// Unlike [`f32::clamp`] this never panics; a NaN input lands on `max`.
    pub fn clamp(&self, width: f32) -> f32 {
        width.min(self.max).max(self.min)
    }

    pub fn contains(&self, width: f32) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WIDTH,
            max: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Sidebar sizing, as given by the caller or a config file.
///
/// Fields missing from a config file fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub default_width: f32,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl SidebarConfig {
    pub fn bounds(&self) -> WidthBounds {
        WidthBounds::new(self.min_width, self.max_width)
    }

    /// Width before any interaction, clamped so the bounds hold from the start.
    pub fn initial_width(&self) -> f32 {
        self.bounds().clamp(self.default_width)
    }

    /// Reports the first inconsistency that will be resolved at runtime.
    pub fn warning(&self) -> Option<BoundsWarning> {
        if self.min_width > self.max_width {
            return Some(BoundsWarning::Inverted {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if !self.bounds().contains(self.default_width) {
            return Some(BoundsWarning::DefaultOutOfRange {
                default: self.default_width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        None
    }

    /// Rejects widths that cannot be laid out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("default_width", self.default_width),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }

    /// Parses a config from RON source.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source)
    }

    /// Returns the per-user config file path, e.g. `~/.config/resizable-sidebar/sidebar.ron`.
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        Some(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the per-user config file, or the built-in defaults when there is none.
    pub fn load_default_location() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading sidebar config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
