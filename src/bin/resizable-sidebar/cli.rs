//! Command line arguments for the demo window.

use clap::Parser;
use resizable_sidebar::{ConfigError, SidebarConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Demo window with a drag-resizable sidebar")]
pub struct Args {
    /// RON file with `default_width`, `min_width` and `max_width`.
    /// Defaults to `<config dir>/resizable-sidebar/sidebar.ron` when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting sidebar width in pixels.
    #[arg(long)]
    pub default_width: Option<f32>,

    /// Narrowest the sidebar can be dragged to.
    #[arg(long)]
    pub min_width: Option<f32>,

    /// Widest the sidebar can be dragged to.
    #[arg(long)]
    pub max_width: Option<f32>,
}

impl Args {
    /// Loads the config file and applies the command line overrides on top.
    pub fn resolve(&self) -> Result<SidebarConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SidebarConfig::load(path)?,
            None => SidebarConfig::load_default_location()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut SidebarConfig) {
        if let Some(width) = self.default_width {
            config.default_width = width;
        }
        if let Some(width) = self.min_width {
            config.min_width = width;
        }
        if let Some(width) = self.max_width {
            config.max_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_individual_fields() {
        let args = Args::parse_from(["resizable-sidebar", "--max-width", "600", "--min-width", "50"]);
        let mut config = SidebarConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.default_width, 250.0);
        assert_eq!(config.min_width, 50.0);
        assert_eq!(config.max_width, 600.0);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = Args::parse_from(["resizable-sidebar", "--config", "/nonexistent/sidebar.ron"]);
        assert!(matches!(args.resolve(), Err(ConfigError::Io { .. })));
    }
}
