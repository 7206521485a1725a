//! `tiler` general configuration

mod checks;
mod default;

pub use checks::ConfigError;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use xdg::BaseDirectories;

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// log_level = "tiler_core=debug"
/// tile_layout_gap = 8
/// tile_layout_master_ratio = 0.6
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// `tracing-subscriber` filter directives, e.g. `info` or `tiler_core=trace`.
    pub log_level: String,
    /// Margin kept free around the whole screen.
    pub screen_gap: i32,
    pub tile_layout_gap: i32,
    pub tile_layout_master_ratio: f32,
    pub tile_layout_master_count: usize,
    /// Degrees, a multiple of 90.
    pub tile_layout_rotation: i32,
}

#[must_use]
pub fn load() -> Config {
    load_from_file(None)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// Load the config at `path`, or from the XDG config directory when no path is given.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if the file cannot be read or is not valid toml.
/// Function can also error from inability to save config.toml (if it is the first time running
/// `tiler`).
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        tracing::debug!("Loading config file '{}'", path.display());
        let contents = fs::read_to_string(path)?;
        return Ok(toml::from_str(&contents)?);
    }

    let base = BaseDirectories::with_prefix("tiler")?;
    let config_filename = base.place_config_file("config.toml")?;
    if config_filename.exists() {
        tracing::debug!("Config file '{}' found.", config_filename.display());
        let contents = fs::read_to_string(&config_filename)?;
        Ok(toml::from_str(&contents)?)
    } else {
        tracing::debug!("Config file not found. Writing default config file.");
        let config = Config::default();
        write_to_file(&config_filename, &config)?;
        Ok(config)
    }
}

fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string(config)?;
    let mut file = File::create(path)?;
    file.write_all(toml.as_bytes())?;
    Ok(())
}

impl tiler_core::Config for Config {
    fn tile_layout_gap(&self) -> i32 {
        self.tile_layout_gap
    }

    fn tile_layout_master_ratio(&self) -> f32 {
        self.tile_layout_master_ratio
    }

    fn tile_layout_master_count(&self) -> usize {
        self.tile_layout_master_count
    }

    fn tile_layout_rotation(&self) -> i32 {
        self.tile_layout_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_fields_take_their_defaults() {
        let file = config_file("tile_layout_gap = 12\ntile_layout_rotation = 90\n");
        let config = load_from_file(Some(file.path())).unwrap();
        assert_eq!(config.tile_layout_gap, 12);
        assert_eq!(config.tile_layout_rotation, 90);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tile_layout_master_count, 1);
    }

    #[test]
    fn malformed_files_are_errors() {
        let file = config_file("tile_layout_gap = \"wide\"\n");
        assert!(load_from_file(Some(file.path())).is_err());
        assert!(load_from_file(Some(Path::new("/nonexistent/tiler.toml"))).is_err());
    }

    #[test]
    fn written_defaults_load_back() {
        let file = NamedTempFile::new().unwrap();
        write_to_file(file.path(), &Config::default()).unwrap();
        let config = load_from_file(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn layouts_are_built_from_the_config() {
        let config = Config {
            tile_layout_master_ratio: 0.7,
            tile_layout_master_count: 2,
            ..Config::default()
        };
        let layout = tiler_core::TileLayout::new(&config);
        assert_eq!(layout.master_count(), 2);
        assert!((layout.master_ratio() - 0.7).abs() < f32::EPSILON);
    }
}
