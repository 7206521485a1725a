use super::Config;
use thiserror::Error;
use tiler_core::layouts::tile_layout::{MAX_MASTER_COUNT, MAX_MASTER_RATIO, MIN_MASTER_RATIO};
use tracing_subscriber::EnvFilter;

/// A config value a layout would refuse and replace with something else.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must not be negative, got {value}")]
    NegativeGap { name: &'static str, value: i32 },
    #[error("tile_layout_master_ratio must be within 0.2..=0.8, got {0}")]
    MasterRatioOutOfRange(f32),
    #[error("tile_layout_master_count must be at most 10, got {0}")]
    MasterCountTooLarge(usize),
    #[error("tile_layout_rotation must be a multiple of 90, got {0}")]
    InvalidRotation(i32),
    #[error("log_level is invalid: {0}")]
    InvalidLogLevel(String),
}

impl Config {
    /// Run every check, returning what failed.
    #[must_use]
    pub fn check(&self, verbose: bool) -> Vec<ConfigError> {
        [
            self.check_gaps(verbose),
            self.check_master_ratio(verbose),
            self.check_master_count(verbose),
            self.check_rotation(verbose),
            self.check_log_level(verbose),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// # Errors
    ///
    /// When either gap is negative.
    pub fn check_gaps(&self, verbose: bool) -> Result<(), ConfigError> {
        if verbose {
            println!("Checking gaps.");
        }
        for (name, value) in [
            ("screen_gap", self.screen_gap),
            ("tile_layout_gap", self.tile_layout_gap),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeGap { name, value });
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// When the ratio lies outside the range the tile layout allows.
    pub fn check_master_ratio(&self, verbose: bool) -> Result<(), ConfigError> {
        if verbose {
            println!("Checking tile_layout_master_ratio.");
        }
        let ratio = self.tile_layout_master_ratio;
        if (MIN_MASTER_RATIO..=MAX_MASTER_RATIO).contains(&ratio) {
            Ok(())
        } else {
            Err(ConfigError::MasterRatioOutOfRange(ratio))
        }
    }

    /// # Errors
    ///
    /// When more master windows are asked for than the tile layout supports.
    pub fn check_master_count(&self, verbose: bool) -> Result<(), ConfigError> {
        if verbose {
            println!("Checking tile_layout_master_count.");
        }
        if self.tile_layout_master_count > MAX_MASTER_COUNT {
            return Err(ConfigError::MasterCountTooLarge(
                self.tile_layout_master_count,
            ));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// When the rotation is not a right angle.
    pub fn check_rotation(&self, verbose: bool) -> Result<(), ConfigError> {
        if verbose {
            println!("Checking tile_layout_rotation.");
        }
        if self.tile_layout_rotation % 90 != 0 {
            return Err(ConfigError::InvalidRotation(self.tile_layout_rotation));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// When `log_level` is not a valid filter directive.
    pub fn check_log_level(&self, verbose: bool) -> Result<(), ConfigError> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => Ok(()),
            Err(err) => Err(ConfigError::InvalidLogLevel(err.to_string())),
        }
    }
}
