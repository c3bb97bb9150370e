use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::camera::ZoomSettings;
use crate::paint;
use crate::rule_set::RuleSet;

/// Conway's Game of Life on an unbounded plane, in the terminal.
///
/// Drag with the left mouse button to pan, scroll to zoom, space to pause. While paused, click to
/// randomize the region around the pointer.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Life rule, as B3/S23, b3s23 or 3/23.
    #[arg(long, value_name = "RULE", default_value = "B3/S23")]
    pub rule: RuleSet,

    /// Milliseconds to wait between generations. 0 advances every frame.
    #[arg(long = "delay-ms", value_name = "MILLISECONDS", default_value_t = 100)]
    pub delay_ms: u64,

    /// How many milliseconds each speed up or slow down changes the delay by.
    #[arg(long = "delay-step-ms", value_name = "MILLISECONDS", default_value_t = 20)]
    pub delay_step_ms: u64,

    /// Starting side length of a cell, in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 10.0)]
    pub zoom: f64,

    /// Zoom multiplier per step when zooming in.
    #[arg(long = "zoom-in", value_name = "FACTOR", default_value_t = 1.1)]
    pub zoom_in: f64,

    /// Zoom multiplier per step when zooming out.
    #[arg(long = "zoom-out", value_name = "FACTOR", default_value_t = 0.9)]
    pub zoom_out: f64,

    #[arg(long = "min-zoom", value_name = "PIXELS", default_value_t = 1.0)]
    pub min_zoom: f64,

    #[arg(long = "max-zoom", value_name = "PIXELS", default_value_t = 50.0)]
    pub max_zoom: f64,

    /// Side length of the square randomized by a click, in cells.
    #[arg(long = "paint-size", value_name = "CELLS", default_value_t = paint::DEFAULT_SIDE)]
    pub paint_size: u32,

    /// Probability of each painted cell being alive.
    #[arg(long = "paint-density", value_name = "PROBABILITY", default_value_t = paint::DEFAULT_DENSITY)]
    pub paint_density: f64,

    /// Seed for painting. Random when absent.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start paused.
    #[arg(long)]
    pub paused: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["sparselife"])
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Starting zoom must be a positive number of pixels, got {got}")]
    Zoom { got: f64 },

    #[error("Zoom bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    ZoomBounds { min: f64, max: f64 },

    #[error("Zooming in must enlarge cells, got factor {got}")]
    ZoomInFactor { got: f64 },

    #[error("Zooming out must shrink cells, got factor {got}")]
    ZoomOutFactor { got: f64 },

    #[error("Paint density must be within [0, 1], got {got}")]
    Density { got: f64 },

    #[error("Paint size must be at least 1")]
    EmptyPaint,
}

impl Config {
    /// Reject settings the simulation can't sensibly run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom > 0.0 && self.zoom.is_finite()) {
            return Err(ConfigError::Zoom { got: self.zoom });
        }

        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigError::ZoomBounds { min, max });
        }

        if !(self.zoom_in > 1.0 && self.zoom_in.is_finite()) {
            return Err(ConfigError::ZoomInFactor { got: self.zoom_in });
        }

        if !(self.zoom_out > 0.0 && self.zoom_out < 1.0) {
            return Err(ConfigError::ZoomOutFactor { got: self.zoom_out });
        }

        if !(0.0..=1.0).contains(&self.paint_density) {
            return Err(ConfigError::Density {
                got: self.paint_density,
            });
        }

        if self.paint_size == 0 {
            return Err(ConfigError::EmptyPaint);
        }

        Ok(())
    }

    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            zoom_in: self.zoom_in,
            zoom_out: self.zoom_out,
            min: self.min_zoom,
            max: self.max_zoom,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn delay_step(&self) -> Duration {
        Duration::from_millis(self.delay_step_ms)
    }
}
