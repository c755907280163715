use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::{BoardPattern, Color, SurfaceConfig};
use std::fs;
use std::path::PathBuf;

use crate::render::types::{CharDimensions, PreviewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternKind {
    Uniform,
    Checkerboard,
    Noise,
}

/// Render a cell grid onto a fixed-aspect surface and preview it in the terminal.
///
/// Values come from flags, then `GRIDCANVAS_*` environment variables (a
/// `.env` file is loaded first), then the `--config` JSON file, then the
/// built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "gridcanvas-terminal", version)]
pub struct Args {
    /// JSON surface configuration
    #[arg(long, env = "GRIDCANVAS_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GRIDCANVAS_ASPECT_WIDTH")]
    pub aspect_width: Option<f64>,

    #[arg(long, env = "GRIDCANVAS_ASPECT_HEIGHT")]
    pub aspect_height: Option<f64>,

    /// Surface height in pixels
    #[arg(long, env = "GRIDCANVAS_HEIGHT")]
    pub height: Option<f64>,

    /// Pixels per cell edge
    #[arg(long, env = "GRIDCANVAS_CELL_RATIO")]
    pub cell_ratio: Option<f64>,

    #[arg(long, env = "GRIDCANVAS_BOARD_WIDTH")]
    pub board_width: Option<f64>,

    #[arg(long, env = "GRIDCANVAS_BOARD_HEIGHT")]
    pub board_height: Option<f64>,

    #[arg(long, value_enum, env = "GRIDCANVAS_PATTERN")]
    pub pattern: Option<PatternKind>,

    /// Seed for the noise pattern
    #[arg(long, env = "GRIDCANVAS_SEED", default_value_t = 1)]
    pub seed: u64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub x_offset: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub y_offset: i64,

    /// Terminal columns per previewed cell
    #[arg(long, default_value_t = 2)]
    pub chars_per_cell: usize,
}

impl Args {
    pub fn resolve(&self) -> Result<SurfaceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                SurfaceConfig::from_json(&json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => SurfaceConfig::default(),
        };

        if let Some(v) = self.aspect_width {
            config.aspect_width = v;
        }
        if let Some(v) = self.aspect_height {
            config.aspect_height = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.cell_ratio {
            config.cell_ratio = v;
        }
        if self.board_width.is_some() {
            config.board_width = self.board_width;
        }
        if self.board_height.is_some() {
            config.board_height = self.board_height;
        }
        if let Some(kind) = self.pattern {
            config.pattern = match kind {
                PatternKind::Uniform => BoardPattern::default(),
                PatternKind::Checkerboard => BoardPattern::Checkerboard {
                    even: Color::BLACK,
                    odd: Color::WHITE,
                },
                PatternKind::Noise => BoardPattern::Noise { seed: self.seed },
            };
        }

        Ok(config)
    }

    pub fn preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            chars_per_cell: CharDimensions::new(self.chars_per_cell.max(1), 1),
        }
    }
}
