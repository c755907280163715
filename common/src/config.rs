use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::Result;
use crate::{AspectRatio, BoardPattern};

/// Host-supplied numbers a [`Game`](crate::Game) is built from.
///
/// Fields are plain numbers as a host (or a JSON document) provides them;
/// they are validated when the surface and board are constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub aspect_width: f64,
    pub aspect_height: f64,
    pub height: f64,
    pub cell_ratio: f64,
    pub board_width: Option<f64>,
    pub board_height: Option<f64>,
    pub pattern: BoardPattern,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            aspect_width: f64::from(DEFAULT_ASPECT_WIDTH),
            aspect_height: f64::from(DEFAULT_ASPECT_HEIGHT),
            height: f64::from(DEFAULT_SURFACE_HEIGHT),
            cell_ratio: f64::from(DEFAULT_CELL_RATIO),
            board_width: None,
            board_height: None,
            pattern: BoardPattern::default(),
        }
    }
}

impl SurfaceConfig {
    pub fn new(aspect_width: f64, aspect_height: f64, height: f64, cell_ratio: f64) -> Self {
        Self {
            aspect_width,
            aspect_height,
            height,
            cell_ratio,
            ..Self::default()
        }
    }

    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn aspect_ratio(&self) -> Result<AspectRatio> {
        AspectRatio::new(self.aspect_width, self.aspect_height)
    }
}
