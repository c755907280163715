use std::fmt;
use thiserror::Error;

use crate::ColorChannel;

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// The numeric input a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    AspectWidth,
    AspectHeight,
    Height,
    Width,
    BoardWidth,
    BoardHeight,
    CellX,
    CellY,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::AspectWidth => "aspect ratio width",
            Dimension::AspectHeight => "aspect ratio height",
            Dimension::Height => "height",
            Dimension::Width => "width",
            Dimension::BoardWidth => "board width",
            Dimension::BoardHeight => "board height",
            Dimension::CellX => "cell x",
            Dimension::CellY => "cell y",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRatioFault {
    NotInteger,
    NotLegal,
}

impl fmt::Display for CellRatioFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRatioFault::NotInteger => f.write_str("must be an integer"),
            CellRatioFault::NotLegal => f.write_str("is outside valid cell ratios"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid {dimension}: {value}")]
    InvalidDimension { dimension: Dimension, value: f64 },

    #[error("{channel} channel must be an integer between 0 and 255 (inclusive), got {value}")]
    InvalidChannel { channel: ColorChannel, value: f64 },

    #[error("cell ratio {value} {fault}")]
    InvalidCellRatio { value: f64, fault: CellRatioFault },

    #[error("screen {axis} ({actual}) does not match canvas {axis} ({expected})")]
    DimensionMismatch {
        axis: Axis,
        actual: usize,
        expected: u32,
    },

    #[error("drawing target unavailable: {0}")]
    TargetUnavailable(String),
}
