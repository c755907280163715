use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::OUT_OF_BOUNDS_SHADE;
use crate::error::{RenderError, Result};
use crate::validate::integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChannel::Red => f.write_str("Red"),
            ColorChannel::Green => f.write_str("Green"),
            ColorChannel::Blue => f.write_str("Blue"),
        }
    }
}

/// An RGB color whose channels are always within `0..=255`.
///
/// Serializes (serde) as a `[r, g, b]` array; deserializing goes through the
/// same validation as [`Color::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[u8; 3]")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Drawn wherever a viewport looks past the edge of the board.
    pub const OUT_OF_BOUNDS: Color =
        Color::rgb(OUT_OF_BOUNDS_SHADE, OUT_OF_BOUNDS_SHADE, OUT_OF_BOUNDS_SHADE);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from host numbers, validating each channel on its own.
    pub fn new(red: impl Into<f64>, green: impl Into<f64>, blue: impl Into<f64>) -> Result<Self> {
        Ok(Self {
            r: validate_channel(red.into(), ColorChannel::Red)?,
            g: validate_channel(green.into(), ColorChannel::Green)?,
            b: validate_channel(blue.into(), ColorChannel::Blue)?,
        })
    }

    /// Replaces one channel. On error the color is left as it was.
    pub fn update_channel(&mut self, value: impl Into<f64>, channel: ColorChannel) -> Result<()> {
        let value = validate_channel(value.into(), channel)?;
        match channel {
            ColorChannel::Red => self.r = value,
            ColorChannel::Green => self.g = value,
            ColorChannel::Blue => self.b = value,
        }
        Ok(())
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn channel(&self, channel: ColorChannel) -> u8 {
        match channel {
            ColorChannel::Red => self.r,
            ColorChannel::Green => self.g,
            ColorChannel::Blue => self.b,
        }
    }

    /// Fill style string understood by an HTML canvas, e.g. `rgb(255 0 10)`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

fn validate_channel(value: f64, channel: ColorChannel) -> Result<u8> {
    integer(value)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or(RenderError::InvalidChannel { channel, value })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {})", self.r, self.g, self.b)
    }
}

impl TryFrom<[f64; 3]> for Color {
    type Error = RenderError;

    fn try_from([r, g, b]: [f64; 3]) -> Result<Self> {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("expected a color of the form `rgb(R G B)`, got {0:?}")]
    Malformed(String),

    #[error(transparent)]
    Channel(#[from] RenderError),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || ParseColorError::Malformed(s.to_string());

        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let parts = inner
            .split_whitespace()
            .map(|part| part.parse::<f64>().map_err(|_| malformed()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [r, g, b] => Ok(Color::new(*r, *g, *b)?),
            _ => Err(malformed()),
        }
    }
}
