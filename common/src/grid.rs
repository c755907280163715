use serde::{Deserialize, Serialize};

use crate::error::{Dimension, RenderError, Result};
use crate::target::DrawTarget;
use crate::util::PseudoRandom;
use crate::validate::positive;
use crate::{Color, Surface};

/// Colors indexed `[x][y]`, as consumed by [`Surface::draw`].
pub type ColorMatrix = Vec<Vec<Color>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
}

/// How a new board is colored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardPattern {
    Uniform { color: Color },
    /// `even` where `x + y` is even, `odd` elsewhere
    Checkerboard { even: Color, odd: Color },
    /// Black and white cells drawn from a seeded generator
    Noise { seed: u64 },
}

impl Default for BoardPattern {
    fn default() -> Self {
        BoardPattern::Uniform {
            color: Color::WHITE,
        }
    }
}

/// The logical board: a rectangular array of cells indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: impl Into<f64>, height: impl Into<f64>, pattern: &BoardPattern) -> Result<Self> {
        let width = positive(width.into(), Dimension::BoardWidth)?;
        let height = positive(height.into(), Dimension::BoardHeight)?;

        let mut rng = PseudoRandom::new(match pattern {
            BoardPattern::Noise { seed } => *seed,
            _ => 0,
        });

        let cells = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| {
                        let color = match pattern {
                            BoardPattern::Uniform { color } => *color,
                            BoardPattern::Checkerboard { even, odd } => {
                                if (x + y) % 2 == 0 { *even } else { *odd }
                            }
                            BoardPattern::Noise { .. } => {
                                if rng.next_bool() { Color::BLACK } else { Color::WHITE }
                            }
                        };
                        Cell { color }
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Board sized to the surface's pixel dimensions unless explicit board
    /// dimensions are given.
    pub fn for_surface<T: DrawTarget>(
        surface: &Surface<T>,
        width: Option<f64>,
        height: Option<f64>,
        pattern: &BoardPattern,
    ) -> Result<Self> {
        Self::new(
            width.unwrap_or_else(|| f64::from(surface.pixel_width())),
            height.unwrap_or_else(|| f64::from(surface.pixel_height())),
            pattern,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cells.get(x as usize)?.get(y as usize)
    }

    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width {
            return Err(RenderError::InvalidDimension {
                dimension: Dimension::CellX,
                value: f64::from(x),
            });
        }
        if y >= self.height {
            return Err(RenderError::InvalidDimension {
                dimension: Dimension::CellY,
                value: f64::from(y),
            });
        }
        self.cells[x as usize][y as usize].color = color;
        Ok(())
    }

    fn color_at(&self, x: Option<i64>, y: Option<i64>) -> Option<Color> {
        let x = usize::try_from(x?).ok()?;
        let y = usize::try_from(y?).ok()?;
        self.cells.get(x)?.get(y).map(|cell| cell.color)
    }

    /// Viewport of the board's own size whose top-left corner sits on
    /// logical cell `(x_offset, y_offset)`. Entry `[i][j]` shows cell
    /// `(x_offset + i, y_offset + j)`, or [`Color::OUT_OF_BOUNDS`] past the
    /// edge. Coordinates past the `i64` range are out of bounds.
    pub fn render(&self, x_offset: i64, y_offset: i64) -> ColorMatrix {
        (0..i64::from(self.width))
            .map(|i| {
                (0..i64::from(self.height))
                    .map(|j| {
                        self.color_at(x_offset.checked_add(i), y_offset.checked_add(j))
                            .unwrap_or(Color::OUT_OF_BOUNDS)
                    })
                    .collect()
            })
            .collect()
    }
}
