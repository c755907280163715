use log::{debug, info, trace, warn};

use crate::error::{Axis, CellRatioFault, Dimension, RenderError, Result};
use crate::target::{DrawTarget, Mount};
use crate::validate::{integer, positive};
use crate::{AspectRatio, Color};

/// Pixel-sized drawing surface with a validated cell ratio.
///
/// `pixel_width` always equals `aspect_ratio.project_width(pixel_height)`
/// and `cell_ratio` is always one of `valid_cell_ratios`.
#[derive(Debug)]
pub struct Surface<T: DrawTarget> {
    aspect_ratio: AspectRatio,
    pixel_width: u32,
    pixel_height: u32,
    cell_ratio: u32,
    valid_cell_ratios: Vec<u32>,
    target: T,
}

impl<T: DrawTarget> Surface<T> {
    /// Sizes the surface from `height` and the aspect ratio, validates
    /// `cell_ratio`, then asks `mount` for a drawing target. Nothing is
    /// attached when validation fails.
    pub fn new<M>(
        aspect_ratio: AspectRatio,
        height: impl Into<f64>,
        cell_ratio: impl Into<f64>,
        mount: &mut M,
    ) -> Result<Self>
    where
        M: Mount<Target = T>,
    {
        let (pixel_width, pixel_height) = pixel_size(&aspect_ratio, height.into())?;
        let valid_cell_ratios = legal_cell_ratios(pixel_width, &aspect_ratio);
        let cell_ratio = checked_cell_ratio(cell_ratio.into(), &valid_cell_ratios)?;

        let target = mount.create_target(pixel_width, pixel_height)?;
        debug!(
            "Surface sized to {}x{} px, cell ratio {} ({} legal ratios)",
            pixel_width,
            pixel_height,
            cell_ratio,
            valid_cell_ratios.len()
        );

        Ok(Self {
            aspect_ratio,
            pixel_width,
            pixel_height,
            cell_ratio,
            valid_cell_ratios,
            target,
        })
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    pub fn cell_ratio(&self) -> u32 {
        self.cell_ratio
    }

    pub fn valid_cell_ratios(&self) -> &[u32] {
        &self.valid_cell_ratios
    }

    pub fn is_valid_cell_ratio(&self, cell_ratio: u32) -> bool {
        self.valid_cell_ratios.contains(&cell_ratio)
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Re-sizes the surface for a new aspect ratio and height.
    ///
    /// An explicit `cell_ratio` must be legal for the new width. Without one,
    /// the current ratio is kept if still legal, otherwise it snaps to
    /// [`nearest_cell_ratio`]. On error nothing changes.
    pub fn update_canvas_size(
        &mut self,
        aspect_ratio: AspectRatio,
        height: impl Into<f64>,
        cell_ratio: Option<f64>,
    ) -> Result<()> {
        let (pixel_width, pixel_height) = pixel_size(&aspect_ratio, height.into())?;
        let valid_cell_ratios = legal_cell_ratios(pixel_width, &aspect_ratio);

        let cell_ratio = match cell_ratio {
            Some(requested) => checked_cell_ratio(requested, &valid_cell_ratios)?,
            None if valid_cell_ratios.contains(&self.cell_ratio) => self.cell_ratio,
            None => {
                let snapped = nearest_cell_ratio(self.cell_ratio, &valid_cell_ratios).ok_or(
                    RenderError::InvalidCellRatio {
                        value: f64::from(self.cell_ratio),
                        fault: CellRatioFault::NotLegal,
                    },
                )?;
                warn!(
                    "Cell ratio {} is not legal for width {}, snapped to {}",
                    self.cell_ratio, pixel_width, snapped
                );
                snapped
            }
        };

        self.aspect_ratio = aspect_ratio;
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self.valid_cell_ratios = valid_cell_ratios;
        self.cell_ratio = cell_ratio;
        self.target.resize(pixel_width, pixel_height);

        info!(
            "Surface resized to {}x{} px ({}:{}), cell ratio {}",
            pixel_width,
            pixel_height,
            aspect_ratio.width(),
            aspect_ratio.height(),
            cell_ratio
        );
        Ok(())
    }

    /// Fills a `cell_ratio` square at pixel `(i, j)` for every entry of the
    /// `[x][y]` indexed `screen`.
    ///
    /// Every column is checked against the pixel dimensions before the first
    /// fill, so a rejected frame draws nothing.
    pub fn draw(&mut self, screen: &[Vec<Color>]) -> Result<()> {
        if screen.len() != self.pixel_width as usize {
            return Err(RenderError::DimensionMismatch {
                axis: Axis::Width,
                actual: screen.len(),
                expected: self.pixel_width,
            });
        }
        if let Some(column) = screen
            .iter()
            .find(|column| column.len() != self.pixel_height as usize)
        {
            return Err(RenderError::DimensionMismatch {
                axis: Axis::Height,
                actual: column.len(),
                expected: self.pixel_height,
            });
        }

        for (i, column) in screen.iter().enumerate() {
            for (j, color) in column.iter().enumerate() {
                self.target.set_fill_color(&color.serialize());
                self.target
                    .fill_rect(i as u32, j as u32, self.cell_ratio, self.cell_ratio);
            }
        }

        trace!(
            "Drew {}x{} frame at cell ratio {}",
            self.pixel_width, self.pixel_height, self.cell_ratio
        );
        Ok(())
    }
}

fn pixel_size(aspect_ratio: &AspectRatio, height: f64) -> Result<(u32, u32)> {
    let pixel_height = positive(height, Dimension::Height)?;
    let projected = aspect_ratio.project_width(pixel_height);
    let pixel_width = positive(projected, Dimension::Width)?;
    Ok((pixel_width, pixel_height))
}

fn checked_cell_ratio(value: f64, legal: &[u32]) -> Result<u32> {
    let Some(candidate) = integer(value) else {
        return Err(RenderError::InvalidCellRatio {
            value,
            fault: CellRatioFault::NotInteger,
        });
    };

    u32::try_from(candidate)
        .ok()
        .filter(|c| legal.contains(c))
        .ok_or(RenderError::InvalidCellRatio {
            value,
            fault: CellRatioFault::NotLegal,
        })
}

/// Ascending divisors of `pixel_width` below `pixel_width`, stopping at (and
/// including) the divisor that splits the width into `aspect_ratio.width()`
/// cells.
///
/// Candidates start at 1. Zero can never divide a width, so it is never legal.
pub fn legal_cell_ratios(pixel_width: u32, aspect_ratio: &AspectRatio) -> Vec<u32> {
    let mut ratios = Vec::new();
    for i in 1..pixel_width {
        if pixel_width % i == 0 {
            ratios.push(i);
            if pixel_width / i == aspect_ratio.width() {
                break;
            }
        }
    }
    ratios
}

/// First legal ratio above `current`, or the largest legal ratio when none is
/// above it. `None` only for an empty set.
pub fn nearest_cell_ratio(current: u32, legal: &[u32]) -> Option<u32> {
    legal
        .iter()
        .copied()
        .find(|&candidate| candidate > current)
        .or_else(|| legal.last().copied())
}
