use log::debug;

use crate::error::Result;
use crate::target::{DrawTarget, Mount};
use crate::{AspectRatio, BoardPattern, Grid, Surface, SurfaceConfig};

/// A surface and the board drawn onto it.
#[derive(Debug)]
pub struct Game<T: DrawTarget> {
    surface: Surface<T>,
    grid: Grid,
    // `None` means the axis follows the surface's pixel size
    board_width: Option<f64>,
    board_height: Option<f64>,
    pattern: BoardPattern,
}

impl<T: DrawTarget> Game<T> {
    /// Surface from the four bootstrap numbers, with a default board the
    /// size of the surface.
    pub fn new<M>(
        mount: &mut M,
        aspect_ratio: AspectRatio,
        height: impl Into<f64>,
        cell_ratio: impl Into<f64>,
    ) -> Result<Self>
    where
        M: Mount<Target = T>,
    {
        let surface = Surface::new(aspect_ratio, height, cell_ratio, mount)?;
        let pattern = BoardPattern::default();
        let grid = Grid::for_surface(&surface, None, None, &pattern)?;
        Ok(Self {
            surface,
            grid,
            board_width: None,
            board_height: None,
            pattern,
        })
    }

    pub fn from_config<M>(mount: &mut M, config: &SurfaceConfig) -> Result<Self>
    where
        M: Mount<Target = T>,
    {
        let surface = Surface::new(config.aspect_ratio()?, config.height, config.cell_ratio, mount)?;
        let grid = Grid::for_surface(
            &surface,
            config.board_width,
            config.board_height,
            &config.pattern,
        )?;
        debug!("Board is {}x{} cells", grid.width(), grid.height());
        Ok(Self {
            surface,
            grid,
            board_width: config.board_width,
            board_height: config.board_height,
            pattern: config.pattern.clone(),
        })
    }

    pub fn surface(&self) -> &Surface<T> {
        &self.surface
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Renders the board viewport at `(x_offset, y_offset)` onto the surface.
    pub fn draw(&mut self, x_offset: i64, y_offset: i64) -> Result<()> {
        let screen = self.grid.render(x_offset, y_offset);
        self.surface.draw(&screen)
    }

    /// Resizes the surface. A board axis that was sized from the surface is
    /// rebuilt to the new pixel size with the original pattern, dropping
    /// edits; explicit board dimensions are kept as they are.
    pub fn resize(
        &mut self,
        aspect_ratio: AspectRatio,
        height: impl Into<f64>,
        cell_ratio: Option<f64>,
    ) -> Result<()> {
        self.surface.update_canvas_size(aspect_ratio, height, cell_ratio)?;
        if self.board_width.is_none() || self.board_height.is_none() {
            self.grid = Grid::for_surface(
                &self.surface,
                self.board_width,
                self.board_height,
                &self.pattern,
            )?;
            debug!("Board rebuilt at {}x{} cells", self.grid.width(), self.grid.height());
        }
        Ok(())
    }
}
