/// Aspect ratio used by the default bootstrap (3:2).
pub const DEFAULT_ASPECT_WIDTH: u32 = 3;
pub const DEFAULT_ASPECT_HEIGHT: u32 = 2;

/// Default surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: u32 = 480;

/// Default number of pixels per cell edge
pub const DEFAULT_CELL_RATIO: u32 = 10;

/// Grey level shown for viewport positions outside the board
pub const OUT_OF_BOUNDS_SHADE: u8 = 100;
