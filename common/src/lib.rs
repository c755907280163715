mod aspect_ratio;
mod color;
mod config;
mod constants;
mod error;
mod game;
mod grid;
mod surface;
mod target;
mod validate;

pub mod util;

pub use aspect_ratio::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use surface::*;
pub use target::*;
