pub mod buffer;
pub mod preview;
pub mod types;
