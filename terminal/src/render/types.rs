/// Terminal characters used to show one sampled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }
}

impl Default for CharDimensions {
    // Terminal cells are roughly twice as tall as wide
    fn default() -> Self {
        Self::new(2, 1)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PreviewConfig {
    pub chars_per_cell: CharDimensions,
}
