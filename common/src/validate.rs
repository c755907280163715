use crate::error::{Dimension, RenderError, Result};

/// Host numbers arrive as `f64`; this accepts only finite values without a
/// fractional part.
pub(crate) fn integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

pub(crate) fn positive(value: f64, dimension: Dimension) -> Result<u32> {
    integer(value)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
        .ok_or(RenderError::InvalidDimension { dimension, value })
}
