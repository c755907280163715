use crate::error::{Dimension, Result};
use crate::validate::positive;

/// Target width:height proportion of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Both sides must be strictly positive integers.
    pub fn new(width: impl Into<f64>, height: impl Into<f64>) -> Result<Self> {
        let width = positive(width.into(), Dimension::AspectWidth)?;
        let height = positive(height.into(), Dimension::AspectHeight)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel width matching `height`. Not necessarily integral; callers that
    /// need whole pixels must check.
    pub fn project_width(&self, height: u32) -> f64 {
        f64::from(height) * f64::from(self.width) / f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;

    #[test]
    fn test_project_width_round_trips_at_defining_height() {
        for (w, h) in [(3, 2), (16, 9), (1, 1), (4, 3), (21, 9), (7, 13)] {
            let ratio = AspectRatio::new(w, h).unwrap();
            assert_eq!(ratio.project_width(h), f64::from(w));
        }
    }

    #[test]
    fn test_project_width_may_be_fractional() {
        let ratio = AspectRatio::new(3, 2).unwrap();
        assert_eq!(ratio.project_width(480), 720.0);
        assert_eq!(ratio.project_width(5), 7.5);
    }

    #[test]
    fn test_rejects_non_integer_sides() {
        let err = AspectRatio::new(3.5, 2).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidDimension {
                dimension: Dimension::AspectWidth,
                value: 3.5
            }
        );

        let err = AspectRatio::new(3, 2.25).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimension {
                dimension: Dimension::AspectHeight,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_sides() {
        assert!(AspectRatio::new(0, 2).is_err());
        assert!(AspectRatio::new(3, -2).is_err());
    }
}
