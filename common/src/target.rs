use crate::error::{RenderError, Result};

/// A 2D fill-capable drawing context owned by a [`Surface`](crate::Surface).
pub trait DrawTarget {
    /// Sets the color used by subsequent fills, in the form produced by
    /// [`Color::serialize`](crate::Color::serialize).
    fn set_fill_color(&mut self, color: &str);

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);

    fn resize(&mut self, width: u32, height: u32);
}

/// The host container a surface attaches its drawing target to.
pub trait Mount {
    type Target: DrawTarget;

    /// Creates a target of the given pixel size and attaches it to the
    /// container. Fails with [`RenderError::TargetUnavailable`] when no
    /// drawing context can be obtained.
    fn create_target(&mut self, width: u32, height: u32) -> Result<Self::Target>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    SetFillColor(String),
    FillRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    Resize {
        width: u32,
        height: u32,
    },
}

/// Target that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn fill_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawTarget for RecordingTarget {
    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::SetFillColor(color.to_string()));
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.push(DrawCall::Resize { width, height });
    }
}

/// Mount handing out [`RecordingTarget`]s, or refusing to when built with
/// [`RecordingMount::unavailable`].
#[derive(Debug, Clone, Default)]
pub struct RecordingMount {
    unavailable: Option<String>,
    mounted: usize,
}

impl RecordingMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            mounted: 0,
        }
    }

    /// Number of targets attached so far.
    pub fn mounted(&self) -> usize {
        self.mounted
    }
}

impl Mount for RecordingMount {
    type Target = RecordingTarget;

    fn create_target(&mut self, width: u32, height: u32) -> Result<RecordingTarget> {
        if let Some(reason) = &self.unavailable {
            return Err(RenderError::TargetUnavailable(reason.clone()));
        }
        self.mounted += 1;
        Ok(RecordingTarget::new(width, height))
    }
}
