use common::{DrawTarget, Mount, RenderError};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

/// Host container a `<canvas>` is appended to.
pub struct CanvasMount {
    container: Element,
}

impl CanvasMount {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl Mount for CanvasMount {
    type Target = CanvasTarget;

    fn create_target(&mut self, width: u32, height: u32) -> common::Result<CanvasTarget> {
        let unavailable = |reason: &str| RenderError::TargetUnavailable(reason.to_string());

        let document = self
            .container
            .owner_document()
            .ok_or_else(|| unavailable("container is not attached to a document"))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|_| unavailable("failed to create canvas element"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| unavailable("created element is not a canvas"))?;
        canvas.set_width(width);
        canvas.set_height(height);

        self.container
            .append_child(&canvas)
            .map_err(|_| unavailable("failed to attach canvas to container"))?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| unavailable("failed to get 2d context"))?
            .ok_or_else(|| unavailable("2d context is null"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| unavailable("failed to cast to 2d context"))?;

        Ok(CanvasTarget { canvas, context })
    }
}

/// Drawing target backed by an HTML canvas 2d context.
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl std::fmt::Debug for CanvasTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTarget")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .finish()
    }
}

impl DrawTarget for CanvasTarget {
    fn set_fill_color(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.context
            .fill_rect(f64::from(x), f64::from(y), f64::from(width), f64::from(height));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
