mod canvas;

pub use canvas::*;

use common::{AspectRatio, Game, SurfaceConfig};
use log::{error, info};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use web_sys::Element;

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    });
}

/// Writes the error into the container and hands it back to JS.
fn report(container: &Element, message: &str) -> JsValue {
    error!("{}", message);
    container.set_text_content(Some(&format!("Error caught: {}", message)));
    JsValue::from_str(message)
}

/// A board drawn onto a canvas inside a host container.
#[wasm_bindgen]
pub struct CanvasGame {
    container: Element,
    game: Game<CanvasTarget>,
}

#[wasm_bindgen]
impl CanvasGame {
    pub fn draw(&mut self, x_offset: i32, y_offset: i32) -> Result<(), JsValue> {
        self.game
            .draw(i64::from(x_offset), i64::from(y_offset))
            .map_err(|e| report(&self.container, &e.to_string()))
    }

    /// Omitting `cell_ratio` keeps the current one, snapped if it is no
    /// longer legal.
    pub fn resize(
        &mut self,
        aspect_width: f64,
        aspect_height: f64,
        height: f64,
        cell_ratio: Option<f64>,
    ) -> Result<(), JsValue> {
        AspectRatio::new(aspect_width, aspect_height)
            .and_then(|ratio| self.game.resize(ratio, height, cell_ratio))
            .map_err(|e| report(&self.container, &e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_width(&self) -> u32 {
        self.game.surface().pixel_width()
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_height(&self) -> u32 {
        self.game.surface().pixel_height()
    }

    #[wasm_bindgen(getter)]
    pub fn cell_ratio(&self) -> u32 {
        self.game.surface().cell_ratio()
    }

    pub fn valid_cell_ratios(&self) -> Vec<u32> {
        self.game.surface().valid_cell_ratios().to_vec()
    }
}

/// Mounts a canvas in `container` and draws the board at the origin.
#[wasm_bindgen]
pub fn init(
    container: Element,
    aspect_width: f64,
    aspect_height: f64,
    height: f64,
    cell_ratio: f64,
) -> Result<CanvasGame, JsValue> {
    start(
        container,
        SurfaceConfig::new(aspect_width, aspect_height, height, cell_ratio),
    )
}

/// Like [`init`], reading a JSON `SurfaceConfig`.
#[wasm_bindgen]
pub fn init_with_config(container: Element, config_json: &str) -> Result<CanvasGame, JsValue> {
    setup();
    let config = SurfaceConfig::from_json(config_json)
        .map_err(|e| report(&container, &format!("Failed to parse config: {}", e)))?;
    start(container, config)
}

fn start(container: Element, config: SurfaceConfig) -> Result<CanvasGame, JsValue> {
    setup();
    let mut mount = CanvasMount::new(container.clone());
    let mut game = Game::from_config(&mut mount, &config)
        .map_err(|e| report(&container, &e.to_string()))?;
    game.draw(0, 0)
        .map_err(|e| report(&container, &e.to_string()))?;

    info!(
        "Mounted {}x{} canvas at cell ratio {}",
        game.surface().pixel_width(),
        game.surface().pixel_height(),
        game.surface().cell_ratio()
    );
    Ok(CanvasGame { container, game })
}
