#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn test_init_mounts_sized_canvas() {
    let app = container();
    let game = client::init(app.clone(), 3.0, 2.0, 48.0, 4.0).unwrap();

    assert_eq!(game.pixel_width(), 72);
    assert_eq!(game.pixel_height(), 48);

    let canvas = app
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    assert_eq!(canvas.width(), 72);
    assert_eq!(canvas.height(), 48);
}

#[wasm_bindgen_test]
fn test_init_reports_error_in_container() {
    let app = container();
    assert!(client::init(app.clone(), 3.0, 2.0, 48.0, 7.0).is_err());
    assert_eq!(
        app.text_content().unwrap(),
        "Error caught: cell ratio 7 is outside valid cell ratios"
    );
}

#[wasm_bindgen_test]
fn test_resize_snaps_cell_ratio() {
    let app = container();
    let mut game = client::init(app, 3.0, 2.0, 480.0, 9.0).unwrap();
    game.resize(3.0, 2.0, 320.0, None).unwrap();
    assert_eq!(game.cell_ratio(), 10);
    game.draw(0, 0).unwrap();
}
