#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use doodle_pad::{Brush, DoodleApp, DrawingConfig};

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = DrawingConfig::from_env();
    let brushes = Brush::default_set(&config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 800.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Doodle Pad",
        native_options,
        Box::new(|cc| Ok(Box::new(DoodleApp::new(cc, config, brushes)?))),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use doodle_pad::{Brush, DoodleApp, DrawingConfig};
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to attach the canvas to");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"{}\"> on the page", CANVAS_ID);
            return;
        };

        let config = DrawingConfig::default();
        let brushes = Brush::default_set(&config);
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(DoodleApp::new(cc, config, brushes)?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

/// Id of the canvas element the web page provides
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";
