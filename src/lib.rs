#![cfg(target_arch = "wasm32")]
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
pub mod core;
mod dom;
mod events;
mod field;
pub mod frame;
mod menu;
mod reveal;
mod theme;

const LOG_LEVEL_ATTRIBUTE: &str = "data-fx-log";

// `<body>` does not exist yet when the module loads from `<head>`, so the level
// is read again once the document is parsed.
fn log_level() -> log::Level {
    dom::window_document()
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute(LOG_LEVEL_ATTRIBUTE))
        .and_then(|v| log::Level::from_str(&v).ok())
        .unwrap_or(log::Level::Info)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log_level()).ok();
    log::info!("site-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_listener(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    log::set_max_level(log_level().to_level_filter());
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

// Each effect initialises on its own; a missing element only disables that effect.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = reveal::wire_reveal(&document) {
        log::error!("[reveal] {:?}", e);
    }
    events::wire_anchors(&document);
    theme::init(&window, &document);
    events::wire_showcase(&window, &document);
    menu::init(&document);

    match dom::query(&document, ".hero-w5") {
        Some(hero) => {
            events::wire_cursor(&window, &document);
            events::wire_hover_class(&document);
            events::wire_cube(&window, &document, &hero);
            events::wire_orbs(&window, &document, &hero);
            events::wire_tilt_cards(&window, &document);
            if let Err(e) = reveal::wire_scramble(&document) {
                log::error!("[scramble] {:?}", e);
            }
            if let Err(e) = field::init(&window, &document) {
                log::error!("[particles] {:?}", e);
            }
        }
        None => log::debug!("no .hero-w5, high-end effects disabled"),
    }

    log::info!("site-fx components initialized");
    Ok(())
}
