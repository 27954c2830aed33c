use crate::canvas::CanvasSurface;
use crate::core::{FieldConfig, ParticleField, CONFIG_ATTRIBUTES};
use crate::dom;
use crate::events;
use crate::frame::{self, LoopHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PARTICLE_CANVAS_ID: &str = "w5-particles";

fn config_from_attributes(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut config = FieldConfig::default();
    for name in CONFIG_ATTRIBUTES {
        let Some(value) = canvas.get_attribute(name) else {
            continue;
        };
        if let Err(e) = config.apply_attribute(name, &value) {
            log::warn!("[particles] ignoring override: {e}");
        }
    }
    config
}

/// Set up the particle canvas and start its animation loop. Returns `None`
/// when the page has no particle canvas.
pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<LoopHandle>> {
    let Some(el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
        log::debug!("[particles] no #{PARTICLE_CANVAS_ID}, skipping");
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let mut surface = CanvasSurface::from_canvas(&canvas)?;

    let config = config_from_attributes(&canvas);
    let size = dom::sync_canvas_backing_size(&canvas);
    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::new(
        config, size.x, size.y, &mut rng,
    )));
    log::info!(
        "[particles] count={} size={}x{}",
        field.borrow().particles().len(),
        size.x,
        size.y
    );

    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        let size = dom::sync_canvas_backing_size(&canvas_resize);
        field_resize.borrow_mut().resize(size.x, size.y);
    });

    events::wire_field_pointer(window, document, &canvas, &field);

    let canvas_tick = canvas.clone();
    let handle = frame::start_loop(move |_dt| {
        if !canvas_tick.is_connected() {
            log::info!("[particles] canvas detached, stopping");
            return false;
        }
        field.borrow_mut().tick(&mut surface);
        true
    });
    Ok(Some(handle))
}
