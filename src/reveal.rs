use crate::core::{render_html, TextScramble};
use crate::dom;
use crate::frame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_SELECTOR: &str = ".reveal, .reveal-text, .revealable-delay-1, .revealable-delay-2";
const REVEAL_THRESHOLD: f64 = 0.1;
const SCRAMBLE_THRESHOLD: f64 = 0.5;

/// Observe `targets` and call `on_visible` once per element the first time it
/// crosses `threshold`.
fn observe_once(
    targets: &[web::Element],
    threshold: f64,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Fade-in reveal: elements gain `visible` the first time they scroll in.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    log::info!("[reveal] observing {} elements", targets.len());
    observe_once(&targets, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1("visible");
    })
}

/// Scramble-decode `.scramble-text` elements into their final text when they
/// become half visible.
pub fn wire_scramble(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, ".scramble-text");
    if targets.is_empty() {
        return Ok(());
    }
    observe_once(&targets, SCRAMBLE_THRESHOLD, |el| start_scramble(el.clone()))
}

fn start_scramble(el: web::Element) {
    let current = el
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.inner_text())
        .or_else(|| el.text_content())
        .unwrap_or_default();
    let target = el.get_attribute("data-text").unwrap_or_else(|| current.clone());

    let mut rng = StdRng::from_entropy();
    let mut fx = TextScramble::default();
    fx.set_text(&current, &target, &mut rng);

    frame::start_loop(move |_dt| {
        let (segments, complete) = fx.step(&mut rng);
        el.set_inner_html(&render_html(&segments));
        !complete
    });
}
