use crate::core::{CubeFrame, ScrollGeometry, ShowcaseFrame};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-linked scale/rotate of `.scroll-object` inside `.scroll-showcase`.
pub fn wire_showcase(window: &web::Window, document: &web::Document) -> bool {
    let (Some(section), Some(object)) = (
        dom::query(document, ".scroll-showcase"),
        dom::query(document, ".scroll-object"),
    ) else {
        log::debug!("[showcase] section or object missing, skipping");
        return false;
    };
    let text = dom::query(document, ".scroll-text");
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        if !dom::is_displayed(&win, &section) {
            return;
        }
        let container_height = section
            .dyn_ref::<web::HtmlElement>()
            .map(|h| h.offset_height() as f32)
            .unwrap_or_else(|| dom::bounds_of(&section).height);
        let geometry = ScrollGeometry {
            container_top: dom::bounds_of(&section).top,
            viewport_height: dom::viewport_size(&win).y,
            container_height,
        };
        let frame = ShowcaseFrame::from_geometry(&geometry);
        dom::set_style(&object, "transform", &frame.object_transform());
        if let Some(text) = &text {
            let (opacity, transform) = frame.text_style();
            dom::set_style(text, "opacity", opacity);
            dom::set_style(text, "transform", &transform);
        }
    });
    true
}

/// Scroll-driven rotation of the hero cube and fade-out of its scene.
pub fn wire_cube(window: &web::Window, document: &web::Document, hero: &web::Element) -> bool {
    let Some(cube) = document.get_element_by_id("w5-cube") else {
        log::debug!("[cube] #w5-cube missing, skipping");
        return false;
    };
    let scene = dom::query(document, ".w5-3d-scene");
    let win = window.clone();
    let hero = hero.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        if !dom::is_displayed(&win, &hero) {
            return;
        }
        let scroll_y = win.scroll_y().unwrap_or(0.0) as f32;
        let viewport_height = dom::viewport_size(&win).y;
        let hero_bottom = hero.get_bounding_client_rect().bottom() as f32;
        let frame = CubeFrame::new(scroll_y, viewport_height, hero_bottom);
        dom::set_style(&cube, "transform", &frame.cube_transform());
        if let Some(scene) = &scene {
            dom::set_style(scene, "opacity", &frame.scene_opacity.to_string());
        }
    });
    true
}

/// Smooth scrolling for in-page anchors.
pub fn wire_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if href == "#" || href.is_empty() {
                return;
            }
            let Some(target) = dom::query(&doc, &href) else {
                return;
            };
            ev.prevent_default();
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
