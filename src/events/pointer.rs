use crate::core::constants::TILT_RESET_TRANSFORM;
use crate::core::input::{self, CursorTrail};
use crate::core::ParticleField;
use crate::dom;
use crate::frame::{self, LoopHandle};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const TOUCH_ONLY_QUERY: &str = "(hover: none) and (pointer: coarse)";

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn to_canvas(canvas: &web::HtmlCanvasElement, client: Vec2) -> Option<Vec2> {
    let surface = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    input::client_to_surface(&dom::bounds_of(canvas), client, surface)
}

/// Feed mouse and touch input into the field's pointer state.
pub fn wire_field_pointer(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) {
    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
            let pos = to_canvas(&canvas, client_pos(&ev));
            field.borrow_mut().pointer_mut().mouse_move(pos);
        });
    }
    if let Some(root) = document.document_element() {
        let field = field.clone();
        dom::add_listener(&root, "mouseleave", move |_: web::MouseEvent| {
            field.borrow_mut().pointer_mut().leave();
        });
    }
    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::add_passive_listener(window, "touchstart", move |ev: web::TouchEvent| {
            if let Some(pos) = first_touch(&ev).and_then(|c| to_canvas(&canvas, c)) {
                field.borrow_mut().pointer_mut().touch_start(pos);
            }
        });
    }
    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::add_passive_listener(window, "touchmove", move |ev: web::TouchEvent| {
            let pos = first_touch(&ev).and_then(|c| to_canvas(&canvas, c));
            field.borrow_mut().pointer_mut().touch_move(pos);
        });
    }
    {
        let field = field.clone();
        dom::add_listener(window, "touchend", move |_: web::TouchEvent| {
            field.borrow_mut().pointer_mut().touch_end();
        });
    }
}

/// Custom cursor: the dot jumps to the pointer, the outline trails it.
pub fn wire_cursor(window: &web::Window, document: &web::Document) -> Option<LoopHandle> {
    let dot = dom::query(document, "[data-cursor-dot]");
    let outline = dom::query(document, "[data-cursor-outline]");
    if dot.is_none() && outline.is_none() {
        log::debug!("[cursor] no cursor elements, skipping");
        return None;
    }
    let trail = Rc::new(RefCell::new(CursorTrail::default()));

    let trail_move = trail.clone();
    dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
        let pos = client_pos(&ev);
        if let Some(dot) = &dot {
            dom::set_style(dot, "left", &format!("{}px", pos.x));
            dom::set_style(dot, "top", &format!("{}px", pos.y));
        }
        trail_move.borrow_mut().set_target(pos);
    });

    let outline = outline?;
    Some(frame::start_loop(move |dt_sec| {
        let mut trail = trail.borrow_mut();
        if trail.is_settled() {
            return true;
        }
        if let Some(pos) = trail.step(dt_sec) {
            dom::set_style(&outline, "left", &format!("{}px", pos.x));
            dom::set_style(&outline, "top", &format!("{}px", pos.y));
        }
        true
    }))
}

/// Toggle `body.hovering` while the pointer is over interactive elements.
pub fn wire_hover_class(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    for el in dom::query_all(document, "a, button, .bento-card") {
        let enter = body.clone();
        dom::add_listener(&el, "mouseenter", move |_: web::MouseEvent| {
            _ = enter.class_list().add_1("hovering");
        });
        let leave = body.clone();
        dom::add_listener(&el, "mouseleave", move |_: web::MouseEvent| {
            _ = leave.class_list().remove_1("hovering");
        });
    }
}

/// Parallax drift of the hero orbs against the pointer.
pub fn wire_orbs(window: &web::Window, document: &web::Document, hero: &web::Element) {
    let orbs = dom::query_all(document, ".w5-orb");
    if orbs.is_empty() {
        return;
    }
    let win = window.clone();
    let hero = hero.clone();
    dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
        if !dom::is_displayed(&win, &hero) {
            return;
        }
        let page = Vec2::new(ev.page_x() as f32, ev.page_y() as f32);
        let viewport = dom::viewport_size(&win);
        for (i, orb) in orbs.iter().enumerate() {
            let offset = input::orb_offset(i, page, viewport);
            dom::set_style(
                orb,
                "transform",
                &format!("translateX({}px) translateY({}px)", offset.x, offset.y),
            );
        }
    });
}

fn is_touch_only(window: &web::Window) -> bool {
    matches!(window.match_media(TOUCH_ONLY_QUERY), Ok(Some(mq)) if mq.matches())
}

/// 3D tilt with a glare highlight on `.tilt-card`, mouse devices only.
pub fn wire_tilt_cards(window: &web::Window, document: &web::Document) {
    if is_touch_only(window) {
        log::debug!("[tilt] touch-only device, skipping");
        return;
    }
    for card in dom::query_all(document, ".tilt-card") {
        let glare = card.query_selector(".tilt-glare").ok().flatten();

        let card_move = card.clone();
        let glare_move = glare.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let bounds = dom::bounds_of(&card_move);
            let local = bounds.local(client_pos(&ev));
            let (rx, ry) = input::tilt_angles(local, Vec2::new(bounds.width, bounds.height));
            dom::set_style(&card_move, "transform", &input::tilt_transform(rx, ry));
            if let Some(glare) = &glare_move {
                dom::set_style(glare, "background", &input::glare_background(local));
                dom::set_style(glare, "opacity", "1");
            }
        });

        let card_leave = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&card_leave, "transform", TILT_RESET_TRANSFORM);
            if let Some(glare) = &glare {
                dom::set_style(glare, "opacity", "0");
            }
        });
    }
}
