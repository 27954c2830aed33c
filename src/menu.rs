use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const ACTIVE: &str = "active";

struct MobileMenu {
    document: web::Document,
    overlay: web::Element,
    burgers: Vec<web::Element>,
}

impl MobileMenu {
    #[inline]
    fn is_open(&self) -> bool {
        self.overlay.class_list().contains(ACTIVE)
    }

    fn open(&self, burger: &web::Element) {
        _ = self.overlay.class_list().add_1(ACTIVE);
        _ = burger.class_list().add_1(ACTIVE);
        self.lock_scroll(true);
    }

    fn close(&self) {
        _ = self.overlay.class_list().remove_1(ACTIVE);
        for b in &self.burgers {
            _ = b.class_list().remove_1(ACTIVE);
        }
        self.lock_scroll(false);
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
}

/// Burger buttons toggle the mobile overlay; links and the backdrop close it.
pub fn init(document: &web::Document) -> bool {
    let burgers = dom::query_all(document, ".burger-btn");
    let Some(overlay) = dom::query(document, ".mobile-menu-overlay") else {
        log::debug!("[menu] no .mobile-menu-overlay, skipping");
        return false;
    };
    if burgers.is_empty() {
        log::debug!("[menu] no .burger-btn, skipping");
        return false;
    }
    let menu = Rc::new(MobileMenu {
        document: document.clone(),
        overlay,
        burgers,
    });

    for burger in &menu.burgers {
        let m = menu.clone();
        let btn = burger.clone();
        dom::add_listener(burger, "click", move |ev: web::MouseEvent| {
            // Keep the click from reaching the overlay's backdrop handler.
            ev.stop_propagation();
            if m.is_open() {
                m.close();
            } else {
                m.open(&btn);
            }
        });
    }

    for link in dom::query_all(document, ".mobile-link") {
        let m = menu.clone();
        dom::add_listener(&link, "click", move |_: web::MouseEvent| m.close());
    }

    let m = menu.clone();
    dom::add_listener(&menu.overlay, "click", move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|t| t == m.overlay);
        if on_backdrop {
            m.close();
        }
    });
    true
}
