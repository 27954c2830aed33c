use crate::core::{HeroBackground, ModeButton, ThemeId, THEME_STORAGE_KEY};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Delay before re-measuring after a stylesheet swap, so the new layout has applied.
const RELAYOUT_DELAY_MS: i32 = 100;

fn storage(window: &web::Window) -> Option<web::Storage> {
    match window.local_storage() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[theme] localStorage unavailable: {:?}", e);
            None
        }
    }
}

pub fn load_saved(window: &web::Window) -> ThemeId {
    let stored = storage(window).and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemeId::from_stored(stored.as_deref())
}

fn persist(window: &web::Window, theme: &ThemeId) {
    if let Some(s) = storage(window) {
        if let Err(e) = s.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not persist {theme}: {:?}", e);
        }
    }
}

struct ThemeSwitcher {
    window: web::Window,
    document: web::Document,
    stylesheet: web::Element,
    select: web::HtmlSelectElement,
    current: RefCell<ThemeId>,
    background: RefCell<HeroBackground>,
}

impl ThemeSwitcher {
    fn apply(&self, theme: ThemeId) {
        _ = self.stylesheet.set_attribute("href", theme.as_str());
        self.select.set_value(theme.as_str());
        self.update_controls(&theme);
        *self.current.borrow_mut() = theme;
    }

    fn switch_to(&self, theme: ThemeId) {
        log::info!("[theme] switching to {theme}");
        persist(&self.window, &theme);
        self.apply(theme);
    }

    fn update_controls(&self, theme: &ThemeId) {
        let controls = theme.controls();
        let toggle = |id: &str, visible: bool, shown_as: &str| {
            if let Some(el) = self.document.get_element_by_id(id) {
                dom::set_display(&el, visible, shown_as);
            }
        };
        toggle("w2-controls", controls.light_controls, "flex");
        toggle("w3-controls", controls.dark_controls, "flex");
        toggle("mobile-bg-toggle", controls.mobile_background_toggle, "block");
        toggle("mobile-mode-toggle", controls.mobile_mode_toggle, "block");
    }

    fn press_mode(&self, button: ModeButton) {
        let next = button.target(&self.current.borrow());
        if let Some(next) = next {
            self.switch_to(next);
        }
    }

    fn cycle_background(&self) {
        let Some(hero) = dom::query(&self.document, ".hero") else {
            return;
        };
        let class_list = hero.class_list();
        for class in HeroBackground::all_classes() {
            _ = class_list.remove_1(class);
        }
        let next = self.background.borrow_mut().cycle();
        if !next.is_empty() {
            _ = class_list.add_1(next);
        }
    }

    fn after_select_change(&self) {
        let options = web::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web::ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);

        let window = self.window.clone();
        dom::set_timeout(&self.window, RELAYOUT_DELAY_MS, move || {
            if let Ok(ev) = web::Event::new("resize") {
                _ = window.dispatch_event(&ev);
            }
        });
    }
}

/// Restore the saved theme and wire the design switcher controls.
pub fn init(window: &web::Window, document: &web::Document) -> bool {
    let Some(stylesheet) = document.get_element_by_id("theme-stylesheet") else {
        log::debug!("[theme] no #theme-stylesheet, skipping");
        return false;
    };
    let Some(select) = document
        .get_element_by_id("design-select")
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        log::debug!("[theme] no #design-select, skipping");
        return false;
    };

    let switcher = Rc::new(ThemeSwitcher {
        window: window.clone(),
        document: document.clone(),
        stylesheet,
        select,
        current: RefCell::new(ThemeId::default()),
        background: RefCell::new(HeroBackground::default()),
    });
    let saved = load_saved(window);
    log::info!("[theme] restored {saved}");
    switcher.apply(saved);

    {
        let s = switcher.clone();
        dom::add_listener(&switcher.select, "change", move |_: web::Event| {
            let value = s.select.value();
            match ThemeId::parse(&value) {
                Some(theme) => {
                    s.switch_to(theme);
                    s.after_select_change();
                }
                None => log::warn!("[theme] ignoring unknown design {value:?}"),
            }
        });
    }

    for (id, button) in [
        ("w2-dark-mode", ModeButton::Dark),
        ("w3-light-mode", ModeButton::Light),
        ("mobile-mode-toggle", ModeButton::Toggle),
    ] {
        let s = switcher.clone();
        dom::add_click_listener(document, id, move || s.press_mode(button));
    }
    for id in ["w2-bg-toggle", "mobile-bg-toggle"] {
        let s = switcher.clone();
        dom::add_click_listener(document, id, move || s.cycle_background());
    }
    wire_hero_trigger(document, "w2-hero-bg-trigger", {
        let s = switcher.clone();
        move || s.cycle_background()
    });
    wire_hero_trigger(document, "w2-hero-theme-trigger", {
        let s = switcher.clone();
        move || s.press_mode(ModeButton::Dark)
    });
    true
}

// Hero call-to-action links that must not navigate.
fn wire_hero_trigger(document: &web::Document, id: &str, mut action: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::add_listener(&el, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            action();
        });
    }
}
