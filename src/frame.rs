use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Longest frame delta handed to a tick; a backgrounded tab resumes with a huge gap.
const MAX_FRAME_DT_SEC: f32 = 0.1;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop rescheduling and cancel the frame already requested.
    pub fn cancel(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        drop(self.slot.borrow_mut().take());
    }
}

/// Run `tick(dt_sec)` once per display refresh until it returns `false` or
/// the returned handle is cancelled.
pub fn start_loop(mut tick: impl FnMut(f32) -> bool + 'static) -> LoopHandle {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
        pending: Rc::new(Cell::new(None)),
        slot: slot.clone(),
    };
    let slot_tick = slot.clone();
    let handle_tick = handle.clone();
    let mut last = Instant::now();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.pending.set(None);
        let now = Instant::now();
        let dt_sec = (now - last).as_secs_f32().min(MAX_FRAME_DT_SEC);
        last = now;

        let keep_going = handle_tick.running.get() && tick(dt_sec) && handle_tick.running.get();
        if keep_going {
            request_frame(&slot_tick, &handle_tick);
        } else {
            handle_tick.running.set(false);
            // Breaks the self-reference; wasm-bindgen defers the free until this call returns.
            drop(slot_tick.borrow_mut().take());
        }
    }) as Box<dyn FnMut()>));

    request_frame(&slot, &handle);
    handle
}

fn request_frame(slot: &FrameSlot, handle: &LoopHandle) {
    let Some(w) = web::window() else {
        handle.running.set(false);
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.pending.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                handle.running.set(false);
            }
        }
    }
}
