use std::cell::RefCell;
use std::rc::Rc;

use season_core::{LoopControl, LoopHandle, Scheduler, TickFn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driven loops, re-armed manually each tick.
pub struct RafScheduler;

fn request_frame(slot: &FrameSlot) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let slot = slot.borrow();
    match slot.as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok(),
        None => false,
    }
}

impl Scheduler for RafScheduler {
    fn start(&self, mut tick: TickFn) -> LoopHandle {
        let handle = LoopHandle::new();
        let running = handle.clone();
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let slot_tick = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let keep_going = running.is_running()
                && tick() == LoopControl::Continue
                && running.is_running()
                && request_frame(&slot_tick);
            if !keep_going {
                running.stop();
                // Dropping our own closure breaks the Rc cycle and ends the chain.
                let _ = slot_tick.borrow_mut().take();
            }
        }) as Box<dyn FnMut()>));
        if !request_frame(&slot) {
            log::warn!("[frame] requestAnimationFrame unavailable");
            handle.stop();
            let _ = slot.borrow_mut().take();
        }
        handle
    }
}
