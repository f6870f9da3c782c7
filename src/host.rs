use std::cell::{Cell, RefCell};

use fnv::FnvHashMap;
use instant::Instant;
use season_core::{EffectError, EffectKind, Host, ListenerId, TimeSource, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::surface::CanvasSurface;

/// The browser page as seen by the effects.
pub struct DomHost {
    window: web::Window,
    document: web::Document,
    origin: Instant,
    next_listener: Cell<u32>,
    listeners: RefCell<FnvHashMap<ListenerId, Closure<dyn FnMut()>>>,
}

impl DomHost {
    pub fn new() -> anyhow::Result<Self> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        Ok(Self {
            window,
            document,
            origin: Instant::now(),
            next_listener: Cell::new(0),
            listeners: RefCell::new(FnvHashMap::default()),
        })
    }
}

impl TimeSource for DomHost {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Host for DomHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn motion_allowed(&self) -> bool {
        !dom::prefers_reduced_motion(&self.window) && !dom::low_concurrency(&self.window)
    }

    fn create_surface(
        &self,
        kind: EffectKind,
        viewport: Viewport,
    ) -> Result<CanvasSurface, EffectError> {
        CanvasSurface::create(&self.document, kind, viewport)
    }

    fn on_resize(
        &self,
        mut callback: Box<dyn FnMut(Viewport)>,
    ) -> Result<ListenerId, EffectError> {
        let window = self.window.clone();
        let closure = Closure::wrap(
            Box::new(move || callback(dom::viewport(&window))) as Box<dyn FnMut()>
        );
        self.window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| EffectError::Host(format!("{:?}", e)))?;
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0.wrapping_add(1));
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&id);
        if let Some(closure) = removed {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}
