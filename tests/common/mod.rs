// Headless stand-ins for the DOM: a host that tracks which layers are
// attached and which resize listeners are registered, and a painter that
// records every draw call.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fnv::FnvHashMap;
use season_core::*;

pub const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Draw(Path, Paint),
}

#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<Call>,
}

impl RecordingPainter {
    pub fn draws(&self) -> Vec<(&Path, &Paint)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw(path, paint) => Some((path, paint)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn save(&mut self) {
        self.calls.push(Call::Save);
    }
    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }
    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(Call::Translate(x, y));
    }
    fn rotate(&mut self, radians: f32) {
        self.calls.push(Call::Rotate(radians));
    }
    fn draw(&mut self, path: &Path, paint: &Paint) {
        self.calls.push(Call::Draw(path.clone(), *paint));
    }
}

#[derive(Debug)]
pub struct LayerState {
    pub kind: EffectKind,
    pub attached: bool,
    pub visible: bool,
    pub viewport: Viewport,
    pub clears: usize,
    pub draws: usize,
}

pub struct HeadlessSurface {
    state: Rc<RefCell<LayerState>>,
}

impl Painter for HeadlessSurface {
    fn clear(&mut self) {
        self.state.borrow_mut().clears += 1;
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _radians: f32) {}
    fn draw(&mut self, _path: &Path, _paint: &Paint) {
        self.state.borrow_mut().draws += 1;
    }
}

impl Surface for HeadlessSurface {
    fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
    fn resize(&mut self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
    }
    fn detach(&mut self) {
        self.state.borrow_mut().attached = false;
    }
}

pub struct HeadlessHost {
    pub time: ManualTime,
    viewport: Cell<Viewport>,
    supports_2d: bool,
    motion_allowed: Cell<bool>,
    create_attempts: Cell<usize>,
    next_listener: Cell<u32>,
    layers: RefCell<Vec<Rc<RefCell<LayerState>>>>,
    listeners: RefCell<FnvHashMap<ListenerId, Box<dyn FnMut(Viewport)>>>,
}

impl HeadlessHost {
    pub fn new(time: ManualTime, viewport: Viewport) -> Self {
        Self {
            time,
            viewport: Cell::new(viewport),
            supports_2d: true,
            motion_allowed: Cell::new(true),
            create_attempts: Cell::new(0),
            next_listener: Cell::new(0),
            layers: RefCell::new(Vec::new()),
            listeners: RefCell::new(FnvHashMap::default()),
        }
    }

    pub fn without_2d(time: ManualTime, viewport: Viewport) -> Self {
        Self {
            supports_2d: false,
            ..Self::new(time, viewport)
        }
    }

    pub fn set_motion_allowed(&self, allowed: bool) {
        self.motion_allowed.set(allowed);
    }

    /// Change the viewport and notify every registered listener. Returns how
    /// many listeners fired.
    pub fn fire_resize(&self, viewport: Viewport) -> usize {
        self.viewport.set(viewport);
        let mut listeners = self.listeners.borrow_mut();
        for callback in listeners.values_mut() {
            callback(viewport);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn create_attempts(&self) -> usize {
        self.create_attempts.get()
    }

    /// Layers currently reachable from the page.
    pub fn attached(&self, kind: EffectKind) -> usize {
        self.layers
            .borrow()
            .iter()
            .filter(|l| {
                let l = l.borrow();
                l.kind == kind && l.attached
            })
            .count()
    }

    pub fn total_attached(&self) -> usize {
        EffectKind::ALL.iter().map(|k| self.attached(*k)).sum()
    }

    /// The most recently created layer for `kind`.
    pub fn layer(&self, kind: EffectKind) -> Option<Rc<RefCell<LayerState>>> {
        self.layers
            .borrow()
            .iter()
            .rev()
            .find(|l| l.borrow().kind == kind)
            .cloned()
    }

    /// Simulate page script removing a layer behind the effect's back.
    pub fn remove_layer_externally(&self, kind: EffectKind) {
        if let Some(layer) = self.layer(kind) {
            layer.borrow_mut().attached = false;
        }
    }
}

impl TimeSource for HeadlessHost {
    fn now_ms(&self) -> f64 {
        self.time.now_ms()
    }
}

impl Host for HeadlessHost {
    type Surface = HeadlessSurface;

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn motion_allowed(&self) -> bool {
        self.motion_allowed.get()
    }

    fn create_surface(
        &self,
        kind: EffectKind,
        viewport: Viewport,
    ) -> Result<HeadlessSurface, EffectError> {
        self.create_attempts.set(self.create_attempts.get() + 1);
        if !self.supports_2d {
            return Err(EffectError::UnsupportedSurface(kind));
        }
        let state = Rc::new(RefCell::new(LayerState {
            kind,
            attached: true,
            visible: true,
            viewport,
            clears: 0,
            draws: 0,
        }));
        self.layers.borrow_mut().push(state.clone());
        Ok(HeadlessSurface { state })
    }

    fn on_resize(&self, callback: Box<dyn FnMut(Viewport)>) -> Result<ListenerId, EffectError> {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, callback);
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id);
    }
}

pub struct Harness {
    pub host: Rc<HeadlessHost>,
    pub scheduler: Rc<ManualScheduler>,
    pub registry: EffectRegistry<HeadlessHost>,
}

impl Harness {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_host(|time| HeadlessHost::new(time, viewport))
    }

    pub fn with_host(make: impl FnOnce(ManualTime) -> HeadlessHost) -> Self {
        let time = ManualTime::new(0.0);
        let host = Rc::new(make(time.clone()));
        let scheduler = Rc::new(ManualScheduler::new(time, FRAME_MS));
        let registry = EffectRegistry::new(
            host.clone(),
            scheduler.clone(),
            EffectConfig::default().with_seed(7),
        );
        Self {
            host,
            scheduler,
            registry,
        }
    }
}
