//! Lifecycle of one effect: one surface, one particle field, one resize
//! listener and one frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{DeltaClock, TimeSource};
use crate::config::EffectConfig;
use crate::effects::animator_for;
use crate::error::EffectError;
use crate::field::Animator;
use crate::kind::EffectKind;
use crate::scheduler::{LoopControl, LoopHandle, Scheduler};
use crate::surface::{Host, ListenerId, Surface, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// No surface, no listener, no loop.
    Stopped,
    /// Surface visible and animating.
    Running,
    /// Surface hidden, loop stopped, particles kept for a quick resume.
    Paused,
}

struct Inner<H: Host> {
    state: Lifecycle,
    animator: Box<dyn Animator>,
    surface: Option<H::Surface>,
    clock: DeltaClock<Rc<H>>,
    resize_listener: Option<ListenerId>,
    frame_loop: Option<LoopHandle>,
}

impl<H: Host> Inner<H> {
    fn frame(&mut self, host: &H, kind: EffectKind) -> LoopControl {
        if self.state != Lifecycle::Running {
            return LoopControl::Stop;
        }
        let attached = self.surface.as_ref().is_some_and(|s| s.is_attached());
        if !attached {
            log::warn!("[{}] surface detached; stopping", kind);
            self.release(host);
            return LoopControl::Stop;
        }
        let tick = self.clock.tick();
        if let Some(surface) = self.surface.as_mut() {
            self.animator.frame(tick, surface);
        }
        LoopControl::Continue
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
        self.animator.resize(viewport);
    }

    fn stop_loop(&mut self) {
        if let Some(handle) = self.frame_loop.take() {
            handle.stop();
        }
    }

    fn release(&mut self, host: &H) {
        self.state = Lifecycle::Stopped;
        self.stop_loop();
        if let Some(id) = self.resize_listener.take() {
            host.remove_listener(id);
        }
        if let Some(mut surface) = self.surface.take() {
            surface.detach();
        }
    }
}

pub struct EffectController<H: Host + 'static> {
    kind: EffectKind,
    host: Rc<H>,
    scheduler: Rc<dyn Scheduler>,
    inner: Rc<RefCell<Inner<H>>>,
}

impl<H: Host + 'static> EffectController<H> {
    /// Create the surface, seed the particles from the current viewport and
    /// start animating. Fails fast when the host cannot provide a 2D surface.
    pub fn launch(
        kind: EffectKind,
        host: Rc<H>,
        scheduler: Rc<dyn Scheduler>,
        config: &EffectConfig,
    ) -> Result<Self, EffectError> {
        let viewport = host.viewport();
        let surface = host.create_surface(kind, viewport)?;
        let clock = DeltaClock::new(host.clone());
        let animator = animator_for(kind, config, viewport, host.now_ms());
        let inner = Rc::new(RefCell::new(Inner {
            state: Lifecycle::Running,
            animator,
            surface: Some(surface),
            clock,
            resize_listener: None,
            frame_loop: None,
        }));

        let weak = Rc::downgrade(&inner);
        let listener = host.on_resize(Box::new(move |viewport| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().resize(viewport);
            }
        }));
        match listener {
            Ok(id) => inner.borrow_mut().resize_listener = Some(id),
            Err(e) => {
                inner.borrow_mut().release(&host);
                return Err(e);
            }
        }

        let controller = Self {
            kind,
            host,
            scheduler,
            inner,
        };
        controller.start_loop();
        log::info!(
            "[{}] running with {} particles ({}x{})",
            kind,
            controller.particle_count(),
            viewport.width,
            viewport.height
        );
        Ok(controller)
    }

    fn start_loop(&self) {
        let weak = Rc::downgrade(&self.inner);
        let host = self.host.clone();
        let kind = self.kind;
        let handle = self.scheduler.start(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return LoopControl::Stop;
            };
            let control = inner.borrow_mut().frame(&host, kind);
            control
        }));
        self.inner.borrow_mut().frame_loop = Some(handle);
    }

    #[inline]
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn state(&self) -> Lifecycle {
        self.inner.borrow().state
    }

    pub fn particle_count(&self) -> usize {
        self.inner.borrow().animator.particle_count()
    }

    pub fn wind(&self) -> f32 {
        self.inner.borrow().animator.wind()
    }

    /// Hide the surface and stop the loop. No-op unless running.
    pub fn pause(&self) -> Lifecycle {
        let mut inner = self.inner.borrow_mut();
        if inner.state == Lifecycle::Running {
            inner.state = Lifecycle::Paused;
            inner.stop_loop();
            if let Some(surface) = inner.surface.as_mut() {
                surface.set_visible(false);
            }
            log::debug!("[{}] paused", self.kind);
        }
        inner.state
    }

    /// Reveal the surface and restart the loop. A surface that went away while
    /// paused releases the controller, which then reports `Stopped`.
    pub fn resume(&self) -> Lifecycle {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.state != Lifecycle::Paused {
                return inner.state;
            }
            let attached = inner.surface.as_ref().is_some_and(|s| s.is_attached());
            if !attached {
                log::warn!("[{}] surface detached while paused", self.kind);
                inner.release(&self.host);
                return Lifecycle::Stopped;
            }
            inner.state = Lifecycle::Running;
            if let Some(surface) = inner.surface.as_mut() {
                surface.set_visible(true);
            }
        }
        self.start_loop();
        log::debug!("[{}] resumed", self.kind);
        Lifecycle::Running
    }

    /// Stop the loop, remove the resize listener and detach the surface.
    /// Safe to call repeatedly.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != Lifecycle::Stopped {
            log::info!("[{}] disposed", self.kind);
        }
        inner.release(&self.host);
    }
}

impl<H: Host + 'static> Drop for EffectController<H> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.release(&self.host);
        }
    }
}
