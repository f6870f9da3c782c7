use std::rc::Rc;

use fnv::{FnvHashMap, FnvHashSet};

use crate::config::EffectConfig;
use crate::controller::{EffectController, Lifecycle};
use crate::error::EffectError;
use crate::kind::{EffectKind, Season};
use crate::scheduler::Scheduler;
use crate::surface::Host;

/// At most one live controller per effect kind, owned by whoever switches
/// seasons.
pub struct EffectRegistry<H: Host + 'static> {
    host: Rc<H>,
    scheduler: Rc<dyn Scheduler>,
    config: EffectConfig,
    controllers: FnvHashMap<EffectKind, EffectController<H>>,
    unsupported: FnvHashSet<EffectKind>,
}

impl<H: Host + 'static> EffectRegistry<H> {
    pub fn new(host: Rc<H>, scheduler: Rc<dyn Scheduler>, config: EffectConfig) -> Self {
        Self {
            host,
            scheduler,
            config,
            controllers: FnvHashMap::default(),
            unsupported: FnvHashSet::default(),
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Make `kind` run: resume it if paused, launch it if absent. A second call
    /// while running changes nothing.
    pub fn enable(&mut self, kind: EffectKind) -> Result<Lifecycle, EffectError> {
        if self.unsupported.contains(&kind) {
            return Err(EffectError::UnsupportedSurface(kind));
        }
        // A paused effect stays paused; one already running is left alone.
        if self.config.respect_reduced_motion && !self.host.motion_allowed() {
            if self.state(kind) == Lifecycle::Running {
                return Ok(Lifecycle::Running);
            }
            log::info!("[{}] reduced motion requested; not starting", kind);
            return Ok(Lifecycle::Stopped);
        }
        if let Some(controller) = self.controllers.get(&kind) {
            match controller.resume() {
                Lifecycle::Stopped => {
                    self.controllers.remove(&kind);
                }
                state => return Ok(state),
            }
        }
        match EffectController::launch(
            kind,
            self.host.clone(),
            self.scheduler.clone(),
            &self.config,
        ) {
            Ok(controller) => {
                self.controllers.insert(kind, controller);
                Ok(Lifecycle::Running)
            }
            Err(e) => {
                if let EffectError::UnsupportedSurface(_) = e {
                    self.unsupported.insert(kind);
                }
                log::error!("[{}] failed to start: {}", kind, e);
                Err(e)
            }
        }
    }

    /// Hide `kind` and stop animating it, keeping its particles for a later
    /// [`EffectRegistry::enable`].
    pub fn pause(&mut self, kind: EffectKind) -> Lifecycle {
        match self.controllers.get(&kind) {
            Some(controller) => controller.pause(),
            None => Lifecycle::Stopped,
        }
    }

    /// Tear `kind` down completely. Safe when it was never started.
    pub fn dispose(&mut self, kind: EffectKind) {
        if let Some(controller) = self.controllers.remove(&kind) {
            controller.dispose();
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, controller) in self.controllers.drain() {
            controller.dispose();
        }
    }

    pub fn state(&self, kind: EffectKind) -> Lifecycle {
        self.controllers
            .get(&kind)
            .map_or(Lifecycle::Stopped, |c| c.state())
    }

    pub fn controller(&self, kind: EffectKind) -> Option<&EffectController<H>> {
        self.controllers.get(&kind)
    }

    /// Kinds currently animating.
    pub fn running(&self) -> Vec<EffectKind> {
        EffectKind::ALL
            .into_iter()
            .filter(|k| self.state(*k) == Lifecycle::Running)
            .collect()
    }

    /// Pause everything outside `season`'s plan, then enable the plan.
    /// Every effect in the plan is attempted even if an earlier one fails; the
    /// first error is returned.
    pub fn switch_season(&mut self, season: Season) -> Result<(), EffectError> {
        let plan = season.effects();
        for kind in EffectKind::ALL {
            if !plan.contains(&kind) {
                self.pause(kind);
            }
        }
        let mut first_error = None;
        for &kind in plan {
            if let Err(e) = self.enable(kind) {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        log::info!("[season] switched to {}", season);
        first_error.map_or(Ok(()), Err)
    }
}
