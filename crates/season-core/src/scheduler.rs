use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::ManualTime;

/// Returned by a tick to say whether it wants another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub type TickFn = Box<dyn FnMut() -> LoopControl>;

/// Shared stop flag for one frame loop. Clones observe the same loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    /// The loop will not tick again.
    pub fn stop(&self) {
        self.running.set(false);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame source. Each started loop re-arms itself once per frame until its
/// handle is stopped or the tick returns [`LoopControl::Stop`].
pub trait Scheduler {
    fn start(&self, tick: TickFn) -> LoopHandle;
}

/// Runs frames on demand against a [`ManualTime`] clock.
pub struct ManualScheduler {
    time: ManualTime,
    frame_ms: f64,
    loops: RefCell<Vec<(LoopHandle, TickFn)>>,
    frames: Cell<u64>,
}

impl ManualScheduler {
    pub fn new(time: ManualTime, frame_ms: f64) -> Self {
        Self {
            time,
            frame_ms,
            loops: RefCell::new(Vec::new()),
            frames: Cell::new(0),
        }
    }

    /// Advance the clock one frame period and tick every live loop, `frames`
    /// times over.
    pub fn advance(&self, frames: usize) {
        for _ in 0..frames {
            self.time.advance(self.frame_ms);
            self.frames.set(self.frames.get() + 1);
            // Ticks may start new loops, so run them detached from the list.
            let mut current = std::mem::take(&mut *self.loops.borrow_mut());
            current.retain_mut(|(handle, tick)| {
                if !handle.is_running() {
                    return false;
                }
                match tick() {
                    LoopControl::Continue => handle.is_running(),
                    LoopControl::Stop => {
                        handle.stop();
                        false
                    }
                }
            });
            let mut loops = self.loops.borrow_mut();
            let started = std::mem::take(&mut *loops);
            current.extend(started);
            *loops = current;
        }
    }

    /// Loops that will tick on the next frame.
    pub fn active_loops(&self) -> usize {
        self.loops
            .borrow()
            .iter()
            .filter(|(handle, _)| handle.is_running())
            .count()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    pub fn time(&self) -> &ManualTime {
        &self.time
    }
}

impl Scheduler for ManualScheduler {
    fn start(&self, tick: TickFn) -> LoopHandle {
        let handle = LoopHandle::new();
        self.loops.borrow_mut().push((handle.clone(), tick));
        handle
    }
}
