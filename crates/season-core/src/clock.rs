use std::cell::Cell;
use std::rc::Rc;

/// Monotonic wall clock in milliseconds.
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    #[inline]
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Externally driven clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualTime(Rc<Cell<f64>>);

impl ManualTime {
    pub fn new(start_ms: f64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, now_ms: f64) {
        self.0.set(now_ms);
    }

    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl TimeSource for ManualTime {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

/// What one animation tick sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub now_ms: f64,
    pub delta_sec: f32,
}

/// Wall-clock stamp source for one effect; decouples motion from whatever
/// timestamp the frame callback happens to receive.
pub struct DeltaClock<T: TimeSource> {
    source: T,
    last_ms: f64,
}

impl<T: TimeSource> DeltaClock<T> {
    pub fn new(source: T) -> Self {
        let last_ms = source.now_ms();
        Self { source, last_ms }
    }

    pub fn tick(&mut self) -> Tick {
        let now_ms = self.source.now_ms();
        let delta_sec = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        Tick { now_ms, delta_sec }
    }
}
