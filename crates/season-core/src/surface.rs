//! Seams between the simulation and whatever draws it.

use crate::clock::TimeSource;
use crate::error::EffectError;
use crate::kind::EffectKind;
use crate::path::{Paint, Path};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D drawing calls used by the shape renderers.
pub trait Painter {
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn draw(&mut self, path: &Path, paint: &Paint);
}

/// A full-viewport, pointer-transparent layer owned by exactly one effect.
pub trait Surface: Painter {
    /// False once the host has removed the layer from the page.
    fn is_attached(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    fn resize(&mut self, viewport: Viewport);
    /// Remove the layer from the page. Safe to call more than once.
    fn detach(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Platform services an effect needs: layers, viewport, resize events and a
/// clock.
pub trait Host: TimeSource {
    type Surface: Surface + 'static;

    fn viewport(&self) -> Viewport;

    /// False when the user asked for reduced motion or the device is too weak
    /// to animate comfortably.
    fn motion_allowed(&self) -> bool {
        true
    }

    /// Fails with [`EffectError::UnsupportedSurface`] when no 2D context can be
    /// obtained.
    fn create_surface(
        &self,
        kind: EffectKind,
        viewport: Viewport,
    ) -> Result<Self::Surface, EffectError>;

    fn on_resize(&self, callback: Box<dyn FnMut(Viewport)>) -> Result<ListenerId, EffectError>;

    fn remove_listener(&self, id: ListenerId);
}
