//! Seasonal ambient particle effects: rain, snow, sakura petals, autumn leaves
//! and willow leaves drawn over a page through a platform-neutral painter.
//!
//! Nothing in this crate touches the DOM. The web front-end supplies a
//! [`Host`] (canvas creation, viewport, resize notifications, clock) and a
//! [`Scheduler`] (animation frames); everything else lives here so it can be
//! exercised on the host in tests.

pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod effects;
pub mod error;
pub mod field;
pub mod kind;
pub mod numeric;
pub mod path;
pub mod registry;
pub mod scheduler;
pub mod surface;
pub mod wind;

pub use clock::*;
pub use color::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use field::*;
pub use kind::*;
pub use numeric::*;
pub use path::*;
pub use registry::*;
pub use scheduler::*;
pub use surface::*;
pub use wind::*;
