// Placement and gating of the effect layers on the page.

// Layer element ids are this prefix plus the effect name
pub const CANVAS_ID_PREFIX: &str = "season-fx-";

// Above the background art, below interactive content
pub const CANVAS_Z_INDEX: i32 = 1;

// Accessibility / capability gates
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const LOW_CONCURRENCY_MAX_CORES: f64 = 2.0; // devices at or below this skip effects

/// Inline style for a full-viewport, pointer-transparent layer.
pub fn canvas_style(z_index: i32) -> String {
    format!(
        "position:fixed;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:{};",
        z_index
    )
}

pub fn canvas_id(effect_name: &str) -> String {
    format!("{}{}", CANVAS_ID_PREFIX, effect_name)
}

/// `navigator.hardwareConcurrency` of 0 means the browser does not say.
#[inline]
pub fn is_low_concurrency(cores: f64) -> bool {
    cores > 0.0 && cores <= LOW_CONCURRENCY_MAX_CORES
}
