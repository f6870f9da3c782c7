#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use season_core::{EffectConfig, EffectError, EffectKind, EffectRegistry, Season};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod host;
mod surface;

use frame::RafScheduler;
use host::DomHost;

thread_local! {
    static REGISTRY: RefCell<Option<EffectRegistry<DomHost>>> = const { RefCell::new(None) };
}

fn to_js(e: EffectError) -> JsValue {
    log::warn!("{}", e);
    JsValue::from_str(&e.to_string())
}

/// Run `f` against the page's registry, creating it on first use.
fn with_registry<T>(
    f: impl FnOnce(&mut EffectRegistry<DomHost>) -> Result<T, EffectError>,
) -> Result<T, JsValue> {
    REGISTRY.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("effect registry busy"))?;
        if slot.is_none() {
            let host = DomHost::new().map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
            *slot = Some(EffectRegistry::new(
                Rc::new(host),
                Rc::new(RafScheduler),
                EffectConfig::default(),
            ));
        }
        match slot.as_mut() {
            Some(registry) => f(registry).map_err(to_js),
            None => Err(JsValue::from_str("effect registry unavailable")),
        }
    })
}

fn parse_kind(name: &str) -> Result<EffectKind, JsValue> {
    name.parse::<EffectKind>().map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("season-web starting");

    if let Some(window) = web_sys::window() {
        // Full teardown is reserved for leaving the page; season switches pause.
        if let Err(e) = dom::add_window_listener(&window, "pagehide", dispose_all) {
            log::warn!("pagehide wiring failed: {:#}", e);
        }
    }
    Ok(())
}

/// Start or reveal an effect by name (`rain`, `snow`, `sakura`, `autumn`,
/// `willow`).
#[wasm_bindgen]
pub fn enable_effect(name: &str) -> Result<(), JsValue> {
    let kind = parse_kind(name)?;
    with_registry(|r| r.enable(kind).map(|_| ()))
}

/// Hide an effect and stop animating it.
#[wasm_bindgen]
pub fn disable_effect(name: &str) -> Result<(), JsValue> {
    let kind = parse_kind(name)?;
    with_registry(|r| {
        r.pause(kind);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn dispose_effect(name: &str) -> Result<(), JsValue> {
    let kind = parse_kind(name)?;
    with_registry(|r| {
        r.dispose(kind);
        Ok(())
    })
}

/// Tear down every effect. Does nothing if none was ever started.
#[wasm_bindgen]
pub fn dispose_all() {
    REGISTRY.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            if let Some(registry) = slot.as_mut() {
                registry.dispose_all();
            }
        }
    });
}

#[wasm_bindgen]
pub fn switch_season(name: &str) -> Result<(), JsValue> {
    let season = name.parse::<Season>().map_err(to_js)?;
    with_registry(|r| r.switch_season(season))
}

/// `"running"`, `"paused"` or `"stopped"`.
#[wasm_bindgen]
pub fn effect_state(name: &str) -> Result<String, JsValue> {
    let kind = parse_kind(name)?;
    with_registry(|r| Ok(format!("{:?}", r.state(kind)).to_lowercase()))
}

#[wasm_bindgen]
pub fn enable_rain() -> Result<(), JsValue> {
    with_registry(|r| r.enable(EffectKind::Rain).map(|_| ()))
}

#[wasm_bindgen]
pub fn disable_rain() {
    _ = with_registry(|r| Ok(r.pause(EffectKind::Rain)));
}

#[wasm_bindgen]
pub fn enable_snow() -> Result<(), JsValue> {
    with_registry(|r| r.enable(EffectKind::Snow).map(|_| ()))
}

#[wasm_bindgen]
pub fn disable_snow() {
    _ = with_registry(|r| Ok(r.pause(EffectKind::Snow)));
}

#[wasm_bindgen]
pub fn enable_sakura() -> Result<(), JsValue> {
    with_registry(|r| r.enable(EffectKind::Sakura).map(|_| ()))
}

#[wasm_bindgen]
pub fn disable_sakura() {
    _ = with_registry(|r| Ok(r.pause(EffectKind::Sakura)));
}

#[wasm_bindgen]
pub fn enable_autumn_leaves() -> Result<(), JsValue> {
    with_registry(|r| r.enable(EffectKind::AutumnLeaves).map(|_| ()))
}

#[wasm_bindgen]
pub fn disable_autumn_leaves() {
    _ = with_registry(|r| Ok(r.pause(EffectKind::AutumnLeaves)));
}

#[wasm_bindgen]
pub fn enable_willow() -> Result<(), JsValue> {
    with_registry(|r| r.enable(EffectKind::Willow).map(|_| ()))
}

#[wasm_bindgen]
pub fn disable_willow() {
    _ = with_registry(|r| Ok(r.pause(EffectKind::Willow)));
}
