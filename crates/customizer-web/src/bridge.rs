//! JavaScript-facing access to the customization state for the 3D renderer.

use crate::app::AppContext;
use customizer_core::{Change, CustomizationState, Mode};
use js_sys::{Function, Object, Reflect};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static APP: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

pub fn install(ctx: AppContext) {
    APP.with(|app| *app.borrow_mut() = Some(ctx));
}

fn with_app<R>(f: impl FnOnce(&AppContext) -> Result<R, JsValue>) -> Result<R, JsValue> {
    APP.with(|app| match app.borrow().as_ref() {
        Some(ctx) => f(ctx),
        None => Err(JsValue::from_str("customizer not started")),
    })
}

pub fn change_name(change: Change) -> &'static str {
    match change {
        Change::Mode => "intro",
        Change::Color => "color",
        Change::Decal => "decal",
        Change::DecalPosition => "decalPosition",
        Change::DecalScale => "decalScale",
        Change::DecalRotation => "decalRotation",
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// Plain JS object mirroring the state, in the shape the renderer expects.
pub fn state_to_js(state: &CustomizationState) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "intro", &JsValue::from_bool(state.mode == Mode::Intro))?;
    set(&obj, "logo", &JsValue::from_str(state.logo))?;
    set(&obj, "color", &JsValue::from_str(state.color.hex()))?;
    set(&obj, "decal", &JsValue::from_str(state.decal.name()))?;
    let position = Object::new();
    set(&position, "x", &JsValue::from_f64(state.decal_position.x as f64))?;
    set(&position, "y", &JsValue::from_f64(state.decal_position.y as f64))?;
    set(&obj, "decalPosition", &position)?;
    set(&obj, "decalScale", &JsValue::from_f64(state.decal_scale as f64))?;
    set(
        &obj,
        "decalRotation",
        &JsValue::from_f64(state.decal_rotation as f64),
    )?;
    let custom = state
        .custom_image()
        .map(|img| JsValue::from_str(&img.data_url))
        .unwrap_or(JsValue::NULL);
    set(&obj, "customDecal", &custom)?;
    set(
        &obj,
        "customDecalAspect",
        &JsValue::from_f64(state.decal_aspect() as f64),
    )?;
    Ok(obj.into())
}

/// Current state as a plain object. Inside a change callback use the object
/// passed to the callback instead; the store is mid-update there.
#[wasm_bindgen]
pub fn customization_snapshot() -> Result<JsValue, JsValue> {
    with_app(|ctx| {
        let store = ctx
            .store
            .try_borrow()
            .map_err(|_| JsValue::from_str("state is being updated"))?;
        state_to_js(store.state())
    })
}

/// Register `callback(state, changedField)` to run after every state change.
#[wasm_bindgen]
pub fn on_customization_change(callback: Function) -> Result<(), JsValue> {
    with_app(|ctx| {
        let mut store = ctx
            .store
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("state is being updated"))?;
        store.subscribe(move |state, change| {
            let result = state_to_js(state).and_then(|obj| {
                callback.call2(&JsValue::NULL, &obj, &JsValue::from_str(change_name(change)))
            });
            if let Err(e) = result {
                log::error!("[bridge] change callback failed: {:?}", e);
            }
        });
        Ok(())
    })
}

/// Trigger the snapshot download from script.
#[wasm_bindgen]
pub fn export_snapshot() -> Result<(), JsValue> {
    with_app(|ctx| {
        crate::export::download_snapshot(&ctx.document)
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    })
}
