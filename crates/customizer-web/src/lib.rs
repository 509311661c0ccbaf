#![cfg(target_arch = "wasm32")]
use customizer_core::Mode;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod app;
pub mod bridge;
pub mod constants;
pub mod dom;
pub mod export;
pub mod layout;
pub mod listeners;
pub mod upload;
pub mod view;
pub mod widgets;

use app::AppContext;
use constants::{CUSTOMIZE_BUTTON_ID, EXIT_BUTTON_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("customizer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_mode_buttons(ctx: &AppContext) {
    let store = ctx.store.clone();
    dom::add_click_listener(&ctx.document, CUSTOMIZE_BUTTON_ID, move || {
        store.borrow_mut().set_mode(Mode::Editing);
    });
    let store = ctx.store.clone();
    dom::add_click_listener(&ctx.document, EXIT_BUTTON_ID, move || {
        store.borrow_mut().set_mode(Mode::Intro);
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = AppContext::new(document);
    view::build_pickers(&ctx)?;
    view::render_all(&ctx.document, ctx.store.borrow().state());
    view::subscribe(&ctx);

    wire_mode_buttons(&ctx);
    widgets::wire_widgets(&ctx);
    upload::wire_upload(&ctx)?;
    export::wire_download(&ctx);

    bridge::install(ctx);
    log::info!("[state] customizer ready");
    Ok(())
}
