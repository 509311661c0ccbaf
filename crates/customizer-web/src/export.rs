use crate::app::AppContext;
use crate::constants::{DOWNLOAD_BUTTON_ID, RENDER_CANVAS_SELECTOR};
use crate::dom;
use anyhow::anyhow;
use customizer_core::export::{download_href, snapshot_file_name};
use customizer_core::SNAPSHOT_MIME;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Serialize the render canvas and offer it as a download.
pub fn download_snapshot(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .query_selector(RENDER_CANVAS_SELECTOR)
        .map_err(|e| anyhow!("canvas lookup: {:?}", e))?
        .ok_or_else(|| anyhow!("no render canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("render target is not a canvas: {:?}", e))?;
    let data_url = canvas
        .to_data_url_with_type(SNAPSHOT_MIME)
        .map_err(|e| anyhow!("canvas encode: {:?}", e))?;
    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("create link: {:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow!("link is not an anchor: {:?}", e))?;
    link.set_download(snapshot_file_name());
    link.set_href(&download_href(&data_url));
    link.click();
    log::info!("[export] offered {} ({} bytes)", snapshot_file_name(), data_url.len());
    Ok(())
}

pub fn wire_download(ctx: &AppContext) {
    let document = ctx.document.clone();
    dom::add_click_listener(&ctx.document, DOWNLOAD_BUTTON_ID, move || {
        if let Err(e) = download_snapshot(&document) {
            log::error!("[export] {:?}", e);
        }
    });
}
