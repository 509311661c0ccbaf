//! Custom decal upload: validate the picked file, decode it in the browser and
//! publish the result to the store.

use crate::app::AppContext;
use crate::constants::UPLOAD_INPUT_ID;
use crate::dom;
use customizer_core::{CustomizerError, UPLOAD_ACCEPT_ATTR};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn read_data_url(file: &web::File) -> Result<String, CustomizerError> {
    let reader = web::FileReader::new()
        .map_err(|e| CustomizerError::DecodeFailure(format!("FileReader: {:?}", e)))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_onload = reader.clone();
        let onload = Closure::once(move || {
            let result = reader_onload.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file_read_failed"));
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| CustomizerError::DecodeFailure(format!("read: {:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| CustomizerError::DecodeFailure(format!("read: {:?}", e)))?;
    value
        .as_string()
        .ok_or_else(|| CustomizerError::DecodeFailure("reader returned no data URL".to_string()))
}

async fn decode_dimensions(data_url: &str) -> Result<(u32, u32), CustomizerError> {
    let img = web::HtmlImageElement::new()
        .map_err(|e| CustomizerError::DecodeFailure(format!("image element: {:?}", e)))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    img.set_src(data_url);
    JsFuture::from(promise)
        .await
        .map_err(|e| CustomizerError::DecodeFailure(format!("decode: {:?}", e)))?;
    Ok((img.natural_width(), img.natural_height()))
}

fn report(err: &CustomizerError) {
    log::warn!("[upload] {}", err);
    if let Some(notice) = err.user_notice() {
        dom::alert(notice);
    }
}

fn handle_file(ctx: &AppContext, file: web::File) {
    let mime = file.type_();
    let accepted = ctx.intake.borrow_mut().accept(&mime);
    let (ticket, _kind) = match accepted {
        Ok(t) => t,
        Err(e) => {
            report(&e);
            return;
        }
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        let decoded = match read_data_url(&file).await {
            Ok(data_url) => decode_dimensions(&data_url)
                .await
                .map(|(w, h)| (data_url, w, h)),
            Err(e) => Err(e),
        };
        let result = decoded.and_then(|(data_url, w, h)| {
            let intake = ctx.intake.borrow();
            intake.complete(ticket, &mut ctx.store.borrow_mut(), data_url, w, h)
        });
        if let Err(e) = result {
            report(&e);
        }
    });
}

pub fn wire_upload(ctx: &AppContext) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::element_by_id(&ctx.document, UPLOAD_INPUT_ID)?;
    input.set_accept(UPLOAD_ACCEPT_ATTR);
    let ctx_change = ctx.clone();
    let input_change = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let file = input_change.files().and_then(|files| files.get(0));
        // Clear so picking the same file again still fires `change`.
        input_change.set_value("");
        if let Some(file) = file {
            handle_file(&ctx_change, file);
        }
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("upload listener: {:?}", e))?;
    closure.forget();
    Ok(())
}
