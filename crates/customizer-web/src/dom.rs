use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

#[inline]
pub fn set_style(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el.style().set_property(property, value);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_shown(document: &web::Document, element_id: &str, shown: bool) {
    set_style(
        document,
        element_id,
        "display",
        if shown { "" } else { "none" },
    );
}

/// Blocking user-facing notice.
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.alert_with_message(message) {
            log::error!("[dom] alert failed: {:?}", e);
        }
    }
}
