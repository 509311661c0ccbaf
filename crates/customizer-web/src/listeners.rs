//! Scoped event-listener registrations.
//!
//! A [`WindowListener`] removes itself from the window when dropped, so a drag
//! session that owns its listeners releases them on every way it can end.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WindowListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl WindowListener {
    pub fn pointer(
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: window.into(),
            event,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::error!("[listeners] failed to remove {}: {:?}", self.event, e);
        }
    }
}
