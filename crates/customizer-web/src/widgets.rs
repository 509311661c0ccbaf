use crate::app::AppContext;
use crate::constants::{
    POSITION_BOX_ID, ROTATION_THUMB_ID, ROTATION_TRACK_ID, SCALE_THUMB_ID, SCALE_TRACK_ID,
};
use crate::listeners::WindowListener;
use crate::view;
use customizer_core::{ActiveSession, DragSession, PointerId, ReadoutEvent, Widget, WidgetRect};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A running drag: the session plus the window listeners feeding it.
pub struct ActiveDrag {
    pub session: DragSession,
    _listeners: [WindowListener; 3],
}

impl ActiveSession for ActiveDrag {
    #[inline]
    fn session(&self) -> &DragSession {
        &self.session
    }
}

#[inline]
fn client_point(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn widget_rect(el: &web::Element) -> WidgetRect {
    let r = el.get_bounding_client_rect();
    WidgetRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn apply_readout(ctx: &AppContext, widget: Widget, event: ReadoutEvent) {
    let visibility = match ctx.readouts.borrow_mut().get_mut(widget) {
        Some(readout) => readout.apply(event),
        None => return,
    };
    view::render_readout(&ctx.document, widget, visibility);
}

fn on_pointer_move(ctx: &AppContext, widget: Widget, ev: &web::PointerEvent) {
    // Copied out so the registry is not borrowed while subscribers run.
    let session = match ctx.drags.borrow().session_for(widget, ev.pointer_id()) {
        Some(session) => session,
        None => return,
    };
    session.apply(&mut ctx.store.borrow_mut(), client_point(ev));
}

fn end_drag(ctx: &AppContext, widget: Widget, pointer_id: PointerId) {
    let finished = ctx.drags.borrow_mut().release(widget, pointer_id);
    if finished.is_none() {
        return;
    }
    log::debug!("[drag] end {} pointer {}", widget.label(), pointer_id);
    apply_readout(ctx, widget, ReadoutEvent::DragEnd);
    // We are running inside one of the session's own listeners; release them
    // once this dispatch has returned.
    spawn_local(async move {
        drop(finished);
    });
}

fn session_listeners(ctx: &AppContext, widget: Widget) -> anyhow::Result<[WindowListener; 3]> {
    let move_ctx = ctx.clone();
    let on_move = WindowListener::pointer("pointermove", move |ev| {
        on_pointer_move(&move_ctx, widget, &ev);
    })?;
    let up_ctx = ctx.clone();
    let on_up = WindowListener::pointer("pointerup", move |ev| {
        end_drag(&up_ctx, widget, ev.pointer_id());
    })?;
    let cancel_ctx = ctx.clone();
    let on_cancel = WindowListener::pointer("pointercancel", move |ev| {
        end_drag(&cancel_ctx, widget, ev.pointer_id());
    })?;
    Ok([on_move, on_up, on_cancel])
}

fn begin_drag(ctx: &AppContext, widget: Widget, el: &web::Element, ev: &web::PointerEvent) {
    let session = {
        let store = ctx.store.borrow();
        DragSession::begin(
            widget,
            ev.pointer_id(),
            widget_rect(el),
            client_point(ev),
            store.state(),
        )
    };
    let session = match session {
        Ok(s) => s,
        Err(e) => {
            log::error!("[drag] cannot start {} drag: {}", widget.label(), e);
            return;
        }
    };
    let listeners = match session_listeners(ctx, widget) {
        Ok(l) => l,
        Err(e) => {
            log::error!("[drag] {:?}", e);
            return;
        }
    };
    let replaced = ctx.drags.borrow_mut().start(
        widget,
        ActiveDrag {
            session,
            _listeners: listeners,
        },
    );
    if replaced.is_some() {
        log::warn!("[drag] replaced a stale {} session", widget.label());
    }
    apply_readout(ctx, widget, ReadoutEvent::DragStart);
}

fn wire_pointer_down(ctx: &AppContext, widget: Widget, element_id: &str) {
    let el = match ctx.document.get_element_by_id(element_id) {
        Some(el) => el,
        None => {
            log::warn!("[drag] missing #{}", element_id);
            return;
        }
    };
    let ctx_down = ctx.clone();
    let el_down = el.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        begin_drag(&ctx_down, widget, &el_down, &ev);
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_hover(ctx: &AppContext, widget: Widget, thumb_id: &str) {
    let el = match ctx.document.get_element_by_id(thumb_id) {
        Some(el) => el,
        None => return,
    };
    for (event, readout_event) in [
        ("mouseenter", ReadoutEvent::HoverStart),
        ("mouseleave", ReadoutEvent::HoverEnd),
    ] {
        let ctx_hover = ctx.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            apply_readout(&ctx_hover, widget, readout_event);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_widgets(ctx: &AppContext) {
    wire_pointer_down(ctx, Widget::PositionBox, POSITION_BOX_ID);
    wire_pointer_down(ctx, Widget::ScaleSlider, SCALE_TRACK_ID);
    wire_pointer_down(ctx, Widget::RotationSlider, ROTATION_TRACK_ID);
    wire_hover(ctx, Widget::ScaleSlider, SCALE_THUMB_ID);
    wire_hover(ctx, Widget::RotationSlider, ROTATION_THUMB_ID);
}
