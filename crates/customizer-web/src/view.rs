//! DOM rendering driven by store notifications.

use crate::app::AppContext;
use crate::constants::{
    ACCENT_ELEMENT_IDS, COLOR_OPTIONS_ID, COLOR_SWATCH_CLASS, CUSTOMIZER_SECTION_ID,
    DECALS_CONTAINER_ID, DECAL_OPTION_CLASS, HEADER_LOGO_ID, INTRO_SECTION_ID, POSITION_DOT_ID,
    ROTATION_READOUT_ID, ROTATION_THUMB_ID, SCALE_READOUT_ID, SCALE_THUMB_ID, SELECTED_CLASS,
};
use crate::dom;
use crate::layout;
use customizer_core::{
    rotation_label, scale_label, Change, CustomizationState, Decal, Mode, PaletteColor,
    PresetDecal, Visibility, Widget,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn swatch_id(color: PaletteColor) -> String {
    format!("color-swatch-{}", color.hex().trim_start_matches('#'))
}

fn decal_option_id(decal: PresetDecal) -> String {
    format!("decal-option-{}", decal.name())
}

fn mark_selected(document: &web::Document, id: &str, selected: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().toggle_with_force(SELECTED_CLASS, selected);
    }
}

fn render_mode(document: &web::Document, state: &CustomizationState) {
    let editing = state.mode == Mode::Editing;
    dom::set_shown(document, INTRO_SECTION_ID, !editing);
    dom::set_shown(document, CUSTOMIZER_SECTION_ID, editing);
}

fn render_color(document: &web::Document, state: &CustomizationState) {
    for id in ACCENT_ELEMENT_IDS {
        dom::set_style(document, id, "background", state.color.hex());
    }
    for color in PaletteColor::ALL {
        mark_selected(document, &swatch_id(color), color == state.color);
    }
}

fn render_decal(document: &web::Document, state: &CustomizationState) {
    for preset in PresetDecal::ALL {
        let selected = matches!(state.decal, Decal::Preset(p) if p == preset);
        mark_selected(document, &decal_option_id(preset), selected);
    }
}

fn render_position(document: &web::Document, state: &CustomizationState) {
    let (left, top) = layout::position_dot_offset(state);
    dom::set_style(document, POSITION_DOT_ID, "left", &layout::px(left));
    dom::set_style(document, POSITION_DOT_ID, "top", &layout::px(top));
}

fn render_scale(document: &web::Document, state: &CustomizationState) {
    let left = layout::scale_thumb_left(state);
    dom::set_style(document, SCALE_THUMB_ID, "left", &layout::px(left));
    dom::set_text(document, SCALE_READOUT_ID, &scale_label(state.decal_scale));
}

fn render_rotation(document: &web::Document, state: &CustomizationState) {
    let left = layout::rotation_thumb_left(state);
    dom::set_style(document, ROTATION_THUMB_ID, "left", &layout::px(left));
    dom::set_text(
        document,
        ROTATION_READOUT_ID,
        &rotation_label(state.decal_rotation),
    );
}

pub fn render_change(document: &web::Document, state: &CustomizationState, change: Change) {
    match change {
        Change::Mode => render_mode(document, state),
        Change::Color => render_color(document, state),
        Change::Decal => render_decal(document, state),
        Change::DecalPosition => render_position(document, state),
        Change::DecalScale => render_scale(document, state),
        Change::DecalRotation => render_rotation(document, state),
    }
}

pub fn render_all(document: &web::Document, state: &CustomizationState) {
    if let Some(el) = document.get_element_by_id(HEADER_LOGO_ID) {
        let _ = el.set_attribute("src", state.logo);
    }
    render_mode(document, state);
    render_color(document, state);
    render_decal(document, state);
    render_position(document, state);
    render_scale(document, state);
    render_rotation(document, state);
    render_readout(document, Widget::ScaleSlider, Visibility::Hidden);
    render_readout(document, Widget::RotationSlider, Visibility::Hidden);
}

pub fn render_readout(document: &web::Document, widget: Widget, visibility: Visibility) {
    let id = match widget {
        Widget::ScaleSlider => SCALE_READOUT_ID,
        Widget::RotationSlider => ROTATION_READOUT_ID,
        Widget::PositionBox => return,
    };
    dom::set_style(document, id, "opacity", layout::readout_opacity(visibility));
}

fn append_option(
    document: &web::Document,
    container: &web::Element,
    id: &str,
    class: &str,
    mut on_click: impl FnMut() + 'static,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create option: {:?}", e))?;
    el.set_id(id);
    el.set_class_name(class);
    container
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append option: {:?}", e))?;
    let closure = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(el)
}

/// Populate the color swatches and preset decal thumbnails.
pub fn build_pickers(ctx: &AppContext) -> anyhow::Result<()> {
    let document = &ctx.document;
    let colors: web::Element = dom::element_by_id(document, COLOR_OPTIONS_ID)?;
    for color in PaletteColor::ALL {
        let store = ctx.store.clone();
        let el = append_option(
            document,
            &colors,
            &swatch_id(color),
            COLOR_SWATCH_CLASS,
            move || {
                store.borrow_mut().set_color(color);
            },
        )?;
        let _ = el.set_attribute("style", &format!("background: {}", color.hex()));
    }

    let decals: web::Element = dom::element_by_id(document, DECALS_CONTAINER_ID)?;
    // Presets go in front of the upload affordance that the page already holds.
    let upload_slot = decals.first_element_child();
    for preset in PresetDecal::ALL {
        let store = ctx.store.clone();
        let el = append_option(
            document,
            &decals,
            &decal_option_id(preset),
            DECAL_OPTION_CLASS,
            move || {
                store.borrow_mut().select_preset_decal(preset);
            },
        )?;
        if let Some(slot) = &upload_slot {
            let slot: &web::Node = slot;
            let _ = decals.insert_before(&el, Some(slot));
        }
        let img = document
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("create thumbnail: {:?}", e))?;
        let _ = img.set_attribute("src", &preset.thumbnail());
        let _ = img.set_attribute("alt", "brand");
        el.append_child(&img)
            .map_err(|e| anyhow::anyhow!("append thumbnail: {:?}", e))?;
    }
    Ok(())
}

/// Keep the DOM in step with the store for the rest of the session.
pub fn subscribe(ctx: &AppContext) {
    let document = ctx.document.clone();
    ctx.store
        .borrow_mut()
        .subscribe(move |state, change| render_change(&document, state, change));
}
