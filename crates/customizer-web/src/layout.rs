// Pure style computations for the widget handles and readouts.

use customizer_core::{BoxMap, CustomizationState, LinearMap, Visibility};

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// `left`/`top` of the position dot inside its box.
pub fn position_dot_offset(state: &CustomizationState) -> (f32, f32) {
    let p = BoxMap::position_box().to_pixel(state.decal_position);
    (p.x, p.y)
}

/// `left` of the scale thumb inside its track.
pub fn scale_thumb_left(state: &CustomizationState) -> f32 {
    LinearMap::scale_slider().to_pixel(state.decal_scale)
}

/// `left` of the rotation thumb inside its track.
pub fn rotation_thumb_left(state: &CustomizationState) -> f32 {
    LinearMap::rotation_slider().to_pixel(state.decal_rotation)
}

#[inline]
pub fn readout_opacity(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Visible => "1",
        Visibility::Hidden => "0",
    }
}
