use glam::Vec2;

// Shared tuning constants for the customizer widgets and state defaults.

// Decal placement ranges (garment UV-ish units)
pub const DECAL_X_MIN: f32 = -0.2;
pub const DECAL_X_MAX: f32 = 0.2;
pub const DECAL_Y_MIN: f32 = -0.3;
pub const DECAL_Y_MAX: f32 = 0.2;

pub const DECAL_SCALE_MIN: f32 = 0.05;
pub const DECAL_SCALE_MAX: f32 = 0.5;

pub const DECAL_ROTATION_MIN: f32 = -std::f32::consts::PI;
pub const DECAL_ROTATION_MAX: f32 = std::f32::consts::PI;

// Defaults applied at session start
pub const DEFAULT_DECAL_POSITION: [f32; 2] = [0.0, 0.04];
pub const DEFAULT_DECAL_SCALE: f32 = 0.15;
pub const DEFAULT_DECAL_ROTATION: f32 = 0.0;

// Widget geometry (CSS px)
pub const POSITION_BOX_SIZE: f32 = 120.0;
pub const POSITION_DOT_SIZE: f32 = 20.0;
pub const SLIDER_TRACK_WIDTH: f32 = POSITION_BOX_SIZE;
pub const SLIDER_THUMB_SIZE: f32 = 18.0;

// Decimal places kept when a slider writes its value
pub const SLIDER_VALUE_DECIMALS: i32 = 3;

// File intake
pub const ACCEPTED_IMAGE_MIME: [&str; 2] = ["image/png", "image/webp"];
pub const UPLOAD_ACCEPT_ATTR: &str = "image/png, image/webp";
pub const INVALID_FILE_NOTICE: &str = "Please upload a PNG or WEBP file.";
pub const DECODE_FAILURE_NOTICE: &str = "Could not read that image.";

// Assets
pub const LOGO_ASSET: &str = "logo_growm+tagline_colour_retina.webp";
pub const DECAL_THUMB_SUFFIX: &str = "_thumb.png";

// Snapshot export
pub const SNAPSHOT_FILE_NAME: &str = "canvas.png";
pub const SNAPSHOT_MIME: &str = "image/png";
pub const DOWNLOAD_MIME: &str = "image/octet-stream";

#[inline]
pub fn default_decal_position() -> Vec2 {
    Vec2::from_array(DEFAULT_DECAL_POSITION)
}

#[inline]
pub fn decal_position_min() -> Vec2 {
    Vec2::new(DECAL_X_MIN, DECAL_Y_MIN)
}

#[inline]
pub fn decal_position_max() -> Vec2 {
    Vec2::new(DECAL_X_MAX, DECAL_Y_MAX)
}
