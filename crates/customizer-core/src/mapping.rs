//! Linear mapping between a widget's pixel space and a parameter range.
//!
//! A handle of size `thumb_size` travels along a track of `track_length`
//! pixels, so its top-left corner moves over `[0, track_length - thumb_size]`.
//! The free functions are the raw contract; [`LinearMap`] and [`BoxMap`] bundle
//! a range with a validated [`Track`] for the three customizer widgets.

use crate::constants::{
    DECAL_ROTATION_MAX, DECAL_ROTATION_MIN, DECAL_SCALE_MAX, DECAL_SCALE_MIN, DECAL_X_MAX,
    DECAL_X_MIN, DECAL_Y_MAX, DECAL_Y_MIN, POSITION_BOX_SIZE, POSITION_DOT_SIZE,
    SLIDER_THUMB_SIZE, SLIDER_TRACK_WIDTH,
};
use crate::error::{CustomizerError, Result};
use glam::Vec2;

#[inline]
fn travel(track_length: f32, thumb_size: f32) -> f32 {
    let travel = track_length - thumb_size;
    assert!(
        travel > 0.0,
        "widget track {track_length}px leaves no travel for a {thumb_size}px thumb"
    );
    travel
}

/// Clamp a handle offset to the track's travel.
#[inline]
pub fn clamp_pixel(pixel: f32, track_length: f32, thumb_size: f32) -> f32 {
    pixel.clamp(0.0, travel(track_length, thumb_size))
}

/// Handle offset (px) for `value` in `[min, max]`.
#[inline]
pub fn value_to_pixel(value: f32, min: f32, max: f32, track_length: f32, thumb_size: f32) -> f32 {
    debug_assert!(max > min, "empty value range [{min}, {max}]");
    let t = (value.clamp(min, max) - min) / (max - min);
    t * travel(track_length, thumb_size)
}

/// Value for a handle offset (px); the offset is clamped to the travel first.
#[inline]
pub fn pixel_to_value(pixel: f32, min: f32, max: f32, track_length: f32, thumb_size: f32) -> f32 {
    let travel = travel(track_length, thumb_size);
    let px = pixel.clamp(0.0, travel);
    (px / travel) * (max - min) + min
}

/// Track length and handle size of one widget axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    length: f32,
    thumb: f32,
}

impl Track {
    /// Validate a measured geometry. Tracks without travel are rejected.
    pub fn new(length: f32, thumb: f32) -> Result<Self> {
        if !(length.is_finite() && thumb.is_finite()) || length - thumb <= 0.0 {
            return Err(CustomizerError::MalformedWidgetGeometry(format!(
                "track {length}px leaves no travel for a {thumb}px thumb"
            )));
        }
        Ok(Self { length, thumb })
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn thumb(&self) -> f32 {
        self.thumb
    }

    #[inline]
    pub fn travel(&self) -> f32 {
        self.length - self.thumb
    }
}

/// Semantic value range of one axis. `inverted` flips the pixel direction so
/// that larger pixel offsets mean smaller values (screen y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub min: f32,
    pub max: f32,
    pub inverted: bool,
}

impl Axis {
    pub const fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            inverted: false,
        }
    }

    pub const fn inverted(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            inverted: true,
        }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// One-dimensional mapping used by the sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub axis: Axis,
    pub track: Track,
}

impl LinearMap {
    pub fn new(axis: Axis, track: Track) -> Self {
        Self { axis, track }
    }

    pub fn scale_slider() -> Self {
        Self::new(
            Axis::new(DECAL_SCALE_MIN, DECAL_SCALE_MAX),
            Track {
                length: SLIDER_TRACK_WIDTH,
                thumb: SLIDER_THUMB_SIZE,
            },
        )
    }

    pub fn rotation_slider() -> Self {
        Self::new(
            Axis::new(DECAL_ROTATION_MIN, DECAL_ROTATION_MAX),
            Track {
                length: SLIDER_TRACK_WIDTH,
                thumb: SLIDER_THUMB_SIZE,
            },
        )
    }

    pub fn to_pixel(&self, value: f32) -> f32 {
        let px = value_to_pixel(
            value,
            self.axis.min,
            self.axis.max,
            self.track.length,
            self.track.thumb,
        );
        if self.axis.inverted {
            self.track.travel() - px
        } else {
            px
        }
    }

    pub fn to_value(&self, pixel: f32) -> f32 {
        let px = clamp_pixel(pixel, self.track.length, self.track.thumb);
        let px = if self.axis.inverted {
            self.track.travel() - px
        } else {
            px
        };
        pixel_to_value(
            px,
            self.axis.min,
            self.axis.max,
            self.track.length,
            self.track.thumb,
        )
    }
}

/// Two independent axes for the position box; y is inverted so "up" is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMap {
    pub x: LinearMap,
    pub y: LinearMap,
}

impl BoxMap {
    pub fn position_box() -> Self {
        let track = Track {
            length: POSITION_BOX_SIZE,
            thumb: POSITION_DOT_SIZE,
        };
        Self {
            x: LinearMap::new(Axis::new(DECAL_X_MIN, DECAL_X_MAX), track),
            y: LinearMap::new(Axis::inverted(DECAL_Y_MIN, DECAL_Y_MAX), track),
        }
    }

    /// Top-left offset of the handle for a decal position.
    pub fn to_pixel(&self, value: Vec2) -> Vec2 {
        Vec2::new(self.x.to_pixel(value.x), self.y.to_pixel(value.y))
    }

    pub fn to_value(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(self.x.to_value(pixel.x), self.y.to_value(pixel.y))
    }

    /// Handle size along both axes.
    pub fn thumb(&self) -> Vec2 {
        Vec2::new(self.x.track.thumb(), self.y.track.thumb())
    }
}
