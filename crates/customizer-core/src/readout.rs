//! Visibility of the numeric label next to a slider thumb.
//!
//! Hover and drag are tracked separately and an active drag keeps the label
//! up: leaving the thumb mid-drag does not hide it, and releasing the drag
//! only hides it when the pointer is no longer over the thumb. Every event is
//! applied immediately; there are no pending hide timers to cancel.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadoutEvent {
    HoverStart,
    HoverEnd,
    DragStart,
    DragEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    hovered: bool,
    dragging: bool,
}

impl Readout {
    pub fn apply(&mut self, event: ReadoutEvent) -> Visibility {
        match event {
            ReadoutEvent::HoverStart => self.hovered = true,
            ReadoutEvent::HoverEnd => self.hovered = false,
            ReadoutEvent::DragStart => self.dragging = true,
            ReadoutEvent::DragEnd => self.dragging = false,
        }
        self.visibility()
    }

    pub fn visibility(&self) -> Visibility {
        if self.dragging || self.hovered {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Visible
    }
}

/// Scale readout, two decimals with halves rounded up (`0.125` reads `0.13`).
pub fn scale_label(scale: f32) -> String {
    format!("{:.2}", (scale * 100.0).round() / 100.0)
}

/// Rotation readout in whole degrees.
pub fn rotation_label(radians: f32) -> String {
    format!("{}°", rotation_degrees(radians))
}

#[inline]
pub fn rotation_degrees(radians: f32) -> i32 {
    radians.to_degrees().round() as i32
}
