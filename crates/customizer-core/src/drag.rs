//! Pointer-drag sessions for the position box and the two sliders.
//!
//! A session is created on pointer-down with the widget's measured rect and
//! the pointer position, and belongs to the pointer that pressed. It captures everything the move handler needs in a
//! [`DragGeometry`] value, so each later pointer position maps to a parameter
//! value without reading the DOM again.

use crate::constants::SLIDER_VALUE_DECIMALS;
use crate::error::{CustomizerError, Result};
use crate::mapping::{BoxMap, LinearMap};
use crate::state::{CustomizationState, StateStore};
use glam::Vec2;

/// The three draggable widgets of the customizer panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Widget {
    PositionBox,
    ScaleSlider,
    RotationSlider,
}

impl Widget {
    pub const ALL: [Widget; 3] = [
        Widget::PositionBox,
        Widget::ScaleSlider,
        Widget::RotationSlider,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Widget::PositionBox => 0,
            Widget::ScaleSlider => 1,
            Widget::RotationSlider => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Widget::PositionBox => "position",
            Widget::ScaleSlider => "scale",
            Widget::RotationSlider => "rotation",
        }
    }
}

/// Client-space bounding rect of a widget, as measured on pointer-down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Geometry captured at drag start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGeometry {
    /// Top-left of the widget in client px.
    pub origin: Vec2,
    /// Pointer offset from the handle centre at grab time.
    pub grab_offset: Vec2,
    /// Handle size in px.
    pub thumb: Vec2,
}

impl DragGeometry {
    /// Unclamped top-left handle offset for a client-space pointer position.
    #[inline]
    pub fn handle_offset(&self, pointer: Vec2) -> Vec2 {
        pointer - self.origin - self.grab_offset - self.thumb * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragTarget {
    Position(BoxMap),
    Scale(LinearMap),
    Rotation(LinearMap),
}

/// Parameter value produced by one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragValue {
    Position(Vec2),
    Scale(f32),
    Rotation(f32),
}

/// Browser `pointerId` of the pointer driving a session.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    widget: Widget,
    pointer_id: PointerId,
    geometry: DragGeometry,
    target: DragTarget,
}

impl DragSession {
    /// Start dragging `widget`. Fails when the widget measured to nothing,
    /// e.g. because its panel is not laid out.
    pub fn begin(
        widget: Widget,
        pointer_id: PointerId,
        rect: WidgetRect,
        pointer: Vec2,
        state: &CustomizationState,
    ) -> Result<Self> {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(CustomizerError::MalformedWidgetGeometry(format!(
                "{} widget measured {}x{}",
                widget.label(),
                rect.width,
                rect.height
            )));
        }
        let (target, thumb, grab_offset) = match widget {
            Widget::PositionBox => {
                let map = BoxMap::position_box();
                let thumb = map.thumb();
                let handle_center =
                    rect.origin() + map.to_pixel(state.decal_position) + thumb * 0.5;
                (DragTarget::Position(map), thumb, pointer - handle_center)
            }
            Widget::ScaleSlider => {
                let map = LinearMap::scale_slider();
                (DragTarget::Scale(map), Vec2::splat(map.track.thumb()), Vec2::ZERO)
            }
            Widget::RotationSlider => {
                let map = LinearMap::rotation_slider();
                (DragTarget::Rotation(map), Vec2::splat(map.track.thumb()), Vec2::ZERO)
            }
        };
        let geometry = DragGeometry {
            origin: rect.origin(),
            grab_offset,
            thumb,
        };
        log::debug!(
            "[drag] begin {} pointer {} at ({:.1},{:.1}) offset ({:.1},{:.1})",
            widget.label(),
            pointer_id,
            pointer.x,
            pointer.y,
            grab_offset.x,
            grab_offset.y
        );
        Ok(Self {
            widget,
            pointer_id,
            geometry,
            target,
        })
    }

    #[inline]
    pub fn widget(&self) -> Widget {
        self.widget
    }

    #[inline]
    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    #[inline]
    pub fn owns(&self, pointer_id: PointerId) -> bool {
        self.pointer_id == pointer_id
    }

    #[inline]
    pub fn geometry(&self) -> &DragGeometry {
        &self.geometry
    }

    /// Map a client-space pointer position to the widget's parameter value.
    pub fn value_at(&self, pointer: Vec2) -> DragValue {
        let offset = self.geometry.handle_offset(pointer);
        match self.target {
            DragTarget::Position(map) => DragValue::Position(map.to_value(offset)),
            DragTarget::Scale(map) => DragValue::Scale(round_to_decimals(
                map.to_value(offset.x),
                SLIDER_VALUE_DECIMALS,
            )),
            DragTarget::Rotation(map) => DragValue::Rotation(truncate_to_decimals(
                map.to_value(offset.x),
                SLIDER_VALUE_DECIMALS,
            )),
        }
    }

    /// Handle one pointer move: compute the value and write it to the store.
    pub fn apply(&self, store: &mut StateStore, pointer: Vec2) -> bool {
        match self.value_at(pointer) {
            DragValue::Position(p) => store.set_decal_position(p),
            DragValue::Scale(s) => store.set_decal_scale(s),
            DragValue::Rotation(r) => store.set_decal_rotation(r),
        }
    }
}

/// Anything the registry holds per widget: the session itself, or the session
/// bundled with the resources the front-end keeps alive for it.
pub trait ActiveSession {
    fn session(&self) -> &DragSession;
}

impl ActiveSession for DragSession {
    #[inline]
    fn session(&self) -> &DragSession {
        self
    }
}

/// At most one drag per widget; widgets drag independently of each other.
/// `T` is whatever the front-end keeps alive for the session, such as its
/// listener registrations. Dropping a `T` ends its session's resources.
pub struct DragRegistry<T> {
    slots: [Option<T>; 3],
}

impl<T> Default for DragRegistry<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None],
        }
    }
}

impl<T> DragRegistry<T> {
    /// Install a session for `widget`, returning the one it replaces.
    pub fn start(&mut self, widget: Widget, session: T) -> Option<T> {
        self.slots[widget.index()].replace(session)
    }

    pub fn end(&mut self, widget: Widget) -> Option<T> {
        self.slots[widget.index()].take()
    }

    pub fn get(&self, widget: Widget) -> Option<&T> {
        self.slots[widget.index()].as_ref()
    }

    pub fn is_active(&self, widget: Widget) -> bool {
        self.slots[widget.index()].is_some()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<T: ActiveSession> DragRegistry<T> {
    /// The session of `widget`, if `pointer_id` is the pointer driving it.
    pub fn session_for(&self, widget: Widget, pointer_id: PointerId) -> Option<DragSession> {
        self.get(widget)
            .map(T::session)
            .filter(|s| s.owns(pointer_id))
            .copied()
    }

    /// Route one pointer move to `widget`'s session. Moves of other pointers
    /// are ignored.
    pub fn pointer_move(
        &self,
        widget: Widget,
        pointer_id: PointerId,
        pointer: Vec2,
        store: &mut StateStore,
    ) -> bool {
        match self.session_for(widget, pointer_id) {
            Some(session) => session.apply(store, pointer),
            None => false,
        }
    }

    /// End `widget`'s drag when its own pointer lifts or is cancelled and hand
    /// back what the session owned. Other pointers leave the drag running.
    pub fn release(&mut self, widget: Widget, pointer_id: PointerId) -> Option<T> {
        self.session_for(widget, pointer_id)?;
        self.end(widget)
    }
}

#[inline]
pub fn round_to_decimals(value: f32, decimals: i32) -> f32 {
    let f = 10f32.powi(decimals);
    (value * f).round() / f
}

#[inline]
pub fn truncate_to_decimals(value: f32, decimals: i32) -> f32 {
    let f = 10f32.powi(decimals);
    (value * f).trunc() / f
}
