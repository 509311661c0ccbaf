// Host-side tests for drag sessions over the three customizer widgets.

use customizer_core::*;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

const EPS: f32 = 1e-5;
const MOUSE: PointerId = 1;
const TOUCH: PointerId = 7;

fn box_rect() -> WidgetRect {
    WidgetRect::new(10.0, 20.0, POSITION_BOX_SIZE, POSITION_BOX_SIZE)
}

fn track_rect() -> WidgetRect {
    WidgetRect::new(40.0, 300.0, SLIDER_TRACK_WIDTH, 8.0)
}

fn default_dot_center() -> Vec2 {
    // dot offset (50, 32) plus half the dot size
    box_rect().origin() + Vec2::new(50.0, 32.0) + Vec2::splat(POSITION_DOT_SIZE * 0.5)
}

fn begin(widget: Widget, pointer_id: PointerId, state: &CustomizationState) -> DragSession {
    let (rect, at) = match widget {
        Widget::PositionBox => (box_rect(), default_dot_center()),
        _ => (track_rect(), Vec2::new(60.0, 304.0)),
    };
    DragSession::begin(widget, pointer_id, rect, at, state).unwrap()
}

fn position_of(value: DragValue) -> Vec2 {
    match value {
        DragValue::Position(p) => p,
        other => panic!("expected a position, got {:?}", other),
    }
}

fn scalar_of(value: DragValue) -> f32 {
    match value {
        DragValue::Scale(v) | DragValue::Rotation(v) => v,
        other => panic!("expected a scalar, got {:?}", other),
    }
}

/// Session plus a stand-in for the listener registrations the web crate keeps.
struct Guarded {
    session: DragSession,
    released: Rc<Cell<usize>>,
}

impl ActiveSession for Guarded {
    fn session(&self) -> &DragSession {
        &self.session
    }
}

impl Drop for Guarded {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[test]
fn position_box_corners_map_to_range_extremes() {
    let state = CustomizationState::default();
    let session = begin(Widget::PositionBox, MOUSE, &state);

    let top_left = position_of(session.value_at(Vec2::new(-500.0, -500.0)));
    assert!((top_left.x - DECAL_X_MIN).abs() < EPS);
    assert!((top_left.y - DECAL_Y_MAX).abs() < EPS);

    let bottom_right = position_of(session.value_at(Vec2::new(900.0, 900.0)));
    assert!((bottom_right.x - DECAL_X_MAX).abs() < EPS);
    assert!((bottom_right.y - DECAL_Y_MIN).abs() < EPS);
}

#[test]
fn grab_offset_keeps_handle_under_pointer() {
    let state = CustomizationState::default();
    let grab = default_dot_center() + Vec2::new(4.0, -3.0);
    let session =
        DragSession::begin(Widget::PositionBox, MOUSE, box_rect(), grab, &state).unwrap();
    assert!((session.geometry().grab_offset - Vec2::new(4.0, -3.0)).length() < 1e-4);

    // Not moving the pointer leaves the decal where it was.
    let p = position_of(session.value_at(grab));
    assert!((p - state.decal_position).length() < 1e-4);
}

#[test]
fn scale_slider_extremes_and_midpoint() {
    let state = CustomizationState::default();
    let session = begin(Widget::ScaleSlider, MOUSE, &state);
    let left = scalar_of(session.value_at(Vec2::new(-100.0, 304.0)));
    let right = scalar_of(session.value_at(Vec2::new(1000.0, 304.0)));
    assert!((left - 0.05).abs() < 1e-6);
    assert!((right - 0.5).abs() < 1e-6);

    // thumb centre at origin + 9 + 51 px is half way along the travel
    let mid = scalar_of(session.value_at(Vec2::new(40.0 + 9.0 + 51.0, 304.0)));
    assert!((mid - 0.275).abs() < 1e-6);
}

#[test]
fn scale_values_are_rounded_to_three_decimals() {
    let state = CustomizationState::default();
    let session = begin(Widget::ScaleSlider, MOUSE, &state);
    for x in 40..170 {
        let v = scalar_of(session.value_at(Vec2::new(x as f32 + 0.37, 300.0)));
        let scaled = v * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-3, "{v} has more than 3 decimals");
    }
}

#[test]
fn rotation_slider_truncates_pi() {
    let state = CustomizationState::default();
    let session = begin(Widget::RotationSlider, MOUSE, &state);
    let left = scalar_of(session.value_at(Vec2::new(-100.0, 304.0)));
    let right = scalar_of(session.value_at(Vec2::new(1000.0, 304.0)));
    assert!((left + 3.141).abs() < 1e-6);
    assert!((right - 3.141).abs() < 1e-6);
    assert_eq!(rotation_label(left), "-180°");
    assert_eq!(rotation_label(right), "180°");
}

#[test]
fn apply_writes_into_the_store() {
    let mut store = StateStore::default();
    let session = begin(Widget::RotationSlider, MOUSE, store.state());
    assert!(session.apply(&mut store, Vec2::new(1000.0, 304.0)));
    assert!((store.state().decal_rotation - 3.141).abs() < 1e-6);
    // same pointer, same value: nothing to write
    assert!(!session.apply(&mut store, Vec2::new(1000.0, 304.0)));

    let session = begin(Widget::PositionBox, MOUSE, store.state());
    assert!(session.apply(&mut store, Vec2::new(-500.0, 900.0)));
    let p = store.state().decal_position;
    assert!((p.x - DECAL_X_MIN).abs() < EPS);
    assert!((p.y - DECAL_Y_MIN).abs() < EPS);
}

#[test]
fn zero_sized_widget_refuses_to_drag() {
    let state = CustomizationState::default();
    let err = DragSession::begin(
        Widget::ScaleSlider,
        MOUSE,
        WidgetRect::new(0.0, 0.0, 0.0, 0.0),
        Vec2::ZERO,
        &state,
    )
    .unwrap_err();
    assert_eq!(
        err,
        CustomizerError::MalformedWidgetGeometry("scale widget measured 0x0".to_string())
    );
    assert!(err.user_notice().is_none());
}

#[test]
fn session_remembers_its_pointer() {
    let state = CustomizationState::default();
    let session = begin(Widget::ScaleSlider, TOUCH, &state);
    assert_eq!(session.pointer_id(), TOUCH);
    assert!(session.owns(TOUCH));
    assert!(!session.owns(MOUSE));
}

#[test]
fn registry_keeps_one_session_per_widget() {
    let mut drags: DragRegistry<&'static str> = DragRegistry::default();
    assert_eq!(drags.start(Widget::ScaleSlider, "first"), None);
    assert_eq!(drags.start(Widget::RotationSlider, "other"), None);
    assert_eq!(drags.active_count(), 2);

    assert_eq!(drags.start(Widget::ScaleSlider, "second"), Some("first"));
    assert_eq!(drags.get(Widget::ScaleSlider), Some(&"second"));
    assert_eq!(drags.get(Widget::RotationSlider), Some(&"other"));

    assert_eq!(drags.end(Widget::ScaleSlider), Some("second"));
    assert!(!drags.is_active(Widget::ScaleSlider));
    assert!(drags.is_active(Widget::RotationSlider));
    assert_eq!(drags.end(Widget::PositionBox), None);
}

#[test]
fn second_pointer_cannot_drive_another_widget() {
    let mut store = StateStore::default();
    let mut drags: DragRegistry<DragSession> = DragRegistry::default();
    drags.start(Widget::PositionBox, begin(Widget::PositionBox, MOUSE, store.state()));
    drags.start(Widget::ScaleSlider, begin(Widget::ScaleSlider, TOUCH, store.state()));

    // One window pointermove from the mouse reaches every widget's listener.
    let far = Vec2::new(900.0, 900.0);
    assert!(drags.pointer_move(Widget::PositionBox, MOUSE, far, &mut store));
    assert!(!drags.pointer_move(Widget::ScaleSlider, MOUSE, far, &mut store));
    assert!((store.state().decal_scale - DEFAULT_DECAL_SCALE).abs() < EPS);
    assert!((store.state().decal_position.x - DECAL_X_MAX).abs() < EPS);

    // The touch still drives its own slider.
    assert!(drags.pointer_move(Widget::ScaleSlider, TOUCH, far, &mut store));
    assert!((store.state().decal_scale - DECAL_SCALE_MAX).abs() < EPS);
    assert!(drags.session_for(Widget::ScaleSlider, MOUSE).is_none());
}

#[test]
fn lifting_one_pointer_ends_only_its_own_drag() {
    let state = CustomizationState::default();
    let released = Rc::new(Cell::new(0));
    let guarded = |widget, pointer_id| Guarded {
        session: begin(widget, pointer_id, &state),
        released: released.clone(),
    };
    let mut drags: DragRegistry<Guarded> = DragRegistry::default();
    drags.start(Widget::PositionBox, guarded(Widget::PositionBox, MOUSE));
    drags.start(Widget::RotationSlider, guarded(Widget::RotationSlider, TOUCH));

    // pointerup of the mouse is seen by both widgets' listeners.
    drop(drags.release(Widget::PositionBox, MOUSE));
    assert!(drags.release(Widget::RotationSlider, MOUSE).is_none());
    assert_eq!(released.get(), 1);
    assert!(!drags.is_active(Widget::PositionBox));
    assert!(drags.is_active(Widget::RotationSlider));

    drop(drags.release(Widget::RotationSlider, TOUCH));
    assert_eq!(released.get(), 2);
    assert_eq!(drags.active_count(), 0);
}

#[test]
fn released_session_frees_its_resources_once() {
    let state = CustomizationState::default();
    let released = Rc::new(Cell::new(0));
    let mut drags: DragRegistry<Guarded> = DragRegistry::default();
    drags.start(
        Widget::ScaleSlider,
        Guarded {
            session: begin(Widget::ScaleSlider, MOUSE, &state),
            released: released.clone(),
        },
    );

    // A fresh press on the same widget replaces the stale session.
    let stale = drags.start(
        Widget::ScaleSlider,
        Guarded {
            session: begin(Widget::ScaleSlider, TOUCH, &state),
            released: released.clone(),
        },
    );
    assert!(stale.is_some());
    drop(stale);
    assert_eq!(released.get(), 1);

    let finished = drags.release(Widget::ScaleSlider, TOUCH);
    assert_eq!(released.get(), 1, "still held by the caller");
    drop(finished);
    assert_eq!(released.get(), 2);

    // pointercancel after pointerup finds nothing left to release.
    assert!(drags.release(Widget::ScaleSlider, TOUCH).is_none());
    assert_eq!(released.get(), 2);
}

#[test]
fn decimal_helpers() {
    assert_eq!(round_to_decimals(0.12345, 3), 0.123);
    assert_eq!(round_to_decimals(0.1236, 3), 0.124);
    assert_eq!(truncate_to_decimals(3.14159, 3), 3.141);
    assert_eq!(truncate_to_decimals(-3.14159, 3), -3.141);
}
