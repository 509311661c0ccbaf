// Host-side tests for the customization state store.

use customizer_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_store() -> (StateStore, Rc<RefCell<Vec<Change>>>) {
    let mut store = StateStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |_state, change| sink.borrow_mut().push(change));
    (store, seen)
}

#[test]
fn defaults_match_session_start() {
    let state = CustomizationState::default();
    assert_eq!(state.mode, Mode::Intro);
    assert_eq!(state.color.hex(), "#EFBD4E");
    assert_eq!(state.decal.name(), "three2");
    assert_eq!(state.decal_position, Vec2::new(0.0, 0.04));
    assert_eq!(state.decal_scale, 0.15);
    assert_eq!(state.decal_rotation, 0.0);
    assert!(state.custom_image().is_none());
    assert_eq!(state.decal_aspect(), 1.0);
    assert_eq!(state.logo, LOGO_ASSET);
}

#[test]
fn setters_clamp_into_ranges() {
    let mut store = StateStore::default();
    store.set_decal_position(Vec2::new(5.0, -5.0));
    assert_eq!(store.state().decal_position, Vec2::new(DECAL_X_MAX, DECAL_Y_MIN));
    store.set_decal_scale(0.0);
    assert_eq!(store.state().decal_scale, DECAL_SCALE_MIN);
    store.set_decal_scale(3.0);
    assert_eq!(store.state().decal_scale, DECAL_SCALE_MAX);
    store.set_decal_rotation(10.0);
    assert_eq!(store.state().decal_rotation, DECAL_ROTATION_MAX);
    store.set_decal_rotation(-10.0);
    assert_eq!(store.state().decal_rotation, DECAL_ROTATION_MIN);
}

#[test]
fn non_finite_writes_are_ignored() {
    let (mut store, seen) = recording_store();
    assert!(!store.set_decal_scale(f32::NAN));
    assert!(!store.set_decal_rotation(f32::INFINITY));
    assert!(!store.set_decal_position(Vec2::new(f32::NAN, 0.0)));
    assert_eq!(store.snapshot(), CustomizationState::default());
    assert!(seen.borrow().is_empty());
}

#[test]
fn subscribers_see_each_effective_write() {
    let (mut store, seen) = recording_store();
    assert!(store.set_mode(Mode::Editing));
    assert!(store.set_color(PaletteColor::Violet));
    assert!(store.set_decal_scale(0.3));
    // unchanged values do not notify
    assert!(!store.set_mode(Mode::Editing));
    assert!(!store.set_color(PaletteColor::Violet));
    assert_eq!(
        *seen.borrow(),
        vec![Change::Mode, Change::Color, Change::DecalScale]
    );
}

#[test]
fn subscribers_receive_post_write_state() {
    let mut store = StateStore::default();
    let last = Rc::new(RefCell::new(None));
    let sink = last.clone();
    store.subscribe(move |state, _| *sink.borrow_mut() = Some(state.decal_rotation));
    store.set_decal_rotation(1.25);
    assert_eq!(*last.borrow(), Some(1.25));
}

#[test]
fn unsubscribe_stops_notifications() {
    let (mut store, seen) = recording_store();
    let extra = Rc::new(RefCell::new(0));
    let counter = extra.clone();
    let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);
    assert_eq!(store.subscriber_count(), 2);
    store.set_color(PaletteColor::Green);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_color(PaletteColor::Coral);
    assert_eq!(*extra.borrow(), 1);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn custom_image_is_present_only_with_custom_decal() {
    let (mut store, seen) = recording_store();
    store
        .publish_custom_image(CustomImage {
            data_url: "data:image/png;base64,AAAA".to_string(),
            width: 300,
            height: 150,
        })
        .unwrap();
    assert!(store.state().decal.is_custom());
    assert_eq!(store.state().decal.name(), "custom");
    assert_eq!(store.state().decal_aspect(), 2.0);
    assert_eq!(*seen.borrow(), vec![Change::Decal]);

    assert!(store.select_preset_decal(PresetDecal::Pmndrs));
    assert!(store.state().custom_image().is_none());
    assert_eq!(store.state().decal.name(), "pmndrs");
}

#[test]
fn store_rejects_images_without_area() {
    let (mut store, seen) = recording_store();
    for (width, height) in [(10, 0), (0, 10), (0, 0)] {
        let err = store
            .publish_custom_image(CustomImage {
                data_url: "data:image/png;base64,AAAA".to_string(),
                width,
                height,
            })
            .unwrap_err();
        assert!(matches!(err, CustomizerError::DecodeFailure(_)));
    }
    let err = store
        .publish_custom_image(CustomImage {
            data_url: String::new(),
            width: 4,
            height: 4,
        })
        .unwrap_err();
    assert_eq!(err.user_notice(), Some(DECODE_FAILURE_NOTICE));

    assert!(!store.state().decal.is_custom());
    assert!(store.state().decal_aspect().is_finite());
    assert!(seen.borrow().is_empty());
}

#[test]
fn palette_and_presets_resolve_by_name() {
    assert_eq!(PaletteColor::from_hex("#efbd4e"), Some(PaletteColor::Gold));
    assert_eq!(PaletteColor::from_hex("#000"), None);
    assert_eq!(PresetDecal::from_name("react"), Some(PresetDecal::React));
    assert_eq!(PresetDecal::from_name("custom"), None);
    assert_eq!(PresetDecal::Three2.thumbnail(), "three2_thumb.png");
}
