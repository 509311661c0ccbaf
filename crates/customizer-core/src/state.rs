//! Session customization state and the store that owns it.
//!
//! The store is the only writer of [`CustomizationState`]. Every accessor clamps
//! its input into the legal range, and subscribers are notified synchronously
//! with the new state and a [`Change`] tag after each effective write. The web
//! front-end re-renders widgets from these notifications and the external 3D
//! renderer reads the same snapshots.

use crate::constants::{
    decal_position_max, decal_position_min, default_decal_position, DECAL_ROTATION_MAX,
    DECAL_ROTATION_MIN, DECAL_SCALE_MAX, DECAL_SCALE_MIN, DECAL_THUMB_SUFFIX,
    DEFAULT_DECAL_ROTATION, DEFAULT_DECAL_SCALE, LOGO_ASSET,
};
use crate::error::{CustomizerError, Result};
use glam::Vec2;
use smallvec::SmallVec;

/// Which panel of the overlay is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Intro,
    Editing,
}

/// Fixed base-color palette of the garment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Silver,
    #[default]
    Gold,
    Green,
    Violet,
    Coral,
    Charcoal,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Silver,
        PaletteColor::Gold,
        PaletteColor::Green,
        PaletteColor::Violet,
        PaletteColor::Coral,
        PaletteColor::Charcoal,
    ];

    /// CSS color string.
    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Silver => "#ccc",
            PaletteColor::Gold => "#EFBD4E",
            PaletteColor::Green => "#80C670",
            PaletteColor::Violet => "#726DE8",
            PaletteColor::Coral => "#EF674E",
            PaletteColor::Charcoal => "#353934",
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.hex().eq_ignore_ascii_case(hex))
    }
}

/// Decals that ship with the customizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetDecal {
    React,
    Three2,
    Pmndrs,
}

impl PresetDecal {
    pub const ALL: [PresetDecal; 3] = [
        PresetDecal::React,
        PresetDecal::Three2,
        PresetDecal::Pmndrs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PresetDecal::React => "react",
            PresetDecal::Three2 => "three2",
            PresetDecal::Pmndrs => "pmndrs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Thumbnail asset shown in the decal picker.
    pub fn thumbnail(self) -> String {
        format!("{}{}", self.name(), DECAL_THUMB_SUFFIX)
    }
}

/// A user-supplied decal image, already decoded by the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomImage {
    /// `data:` URL of the original file bytes.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

impl CustomImage {
    /// Images without area or without data cannot be shown as a decal.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CustomizerError::DecodeFailure(format!(
                "invalid image dimensions {}x{}",
                self.width, self.height
            )));
        }
        if self.data_url.is_empty() {
            return Err(CustomizerError::DecodeFailure("empty image data".to_string()));
        }
        Ok(())
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Selected decal. The custom variant owns its image, so an image exists
/// exactly when the custom decal is selected.
#[derive(Clone, Debug, PartialEq)]
pub enum Decal {
    Preset(PresetDecal),
    Custom(CustomImage),
}

impl Decal {
    pub const CUSTOM_NAME: &'static str = "custom";

    pub fn name(&self) -> &'static str {
        match self {
            Decal::Preset(p) => p.name(),
            Decal::Custom(_) => Self::CUSTOM_NAME,
        }
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Decal::Custom(_))
    }
}

impl Default for Decal {
    fn default() -> Self {
        Decal::Preset(PresetDecal::Three2)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomizationState {
    pub mode: Mode,
    pub color: PaletteColor,
    pub decal: Decal,
    pub decal_position: Vec2,
    pub decal_scale: f32,
    /// Radians.
    pub decal_rotation: f32,
    pub logo: &'static str,
}

impl CustomizationState {
    pub fn custom_image(&self) -> Option<&CustomImage> {
        match &self.decal {
            Decal::Custom(img) => Some(img),
            Decal::Preset(_) => None,
        }
    }

    /// Aspect of the active decal image; presets are square.
    pub fn decal_aspect(&self) -> f32 {
        self.custom_image().map_or(1.0, CustomImage::aspect_ratio)
    }
}

impl Default for CustomizationState {
    fn default() -> Self {
        Self {
            mode: Mode::Intro,
            color: PaletteColor::default(),
            decal: Decal::default(),
            decal_position: default_decal_position(),
            decal_scale: DEFAULT_DECAL_SCALE,
            decal_rotation: DEFAULT_DECAL_ROTATION,
            logo: LOGO_ASSET,
        }
    }
}

/// Field touched by a store write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Mode,
    Color,
    Decal,
    DecalPosition,
    DecalScale,
    DecalRotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscribers get the post-write state. They must not write back into the
/// store from inside the callback.
pub type Subscriber = Box<dyn FnMut(&CustomizationState, Change)>;

pub struct StateStore {
    state: CustomizationState,
    subscribers: SmallVec<[(SubscriptionId, Subscriber); 4]>,
    next_id: u64,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(CustomizationState::default())
    }
}

impl StateStore {
    pub fn new(state: CustomizationState) -> Self {
        Self {
            state,
            subscribers: SmallVec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> &CustomizationState {
        &self.state
    }

    pub fn snapshot(&self) -> CustomizationState {
        self.state.clone()
    }

    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&CustomizationState, Change) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: Change) {
        log::debug!("[state] {:?} changed", change);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state, change);
        }
    }

    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.state.mode == mode {
            return false;
        }
        self.state.mode = mode;
        self.notify(Change::Mode);
        true
    }

    pub fn set_color(&mut self, color: PaletteColor) -> bool {
        if self.state.color == color {
            return false;
        }
        self.state.color = color;
        self.notify(Change::Color);
        true
    }

    /// Select a shipped decal, discarding any uploaded image.
    pub fn select_preset_decal(&mut self, decal: PresetDecal) -> bool {
        if self.state.decal == Decal::Preset(decal) {
            return false;
        }
        self.state.decal = Decal::Preset(decal);
        self.notify(Change::Decal);
        true
    }

    /// Switch to the custom decal and install its image in one write. Images
    /// that fail [`CustomImage::validate`] leave the state untouched.
    pub fn publish_custom_image(&mut self, image: CustomImage) -> Result<()> {
        image.validate()?;
        log::info!(
            "[state] custom decal {}x{} (aspect {:.3})",
            image.width,
            image.height,
            image.aspect_ratio()
        );
        self.state.decal = Decal::Custom(image);
        self.notify(Change::Decal);
        Ok(())
    }

    pub fn set_decal_position(&mut self, position: Vec2) -> bool {
        if !position.is_finite() {
            log::warn!("[state] ignoring non-finite decal position {:?}", position);
            return false;
        }
        let clamped = position.clamp(decal_position_min(), decal_position_max());
        if self.state.decal_position == clamped {
            return false;
        }
        self.state.decal_position = clamped;
        self.notify(Change::DecalPosition);
        true
    }

    pub fn set_decal_scale(&mut self, scale: f32) -> bool {
        if !scale.is_finite() {
            log::warn!("[state] ignoring non-finite decal scale {}", scale);
            return false;
        }
        let clamped = scale.clamp(DECAL_SCALE_MIN, DECAL_SCALE_MAX);
        if self.state.decal_scale == clamped {
            return false;
        }
        self.state.decal_scale = clamped;
        self.notify(Change::DecalScale);
        true
    }

    pub fn set_decal_rotation(&mut self, radians: f32) -> bool {
        if !radians.is_finite() {
            log::warn!("[state] ignoring non-finite decal rotation {}", radians);
            return false;
        }
        let clamped = radians.clamp(DECAL_ROTATION_MIN, DECAL_ROTATION_MAX);
        if self.state.decal_rotation == clamped {
            return false;
        }
        self.state.decal_rotation = clamped;
        self.notify(Change::DecalRotation);
        true
    }
}
