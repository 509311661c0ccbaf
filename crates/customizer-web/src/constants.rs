// DOM element ids and classes the front-end binds to.

pub const HEADER_LOGO_ID: &str = "header-logo";
pub const INTRO_SECTION_ID: &str = "intro-section";
pub const CUSTOMIZER_SECTION_ID: &str = "customizer-section";
pub const CUSTOMIZE_BUTTON_ID: &str = "customize-button";
pub const EXIT_BUTTON_ID: &str = "exit-button";
pub const DOWNLOAD_BUTTON_ID: &str = "download-button";

pub const COLOR_OPTIONS_ID: &str = "color-options";
pub const DECALS_CONTAINER_ID: &str = "decals-container";
pub const UPLOAD_INPUT_ID: &str = "decal-upload";

pub const POSITION_BOX_ID: &str = "position-box";
pub const POSITION_DOT_ID: &str = "position-dot";
pub const SCALE_TRACK_ID: &str = "scale-track";
pub const SCALE_THUMB_ID: &str = "scale-thumb";
pub const SCALE_READOUT_ID: &str = "scale-readout";
pub const ROTATION_TRACK_ID: &str = "rotation-track";
pub const ROTATION_THUMB_ID: &str = "rotation-thumb";
pub const ROTATION_READOUT_ID: &str = "rotation-readout";

// Canvas the external renderer draws the garment into
pub const RENDER_CANVAS_SELECTOR: &str = "canvas";

pub const COLOR_SWATCH_CLASS: &str = "circle";
pub const DECAL_OPTION_CLASS: &str = "decal";
pub const SELECTED_CLASS: &str = "selected";

// Elements recolored with the selected palette color
pub const ACCENT_ELEMENT_IDS: [&str; 6] = [
    CUSTOMIZE_BUTTON_ID,
    DOWNLOAD_BUTTON_ID,
    EXIT_BUTTON_ID,
    POSITION_DOT_ID,
    SCALE_THUMB_ID,
    ROTATION_THUMB_ID,
];
