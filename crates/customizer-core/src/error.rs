use crate::constants::{DECODE_FAILURE_NOTICE, INVALID_FILE_NOTICE};

/// Failures surfaced by the customizer core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomizerError {
    /// The picked file declares a MIME type outside the allow-list.
    #[error("unsupported file type `{mime}`")]
    InvalidFileType { mime: String },
    /// A type-valid file could not be read or decoded into an image.
    #[error("image decode failed: {0}")]
    DecodeFailure(String),
    /// A widget reported no usable travel for its handle.
    #[error("malformed widget geometry: {0}")]
    MalformedWidgetGeometry(String),
}

impl CustomizerError {
    /// Text shown to the user, if this failure is user-visible at all.
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            CustomizerError::InvalidFileType { .. } => Some(INVALID_FILE_NOTICE),
            CustomizerError::DecodeFailure(_) => Some(DECODE_FAILURE_NOTICE),
            CustomizerError::MalformedWidgetGeometry(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CustomizerError>;
