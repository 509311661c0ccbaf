//! Validation and publishing for user-uploaded decal images.
//!
//! The browser does the reading and decoding; this module decides whether a
//! picked file is acceptable and turns the decoded result into a state write.
//! Uploads are ticketed so that a slow decode cannot overwrite the result of a
//! file the user picked after it.

use crate::constants::ACCEPTED_IMAGE_MIME;
use crate::error::{CustomizerError, Result};
use crate::state::{CustomImage, StateStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Webp,
}

impl ImageKind {
    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Png => ACCEPTED_IMAGE_MIME[0],
            ImageKind::Webp => ACCEPTED_IMAGE_MIME[1],
        }
    }
}

/// Check a file's declared MIME type against the allow-list.
pub fn validate_file_type(mime: &str) -> Result<ImageKind> {
    let mime = mime.trim();
    [ImageKind::Png, ImageKind::Webp]
        .into_iter()
        .find(|k| k.mime().eq_ignore_ascii_case(mime))
        .ok_or_else(|| CustomizerError::InvalidFileType {
            mime: mime.to_string(),
        })
}

/// Build the custom image from decode results. Images without area are
/// treated as failed decodes.
pub fn decoded_image(data_url: String, width: u32, height: u32) -> Result<CustomImage> {
    let image = CustomImage {
        data_url,
        width,
        height,
    };
    image.validate()?;
    Ok(image)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// Tracks which upload is the most recent one.
#[derive(Debug, Default)]
pub struct FileIntake {
    latest: u64,
}

impl FileIntake {
    /// Validate a picked file and, if accepted, hand out a ticket for its decode.
    pub fn accept(&mut self, mime: &str) -> Result<(UploadTicket, ImageKind)> {
        let kind = validate_file_type(mime)?;
        self.latest += 1;
        log::info!("[upload] accepted {} (#{})", kind.mime(), self.latest);
        Ok((UploadTicket(self.latest), kind))
    }

    #[inline]
    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Publish a finished decode. Superseded uploads are dropped and report
    /// `Ok(false)`; decode failures leave the store untouched.
    pub fn complete(
        &self,
        ticket: UploadTicket,
        store: &mut StateStore,
        data_url: String,
        width: u32,
        height: u32,
    ) -> Result<bool> {
        if !self.is_current(ticket) {
            log::debug!("[upload] dropping superseded upload #{}", ticket.0);
            return Ok(false);
        }
        store.publish_custom_image(decoded_image(data_url, width, height)?)?;
        Ok(true)
    }
}
