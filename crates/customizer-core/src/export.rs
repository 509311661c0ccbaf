use crate::constants::{DOWNLOAD_MIME, SNAPSHOT_FILE_NAME, SNAPSHOT_MIME};

/// Rewrite a PNG data URL so browsers download it instead of displaying it.
pub fn download_href(png_data_url: &str) -> String {
    png_data_url.replacen(SNAPSHOT_MIME, DOWNLOAD_MIME, 1)
}

#[inline]
pub fn snapshot_file_name() -> &'static str {
    SNAPSHOT_FILE_NAME
}
