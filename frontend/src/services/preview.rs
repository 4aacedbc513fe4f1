//! Photo preview encoding.
//!
//! Reads the selected file into a data URL for inline display. The read
//! happens through the browser's async file reader, so the interaction
//! thread is never blocked. No network I/O.

use web_sys::File;

use crate::error::PreviewError;

/// Whether the MIME type names an image.
pub(crate) fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Whether the selected file is image-typed.
pub fn is_image(file: &File) -> bool {
    is_image_mime(&file.type_())
}

/// Encode the selected file as a data URL for inline display.
///
/// Non-image input is rejected before any read. The result is derived
/// display state only and is never persisted remotely.
pub async fn encode_preview(file: &File) -> Result<String, PreviewError> {
    if !is_image(file) {
        return Err(PreviewError::NotAnImage);
    }

    let file = gloo_file::File::from(file.clone());
    gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| PreviewError::Read(e.to_string()))
}
