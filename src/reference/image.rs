// SPDX-License-Identifier: MPL-2.0
//! A single validated reference image and its payload encodings.

use crate::error::Error;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image_rs::ImageFormat;
use std::fmt;
use std::path::{Path, PathBuf};

/// An image the user supplied as a style or subject reference.
///
/// Created only after the raw bytes have been decoded successfully, so every
/// instance is known to be a displayable image. Immutable once created.
#[derive(Debug, Clone)]
pub struct ReferenceImage {
    path: PathBuf,
    mime: &'static str,
    encoded: String,
    handle: iced::widget::image::Handle,
}

impl ReferenceImage {
    /// Validates raw bytes and builds the reference image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the format is unrecognized, unsupported,
    /// or the data does not decode.
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>) -> Result<Self, Error> {
        let format = image_rs::guess_format(&bytes)?;
        let mime = mime_for_format(format)
            .ok_or_else(|| Error::Image(format!("unsupported image format: {format:?}")))?;

        // Full decode as validation; the original bytes are what gets sent.
        image_rs::load_from_memory(&bytes)?;

        let encoded = BASE64.encode(&bytes);
        let handle = iced::widget::image::Handle::from_bytes(bytes);

        Ok(Self {
            path,
            mime,
            encoded,
            handle,
        })
    }

    /// Reads and validates an image file.
    pub async fn load(path: PathBuf) -> Result<Self, LoadError> {
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => return Err(LoadError::new(path, err.into())),
        };
        Self::from_bytes(path.clone(), bytes).map_err(|error| LoadError::new(path, error))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for user-facing messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Base64 of the raw file bytes, as embedded in the request payload.
    pub fn base64_data(&self) -> &str {
        &self.encoded
    }

    /// Self-contained data URL suitable for direct display or embedding.
    pub fn data_url(&self) -> String {
        encode_data_url(self.mime, &self.encoded)
    }

    /// Handle for rendering the preview thumbnail.
    pub fn handle(&self) -> iced::widget::image::Handle {
        self.handle.clone()
    }
}

/// A file that could not be turned into a [`ReferenceImage`], carrying the
/// path for user-facing reporting.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub path: PathBuf,
    pub error: Error,
}

impl LoadError {
    fn new(path: PathBuf, error: Error) -> Self {
        Self { path, error }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Builds a `data:` URL from a MIME type and already-encoded base64 payload.
pub fn encode_data_url(mime: &str, base64_data: &str) -> String {
    format!("data:{mime};base64,{base64_data}")
}

/// MIME types for the formats the uploader accepts.
fn mime_for_format(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Ico => Some("image/x-icon"),
        _ => None,
    }
}

/// Minimal valid PNG payload shared by tests across the crate.
#[cfg(test)]
pub(crate) fn test_png_bytes() -> Vec<u8> {
    let img = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        ImageFormat::Png,
    )
    .expect("encode test png");
    bytes
}
