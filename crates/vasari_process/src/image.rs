//! Image decoding and normalization.

use image::ImageFormat;
use std::io::Cursor;
use tracing::{debug, instrument};
use vasari_error::{ClassifyError, ClassifyErrorKind, VasariResult};

/// Decodes image payloads and constrains them to a bounded size,
/// re-encoding as PNG.
///
/// Uploaded and AI-generated images both pass through here, so everything
/// in the store is PNG with a predictable maximum dimension.
#[derive(Debug, Clone, Copy)]
pub struct ImageNormalizer {
    max_dimension: u32,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self { max_dimension: 800 }
    }
}

impl ImageNormalizer {
    /// Create a normalizer with a custom maximum edge length in pixels.
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    /// Decode the image, constrain the longer edge to the maximum
    /// dimension (aspect preserved, never upscaled), and re-encode as PNG.
    ///
    /// # Errors
    ///
    /// `ClassifyErrorKind::MalformedImage` if the bytes cannot be decoded
    /// or the result cannot be encoded.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn normalize(&self, bytes: &[u8]) -> VasariResult<Vec<u8>> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| ClassifyError::new(ClassifyErrorKind::MalformedImage(e.to_string())))?;

        let image = if decoded.width() > self.max_dimension || decoded.height() > self.max_dimension
        {
            debug!(
                width = decoded.width(),
                height = decoded.height(),
                max = self.max_dimension,
                "downscaling image"
            );
            decoded.thumbnail(self.max_dimension, self.max_dimension)
        } else {
            decoded
        };

        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| ClassifyError::new(ClassifyErrorKind::MalformedImage(e.to_string())))?;

        Ok(out.into_inner())
    }
}
