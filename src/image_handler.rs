use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use crate::error::{ConvertError, Result};

/// Fixed JPEG quality on the 0-100 scale.
pub const JPEG_QUALITY: u8 = 95;

/// Load image from bytes (supports PNG, JPEG, BMP, etc.)
pub fn load_image_from_bytes(bytes: &[u8]) -> std::result::Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}

/// Encode an RGB image to JPEG bytes at [`JPEG_QUALITY`].
pub fn save_jpeg_to_bytes(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(image)
        .map_err(|source| ConvertError::Encode { source })?;
    Ok(buf)
}
