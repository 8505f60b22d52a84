use crate::constants::JPEG_QUALITY;
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;

/// Re-encodes a decoded image as base64 JPEG for embedding in a data URI.
/// Alpha is dropped first; JPEG cannot carry transparency.
pub fn encode_image(image: &DynamicImage) -> Result<String, image::ImageError> {
    let mut jpeg = Vec::new();
    let mut cursor = Cursor::new(&mut jpeg);
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
            .write_to(&mut cursor, ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    } else {
        image.write_to(&mut cursor, ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    }
    Ok(base64::encode(jpeg))
}
