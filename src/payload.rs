use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use image::RgbImage;

use crate::error::DecodeError;

/// Decode a request image payload into an RGB raster.
///
/// Accepts plain base64 or a `data:*;base64,` URL, which is what browser
/// canvas exports send.
pub fn decode_image(payload: &str) -> Result<RgbImage, DecodeError> {
    let encoded = strip_data_url(payload)?;
    let bytes = BASE64_STANDARD.decode(encoded.trim())?;
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.to_rgb8())
}

fn strip_data_url(payload: &str) -> Result<&str, DecodeError> {
    let Some(rest) = payload.strip_prefix("data:") else {
        return Ok(payload);
    };
    match rest.split_once(',') {
        Some((metadata, data)) if metadata.ends_with(";base64") => Ok(data),
        _ => Err(DecodeError::DataUrl(
            "only base64 encoded data URLs are supported".into(),
        )),
    }
}
