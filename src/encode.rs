use std::io::Write;
use std::path::Path;

use image::{ExtendedColorType, ImageEncoder as _, RgbImage};

use crate::config::OutputFormat;
use crate::foundation::error::{LogoError, LogoResult};

/// Encode `img` into `out` as `format`.
///
/// `quality` applies to JPEG only and must be in `1..=100`.
pub fn encode_rgb<W: Write>(
    img: &RgbImage,
    format: OutputFormat,
    quality: u8,
    out: W,
) -> LogoResult<()> {
    let (w, h) = img.dimensions();
    match format {
        OutputFormat::Jpeg => {
            if !(1..=100).contains(&quality) {
                return Err(LogoError::validation(format!(
                    "jpeg quality must be in 1..=100, got {quality}"
                )));
            }
            image::codecs::jpeg::JpegEncoder::new_with_quality(out, quality)
                .write_image(img.as_raw(), w, h, ExtendedColorType::Rgb8)
                .map_err(|e| LogoError::encode(format!("jpeg: {e}")))
        }
        OutputFormat::Png => image::codecs::png::PngEncoder::new(out)
            .write_image(img.as_raw(), w, h, ExtendedColorType::Rgb8)
            .map_err(|e| LogoError::encode(format!("png: {e}"))),
    }
}

/// Encode into memory.
pub fn encode_to_vec(img: &RgbImage, format: OutputFormat, quality: u8) -> LogoResult<Vec<u8>> {
    let mut buf = Vec::new();
    encode_rgb(img, format, quality, &mut buf)?;
    Ok(buf)
}

/// Encode and write to `path`, creating parent directories as needed.
#[tracing::instrument(skip(img, path), fields(path = %path.display()))]
pub fn write_image(
    img: &RgbImage,
    path: &Path,
    format: OutputFormat,
    quality: u8,
) -> LogoResult<()> {
    // A failed encode leaves no file behind.
    let bytes = encode_to_vec(img, format, quality)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    tracing::debug!(bytes = bytes.len(), "wrote image");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/encode.rs"]
mod tests;
