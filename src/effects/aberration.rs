use image::RgbImage;

use crate::foundation::error::{LogoError, LogoResult};

const RED: usize = 0;
const BLUE: usize = 2;

/// Horizontal chromatic aberration, applied in place.
///
/// Per row, red is rolled left by `amount` pixels and blue is rolled right by the same
/// amount; green is untouched. Pixels leaving one edge re-enter at the other, so the image
/// keeps its size. Amounts wrap modulo the image width.
#[tracing::instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn chromatic_aberration(img: &mut RgbImage, amount: u32) -> LogoResult<()> {
    let width = img.width() as usize;
    if width == 0 {
        return Err(LogoError::render("aberration on an empty image"));
    }
    let shift = (amount as usize) % width;
    if shift == 0 {
        return Ok(());
    }

    let stride = width * 3;
    let mut plane = vec![0u8; width];
    for row in img.chunks_exact_mut(stride) {
        roll_channel(row, RED, &mut plane, |p| p.rotate_left(shift));
        roll_channel(row, BLUE, &mut plane, |p| p.rotate_right(shift));
    }
    Ok(())
}

fn roll_channel(row: &mut [u8], channel: usize, plane: &mut [u8], roll: impl Fn(&mut [u8])) {
    for (dst, px) in plane.iter_mut().zip(row.chunks_exact(3)) {
        *dst = px[channel];
    }
    roll(plane);
    for (px, &v) in row.chunks_exact_mut(3).zip(plane.iter()) {
        px[channel] = v;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/aberration.rs"]
mod tests;
