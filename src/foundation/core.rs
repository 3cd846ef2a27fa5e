use crate::foundation::error::{LogoError, LogoResult};

pub use kurbo::{Point, Rect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas.
    ///
    /// The rasterizer addresses pixmaps with `u16`, so both sides must fit.
    pub fn new(width: u32, height: u32) -> LogoResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Check that both dimensions are non-zero and rasterizable.
    pub fn validate(self) -> LogoResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LogoError::validation("canvas width and height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(LogoError::validation(format!(
                "canvas {}x{} exceeds {}x{}",
                self.width,
                self.height,
                u16::MAX,
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Width as `f64`, for geometry math.
    pub fn width_f(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for geometry math.
    pub fn height_f(self) -> f64 {
        f64::from(self.height)
    }

    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f(), self.height_f())
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Attach an alpha channel.
    pub fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.0,
            g: self.1,
            b: self.2,
            a,
        }
    }

    /// Fully opaque RGBA form.
    pub fn opaque(self) -> Rgba8 {
        self.with_alpha(255)
    }
}

/// Straight-alpha RGBA8, used for blended drawing only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from straight-alpha components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return `true` when alpha is 255.
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Self {
        c.opaque()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
