//! Generation parameters.
//!
//! Every constant the logo depends on lives in [`LogoConfig`]. The defaults produce the
//! canonical 1600x600 RIGUP logo; a JSON document may override any subset of fields.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgb8, Rgba8};
use crate::foundation::error::{LogoError, LogoResult};

/// Cyan used for traces, branch terminals and the crisp wordmark.
pub const CYAN: Rgb8 = Rgb8(0, 255, 200);
/// Magenta used for the corner accent nodes.
pub const MAGENTA: Rgb8 = Rgb8(255, 0, 150);
/// Dimmed cyan used for rails and corner connectors.
pub const DARK_CYAN: Rgb8 = Rgb8(0, 150, 120);

/// Default location of the preferred wordmark font.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf";

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "rigup-logo.jpg";

/// Largest accepted wordmark font size.
pub const MAX_FONT_SIZE_PX: f32 = 4096.0;
/// Largest accepted line gap, as a multiple of the line height.
pub const MAX_LINE_SPACING: f32 = 16.0;
/// Largest accepted glow radius on either axis.
pub const MAX_GLOW_RADIUS: i32 = 16;
/// Smallest accepted distance between repeated frame elements.
pub const MIN_FRAME_STEP: f64 = 1.0;

/// Full set of logo generation parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgb8,
    /// CRT scanline overlay.
    pub scanlines: ScanlineStyle,
    /// Preferred wordmark font.
    pub font: FontSpec,
    /// ASCII-art wordmark.
    pub wordmark: WordmarkStyle,
    /// Frame and text colors.
    pub palette: Palette,
    /// Halo stamped beneath the wordmark.
    pub glow: GlowStyle,
    /// Circuit border geometry.
    pub frame: FrameStyle,
    /// Horizontal red/blue channel offset in pixels.
    pub aberration_px: u32,
    /// Output file settings.
    pub output: OutputSpec,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1600,
                height: 600,
            },
            background: Rgb8(15, 20, 35),
            scanlines: ScanlineStyle::default(),
            font: FontSpec::default(),
            wordmark: WordmarkStyle::default(),
            palette: Palette::default(),
            glow: GlowStyle::default(),
            frame: FrameStyle::default(),
            aberration_px: 5,
            output: OutputSpec::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanlineStyle {
    /// Vertical distance between scanlines, starting at row 0.
    pub spacing: u32,
    pub color: Rgb8,
}

impl Default for ScanlineStyle {
    fn default() -> Self {
        Self {
            spacing: 3,
            color: Rgb8(20, 25, 40),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Font file tried first; a system face is substituted when it cannot be read.
    pub path: PathBuf,
    pub size_px: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FONT_PATH),
            size_px: 48.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WordmarkStyle {
    pub lines: Vec<String>,
    /// Gap between lines as a fraction of the measured line height.
    pub line_spacing: f32,
}

impl Default for WordmarkStyle {
    fn default() -> Self {
        Self {
            lines: vec![
                " ───    ╭─╮ ╶┬╴ ╭─╮   ╷ ╷ ┌┬╮    ─── ".to_string(),
                " ──     ├┼╯ │ │ ├ ┬ : │││ ├─╯     ── ".to_string(),
                " ───    ╵╰─ ╶┴╴ ╰─╯   ╰─╯ ╵      ─── ".to_string(),
            ],
            line_spacing: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub accent: Rgb8,
    pub accent_dim: Rgb8,
    pub highlight: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: CYAN,
            accent_dim: DARK_CYAN,
            highlight: MAGENTA,
        }
    }
}

/// Glow halo: the text is stamped at every offset in
/// `[-radius_x, radius_x] x [-radius_y, radius_y]` except the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowStyle {
    pub radius_x: i32,
    pub radius_y: i32,
    pub color: Rgba8,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            radius_x: 2,
            radius_y: 1,
            color: Rgba8::new(0, 80, 80, 100),
        }
    }
}

impl GlowStyle {
    /// Stamp offsets in row-major order (x outer, y inner), origin excluded.
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for dx in -self.radius_x..=self.radius_x {
            for dy in -self.radius_y..=self.radius_y {
                if dx != 0 || dy != 0 {
                    out.push((dx, dy));
                }
            }
        }
        out
    }
}

/// Circuit border geometry. Insets are measured from the nearest canvas edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// Horizontal inset of the vertical rails.
    pub rail_inset_x: f64,
    /// Vertical inset of the rail ends.
    pub rail_inset_y: f64,
    pub rail_width: f64,
    /// First branch stub, measured down from the rail top.
    pub branch_offset: f64,
    pub branch_step: f64,
    pub branch_len: f64,
    pub branch_width: f64,
    /// Half extents of the filled dot at the end of each branch.
    pub terminal_rx: f64,
    pub terminal_ry: f64,
    /// Vertical inset of the top and bottom trace lines.
    pub trace_inset_y: f64,
    /// Horizontal inset of the first and last trace dash centers.
    pub trace_inset_x: f64,
    pub trace_spacing: f64,
    pub trace_width: f64,
    /// Every n-th dash carries a ring.
    pub trace_node_every: usize,
    pub trace_node_radius: f64,
    pub trace_node_width: f64,
    pub accent_inner_radius: f64,
    pub accent_outer_radius: f64,
    pub accent_ring_width: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            rail_inset_x: 100.0,
            rail_inset_y: 120.0,
            rail_width: 3.0,
            branch_offset: 40.0,
            branch_step: 60.0,
            branch_len: 20.0,
            branch_width: 2.0,
            terminal_rx: 5.0,
            terminal_ry: 4.0,
            trace_inset_y: 90.0,
            trace_inset_x: 80.0,
            trace_spacing: 60.0,
            trace_width: 2.0,
            trace_node_every: 3,
            trace_node_radius: 5.0,
            trace_node_width: 2.0,
            accent_inner_radius: 10.0,
            accent_outer_radius: 15.0,
            accent_ring_width: 2.0,
        }
    }
}

/// Encoded file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG at [`OutputSpec::quality`].
    #[default]
    Jpeg,
    /// Lossless PNG; quality is ignored.
    Png,
}

impl OutputFormat {
    /// Infer a format from a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// JPEG quality in `1..=100`.
    pub quality: u8,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::Jpeg,
            quality: 95,
        }
    }
}

impl LogoConfig {
    /// Load a config from JSON; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> LogoResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would make generation meaningless or non-terminating.
    pub fn validate(&self) -> LogoResult<()> {
        self.canvas.validate()?;

        if self.scanlines.spacing == 0 {
            return Err(LogoError::validation("scanline spacing must be > 0"));
        }
        let size = self.font.size_px;
        if !size.is_finite() || size <= 0.0 || size > MAX_FONT_SIZE_PX {
            return Err(LogoError::validation(format!(
                "font size_px must be in (0, {MAX_FONT_SIZE_PX}], got {size}"
            )));
        }
        let spacing = self.wordmark.line_spacing;
        if !(0.0..=MAX_LINE_SPACING).contains(&spacing) {
            return Err(LogoError::validation(format!(
                "wordmark line_spacing must be in [0, {MAX_LINE_SPACING}], got {spacing}"
            )));
        }
        for (axis, r) in [("x", self.glow.radius_x), ("y", self.glow.radius_y)] {
            if !(0..=MAX_GLOW_RADIUS).contains(&r) {
                return Err(LogoError::validation(format!(
                    "glow radius_{axis} must be in 0..={MAX_GLOW_RADIUS}, got {r}"
                )));
            }
        }

        self.validate_frame()?;

        if !(1..=100).contains(&self.output.quality) {
            return Err(LogoError::validation(format!(
                "jpeg quality must be in 1..=100, got {}",
                self.output.quality
            )));
        }
        Ok(())
    }

    fn validate_frame(&self) -> LogoResult<()> {
        let f = &self.frame;
        let (w, h) = (self.canvas.width_f(), self.canvas.height_f());

        for (name, v) in [
            ("rail_width", f.rail_width),
            ("branch_len", f.branch_len),
            ("branch_width", f.branch_width),
            ("terminal_rx", f.terminal_rx),
            ("terminal_ry", f.terminal_ry),
            ("trace_width", f.trace_width),
            ("trace_node_radius", f.trace_node_radius),
            ("trace_node_width", f.trace_node_width),
            ("accent_inner_radius", f.accent_inner_radius),
            ("accent_outer_radius", f.accent_outer_radius),
            ("accent_ring_width", f.accent_ring_width),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(LogoError::validation(format!(
                    "frame {name} must be finite and >= 0, got {v}"
                )));
            }
        }

        // Insets bound the repeated elements to the canvas.
        for (name, v, extent) in [
            ("rail_inset_x", f.rail_inset_x, w),
            ("trace_inset_x", f.trace_inset_x, w),
            ("rail_inset_y", f.rail_inset_y, h),
            ("trace_inset_y", f.trace_inset_y, h),
            ("branch_offset", f.branch_offset, h),
        ] {
            if !(0.0..=extent).contains(&v) {
                return Err(LogoError::validation(format!(
                    "frame {name} must be in [0, {extent}], got {v}"
                )));
            }
        }

        for (name, v) in [
            ("branch_step", f.branch_step),
            ("trace_spacing", f.trace_spacing),
        ] {
            if !v.is_finite() || v < MIN_FRAME_STEP {
                return Err(LogoError::validation(format!(
                    "frame {name} must be finite and >= {MIN_FRAME_STEP}, got {v}"
                )));
            }
        }
        if f.trace_node_every == 0 {
            return Err(LogoError::validation("frame trace_node_every must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
