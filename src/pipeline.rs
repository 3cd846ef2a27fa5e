use std::path::PathBuf;

use image::RgbImage;

use crate::compose::compose;
use crate::config::LogoConfig;
use crate::effects::aberration::chromatic_aberration;
use crate::encode::write_image;
use crate::foundation::error::LogoResult;
use crate::render::cpu::CpuBackend;
use crate::text::font::{FontChoice, ResolvedFont, resolve_font, resolve_system_font};
use crate::text::layout::{ShapedText, TextLayoutEngine};

/// An in-memory logo plus what went into it.
#[derive(Clone, Debug)]
pub struct GeneratedLogo {
    pub image: RgbImage,
    pub font: FontChoice,
    /// Number of drawing instructions executed.
    pub draw_ops: usize,
}

/// Summary of a completed file generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub font: FontChoice,
}

/// Resolve the font and shape the wordmark.
///
/// A preferred font that cannot shape text is replaced by a system face. Returns `None`
/// text only when no face can shape the wordmark; the logo is then drawn without it.
pub fn prepare_text(cfg: &LogoConfig) -> (FontChoice, Option<ShapedText>) {
    let resolved = resolve_font(&cfg.font.path);
    let retry = matches!(resolved.choice, FontChoice::Preferred(_));

    let shaped = shape_with(resolved, cfg).or_else(|| {
        if retry {
            shape_with(resolve_system_font(), cfg)
        } else {
            None
        }
    });

    match shaped {
        Some((choice, text)) => (choice, Some(text)),
        None => {
            tracing::warn!("no font can shape the wordmark; drawing without text");
            (FontChoice::Missing, None)
        }
    }
}

fn shape_with(resolved: ResolvedFont, cfg: &LogoConfig) -> Option<(FontChoice, ShapedText)> {
    let font = resolved.font?;
    let mut engine = TextLayoutEngine::new();
    match engine.shape_lines(&cfg.wordmark.lines, &font, cfg.font.size_px) {
        Ok(text) => Some((resolved.choice, text)),
        Err(e) => {
            tracing::warn!(error = %e, font = %resolved.choice, "failed to shape wordmark");
            None
        }
    }
}

/// Compose and rasterize every layer, without post-processing.
pub fn rasterize(cfg: &LogoConfig) -> LogoResult<GeneratedLogo> {
    cfg.validate()?;

    let (font, text) = prepare_text(cfg);
    let list = compose(cfg, text.as_ref());
    let mut backend = CpuBackend::new(cfg.canvas)?;
    let image = backend.render(&list, text.as_ref())?;

    Ok(GeneratedLogo {
        image,
        font,
        draw_ops: list.len(),
    })
}

/// Full in-memory generation: rasterize, then apply chromatic aberration.
#[tracing::instrument(skip_all, fields(width = cfg.canvas.width, height = cfg.canvas.height))]
pub fn generate(cfg: &LogoConfig) -> LogoResult<GeneratedLogo> {
    let mut logo = rasterize(cfg)?;
    chromatic_aberration(&mut logo.image, cfg.aberration_px)?;
    Ok(logo)
}

/// Generate and write the logo to `cfg.output`.
pub fn generate_to_file(cfg: &LogoConfig) -> LogoResult<GenerateReport> {
    let logo = generate(cfg)?;
    write_image(
        &logo.image,
        &cfg.output.path,
        cfg.output.format,
        cfg.output.quality,
    )?;

    Ok(GenerateReport {
        path: cfg.output.path.clone(),
        width: logo.image.width(),
        height: logo.image.height(),
        font: logo.font,
    })
}
