//! Procedural generator for the RIGUP logo.
//!
//! The logo is composed as an ordered display list (background, CRT scanlines, a glowing
//! ASCII-art wordmark, a circuit-board frame), rasterized on the CPU with `vello_cpu`,
//! post-processed with a horizontal chromatic aberration and encoded as JPEG.
//!
//! - Build a [`LogoConfig`] (the default is the canonical logo)
//! - Call [`generate`] for an in-memory image or [`generate_to_file`] to write it
#![forbid(unsafe_code)]

mod foundation;

pub mod compose;
pub mod config;
pub mod effects;
pub mod encode;
pub mod pipeline;
pub mod render;
pub mod text;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgb8, Rgba8};
pub use crate::foundation::error::{LogoError, LogoResult};

pub use crate::compose::circuit::FrameLayout;
pub use crate::compose::wordmark::{WordmarkPlacement, place_wordmark};
pub use crate::config::{LogoConfig, OutputFormat};
pub use crate::effects::aberration::chromatic_aberration;
pub use crate::pipeline::{
    GenerateReport, GeneratedLogo, generate, generate_to_file, prepare_text, rasterize,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::plan::{DrawList, DrawOp};
pub use crate::text::font::{
    FontChoice, LoadedFont, ResolvedFont, resolve_font, resolve_system_font,
};
pub use crate::text::layout::{LineMetrics, ShapedText};
