use std::path::{Path, PathBuf};

use usvg::fontdb;

use crate::foundation::error::{LogoError, LogoResult};

/// Where the wordmark font came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontChoice {
    /// The configured font file was used.
    Preferred(PathBuf),
    /// A system face was substituted; holds its family name.
    Fallback(String),
    /// No face could shape the wordmark; text layers are skipped.
    Missing,
}

impl std::fmt::Display for FontChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preferred(p) => write!(f, "preferred ({})", p.display()),
            Self::Fallback(family) => write!(f, "fallback ({family})"),
            Self::Missing => f.write_str("missing"),
        }
    }
}

/// Raw font bytes plus the face to use inside them.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    pub bytes: Vec<u8>,
    /// Face index within a collection file.
    pub index: u32,
    /// Family name to request during shaping, when known up front.
    pub family: Option<String>,
}

/// Outcome of font resolution.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    pub choice: FontChoice,
    pub font: Option<LoadedFont>,
}

/// Read the preferred font, falling back to a system face.
///
/// Never fails: a missing preferred file and an empty system database both degrade to a
/// weaker [`FontChoice`].
#[tracing::instrument]
pub fn resolve_font(preferred: &Path) -> ResolvedFont {
    match load_font_file(preferred) {
        Ok(font) => {
            tracing::debug!(path = %preferred.display(), "using preferred font");
            return ResolvedFont {
                choice: FontChoice::Preferred(preferred.to_path_buf()),
                font: Some(font),
            };
        }
        Err(e) => {
            tracing::debug!(error = %e, "preferred font unavailable, trying system fonts");
        }
    }

    resolve_system_font()
}

/// Pick a system face, or report [`FontChoice::Missing`] when the host has none.
pub fn resolve_system_font() -> ResolvedFont {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    match system_fallback(&db) {
        Some(font) => {
            let family = font.family.clone().unwrap_or_default();
            tracing::debug!(%family, faces = db.len(), "using system fallback font");
            ResolvedFont {
                choice: FontChoice::Fallback(family),
                font: Some(font),
            }
        }
        None => {
            tracing::warn!("no fonts available; the wordmark will not be drawn");
            ResolvedFont {
                choice: FontChoice::Missing,
                font: None,
            }
        }
    }
}

pub(crate) fn load_font_file(path: &Path) -> LogoResult<LoadedFont> {
    let bytes = std::fs::read(path).map_err(|e| {
        LogoError::font(format!("failed to read font '{}': {e}", path.display()))
    })?;
    if bytes.is_empty() {
        return Err(LogoError::font(format!(
            "font file '{}' is empty",
            path.display()
        )));
    }
    Ok(LoadedFont {
        bytes,
        index: 0,
        family: None,
    })
}

/// Pick a bold monospace face if possible, then any monospaced face, then anything.
pub(crate) fn system_fallback(db: &fontdb::Database) -> Option<LoadedFont> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Monospace],
        weight: fontdb::Weight::BOLD,
        ..fontdb::Query::default()
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().find(|f| f.monospaced).map(|f| f.id))
        .or_else(|| db.faces().next().map(|f| f.id))?;

    let family = db
        .face(id)
        .and_then(|f| f.families.first())
        .map(|(name, _)| name.clone());
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

    Some(LoadedFont {
        bytes,
        index,
        family,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
