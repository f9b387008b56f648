//! Bold font resolution with silent fallback.
//!
//! The probe walks an ordered list of well-known bold TTF paths and takes
//! the first file that parses. When none of them exist the resolver asks
//! the system font database for a bold sans-serif face, then for any face
//! at all. Failures are never surfaced to the caller: a badge without a
//! glyph is still a badge, and the driver keeps going.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use ab_glyph::FontVec;
use tracing::{debug, warn};

/// Ordered candidates probed before falling back to the system database.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
];

/// The resolved glyph font, shared immutably across all renders.
#[derive(Clone)]
pub struct FontBook {
    pub(crate) font: Option<Arc<FontVec>>,
}

impl fmt::Debug for FontBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontBook")
            .field("font", &if self.font.is_some() { "loaded" } else { "none" })
            .finish()
    }
}

impl FontBook {
    /// Probes the default candidate list.
    pub fn probe() -> Self {
        Self::probe_paths(FONT_CANDIDATES)
    }

    /// Probes the given candidate paths in order, then the system database.
    pub fn probe_paths<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    debug!(path = %path.display(), %err, "font candidate unavailable");
                    continue;
                }
            };
            match FontVec::try_from_vec(bytes) {
                Ok(font) => {
                    debug!(path = %path.display(), "loaded badge font");
                    return Self {
                        font: Some(Arc::new(font)),
                    };
                }
                Err(err) => {
                    debug!(path = %path.display(), %err, "font candidate failed to parse");
                }
            }
        }

        let font = system_bold_fallback();
        if font.is_none() {
            warn!("no usable font found; badges will render without a glyph");
        }
        Self {
            font: font.map(Arc::new),
        }
    }

    /// The resolved font face, if any candidate or system face loaded.
    pub fn font(&self) -> Option<&FontVec> {
        self.font.as_deref()
    }

    /// Whether a face was resolved.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

/// Queries the system font database for a bold sans-serif face, falling
/// back to the first face of any kind.
fn system_bold_fallback() -> Option<FontVec> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight: fontdb::Weight::BOLD,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))?;

    debug!("falling back to a system font face");
    db.with_face_data(id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
    })
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_list_matches_probe_order() {
        assert_eq!(FONT_CANDIDATES.len(), 3);
        assert!(FONT_CANDIDATES[0].contains("DejaVuSans-Bold"));
        assert!(FONT_CANDIDATES[2].contains("NotoSans-Bold"));
    }

    #[test]
    fn bogus_candidates_never_fail() {
        // Resolution may still succeed through the system database; the
        // contract is only that probing cannot error.
        let book = FontBook::probe_paths(&["/definitely/not/a/font.ttf"]);
        let _ = book.has_font();
    }

    #[test]
    fn empty_book_reports_no_font() {
        let book = FontBook { font: None };
        assert!(!book.has_font());
        assert!(book.font().is_none());
    }
}
