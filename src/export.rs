//! The export plan: fixed size list, file-name convention, PNG writing.

use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Error;

/// Sized variants every run produces.
pub const EXPORT_SIZES: [u32; 10] = [16, 22, 24, 32, 48, 64, 96, 128, 256, 512];

/// Size of the canonical `<prefix>.png`.
pub const CANONICAL_SIZE: u32 = 512;

/// Size of the high-resolution fallback `<prefix>.svg.png`.
pub const HIGH_RES_SIZE: u32 = 1024;

/// Default file-name prefix.
pub const DEFAULT_PREFIX: &str = "badge";

/// What role a produced file plays in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One of the fixed sized variants.
    Sized,
    /// The canonical 512px icon.
    Canonical,
    /// The 1024px raster fallback (named `.svg.png` by convention).
    HighRes,
}

/// One file of the export plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub size: u32,
    pub file_name: String,
    pub kind: ExportKind,
}

impl ExportJob {
    /// Human-readable progress line for this job.
    pub fn label(&self) -> String {
        match self.kind {
            ExportKind::Sized => format!("{size}x{size} icon", size = self.size),
            ExportKind::Canonical => {
                format!("{name} ({size}x{size})", name = self.file_name, size = self.size)
            }
            ExportKind::HighRes => {
                format!("high-res icon ({size}x{size})", size = self.size)
            }
        }
    }
}

/// The full ordered plan for one run: ten sized variants, the canonical
/// 512px icon, and the 1024px high-resolution fallback.
pub fn export_plan(prefix: &str) -> Vec<ExportJob> {
    let mut jobs: Vec<ExportJob> = EXPORT_SIZES
        .iter()
        .map(|&size| ExportJob {
            size,
            file_name: format!("{prefix}-{size}x{size}.png"),
            kind: ExportKind::Sized,
        })
        .collect();
    jobs.push(ExportJob {
        size: CANONICAL_SIZE,
        file_name: format!("{prefix}.png"),
        kind: ExportKind::Canonical,
    });
    jobs.push(ExportJob {
        size: HIGH_RES_SIZE,
        file_name: format!("{prefix}.svg.png"),
        kind: ExportKind::HighRes,
    });
    jobs
}

/// Writes a canvas as a PNG file.
///
/// The file handle is scoped inside the encoder and released even when
/// encoding fails; a failed write is the run's fatal error.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    canvas.data().save(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
