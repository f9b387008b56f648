//! Error types for badge rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Font resolution is deliberately absent here: a missing or unreadable
/// font degrades silently to the next candidate (see [`crate::FontBook`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Writing an exported PNG failed (encoding or underlying IO).
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading a style profile file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A style profile did not parse as JSON.
    #[error("malformed style profile: {0}")]
    Profile(#[from] serde_json::Error),

    /// A color literal in a style profile was not `#rrggbb` hex.
    #[error("unrecognized color literal `{0}`")]
    Color(String),
}
