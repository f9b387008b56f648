//! badge-renderer: procedural multi-resolution badge icon generator
//!
//! This crate draws a stylized circular application badge (banded metallic
//! rim, dark disc, inset shadow ring, glowing centered letter glyph) onto
//! raster canvases and exports the result as a fixed set of PNG files.
//!
//! # Example
//!
//! ```
//! use badge_renderer::{BadgeRenderer, BadgeStyle, export_plan};
//!
//! let renderer = BadgeRenderer::new(BadgeStyle::default());
//! let canvas = renderer.render(128);
//! assert_eq!(canvas.size(), 128);
//!
//! // The driver writes one file per job in the plan.
//! assert_eq!(export_plan("badge").len(), 12);
//! ```
//!
//! # Style profiles
//!
//! The built-in style can be overridden with a JSON [`StyleProfile`]:
//!
//! ```
//! use badge_renderer::StyleProfile;
//!
//! let profile = StyleProfile::from_json(r#"{ "glyph": "K" }"#).unwrap();
//! let style = profile.resolve().unwrap();
//! assert_eq!(style.glyph, 'K');
//! ```

mod canvas;
mod draw;
mod error;
mod export;
mod font;
mod layer;
mod params;
mod renderer;
mod style;

pub use canvas::Canvas;
pub use error::Error;
pub use export::{
    export_plan, write_png, ExportJob, ExportKind, CANONICAL_SIZE, DEFAULT_PREFIX, EXPORT_SIZES,
    HIGH_RES_SIZE,
};
pub use font::{FontBook, FONT_CANDIDATES};
pub use layer::{BaseLayer, GlyphLayer, Layer, LayerStack, RimLayer, ShadowLayer};
pub use params::RenderParams;
pub use renderer::BadgeRenderer;
pub use style::{parse_color, BadgeStyle, StyleProfile};
