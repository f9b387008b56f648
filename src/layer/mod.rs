//! The painting pipeline.
//!
//! A badge is produced by four layers applied in fixed order to one
//! canvas, each reading the derived [`RenderParams`] for its geometry:
//!
//! ```text
//! transparent canvas
//!     │
//!     ▼
//! ┌────────┐
//! │  Rim   │  banded metallic outlines outside the disc
//! └───┬────┘
//!     ▼
//! ┌────────┐
//! │  Base  │  filled background disc
//! └───┬────┘
//!     ▼
//! ┌────────┐
//! │ Shadow │  inset translucent ring
//! └───┬────┘
//!     ▼
//! ┌────────┐
//! │ Glyph  │  glow passes, then the crisp glyph
//! └────────┘
//! ```
//!
//! Later layers overpaint earlier ones; there is no inter-layer state
//! beyond the pixels already on the canvas.

pub mod base;
pub mod glyph;
pub mod rim;
pub mod shadow;

pub use base::BaseLayer;
pub use glyph::GlyphLayer;
pub use rim::RimLayer;
pub use shadow::ShadowLayer;

use crate::canvas::Canvas;
use crate::font::FontBook;
use crate::params::RenderParams;
use crate::style::BadgeStyle;

// ============================================================================
// Layer
// ============================================================================

/// One paint step of the badge pipeline.
///
/// Layers are pure with respect to the canvas: the same parameters and
/// canvas contents always produce the same pixels.
pub trait Layer {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Paints this layer onto the canvas.
    fn paint(&self, params: &RenderParams, canvas: &mut Canvas);
}

// ============================================================================
// LayerStack
// ============================================================================

/// The four badge layers in their fixed application order.
#[derive(Debug, Clone)]
pub struct LayerStack {
    pub rim: RimLayer,
    pub base: BaseLayer,
    pub shadow: ShadowLayer,
    pub glyph: GlyphLayer,
}

impl LayerStack {
    /// Builds the stack for a style, with an already-resolved font.
    pub fn from_style(style: &BadgeStyle, fonts: FontBook) -> Self {
        Self {
            rim: RimLayer::default(),
            base: BaseLayer::new(style.background),
            shadow: ShadowLayer::new(style.shadow_tint()),
            glyph: GlyphLayer::new(style, fonts),
        }
    }

    /// Applies every layer in order.
    pub fn paint(&self, params: &RenderParams, canvas: &mut Canvas) {
        let layers: [&dyn Layer; 4] = [&self.rim, &self.base, &self.shadow, &self.glyph];
        for layer in layers {
            tracing::trace!(layer = layer.name(), size = params.size, "painting");
            layer.paint(params, canvas);
        }
    }
}
