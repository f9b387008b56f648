//! The badge rendering engine.

use crate::canvas::Canvas;
use crate::font::FontBook;
use crate::layer::LayerStack;
use crate::params::RenderParams;
use crate::style::BadgeStyle;

/// Renders the badge at any requested size.
///
/// The renderer owns the layer stack and the resolved font; both are
/// immutable after construction, so renders of different sizes are fully
/// independent and deterministic.
///
/// # Example
///
/// ```
/// use badge_renderer::{BadgeRenderer, BadgeStyle};
///
/// let renderer = BadgeRenderer::new(BadgeStyle::default());
/// let canvas = renderer.render(64);
/// assert_eq!(canvas.size(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct BadgeRenderer {
    stack: LayerStack,
}

impl BadgeRenderer {
    /// Creates a renderer, probing the default font candidates.
    pub fn new(style: BadgeStyle) -> Self {
        Self::with_fonts(style, FontBook::probe())
    }

    /// Creates a renderer with an already-resolved font book.
    pub fn with_fonts(style: BadgeStyle, fonts: FontBook) -> Self {
        Self {
            stack: LayerStack::from_style(&style, fonts),
        }
    }

    /// Renders one `size x size` badge canvas.
    pub fn render(&self, size: u32) -> Canvas {
        let _span = tracing::debug_span!("render", size).entered();
        let params = RenderParams::derive(size);
        let mut canvas = Canvas::new(size);
        self.stack.paint(&params, &mut canvas);
        canvas
    }
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self::new(BadgeStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fontless() -> BadgeRenderer {
        BadgeRenderer::with_fonts(BadgeStyle::default(), FontBook { font: None })
    }

    #[test]
    fn canvas_matches_requested_size() {
        let renderer = fontless();
        for size in [16, 22, 37, 128] {
            assert_eq!(renderer.render(size).size(), size);
        }
    }

    #[test]
    fn corners_are_transparent() {
        let renderer = BadgeRenderer::default();
        for size in crate::export::EXPORT_SIZES {
            let canvas = renderer.render(size);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(canvas.pixel(x, y)[3], 0, "corner ({x},{y}) at size {size}");
            }
        }
    }

    #[test]
    fn interior_probe_is_exact_background() {
        let renderer = BadgeRenderer::default();
        let canvas = renderer.render(128);

        // Inside the disc, beyond the glyph's reach, short of the shadow ring.
        let x = 64 - (128.0 * 0.4) as u32;
        assert_eq!(canvas.pixel(x, 64).0, [45, 27, 78, 255]);
    }

    #[test]
    fn renders_are_byte_identical() {
        let renderer = BadgeRenderer::default();
        let first = renderer.render(96);
        let second = renderer.render(96);
        assert_eq!(first.data().as_raw(), second.data().as_raw());
        assert_eq!(
            first.encode_png().unwrap(),
            second.encode_png().unwrap(),
            "PNG encoding must be deterministic"
        );
    }

    #[test]
    fn missing_fonts_still_render_a_badge() {
        let renderer = fontless();
        let canvas = renderer.render(64);
        assert_eq!(canvas.size(), 64);
        assert_eq!(canvas.pixel(32, 32).0, [45, 27, 78, 255]);
    }

    #[test]
    fn system_fallback_produces_glyph_ink() {
        // Probe with bogus candidates so only the system fallback can fire.
        let fonts = FontBook::probe_paths(&["/definitely/not/a/font.ttf"]);
        if !fonts.has_font() {
            return; // no system faces in this environment
        }

        let with_glyph = BadgeRenderer::with_fonts(BadgeStyle::default(), fonts).render(128);
        let without = fontless().render(128);
        assert_ne!(
            with_glyph.data().as_raw(),
            without.data().as_raw(),
            "a resolved fallback font must leave glyph ink"
        );
    }
}
