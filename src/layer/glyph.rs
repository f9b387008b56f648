//! Glyph rendering with layered glow.

use ab_glyph::{point, Font, FontVec, PxScale};
use image::Rgba;

use crate::canvas::Canvas;
use crate::draw::{blend_at, clamp_channel};
use crate::font::FontBook;
use crate::layer::Layer;
use crate::params::RenderParams;
use crate::style::BadgeStyle;

/// Number of glow passes under the crisp glyph.
const GLOW_PASSES: u32 = 3;

/// Glow alpha for pass `i` is `GLOW_ALPHA_BASE - GLOW_ALPHA_STEP * i`.
const GLOW_ALPHA_BASE: i32 = 100;
const GLOW_ALPHA_STEP: i32 = 30;

/// Pixel-size growth per glow pass.
const GLOW_PX_STEP: f32 = 2.0;

/// Draws the centered letter glyph: three enlarged low-alpha glow passes,
/// widest and faintest first, then one crisp pass on top.
///
/// Every pass measures its own pixel bounding box and centers it on the
/// shared anchor, so the glow bleeds out evenly around the crisp glyph.
/// Without a resolved font the layer paints nothing.
#[derive(Debug, Clone)]
pub struct GlyphLayer {
    glyph: char,
    fill: Rgba<u8>,
    glow: Rgba<u8>,
    fonts: FontBook,
}

impl GlyphLayer {
    pub fn new(style: &BadgeStyle, fonts: FontBook) -> Self {
        Self {
            glyph: style.glyph,
            fill: style.glyph_color,
            glow: style.glow_color,
            fonts,
        }
    }

    /// Rasterizes one pass of the glyph at `px` pixels, blending coverage
    /// with the given color and alpha ceiling, centered on `anchor`.
    fn draw_pass(
        &self,
        font: &FontVec,
        canvas: &mut Canvas,
        px: f32,
        anchor: (f32, f32),
        color: Rgba<u8>,
        alpha: u8,
    ) {
        let glyph = font
            .glyph_id(self.glyph)
            .with_scale_and_position(PxScale::from(px), point(0.0, 0.0));
        let Some(outline) = font.outline_glyph(glyph) else {
            return;
        };

        let bounds = outline.px_bounds();
        let width = bounds.max.x - bounds.min.x;
        let height = bounds.max.y - bounds.min.y;
        let base_x = (anchor.0 - width / 2.0).round() as i64;
        let base_y = (anchor.1 - height / 2.0).round() as i64;

        let img = canvas.data_mut();
        outline.draw(|gx, gy, coverage| {
            let a = (alpha as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
            if a > 0 {
                blend_at(
                    img,
                    base_x + gx as i64,
                    base_y + gy as i64,
                    Rgba([color[0], color[1], color[2], a]),
                );
            }
        });
    }
}

impl Layer for GlyphLayer {
    fn name(&self) -> &'static str {
        "glyph"
    }

    fn paint(&self, params: &RenderParams, canvas: &mut Canvas) {
        let Some(font) = self.fonts.font() else {
            tracing::debug!(size = params.size, "no font resolved; skipping glyph");
            return;
        };

        let anchor = params.anchor();
        for i in (1..=GLOW_PASSES).rev() {
            let alpha = clamp_channel(GLOW_ALPHA_BASE - GLOW_ALPHA_STEP * i as i32);
            let px = params.glyph_px + GLOW_PX_STEP * i as f32;
            self.draw_pass(font, canvas, px, anchor, self.glow, alpha);
        }
        self.draw_pass(font, canvas, params.glyph_px, anchor, self.fill, self.fill[3]);
    }
}
