//! Inset shadow ring.

use image::Rgba;

use crate::canvas::Canvas;
use crate::draw::stroke_circle;
use crate::layer::Layer;
use crate::params::RenderParams;

/// Strokes a translucent ring just inside the disc edge to suggest depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowLayer {
    pub tint: Rgba<u8>,
}

impl ShadowLayer {
    pub fn new(tint: Rgba<u8>) -> Self {
        Self { tint }
    }
}

impl Layer for ShadowLayer {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn paint(&self, params: &RenderParams, canvas: &mut Canvas) {
        let radius = params.outer_radius.saturating_sub(params.shadow_offset) as f32;
        stroke_circle(
            canvas.data_mut(),
            params.center,
            params.center,
            radius,
            params.shadow_stroke as f32,
            self.tint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::BaseLayer;
    use crate::style::BadgeStyle;

    #[test]
    fn ring_darkens_the_disc_edge() {
        let style = BadgeStyle::default();
        let params = RenderParams::derive(128);
        let mut canvas = Canvas::new(128);
        BaseLayer::new(style.background).paint(&params, &mut canvas);
        ShadowLayer::new(style.shadow_tint()).paint(&params, &mut canvas);

        let y = params.center as u32;
        let ring_x = params.center as u32 + params.outer_radius - params.shadow_offset;
        let ring = canvas.pixel(ring_x, y);
        assert_ne!(ring.0, [45, 27, 78, 255]);
        assert!(ring[2] < 78, "shadow ring is darker than the background");

        // The disc center is beyond the ring's reach.
        assert_eq!(canvas.pixel(64, 64).0, [45, 27, 78, 255]);
    }
}
