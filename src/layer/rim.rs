//! Banded metallic rim.

use image::Rgba;

use crate::canvas::Canvas;
use crate::draw::{clamp_channel, stroke_circle};
use crate::layer::Layer;
use crate::params::RenderParams;

/// Stack of single-pixel circle outlines outside the background disc.
///
/// Each band is drawn one pixel further in with a darker gray and a lower
/// alpha than the one before it, producing the beveled-metal gradient.
/// Channel arithmetic is clamped, so wide rims at large sizes simply fade
/// out instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RimLayer {
    /// Gray value of the outermost band.
    pub base_gray: i32,
    /// Gray decrement per band.
    pub gray_step: i32,
    /// Alpha of the outermost band.
    pub base_alpha: i32,
    /// Alpha decrement per band.
    pub alpha_step: i32,
}

impl Default for RimLayer {
    fn default() -> Self {
        Self {
            base_gray: 200,
            gray_step: 10,
            base_alpha: 255,
            alpha_step: 20,
        }
    }
}

impl Layer for RimLayer {
    fn name(&self) -> &'static str {
        "rim"
    }

    fn paint(&self, params: &RenderParams, canvas: &mut Canvas) {
        for i in 0..params.rim_width {
            let radius = (params.outer_radius + params.rim_width - i) as f32;
            let gray = clamp_channel(self.base_gray - self.gray_step * i as i32);
            let alpha = clamp_channel(self.base_alpha - self.alpha_step * i as i32);
            stroke_circle(
                canvas.data_mut(),
                params.center,
                params.center,
                radius,
                1.0,
                Rgba([gray, gray, gray, alpha]),
            );
        }
    }
}
