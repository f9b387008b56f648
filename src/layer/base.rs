//! Background disc.

use image::Rgba;

use crate::canvas::Canvas;
use crate::draw::fill_circle;
use crate::layer::Layer;
use crate::params::RenderParams;

/// Fills the opaque background circle the rest of the badge sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayer {
    pub fill: Rgba<u8>,
}

impl BaseLayer {
    pub fn new(fill: Rgba<u8>) -> Self {
        Self { fill }
    }
}

impl Layer for BaseLayer {
    fn name(&self) -> &'static str {
        "base"
    }

    fn paint(&self, params: &RenderParams, canvas: &mut Canvas) {
        fill_circle(
            canvas.data_mut(),
            params.center,
            params.center,
            params.outer_radius as f32,
            self.fill,
        );
    }
}
