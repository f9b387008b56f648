//! Render geometry derived from the requested icon size.

/// Geometry for one badge render, computed as fixed proportions of the
/// requested pixel size.
///
/// Every derived integer quantity is non-negative and respects its floor:
/// `rim_width >= 2`, `shadow_offset >= 1`, `shadow_stroke >= 1`. The same
/// size always derives the same parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Requested canvas size (width and height).
    pub size: u32,
    /// Center coordinate on both axes.
    pub center: f32,
    /// Radius of the filled background circle.
    pub outer_radius: u32,
    /// Number of banded rim outlines stacked outside the background circle.
    pub rim_width: u32,
    /// Inward offset of the inner shadow ring.
    pub shadow_offset: u32,
    /// Stroke width of the inner shadow ring.
    pub shadow_stroke: u32,
    /// Glyph size in pixels for the crisp foreground pass.
    pub glyph_px: f32,
    /// Upward shift of the glyph anchor for optical centering.
    pub optical_lift: u32,
}

impl RenderParams {
    /// Derives the render geometry for a `size x size` canvas.
    pub fn derive(size: u32) -> Self {
        Self {
            size,
            center: (size / 2) as f32,
            outer_radius: (size as f32 * 0.47) as u32,
            rim_width: ((size as f32 * 0.03) as u32).max(2),
            shadow_offset: (size / 128).max(1),
            shadow_stroke: (size / 64).max(1),
            glyph_px: size as f32 * 0.62,
            optical_lift: (size as f32 * 0.04) as u32,
        }
    }

    /// The glyph anchor: canvas center, lifted for optical centering.
    pub fn anchor(&self) -> (f32, f32) {
        (self.center, self.center - self.optical_lift as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_hold_at_small_sizes() {
        let p = RenderParams::derive(16);
        assert_eq!(p.rim_width, 2);
        assert_eq!(p.shadow_offset, 1);
        assert_eq!(p.shadow_stroke, 1);
        assert_eq!(p.optical_lift, 0);
    }

    #[test]
    fn proportions_at_reference_sizes() {
        let p = RenderParams::derive(128);
        assert_eq!(p.center, 64.0);
        assert_eq!(p.outer_radius, 60);
        assert_eq!(p.rim_width, 3);
        assert_eq!(p.shadow_offset, 1);
        assert_eq!(p.shadow_stroke, 2);
        assert!((p.glyph_px - 79.36).abs() < 1e-3);
        assert_eq!(p.optical_lift, 5);

        let p = RenderParams::derive(512);
        assert_eq!(p.outer_radius, 240);
        assert_eq!(p.rim_width, 15);
        assert_eq!(p.shadow_offset, 4);
        assert_eq!(p.shadow_stroke, 8);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(RenderParams::derive(96), RenderParams::derive(96));
    }

    #[test]
    fn anchor_lifts_upward() {
        let p = RenderParams::derive(256);
        let (x, y) = p.anchor();
        assert_eq!(x, p.center);
        assert!(y < p.center);
    }
}
