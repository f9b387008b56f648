//! Pixel-level drawing primitives.
//!
//! Circles are rasterized by per-pixel distance coverage, sampled at pixel
//! centers, so edges come out antialiased without any dependency on a
//! vector backend. All channel arithmetic is clamped to `[0, 255]` here
//! rather than relying on whatever the imaging library would do with an
//! out-of-range value.

use image::{Rgba, RgbaImage};

/// Clamps a channel value into the valid `[0, 255]` range.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Source-over blend of `src` onto `dst`.
pub fn blend_pixel(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Blends `src` over the pixel at `(x, y)`, ignoring out-of-bounds writes.
pub fn blend_at(img: &mut RgbaImage, x: i64, y: i64, src: Rgba<u8>) {
    if src[3] == 0 {
        return;
    }
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = *img.get_pixel(x as u32, y as u32);
    img.put_pixel(x as u32, y as u32, blend_pixel(dst, src));
}

/// Fills a circle of `radius` around `(cx, cy)`.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    paint_disc(img, cx, cy, radius + 1.0, color, |distance| {
        (radius + 0.5 - distance).clamp(0.0, 1.0)
    });
}

/// Strokes a circle outline of `radius` around `(cx, cy)` with the given
/// stroke `width`, centered on the radius.
pub fn stroke_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let half = width / 2.0;
    paint_disc(img, cx, cy, radius + half + 1.0, color, move |distance| {
        (half + 0.5 - (distance - radius).abs()).clamp(0.0, 1.0)
    });
}

/// Visits every pixel within `reach` of the center and blends `color`
/// scaled by the coverage the closure reports for its distance.
fn paint_disc<F>(img: &mut RgbaImage, cx: f32, cy: f32, reach: f32, color: Rgba<u8>, coverage: F)
where
    F: Fn(f32) -> f32,
{
    let x0 = ((cx - reach).floor().max(0.0)) as u32;
    let y0 = ((cy - reach).floor().max(0.0)) as u32;
    let x1 = ((cx + reach).ceil() as i64).min(img.width() as i64 - 1);
    let y1 = ((cy + reach).ceil() as i64).min(img.height() as i64 - 1);
    if x1 < 0 || y1 < 0 {
        return;
    }

    for y in y0..=y1 as u32 {
        for x in x0..=x1 as u32 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let cov = coverage((dx * dx + dy * dy).sqrt());
            if cov <= 0.0 {
                continue;
            }
            let alpha = (color[3] as f32 * cov).round() as u8;
            blend_at(
                img,
                x as i64,
                y as i64,
                Rgba([color[0], color[1], color[2], alpha]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_channel_bounds() {
        assert_eq!(clamp_channel(-40), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(300), 255);
    }

    #[test]
    fn blend_opaque_over_transparent_is_source() {
        let out = blend_pixel(Rgba([0, 0, 0, 0]), Rgba([45, 27, 78, 255]));
        assert_eq!(out.0, [45, 27, 78, 255]);
    }

    #[test]
    fn blend_translucent_mixes_channels() {
        let out = blend_pixel(Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 128]));
        assert!(out[0] > 0 && out[2] > 0);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn fill_circle_interior_is_exact() {
        let mut img = RgbaImage::new(32, 32);
        fill_circle(&mut img, 16.0, 16.0, 10.0, Rgba([45, 27, 78, 255]));

        // Interior pixels get full coverage, corners none at all.
        assert_eq!(img.get_pixel(16, 16).0, [45, 27, 78, 255]);
        assert_eq!(img.get_pixel(12, 16).0, [45, 27, 78, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(31, 31).0, [0, 0, 0, 0]);
    }

    #[test]
    fn stroke_circle_leaves_center_untouched() {
        let mut img = RgbaImage::new(32, 32);
        stroke_circle(&mut img, 16.0, 16.0, 10.0, 1.0, Rgba([200, 200, 200, 255]));

        assert_eq!(img.get_pixel(16, 16).0, [0, 0, 0, 0]);
        // A pixel on the ring (distance ~10 along the x axis) is painted.
        assert!(img.get_pixel(26, 16)[3] > 0);
    }

    #[test]
    fn blend_at_ignores_out_of_bounds() {
        let mut img = RgbaImage::new(4, 4);
        blend_at(&mut img, -1, 0, Rgba([255, 255, 255, 255]));
        blend_at(&mut img, 0, 9, Rgba([255, 255, 255, 255]));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
