//! The per-render raster surface.

use image::{Rgba, RgbaImage};

/// A square RGBA canvas, fully transparent at allocation.
///
/// One canvas is owned by exactly one render call and discarded after it
/// has been encoded to a file; nothing outlives the render that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Allocates a transparent `size x size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            data: RgbaImage::new(size, size),
        }
    }

    /// Edge length of the canvas (width and height are always equal).
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// The underlying pixel buffer.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }

    /// Mutable access for the painting layers.
    pub fn data_mut(&mut self) -> &mut RgbaImage {
        &mut self.data
    }

    /// Consumes the canvas, returning the pixel buffer.
    pub fn into_inner(self) -> RgbaImage {
        self.data
    }

    /// Reads one pixel. Panics when out of bounds, like the underlying buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.data.get_pixel(x, y)
    }

    /// Encodes the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.data.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.size(), 8);
        for (_, _, pixel) in canvas.data().enumerate_pixels() {
            assert_eq!(pixel.0, [0, 0, 0, 0]);
        }
    }

    #[test]
    fn encode_png_round_trips() {
        let mut canvas = Canvas::new(4);
        canvas.data_mut().put_pixel(1, 2, Rgba([10, 20, 30, 255]));

        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(1, 2).0, [10, 20, 30, 255]);
    }
}
