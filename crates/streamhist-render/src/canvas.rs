//! In-memory RGBA surface
//!
//! [`Canvas`] is the surface for tests, textured fills and callers that post
//! process raw pixels themselves. Image files are written through the
//! `plotters` feature, which renders straight onto a `BitMapBackend`.

use crate::surface::{CompositeOp, Fill, Rect, Rgba, Surface};
use streamhist_core::Result;

/// Row-major RGBA pixel buffer
///
/// A canvas is both a drawing target and a fill, so one canvas can serve as
/// the textured foreground for bars drawn onto another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Colour at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel; writes outside the canvas are dropped
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixels flattened to `r, g, b, a` bytes, row-major
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}

impl Fill for Canvas {
    fn color_at(&self, x: u32, y: u32) -> Rgba {
        self.pixel(x, y).unwrap_or(Rgba::TRANSPARENT)
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn composite(&mut self, rect: Rect, fill: &dyn Fill, op: CompositeOp) -> Result<()> {
        let rect = rect.clip(self.size());
        for y in rect.y0..rect.y1 {
            let row = y as usize * self.width as usize;
            for x in rect.x0..rect.x1 {
                let i = row + x as usize;
                let src = fill.color_at(x, y);
                self.pixels[i] = match op {
                    CompositeOp::Src => src,
                    CompositeOp::Over => src.over(self.pixels[i]),
                };
            }
        }
        Ok(())
    }
}
