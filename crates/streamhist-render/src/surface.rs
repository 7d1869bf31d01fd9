//! Raster surface abstraction the renderer draws through

use std::fmt;
use streamhist_core::Result;

/// Non-premultiplied 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Porter-Duff "source over destination"
    pub fn over(self, dst: Rgba) -> Rgba {
        let sa = u32::from(self.a);
        let da = u32::from(dst.a);
        // alpha scaled by 255 to stay in integers
        let out_a = sa * 255 + da * (255 - sa);
        if out_a == 0 {
            return Rgba::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| {
            let num = u32::from(s) * sa * 255 + u32::from(d) * da * (255 - sa);
            ((num + out_a / 2) / out_a) as u8
        };
        Rgba {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: ((out_a + 127) / 255) as u8,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// How a fill combines with what is already on the surface
///
/// | op     | [`Canvas`](crate::Canvas)      | `plotters` drawing area           |
/// |--------|--------------------------------|-----------------------------------|
/// | `Src`  | pixel replaced, alpha included | colour drawn opaque, alpha ignored |
/// | `Over` | [`Rgba::over`] blend           | backend blends by the fill alpha  |
///
/// `plotters` backends have no way to write alpha into a pixel, so `Src` with
/// a translucent fill differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    /// Replace destination pixels with the fill
    Src,
    /// Blend the fill over the destination by its alpha
    #[default]
    Over,
}

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Check if the rectangle covers no pixel
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if pixel `(x, y)` lies inside
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Intersect with a `width x height` surface anchored at the origin
    pub fn clip(&self, (width, height): (u32, u32)) -> Rect {
        Rect {
            x0: self.x0.min(width),
            y0: self.y0.min(height),
            x1: self.x1.min(width),
            y1: self.y1.min(height),
        }
    }
}

/// Source of colour for a composite operation
///
/// Fills are sampled in surface coordinates: the pixel written at `(x, y)`
/// takes the fill's colour at `(x, y)`.
pub trait Fill {
    fn color_at(&self, x: u32, y: u32) -> Rgba;
}

impl Fill for Rgba {
    fn color_at(&self, _x: u32, _y: u32) -> Rgba {
        *self
    }
}

/// Pixel surface the renderer can draw rectangles onto
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Combine `fill` into every pixel of `rect` using `op`
    ///
    /// Parts of `rect` outside the surface are ignored.
    fn composite(&mut self, rect: Rect, fill: &dyn Fill, op: CompositeOp) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_opaque_source_replaces() {
        let out = Rgba::GREEN.over(Rgba::WHITE);
        assert_eq!(out, Rgba::GREEN);
    }

    #[test]
    fn test_over_transparent_source_keeps_destination() {
        let dst = Rgba::new(10, 20, 30, 200);
        assert_eq!(Rgba::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn test_over_half_alpha() {
        let src = Rgba::new(255, 0, 0, 128);
        let out = src.over(Rgba::new(0, 0, 255, 255));
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 128);
        assert_eq!(out.b, 127);
    }

    #[test]
    fn test_over_onto_transparent() {
        let src = Rgba::new(200, 100, 50, 100);
        let out = src.over(Rgba::TRANSPARENT);
        assert_eq!(out, src);
    }

    #[test]
    fn test_rect() {
        let rect = Rect::new(2, 3, 6, 10);
        assert_eq!(rect.width(), 4);
        assert_eq!(rect.height(), 7);
        assert!(rect.contains(2, 3));
        assert!(!rect.contains(6, 3)); // right edge is exclusive
        assert!(Rect::new(4, 0, 4, 10).is_empty());

        let clipped = Rect::new(5, 5, 50, 50).clip((20, 10));
        assert_eq!(clipped, Rect::new(5, 5, 20, 10));
        assert!(Rect::new(30, 0, 40, 5).clip((20, 10)).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::GREEN.to_string(), "#00ff00ff");
    }
}
