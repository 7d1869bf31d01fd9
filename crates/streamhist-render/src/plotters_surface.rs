//! `plotters` drawing areas as render surfaces
//!
//! Any root or split [`DrawingArea`] with pixel coordinates can receive a
//! histogram. The backend owns blending: `Over` forwards the fill's alpha and
//! lets the backend mix it, `Src` draws the fill fully opaque.

use crate::surface::{CompositeOp, Fill, Rect, Surface};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::style::RGBAColor;
use streamhist_core::{Error, Result};

impl<DB: DrawingBackend> Surface for DrawingArea<DB, Shift> {
    fn size(&self) -> (u32, u32) {
        self.dim_in_pixel()
    }

    fn composite(&mut self, rect: Rect, fill: &dyn Fill, op: CompositeOp) -> Result<()> {
        let rect = rect.clip(self.size());
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                let color = fill.color_at(x, y);
                let alpha = match op {
                    CompositeOp::Src => 1.0,
                    CompositeOp::Over if color.a == 0 => continue,
                    CompositeOp::Over => f64::from(color.a) / 255.0,
                };
                self.draw_pixel(
                    (x as i32, y as i32),
                    &RGBAColor(color.r, color.g, color.b, alpha),
                )
                .map_err(|e| Error::Render(e.to_string()))?;
            }
        }
        Ok(())
    }
}
