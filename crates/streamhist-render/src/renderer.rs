//! Bar-chart rendering of a streaming histogram

use crate::surface::{CompositeOp, Fill, Rect, Rgba, Surface};
use streamhist_core::{Error, Result};
use streamhist_histogram::{Bar, StreamingHistogram};
use tracing::debug;

/// Bars are plain green unless a foreground is supplied
pub const DEFAULT_FOREGROUND: Rgba = Rgba::GREEN;

/// Where and how to draw a histogram
#[derive(Default)]
pub struct RenderParams<'a> {
    background: Option<&'a mut dyn Surface>,
    foreground: Option<&'a dyn Fill>,
    op: CompositeOp,
}

impl<'a> RenderParams<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface the bars are drawn onto
    pub fn with_background(mut self, background: &'a mut dyn Surface) -> Self {
        self.background = Some(background);
        self
    }

    /// Fill used for the bars
    pub fn with_foreground(mut self, foreground: &'a dyn Fill) -> Self {
        self.foreground = Some(foreground);
        self
    }

    /// Compositing operator for each bar
    pub fn with_op(mut self, op: CompositeOp) -> Self {
        self.op = op;
        self
    }
}

/// Place one rectangle per bar on a `width x height` surface
///
/// Bars and the gaps between them share one width, `width / (2n + 1)`, with a
/// gap on each side. Heights scale each count against `max_count`, so the
/// tallest bar spans the full height. Bars with no samples get an empty
/// rectangle on the baseline.
pub fn bar_layout(bars: &[Bar], max_count: u64, width: u32, height: u32) -> Vec<Rect> {
    let slots = 2 * bars.len() as u64 + 1;
    let bar_width = (u64::from(width) / slots) as u32;
    let spacing = bar_width;

    let mut pos = spacing;
    bars.iter()
        .map(|bar| {
            let bar_height = if max_count == 0 {
                0
            } else {
                let scaled = u128::from(bar.count) * u128::from(height) / u128::from(max_count);
                scaled.min(u128::from(height)) as u32
            };
            let rect = Rect::new(pos, height - bar_height, pos + bar_width, height);
            pos += bar_width + spacing;
            rect
        })
        .collect()
}

/// Draw `histogram` as a bar chart onto the params' background
///
/// Flushes the histogram first. Returns the rectangle placed for each bar.
pub fn render(histogram: &mut StreamingHistogram, params: RenderParams<'_>) -> Result<Vec<Rect>> {
    let RenderParams {
        background,
        foreground,
        op,
    } = params;
    let background = background.ok_or(Error::MissingSurface)?;
    let foreground = foreground.unwrap_or(&DEFAULT_FOREGROUND);

    let max_count = histogram.max_count()?;
    let (width, height) = background.size();
    let layout = bar_layout(histogram.bars(), max_count, width, height);

    for rect in layout.iter().filter(|rect| !rect.is_empty()) {
        background.composite(*rect, foreground, op)?;
    }
    debug!(bars = layout.len(), width, height, max_count, "Rendered histogram");
    Ok(layout)
}
