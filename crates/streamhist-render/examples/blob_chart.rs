//! Render a bar chart of synthetic blob sizes to a PNG image
//!
//! ```text
//! cargo run -p streamhist-render --features plotters --example blob_chart -- chart.png
//! ```

use plotters::prelude::*;
use streamhist_histogram::StreamingHistogram;
use streamhist_render::{render, Error, RenderParams, Rgba};

const SIZE: (u32, u32) = (810, 300);

fn main() -> streamhist_render::Result<()> {
    let out = std::env::args().nth(1).unwrap_or_else(|| "chart.png".to_string());

    let mut histogram = StreamingHistogram::new(40)?;
    // chunked-upload shape: many full 64 KiB chunks plus a tail of small ones
    for i in 0..5_000i64 {
        let size = if i % 7 == 0 { (i * 37) % 65_536 } else { 65_536 - (i % 13) * 512 };
        histogram.add(size);
    }

    let mut root = BitMapBackend::new(&out, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| Error::Render(e.to_string()))?;
    render(
        &mut histogram,
        RenderParams::new()
            .with_background(&mut root)
            .with_foreground(&Rgba::new(30, 120, 200, 255)),
    )?;
    root.present().map_err(|e| Error::Render(e.to_string()))?;

    println!("{} -> {out}", histogram.summary());
    Ok(())
}
