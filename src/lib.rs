//! Streaming histograms of integer samples, with export and bar-chart rendering
//!
//! This facade re-exports the member crates:
//!
//! - `streamhist-core`: the shared [`Error`] and [`Result`] types
//! - [`histogram`]: the streaming histogram, its exports and the concurrent
//!   blob-size collector
//! - [`render`]: bar-chart rendering onto raster surfaces
//!
//! # Example
//!
//! ```rust
//! use streamhist::{BlobStats, Canvas, RenderParams, Rgba};
//!
//! let stats = BlobStats::new();
//! for (i, size) in [4_096, 4_096, 8_192, 65_536].into_iter().enumerate() {
//!     stats.receive(format!("sha1-{i:04}"), size).unwrap();
//! }
//! println!("{}", stats.summary().unwrap());
//!
//! let mut canvas = Canvas::filled(90, 60, Rgba::WHITE);
//! stats
//!     .with_histogram(|histogram| {
//!         streamhist::render(histogram, RenderParams::new().with_background(&mut canvas))
//!     })
//!     .unwrap()
//!     .unwrap();
//! ```

pub use streamhist_histogram as histogram;
pub use streamhist_render as render;

pub use streamhist_core::{Error, Result};
pub use streamhist_histogram::{
    Bar, BlobStats, BlobSummary, HistogramConfig, SampleSink, StreamingHistogram, Summary,
};
pub use streamhist_render::{
    bar_layout, render, Canvas, CompositeOp, Fill, Rect, RenderParams, Rgba, Surface,
};
