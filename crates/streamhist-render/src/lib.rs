//! Bar-chart rendering for streaming histograms
//!
//! The renderer does no binning of its own: it reads the flushed bars and the
//! largest count from a [`StreamingHistogram`](streamhist_histogram::StreamingHistogram)
//! and composites one rectangle per bar onto a raster [`Surface`].
//!
//! Two surfaces ship with the crate: the in-memory [`Canvas`], and, with the
//! `plotters` feature, any `plotters` drawing area.
//!
//! # Example
//!
//! ```rust
//! use streamhist_histogram::StreamingHistogram;
//! use streamhist_render::{render, Canvas, RenderParams, Rgba};
//!
//! let mut histogram = StreamingHistogram::new(8).unwrap();
//! histogram.extend([120, 340, 350, 900, 910, 915, 2_000]);
//!
//! let mut canvas = Canvas::filled(170, 100, Rgba::WHITE);
//! let layout = render(&mut histogram, RenderParams::new().with_background(&mut canvas)).unwrap();
//! assert_eq!(layout.len(), histogram.bars().len());
//! ```

pub mod canvas;
#[cfg(feature = "plotters")]
pub mod plotters_surface;
pub mod renderer;
pub mod surface;

pub use canvas::Canvas;
pub use renderer::{bar_layout, render, RenderParams, DEFAULT_FOREGROUND};
pub use surface::{CompositeOp, Fill, Rect, Rgba, Surface};

pub use streamhist_core::{Error, Result};
