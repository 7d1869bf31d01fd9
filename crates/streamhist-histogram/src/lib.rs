//! Streaming equal-width histograms over integer samples
//!
//! This crate aggregates an unbounded stream of `i64` samples (blob sizes,
//! latencies, byte counts) into at most `N` contiguous, equal-width bars.
//! Samples are cheap to add: they land in a pending buffer and are only
//! binned when somebody reads the histogram.
//!
//! # Key Features
//!
//! - **O(1) ingestion**: `add` only appends; binning is batched per read
//! - **Lazy rebinning**: samples that widen the observed range trigger a full
//!   rebuild from the raw points each bar retains
//! - **In-place updates**: samples inside the covered span are dropped into
//!   their bar without touching the others
//! - **Exports**: tab-separated `value<TAB>count` dumps and JSON bar listings
//! - **Concurrent collection**: [`BlobStats`] serializes many workers onto one
//!   histogram behind a mutex
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use streamhist_histogram::StreamingHistogram;
//!
//! let mut histogram = StreamingHistogram::new(10).unwrap();
//! for size in [512, 1024, 2048, 4096, 4096, 8192] {
//!     histogram.add(size);
//! }
//!
//! println!("Histogram with {} bars", histogram.bars().len());
//! for bar in histogram.bars() {
//!     println!("  [{}, {}): value={}, count={}", bar.min, bar.max, bar.value, bar.count);
//! }
//! ```
//!
//! ## Range Growth
//!
//! ```rust
//! use streamhist_histogram::StreamingHistogram;
//!
//! let mut histogram = StreamingHistogram::new(10).unwrap();
//! histogram.extend(0..100);
//! assert_eq!(histogram.bars().last().unwrap().max, 100);
//!
//! // 150 lies outside [0, 100), so every bar is rebuilt at a wider width
//! histogram.add(150);
//! assert!(histogram.at(150).is_ok());
//! assert_eq!(histogram.bars().iter().map(|b| b.count).sum::<u64>(), 101);
//! ```
//!
//! ## Blob Size Report
//!
//! ```rust
//! use streamhist_histogram::BlobStats;
//!
//! let stats = BlobStats::new();
//! stats.receive("sha1-0beec7b5", 1_024).unwrap();
//! stats.receive("sha1-62cdb702", 3_072).unwrap();
//!
//! let summary = stats.dump(None).unwrap();
//! assert_eq!(summary.to_string(), "In-memory blob stats: 2 blobs, 4096 bytes");
//! ```

pub mod binning;
pub mod buffer;
pub mod config;
pub mod export;
pub mod histogram;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use buffer::SampleBuffer;
pub use config::{HistogramConfig, DEFAULT_BUFFER_CAPACITY, DEFAULT_TARGET_BINS};
pub use histogram::{RebinReason, StreamingHistogram};
pub use stats::{BlobStats, BlobSummary};
pub use traits::SampleSink;
pub use types::{Bar, Summary};

pub use streamhist_core::{Error, Result};

// Convenience functions
/// Build a histogram from a batch of samples in one go
///
/// ```rust
/// let mut histogram = streamhist_histogram::histogram_of([1, 2, 3, 18, 19, 20], 2).unwrap();
/// assert_eq!(histogram.pending_len(), 0);
/// assert_eq!(histogram.max_count().unwrap(), 3);
/// ```
pub fn histogram_of<I>(samples: I, target_bins: usize) -> Result<StreamingHistogram>
where
    I: IntoIterator<Item = i64>,
{
    let mut histogram = StreamingHistogram::new(target_bins)?;
    histogram.extend(samples);
    histogram.flush();
    Ok(histogram)
}
