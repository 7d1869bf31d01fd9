//! Streaming histogram with batched, lazily rebinned ingestion

use crate::binning;
use crate::buffer::SampleBuffer;
use crate::config::HistogramConfig;
use crate::traits::SampleSink;
use crate::types::{Bar, Summary};
use streamhist_core::{Error, Result};
use tracing::debug;

/// Why a flush rebuilt every bar instead of assigning in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebinReason {
    /// First flush with samples; no bars exist yet
    Initial,
    /// Pending samples fall outside the span the bars cover
    RangeDrift,
    /// The target bin count changed since the last flush
    Retarget,
}

/// Histogram that accepts samples one at a time and bins them on demand
///
/// [`add`](Self::add) only appends to a pending buffer. Every read
/// ([`bars`](Self::bars), [`at`](Self::at), [`max_count`](Self::max_count),
/// ...) first flushes that buffer: samples inside the span already covered
/// by the bars are dropped into place, anything else triggers a full rebin
/// from the raw points every bar retains.
///
/// The histogram is not synchronized. Share one between threads by wrapping
/// it in a lock held for the duration of each call, as
/// [`BlobStats`](crate::BlobStats) does.
///
/// # Example
///
/// ```rust
/// use streamhist_histogram::StreamingHistogram;
///
/// let mut histogram = StreamingHistogram::new(2).unwrap();
/// for size in [1, 2, 3, 18, 19, 20] {
///     histogram.add(size);
/// }
///
/// let bars = histogram.bars();
/// assert_eq!(bars.len(), 2);
/// assert_eq!((bars[0].min, bars[0].max, bars[0].value), (1, 11, 2));
/// assert_eq!((bars[1].min, bars[1].max, bars[1].value), (11, 21, 19));
/// ```
#[derive(Debug, Clone)]
pub struct StreamingHistogram {
    bars: Vec<Bar>,
    buffer: SampleBuffer,
    target_bins: usize,
    retarget: bool,
    total_count: u64,
    total_sum: i128,
}

impl Default for StreamingHistogram {
    fn default() -> Self {
        Self::from_valid_config(HistogramConfig::default())
    }
}

impl StreamingHistogram {
    /// Create an empty histogram with at most `target_bins` bars
    pub fn new(target_bins: usize) -> Result<Self> {
        Self::with_config(HistogramConfig::new().with_target_bins(target_bins))
    }

    /// Create an empty histogram from a config
    pub fn with_config(config: HistogramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: HistogramConfig) -> Self {
        Self {
            bars: Vec::new(),
            buffer: SampleBuffer::with_capacity(config.buffer_capacity),
            target_bins: config.target_bins,
            retarget: false,
            total_count: 0,
            total_sum: 0,
        }
    }

    /// Record a sample; binning is deferred to the next read
    pub fn add(&mut self, value: i64) {
        self.buffer.push(value);
        self.total_count += 1;
        self.total_sum += i128::from(value);
    }

    /// Change the target bin count
    ///
    /// The next flush rebuilds every bar at the new width, even when no
    /// sample is pending.
    pub fn set_target_bins(&mut self, target_bins: usize) -> Result<()> {
        if target_bins == 0 {
            return Err(Error::InvalidBinCount(target_bins));
        }
        if target_bins != self.target_bins {
            self.target_bins = target_bins;
            self.retarget = true;
        }
        Ok(())
    }

    /// Target bin count
    pub fn target_bins(&self) -> usize {
        self.target_bins
    }

    /// Number of samples ever added, pending ones included
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of samples waiting for the next flush
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no sample was ever added
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Move pending samples into the bars
    ///
    /// A no-op when nothing is pending and the target bin count is unchanged.
    pub fn flush(&mut self) {
        let retarget = std::mem::take(&mut self.retarget);
        let Some((lo, hi)) = self.buffer.range() else {
            if retarget && !self.bars.is_empty() {
                self.full_rebin(RebinReason::Retarget);
            }
            return;
        };

        let reason = match (self.bars.first(), self.bars.last()) {
            _ if retarget => Some(RebinReason::Retarget),
            (Some(first), Some(last)) if lo >= first.min && hi <= last.last_value() => None,
            (Some(_), Some(_)) => Some(RebinReason::RangeDrift),
            _ => Some(RebinReason::Initial),
        };

        match reason {
            Some(reason) => self.full_rebin(reason),
            None => {
                let pending = self.buffer.take();
                debug!(samples = pending.len(), "Assigning pending samples in place");
                for sample in pending {
                    // the range check above guarantees a covering bar
                    let placed = binning::assign(&mut self.bars, sample);
                    debug_assert!(placed, "sample {sample} escaped the covered span");
                }
            }
        }
    }

    fn full_rebin(&mut self, reason: RebinReason) {
        let mut points = self.buffer.take();
        let retained: usize = self.bars.iter().map(|bar| bar.points().len()).sum();
        points.reserve(retained);
        for bar in self.bars.drain(..) {
            points.extend(bar.into_points());
        }

        debug!(
            ?reason,
            points = points.len(),
            target_bins = self.target_bins,
            "Full rebin"
        );
        self.bars = binning::rebin(points, self.target_bins);
    }

    /// Flush, then return the bars in ascending order
    pub fn bars(&mut self) -> &[Bar] {
        self.flush();
        &self.bars
    }

    /// Flush, then return the bar that contains `value`
    pub fn at(&mut self, value: i64) -> Result<&Bar> {
        self.flush();
        if self.bars.is_empty() {
            return Err(Error::EmptyHistogram);
        }
        binning::locate(&self.bars, value)
            .map(|idx| &self.bars[idx])
            .ok_or_else(|| Error::not_found(value))
    }

    /// Flush, then return the largest bar count
    pub fn max_count(&mut self) -> Result<u64> {
        self.flush();
        self.bars
            .iter()
            .map(|bar| bar.count)
            .max()
            .ok_or(Error::EmptyHistogram)
    }

    /// Flush, then return the representative value of the first bar
    pub fn min_value(&mut self) -> Result<i64> {
        self.flush();
        self.bars.first().map(|bar| bar.value).ok_or(Error::EmptyHistogram)
    }

    /// Flush, then return the representative value of the last bar
    pub fn max_value(&mut self) -> Result<i64> {
        self.flush();
        self.bars.last().map(|bar| bar.value).ok_or(Error::EmptyHistogram)
    }

    /// Flush, then return the count and sum of every absorbed sample
    pub fn summary(&mut self) -> Summary {
        self.flush();
        Summary {
            count: self.total_count,
            sum: self.total_sum,
        }
    }
}

impl SampleSink for StreamingHistogram {
    fn add(&mut self, value: i64) {
        StreamingHistogram::add(self, value);
    }
}

impl Extend<i64> for StreamingHistogram {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
