//! Core types for histogram representation

use serde::Serialize;
use std::fmt;

/// A single bar of a streaming histogram
///
/// A bar owns the half-open interval `[min, max)` of the sample domain. The
/// one exception is a bar whose upper edge saturates at `i64::MAX`: it owns
/// `[min, i64::MAX]`, since no wider edge is representable. It keeps every raw sample it has absorbed so the histogram can later rebuild
/// all bars at a different width without the producer replaying its stream.
///
/// `value` is the mean of the absorbed samples, truncated toward zero. It is
/// derived from an exact running sum rather than from the previous mean, so
/// repeated in-place updates never compound the truncation. Callers that need
/// a fractional mean can use [`Bar::sum`] and [`Bar::count`] directly. A bar
/// that has absorbed nothing reports its lower bound as `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    /// Representative value: truncated mean of absorbed samples
    pub value: i64,
    /// Number of samples absorbed
    pub count: u64,
    /// Lower edge of the bar (inclusive)
    pub min: i64,
    /// Upper edge of the bar (exclusive, unless saturated at `i64::MAX`)
    pub max: i64,
    #[serde(skip)]
    sum: i128,
    #[serde(skip)]
    points: Vec<i64>,
}

impl Bar {
    /// Create a bar covering `[min, max)` with nothing absorbed yet
    pub fn empty(min: i64, max: i64) -> Self {
        Self {
            value: min,
            count: 0,
            min,
            max,
            sum: 0,
            points: Vec::new(),
        }
    }

    /// Absorb one sample, updating count, mean and the retained points
    pub(crate) fn absorb(&mut self, sample: i64) {
        self.sum += i128::from(sample);
        self.count += 1;
        self.points.push(sample);
        // |mean| never exceeds the largest |sample|, so it fits back in i64
        self.value = (self.sum / i128::from(self.count)) as i64;
    }

    /// Give up the retained points, e.g. to feed a full rebin
    pub(crate) fn into_points(self) -> Vec<i64> {
        self.points
    }

    /// Check if a value falls within this bar
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.last_value()
    }

    /// Largest sample this bar accepts
    pub fn last_value(&self) -> i64 {
        if self.is_saturated() {
            i64::MAX
        } else {
            self.max - 1
        }
    }

    /// Whether the upper edge is pinned at `i64::MAX` and therefore inclusive
    pub fn is_saturated(&self) -> bool {
        self.max == i64::MAX
    }

    /// Width of the interval covered by this bar
    pub fn width(&self) -> u64 {
        (i128::from(self.max) - i128::from(self.min)) as u64
    }

    /// Exact sum of the absorbed samples
    pub fn sum(&self) -> i128 {
        self.sum
    }

    /// Raw samples absorbed into this bar, in absorption order
    pub fn points(&self) -> &[i64] {
        &self.points
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.is_saturated() { ']' } else { ')' };
        write!(
            f,
            "[{}, {}{}: value={}, count={}",
            self.min, self.max, close, self.value, self.count
        )
    }
}

/// Aggregate count and total over every absorbed sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of samples absorbed
    pub count: u64,
    /// Sum of all absorbed sample values
    pub sum: i128,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples, {} total", self.count, self.sum)
    }
}
