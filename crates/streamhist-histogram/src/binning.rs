//! Equal-width binning of raw samples
//!
//! Two paths feed the bar store. [`rebin`] rebuilds every bar from the full
//! set of raw samples; [`assign`] drops a sample into the existing bar that
//! already covers it. The histogram picks between them on each flush.

use crate::types::Bar;
use tracing::{debug, instrument, trace};

/// Width of each bar for samples spanning `[lo, hi]` split into `target_bins`
///
/// The `+ 1` keeps `hi` strictly inside the last bar and gives a width of one
/// when every sample is identical.
pub fn bin_width(lo: i64, hi: i64, target_bins: usize) -> u128 {
    let span = (i128::from(hi) - i128::from(lo)) as u128;
    1 + span / target_bins.max(1) as u128
}

/// Rebuild the bars from every raw sample
///
/// Sorts `points`, then walks them left to right, closing the current bar and
/// opening the next one whenever a sample reaches the current upper edge.
/// Bars with no samples between two populated ones are kept so the result
/// stays contiguous. At most `target_bins` bars are produced.
///
/// Edges past `i64::MAX` are clamped. Once an upper edge reaches `i64::MAX` no
/// further bar is opened: that bar is saturated and keeps every remaining
/// sample, `i64::MAX` included.
#[instrument(level = "debug", skip_all, fields(points = points.len(), target_bins = target_bins))]
pub fn rebin(mut points: Vec<i64>, target_bins: usize) -> Vec<Bar> {
    let (Some(&lo), Some(&hi)) = (points.iter().min(), points.iter().max()) else {
        return Vec::new();
    };
    points.sort_unstable();

    let width = bin_width(lo, hi, target_bins) as i128;
    let mut bars = Vec::with_capacity(target_bins.min(points.len()));
    let mut lower = i128::from(lo);
    let mut upper = lower + width;
    let mut current = Bar::empty(lo, clamp(upper));
    let ceiling = i128::from(i64::MAX);

    for sample in points {
        while upper < ceiling && i128::from(sample) >= upper {
            bars.push(current);
            lower = upper;
            upper += width;
            current = Bar::empty(clamp(lower), clamp(upper));
        }
        current.absorb(sample);
    }
    bars.push(current);

    debug!(
        lo,
        hi,
        width = %width,
        bars = bars.len(),
        "Rebinned samples"
    );
    bars
}

/// Drop `sample` into the bar covering it
///
/// Returns `false` without touching anything when no bar covers the sample.
/// Bars must be sorted and contiguous, as [`rebin`] leaves them.
pub fn assign(bars: &mut [Bar], sample: i64) -> bool {
    let idx = bars.partition_point(|bar| bar.last_value() < sample);
    match bars.get_mut(idx) {
        Some(bar) if bar.contains(sample) => {
            bar.absorb(sample);
            trace!(sample, min = bar.min, max = bar.max, "Assigned sample in place");
            true
        }
        _ => false,
    }
}

/// Find the bar covering `value`
pub fn locate(bars: &[Bar], value: i64) -> Option<usize> {
    let idx = bars.partition_point(|bar| bar.last_value() < value);
    bars.get(idx).filter(|bar| bar.contains(value)).map(|_| idx)
}

fn clamp(edge: i128) -> i64 {
    edge.min(i128::from(i64::MAX)) as i64
}
