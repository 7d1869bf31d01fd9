//! Property-based tests for streaming histograms
//!
//! These tests check that whatever order and batching samples arrive in, the
//! flushed bars conserve every sample and partition the covered range.

use proptest::prelude::*;
use streamhist_histogram::{Bar, StreamingHistogram};

fn assert_partition(bars: &[Bar], target_bins: usize) {
    assert!(bars.len() <= target_bins);
    for bar in bars {
        assert!(bar.min < bar.max, "degenerate bar {bar}");
        assert_eq!(bar.count as usize, bar.points().len());
        for &point in bar.points() {
            assert!(bar.contains(point), "{point} escaped {bar}");
        }
    }
    for pair in bars.windows(2) {
        assert_eq!(pair[0].max, pair[1].min);
    }
}

proptest! {
    // Property: every added sample is counted exactly once
    #[test]
    fn prop_count_conservation(
        samples in prop::collection::vec(-1_000_000i64..1_000_000, 1..500),
        target_bins in 1usize..128,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        histogram.extend(samples.iter().copied());

        let counted: u64 = histogram.bars().iter().map(|bar| bar.count).sum();
        prop_assert_eq!(counted, samples.len() as u64);
        prop_assert_eq!(histogram.total_count(), samples.len() as u64);
    }

    // Property: bars are contiguous and each point sits in its own bar,
    // regardless of how ingestion is interleaved with reads
    #[test]
    fn prop_partition_across_batches(
        batches in prop::collection::vec(
            prop::collection::vec(0i64..1_000_000_000, 1..50),
            1..12,
        ),
        target_bins in 1usize..100,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        let mut expected = Vec::new();

        for batch in &batches {
            histogram.extend(batch.iter().copied());
            expected.extend(batch.iter().copied());
            assert_partition(histogram.bars(), target_bins);
        }

        let mut retained: Vec<i64> = histogram
            .bars()
            .iter()
            .flat_map(|bar| bar.points().iter().copied())
            .collect();
        retained.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(retained, expected);
    }

    // Property: reading twice without adding changes nothing
    #[test]
    fn prop_idempotent_flush(
        samples in prop::collection::vec(any::<i32>(), 1..300),
        target_bins in 1usize..64,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        histogram.extend(samples.iter().map(|&s| i64::from(s)));

        let first = histogram.bars().to_vec();
        let second = histogram.bars().to_vec();
        prop_assert_eq!(first, second);
    }

    // Property: every absorbed value is found by `at`, in the bar holding it
    #[test]
    fn prop_at_finds_every_sample(
        samples in prop::collection::vec(-5_000i64..5_000, 1..200),
        target_bins in 1usize..40,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        histogram.extend(samples.iter().copied());

        for &sample in &samples {
            let bar = histogram.at(sample).unwrap();
            prop_assert!(bar.contains(sample));
            prop_assert!(bar.points().contains(&sample));
        }
    }

    // Property: a bar's value is the truncated mean of its points
    #[test]
    fn prop_bar_value_is_truncated_mean(
        samples in prop::collection::vec(-1_000i64..1_000, 1..200),
        target_bins in 1usize..20,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        histogram.extend(samples.iter().copied());

        for bar in histogram.bars() {
            if bar.count > 0 {
                let sum: i64 = bar.points().iter().sum();
                prop_assert_eq!(bar.value, sum / bar.count as i64);
            } else {
                prop_assert_eq!(bar.value, bar.min);
            }
        }
    }
}

#[test]
fn test_range_growth_redistributes_points() {
    let mut histogram = StreamingHistogram::new(10).unwrap();
    histogram.extend(0..100);
    {
        let bars = histogram.bars();
        assert_eq!(bars.first().map(|b| b.min), Some(0));
        assert_eq!(bars.last().map(|b| b.max), Some(100));
    }

    histogram.add(150);
    let bars = histogram.bars();
    let last = bars.last().unwrap();
    assert!(last.max > 150);
    assert_eq!(last.points(), &[144, 145, 146, 147, 148, 149, 150]);

    // every original point moved into a bar of the new width
    let width = bars[0].width();
    assert_eq!(width, 16);
    for (i, bar) in bars.iter().enumerate() {
        assert_eq!(bar.min, i as i64 * 16);
        assert!(bar.points().iter().all(|&p| bar.contains(p)));
    }
    assert_partition(bars, 10);
}

#[test]
fn test_zero_width_range() {
    let mut histogram = StreamingHistogram::new(10).unwrap();
    for _ in 0..5 {
        histogram.add(5);
    }

    let bars = histogram.bars();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].count, 5);
    assert!(bars[0].min <= 5 && 5 < bars[0].max);
}

#[test]
fn test_random_stream_with_retargeting() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut histogram = StreamingHistogram::new(100).unwrap();

    for round in 0..20 {
        for _ in 0..500 {
            // log-ish spread, like file sizes
            let exp = rng.gen_range(0..24);
            histogram.add(rng.gen_range(0..(1i64 << exp) + 1));
        }
        if round % 5 == 4 {
            histogram.set_target_bins(10 + round * 3).unwrap();
        }
        let target_bins = histogram.target_bins();
        assert_partition(histogram.bars(), target_bins);
    }

    let counted: u64 = histogram.bars().iter().map(|bar| bar.count).sum();
    assert_eq!(counted, 10_000);
}

#[test]
fn test_full_span_in_one_bar() {
    let mut histogram = StreamingHistogram::new(1).unwrap();
    histogram.extend([0, i64::MAX]);

    {
        let bars = histogram.bars();
        assert_eq!(bars.len(), 1);
        assert_eq!((bars[0].min, bars[0].max, bars[0].count), (0, i64::MAX, 2));
        assert_partition(bars, 1);
    }
    assert_eq!(histogram.at(i64::MAX).unwrap().count, 2);

    // both ends are covered now, so this lands in place instead of rebinning
    histogram.add(5);
    histogram.add(i64::MAX);
    let bars = histogram.bars();
    assert_eq!(bars[0].points(), &[0, i64::MAX, 5, i64::MAX]);
    assert_partition(bars, 1);
}

#[test]
fn test_top_of_domain_never_degenerates() {
    let mut histogram = StreamingHistogram::new(2).unwrap();
    histogram.extend([i64::MAX - 1, i64::MAX]);

    let bars = histogram.bars();
    assert_partition(bars, 2);
    assert_eq!(bars.iter().map(|bar| bar.count).sum::<u64>(), 2);
    assert_eq!(bars.last().map(|bar| bar.max), Some(i64::MAX));
    assert!(histogram.at(i64::MAX).is_ok());
    assert!(histogram.at(i64::MAX - 1).is_ok());
}

proptest! {
    // Property: samples near the top of the domain stay findable
    #[test]
    fn prop_top_of_domain_is_covered(
        offsets in prop::collection::vec(0i64..1_000, 1..100),
        target_bins in 1usize..32,
    ) {
        let mut histogram = StreamingHistogram::new(target_bins).unwrap();
        histogram.extend(offsets.iter().map(|offset| i64::MAX - offset));
        histogram.add(i64::MAX);

        assert_partition(histogram.bars(), target_bins);
        for offset in &offsets {
            prop_assert!(histogram.at(i64::MAX - offset).is_ok());
        }
        prop_assert!(histogram.at(i64::MAX).is_ok());
    }
}
