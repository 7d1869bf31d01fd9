//! Producer-facing traits

/// Anything that accepts a stream of integer samples
///
/// Producers such as upload workers only need to report one value per unit
/// of work; they never see how the values are binned.
pub trait SampleSink {
    /// Record one sample
    fn add(&mut self, value: i64);

    /// Record every sample from an iterator, in order
    fn extend_samples<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i64>,
        Self: Sized,
    {
        for value in values {
            self.add(value);
        }
    }
}

impl SampleSink for Vec<i64> {
    fn add(&mut self, value: i64) {
        self.push(value);
    }
}
