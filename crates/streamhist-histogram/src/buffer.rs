//! Pending samples not yet assigned to a bar

/// Unsorted list of samples waiting for the next flush
///
/// Pushing is O(1) amortized and does no binning work. The buffer tracks the
/// smallest and largest pending value as it goes, so the flush can decide
/// between in-place assignment and a full rebin without scanning.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    values: Vec<i64>,
    range: Option<(i64, i64)>,
}

impl SampleBuffer {
    /// Create an empty buffer with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            range: None,
        }
    }

    /// Append a sample
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    /// Number of pending samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest pending value
    pub fn range(&self) -> Option<(i64, i64)> {
        self.range
    }

    /// Pending samples in arrival order
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Move every pending sample out, leaving the buffer empty
    ///
    /// The buffer keeps its previous capacity so the next burst of pushes
    /// does not start from a fresh allocation.
    pub fn take(&mut self) -> Vec<i64> {
        let capacity = self.values.capacity();
        self.range = None;
        std::mem::replace(&mut self.values, Vec::with_capacity(capacity))
    }
}
