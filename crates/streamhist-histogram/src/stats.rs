//! Shared blob-size statistics for concurrent upload workers
//!
//! Workers report each blob they would have uploaded; the collector keeps the
//! size per blob reference and feeds it into one [`StreamingHistogram`]. All
//! state sits behind a single mutex held for the length of each call.

use crate::config::HistogramConfig;
use crate::histogram::StreamingHistogram;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Read};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use streamhist_core::{Error, Result};
use tracing::{debug, info};

/// Number of blobs seen and their total size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlobSummary {
    pub blobs: usize,
    pub bytes: i128,
}

impl fmt::Display for BlobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In-memory blob stats: {} blobs, {} bytes",
            self.blobs, self.bytes
        )
    }
}

#[derive(Debug)]
struct Inner {
    have: HashMap<String, i64>,
    histogram: StreamingHistogram,
}

/// Thread-safe collector of blob sizes
///
/// Blob references are content addresses, so a reference seen twice always
/// has the same size; repeats are ignored and never counted twice.
#[derive(Debug)]
pub struct BlobStats {
    inner: Mutex<Inner>,
}

impl Default for BlobStats {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                have: HashMap::new(),
                histogram: StreamingHistogram::default(),
            }),
        }
    }
}

impl BlobStats {
    /// Create a collector with the default histogram parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector whose histogram uses `config`
    pub fn with_config(config: HistogramConfig) -> Result<Self> {
        Ok(Self {
            inner: Mutex::new(Inner {
                have: HashMap::new(),
                histogram: StreamingHistogram::with_config(config)?,
            }),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|e| Error::poisoned("blob stats", e))
    }

    /// Record a blob of `size` bytes; returns `false` if it was already known
    pub fn receive(&self, blob_ref: impl Into<String>, size: i64) -> Result<bool> {
        let blob_ref = blob_ref.into();
        let mut inner = self.lock()?;
        if inner.have.contains_key(&blob_ref) {
            return Ok(false);
        }
        inner.have.insert(blob_ref, size);
        inner.histogram.add(size);
        Ok(true)
    }

    /// Drain `source`, counting its bytes, and record the count as the size
    ///
    /// The reader is consumed before the lock is taken, so slow sources do
    /// not stall other workers.
    pub fn receive_from_reader<R: Read>(
        &self,
        blob_ref: impl Into<String>,
        mut source: R,
    ) -> Result<i64> {
        let copied = io::copy(&mut source, &mut io::sink())?;
        let size = i64::try_from(copied).map_err(anyhow::Error::from)?;
        self.receive(blob_ref, size)?;
        Ok(size)
    }

    /// Sizes of the given blobs that have been received, in request order
    pub fn stat<S: AsRef<str>>(&self, blob_refs: &[S]) -> Result<Vec<(String, i64)>> {
        let inner = self.lock()?;
        Ok(blob_refs
            .iter()
            .filter_map(|blob_ref| {
                let blob_ref = blob_ref.as_ref();
                inner
                    .have
                    .get(blob_ref)
                    .map(|&size| (blob_ref.to_string(), size))
            })
            .collect())
    }

    /// Count and total size of every received blob
    pub fn summary(&self) -> Result<BlobSummary> {
        let inner = self.lock()?;
        Ok(BlobSummary {
            blobs: inner.have.len(),
            bytes: inner.have.values().map(|&size| i128::from(size)).sum(),
        })
    }

    /// Run `f` against the histogram while holding the lock
    pub fn with_histogram<T>(&self, f: impl FnOnce(&mut StreamingHistogram) -> T) -> Result<T> {
        let mut inner = self.lock()?;
        Ok(f(&mut inner.histogram))
    }

    /// Log the summary line and, if `histogram_path` is given, write the
    /// TSV dump of the size histogram there
    pub fn dump(&self, histogram_path: Option<&Path>) -> Result<BlobSummary> {
        let summary = self.summary()?;
        info!("{summary}");
        if let Some(path) = histogram_path {
            self.with_histogram(|histogram| histogram.export_tsv(path))??;
            debug!(path = %path.display(), "Dumped blob size histogram");
        }
        Ok(summary)
    }
}
