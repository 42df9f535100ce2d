//! Random workloads of simulated downloads.
//!
//! Each generated [`MockDownload`] gets a random integer size and an equal
//! share of a total bandwidth, so larger downloads simply take longer.
//!
//! # Examples
//!
//! ```rust
//! use twirl::clock::ManualClock;
//! use twirl::workload::Workload;
//!
//! let downloads = Workload::new(10, 100.0)
//!     .seed(7)
//!     .generate(ManualClock::shared())?;
//! assert_eq!(downloads.len(), 10);
//! assert!(downloads.iter().all(|d| d.bandwidth() == 10.0));
//! # Ok::<(), twirl::Error>(())
//! ```

use crate::clock::SharedClock;
use crate::item::{MockDownload, SharedItem};
use crate::{Error, Result};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::debug;

/// Parameters of a generated workload.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Number of downloads.
    count: usize,
    /// Bandwidth in MB/s shared evenly by all downloads.
    total_bandwidth: f64,
    /// Inclusive range of sizes in MB.
    sizes: RangeInclusive<u32>,
    /// Fixed seed for reproducible sizes.
    seed: Option<u64>,
}

impl Workload {
    /// Default range of download sizes, in MB.
    pub const DEFAULT_SIZES: RangeInclusive<u32> = 1..=100;

    pub fn new(count: usize, total_bandwidth: f64) -> Self {
        Self {
            count,
            total_bandwidth,
            sizes: Self::DEFAULT_SIZES,
            seed: None,
        }
    }

    /// Draw sizes from `sizes` instead of the default range.
    pub fn sizes(mut self, sizes: RangeInclusive<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Make the generated sizes reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bandwidth of each individual download.
    pub fn bandwidth_per_item(&self) -> f64 {
        if self.count == 0 {
            return self.total_bandwidth;
        }
        self.total_bandwidth / self.count as f64
    }

    /// Generate the downloads, all measuring time with `clock`.
    pub fn generate(&self, clock: SharedClock) -> Result<Vec<Arc<MockDownload>>> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "empty size range {}..={}",
                self.sizes.start(),
                self.sizes.end()
            )));
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let bandwidth = self.bandwidth_per_item();
        let downloads = (0..self.count)
            .map(|_| {
                let size = rng.random_range(self.sizes.clone());
                MockDownload::new(f64::from(size), bandwidth, Arc::clone(&clock)).map(Arc::new)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(count = downloads.len(), bandwidth, "generated mock workload");
        Ok(downloads)
    }

    /// Same as [`generate`](Self::generate), as renderer-ready handles.
    pub fn generate_items(&self, clock: SharedClock) -> Result<Vec<SharedItem>> {
        Ok(self
            .generate(clock)?
            .into_iter()
            .map(|d| d as SharedItem)
            .collect())
    }
}
