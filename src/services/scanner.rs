//! Sequential asset discovery.
//!
//! Items of a category are numbered `1, 2, 3, ...`. The scanner probes them
//! in order and stops at the first serial that is missing, so the result is
//! always a contiguous run starting at 1. A gap is indistinguishable from the
//! end of the sequence.

use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_MAX_SEARCH_LIMIT, DEFAULT_YIELD_INTERVAL};
use crate::models::{AssetLayout, Category, ItemPath, ItemRef};
use crate::services::oracle::ExistenceOracle;

/// Tunables for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Path convention for generated candidates
    pub layout: AssetLayout,
    /// Highest serial probed
    pub max_search_limit: u32,
    /// Yield to the runtime every N probes (0 disables yielding)
    pub yield_interval: u32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            layout: AssetLayout::default(),
            max_search_limit: DEFAULT_MAX_SEARCH_LIMIT,
            yield_interval: DEFAULT_YIELD_INTERVAL,
        }
    }
}

/// Discovers which numbered items of a category exist.
#[derive(Debug)]
pub struct Scanner<O> {
    oracle: O,
    settings: ScanSettings,
}

impl<O: ExistenceOracle> Scanner<O> {
    /// Creates a scanner over `oracle`.
    pub fn new(oracle: O, settings: ScanSettings) -> Self {
        Self { oracle, settings }
    }

    /// Probes `category` serials in ascending order.
    ///
    /// Queries are issued one at a time. The scan ends at the first serial
    /// the oracle reports missing or fails to check, or at the search limit.
    pub async fn scan(&self, category: Category) -> Vec<ItemPath> {
        let mut found = Vec::new();

        for serial in 1..=self.settings.max_search_limit {
            let path = ItemRef::new(category, serial).path(&self.settings.layout);

            match self.oracle.exists(path.as_str()).await {
                Ok(true) => {
                    debug!(%category, serial, path = %path, "item found");
                    found.push(path);
                }
                Ok(false) => {
                    debug!(%category, serial, "no item at serial, sequence ends");
                    break;
                }
                Err(e) => {
                    warn!(%category, serial, error = %format!("{e:#}"), "probe failed, ending scan");
                    break;
                }
            }

            if self.settings.yield_interval > 0 && serial % self.settings.yield_interval == 0 {
                tokio::task::yield_now().await;
            }
        }

        info!(%category, count = found.len(), "scan complete");
        found
    }
}
