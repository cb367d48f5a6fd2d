//! Table configuration

use crate::pool::ReusePolicy;
use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`SlotTable`](crate::SlotTable).
///
/// Page capacity is a type parameter and therefore not part of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Empty pages created up front (and again after `clear`).
    pub cache_pages: usize,
    pub reuse_policy: ReusePolicy,
}

impl TableConfig {
    pub fn with_cache_pages(cache_pages: usize) -> Self {
        Self {
            cache_pages,
            ..Self::default()
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cache_pages: 0,
            reuse_policy: ReusePolicy::Lifo,
        }
    }
}
