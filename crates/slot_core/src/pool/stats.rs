use super::ReusePolicy;
use serde::Serialize;

/// Point-in-time snapshot of a table's paging state.
///
/// The lifetime counters (`inserts`, `removals`, `pages_created`,
/// `pages_destroyed`, `page_ids_reused`) read zero when `slot_core` is built
/// without the `metrics` feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    pub items: usize,
    pub pages: usize,
    pub free_page_ids: usize,
    pub next_page_id: usize,
    pub page_capacity: usize,
    pub value_size: usize,
    /// `items / (pages * page_capacity)`, or 0 with no pages.
    pub occupancy: f64,
    pub reuse_policy: ReusePolicy,
    pub inserts: usize,
    pub removals: usize,
    pub pages_created: usize,
    pub pages_destroyed: usize,
    pub page_ids_reused: usize,
}
