use super::{FreePageIds, PageId, ReusePolicy, SlotPage, TableError, TableStats};
use crate::config::TableConfig;
use slot_metrics::Counter;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Public table that hides individual pages and hands out flat indices.
///
/// Index `i` addresses offset `i % S` of page `i / S`. Pages live in a map
/// keyed by page id, so destroying one never shifts another. Lookups by
/// value scan every live slot; lookups by index go straight to the page.
#[derive(Debug)]
pub struct SlotTable<T, const S: usize> {
    pages: BTreeMap<PageId, SlotPage<T, S>>,
    free_page_ids: FreePageIds,
    /// High-water mark: live ids and free ids together are exactly `0..next_page_id`.
    next_page_id: PageId,
    cache_pages: usize,
    counters: Counter,
}

impl<T, const S: usize> SlotTable<T, S> {
    /// Create a table with `cache` empty pages ready for inserts.
    pub fn new(cache: usize) -> Self {
        Self::with_config(&TableConfig::with_cache_pages(cache))
    }

    pub fn with_config(config: &TableConfig) -> Self {
        let mut table = Self {
            pages: BTreeMap::new(),
            free_page_ids: FreePageIds::new(config.reuse_policy),
            next_page_id: 0,
            cache_pages: config.cache_pages,
            counters: Counter::new(),
        };
        table.warm_cache();
        table
    }

    fn warm_cache(&mut self) {
        for _ in 0..self.cache_pages {
            self.create_page();
        }
        if self.cache_pages > 0 {
            debug!(pages = self.cache_pages, "pre-allocated page cache");
        }
    }

    /// Translate a flat index into `(page_id, offset)`.
    #[inline]
    pub fn split_index(index: usize) -> (PageId, usize) {
        (index / S, index % S)
    }

    #[inline]
    pub fn join_index(page_id: PageId, offset: usize) -> usize {
        page_id * S + offset
    }

    /// Number of stored values across all pages.
    pub fn count(&self) -> usize {
        self.pages.values().map(SlotPage::len).sum()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.values().all(SlotPage::is_empty)
    }

    #[inline]
    pub fn page_capacity(&self) -> usize {
        S
    }

    #[inline]
    pub fn value_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Live page ids in ascending order.
    pub fn page_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.keys().copied()
    }

    pub fn page(&self, page_id: PageId) -> Option<&SlotPage<T, S>> {
        self.pages.get(&page_id)
    }

    /// Reclaimed page ids waiting for reuse, ascending.
    pub fn free_page_ids(&self) -> Vec<PageId> {
        self.free_page_ids.to_sorted_vec()
    }

    #[inline]
    pub fn next_page_id(&self) -> PageId {
        self.next_page_id
    }

    #[inline]
    pub fn reuse_policy(&self) -> ReusePolicy {
        self.free_page_ids.policy()
    }

    /// Store `value` in the first page with room and return its index.
    ///
    /// Equal values are not merged; each insert gets its own slot.
    pub fn insert(&mut self, value: T) -> usize {
        self.counters.increment("inserts", 1);

        if let Some(page) = self.pages.values_mut().find(|page| !page.is_full()) {
            return Self::place(page, value);
        }
        let page = self.create_page();
        Self::place(page, value)
    }

    fn place(page: &mut SlotPage<T, S>, value: T) -> usize {
        let offset = page
            .insert(value)
            .ok()
            .expect("page selected for insert should have a free slot");
        let index = Self::join_index(page.page_id(), offset);
        trace!(index, page_id = page.page_id(), "inserted value");
        index
    }

    fn create_page(&mut self) -> &mut SlotPage<T, S> {
        let page_id = match self.free_page_ids.pop() {
            Some(page_id) => {
                self.counters.increment("page_ids_reused", 1);
                page_id
            }
            None => {
                let page_id = self.next_page_id;
                self.next_page_id += 1;
                page_id
            }
        };
        self.counters.increment("pages_created", 1);
        debug!(page_id, next_page_id = self.next_page_id, "created page");

        self.pages
            .entry(page_id)
            .or_insert_with(|| SlotPage::new(page_id))
    }

    fn reclaim_if_drained(&mut self, page_id: PageId) {
        if !self.pages.get(&page_id).is_some_and(SlotPage::is_empty) {
            return;
        }
        self.pages.remove(&page_id);
        self.free_page_ids.push(page_id);
        self.counters.increment("pages_destroyed", 1);
        debug!(page_id, free = self.free_page_ids.len(), "destroyed drained page");
    }

    /// Value stored at `index`, or `None` if the slot is empty or no page
    /// covers it.
    pub fn value_at(&self, index: usize) -> Option<&T> {
        self.get_checked(index).ok()
    }

    /// Like [`value_at`](Self::value_at) but says why nothing was found.
    pub fn get_checked(&self, index: usize) -> Result<&T, TableError> {
        let (page_id, offset) = Self::split_index(index);
        self.pages
            .get(&page_id)
            .ok_or(TableError::PageMissing { page: page_id })?
            .get(offset)
            .ok_or(TableError::SlotEmpty { index })
    }

    /// Remove and return the value at `index`.
    pub fn remove_by_index(&mut self, index: usize) -> Option<T> {
        self.take(index).ok()
    }

    /// Like [`remove_by_index`](Self::remove_by_index) but says why nothing
    /// was removed.
    pub fn take(&mut self, index: usize) -> Result<T, TableError> {
        let (page_id, offset) = Self::split_index(index);
        let page = self
            .pages
            .get_mut(&page_id)
            .ok_or(TableError::PageMissing { page: page_id })?;
        let value = page
            .remove_at(offset)
            .ok_or(TableError::SlotEmpty { index })?;

        self.counters.increment("removals", 1);
        trace!(index, page_id, "removed value by index");
        self.reclaim_if_drained(page_id);
        Ok(value)
    }

    /// Iterate stored values as `(index, value)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.pages.values().flat_map(|page| {
            let page_id = page.page_id();
            page.iter()
                .map(move |(offset, value)| (Self::join_index(page_id, offset), value))
        })
    }

    /// Drop every value and page, then rebuild the configured page cache.
    ///
    /// Lifetime counters survive a clear.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.free_page_ids.clear();
        self.next_page_id = 0;
        debug!("cleared table");
        self.warm_cache();
    }

    pub fn stats(&self) -> TableStats {
        let items = self.count();
        let pages = self.pages.len();
        let occupancy = if pages > 0 {
            items as f64 / (pages * S) as f64
        } else {
            0.0
        };

        TableStats {
            items,
            pages,
            free_page_ids: self.free_page_ids.len(),
            next_page_id: self.next_page_id,
            page_capacity: S,
            value_size: self.value_size(),
            occupancy,
            reuse_policy: self.reuse_policy(),
            inserts: self.counters.get("inserts"),
            removals: self.counters.get("removals"),
            pages_created: self.counters.get("pages_created"),
            pages_destroyed: self.counters.get("pages_destroyed"),
            page_ids_reused: self.counters.get("page_ids_reused"),
        }
    }
}

impl<T: PartialEq, const S: usize> SlotTable<T, S> {
    /// Index of the first stored value equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.pages.values().find_map(|page| {
            page.offset_of(value)
                .map(|offset| Self::join_index(page.page_id(), offset))
        })
    }

    pub fn contains(&self, value: &T) -> bool {
        self.pages.values().any(|page| page.contains(value))
    }

    /// Remove the first stored value equal to `value` and return the index
    /// it occupied.
    pub fn remove_by_value(&mut self, value: &T) -> Option<usize> {
        let page = self.pages.values_mut().find(|page| page.contains(value))?;
        let offset = page.remove(value)?;
        let page_id = page.page_id();
        let index = Self::join_index(page_id, offset);

        self.counters.increment("removals", 1);
        trace!(index, page_id, "removed value");
        self.reclaim_if_drained(page_id);
        Some(index)
    }
}

impl<T, const S: usize> Default for SlotTable<T, S> {
    fn default() -> Self {
        Self::new(0)
    }
}
