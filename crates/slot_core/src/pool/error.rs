use super::PageId;
use thiserror::Error;

/// Failures reported by the strict table accessors.
///
/// The lenient accessors (`value_at`, `remove_by_index`) fold all
/// of these into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no live page {page} covers this index")]
    PageMissing { page: PageId },

    #[error("slot {index} is empty")]
    SlotEmpty { index: usize },
}
