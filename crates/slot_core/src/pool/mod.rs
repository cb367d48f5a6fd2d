//! Paged slot pool
//!
//! A [`SlotTable`] hands out dense `usize` indices for stored values. The
//! index doubles as the storage address: index `i` lives in page `i / S`
//! at offset `i % S`.
//!
//! ```text
//! S = 4
//! page 0: [a][b][c][d]   indices 0..4
//! page 1: [e][ ][f][ ]   indices 4..8
//! page 3: [ ][g][ ][ ]   indices 12..16   (page 2 drained, id on free list)
//! ```
//!
//! Pages are created on demand and destroyed as soon as a removal drains
//! them; their ids go to a free pool and are reused before the id space
//! grows.

mod error;
mod free_ids;
mod page;
mod stats;
mod table;

/// Identifier of a page within the table's index space.
pub type PageId = usize;

pub use error::TableError;
pub use free_ids::{FreePageIds, ReusePolicy};
pub use page::SlotPage;
pub use stats::TableStats;
pub use table::SlotTable;
