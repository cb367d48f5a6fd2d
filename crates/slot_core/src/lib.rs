//! Slot Core
//!
//! Paged slot allocator: a table that hands out dense indices for stored
//! values, where each index is also the value's storage address.
//! - Fixed-capacity pages of tagged slots
//! - Page creation on demand, destruction when drained, id reuse
//! - Index-to-(page, offset) translation

pub mod config;
pub mod pool;

pub use config::TableConfig;
pub use pool::{PageId, ReusePolicy, SlotPage, SlotTable, TableError, TableStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
