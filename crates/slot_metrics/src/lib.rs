//! Slot Metrics - event counters and timing for the slot allocator
//!
//! Provides zero-cost abstractions for metrics collection that completely
//! vanish in production builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use slot_metrics::{Counter, SystemProfiler};
//!
//! let mut counter = Counter::new();
//! counter.increment("pages_created", 1);
//!
//! let mut profiler = SystemProfiler::new();
//! profiler.time_system("fill", || { /* ... */ });
//! ```
//!
//! Without the `metrics` feature every type here is a zero-sized stub.

#[cfg(feature = "metrics")]
mod counter;
#[cfg(feature = "metrics")]
mod system_profiler;

#[cfg(feature = "metrics")]
pub use counter::Counter;
#[cfg(feature = "metrics")]
pub use system_profiler::SystemProfiler;

/// Whether instrumentation is compiled in.
pub const ENABLED: bool = cfg!(feature = "metrics");

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Clone, Default)]
pub struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &'static str, _value: usize) {}
    pub fn get(&self, _name: &str) -> usize { 0 }
    pub fn reset_all(&mut self) {}
}

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct SystemProfiler;

#[cfg(not(feature = "metrics"))]
impl SystemProfiler {
    pub fn new() -> Self { Self }
    pub fn time_system<F, R>(&mut self, _name: &'static str, f: F) -> R where F: FnOnce() -> R { f() }
    pub fn get_timing(&self, _name: &str) -> std::time::Duration { std::time::Duration::ZERO }
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, std::time::Duration)> { std::iter::empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stubs_and_real_types_share_api() {
        let mut counter = Counter::new();
        counter.increment("inserts", 3);
        let mut profiler = SystemProfiler::new();
        let out = profiler.time_system("work", || 40 + 2);
        assert_eq!(out, 42);

        if ENABLED {
            assert_eq!(counter.get("inserts"), 3);
        } else {
            assert_eq!(counter.get("inserts"), 0);
        }
    }
}
