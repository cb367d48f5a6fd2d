//! Profiler for timing named workload phases

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SystemProfiler {
    timings: HashMap<&'static str, Duration>,
}

impl SystemProfiler {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
        }
    }

    pub fn time_system<F, R>(&mut self, name: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        *self.timings.entry(name).or_insert(Duration::ZERO) += elapsed;
        result
    }

    pub fn get_timing(&self, name: &str) -> Duration {
        self.timings.get(name).copied().unwrap_or(Duration::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.timings.iter().map(|(name, elapsed)| (*name, *elapsed))
    }
}

impl Default for SystemProfiler {
    fn default() -> Self {
        Self::new()
    }
}
