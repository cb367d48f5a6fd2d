//! Named counters for tracking events

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Counter {
    counters: HashMap<&'static str, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    pub fn increment(&mut self, name: &'static str, value: usize) {
        *self.counters.entry(name).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> usize {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counters.iter().map(|(name, value)| (*name, *value))
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_accumulates() {
        let mut counter = Counter::new();
        counter.increment("pages_created", 1);
        counter.increment("pages_created", 2);
        assert_eq!(counter.get("pages_created"), 3);
        assert_eq!(counter.get("pages_destroyed"), 0);
    }

    #[test]
    fn test_reset_all() {
        let mut counter = Counter::new();
        counter.increment("inserts", 5);
        counter.reset_all();
        assert_eq!(counter.get("inserts"), 0);
        assert_eq!(counter.iter().count(), 0);
    }
}
