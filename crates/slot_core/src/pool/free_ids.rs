use super::PageId;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Order in which reclaimed page ids are handed out again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReusePolicy {
    /// Most recently freed id first.
    #[default]
    Lifo,
    /// Lowest freed id first; keeps the id space compact under any
    /// interleaving of removals and inserts.
    Lowest,
}

/// Pool of page ids whose pages were destroyed.
#[derive(Debug, Clone)]
pub enum FreePageIds {
    Lifo(Vec<PageId>),
    Lowest(BinaryHeap<Reverse<PageId>>),
}

impl FreePageIds {
    pub fn new(policy: ReusePolicy) -> Self {
        match policy {
            ReusePolicy::Lifo => Self::Lifo(Vec::new()),
            ReusePolicy::Lowest => Self::Lowest(BinaryHeap::new()),
        }
    }

    pub fn policy(&self) -> ReusePolicy {
        match self {
            Self::Lifo(_) => ReusePolicy::Lifo,
            Self::Lowest(_) => ReusePolicy::Lowest,
        }
    }

    pub fn push(&mut self, id: PageId) {
        match self {
            Self::Lifo(stack) => stack.push(id),
            Self::Lowest(heap) => heap.push(Reverse(id)),
        }
    }

    pub fn pop(&mut self) -> Option<PageId> {
        match self {
            Self::Lifo(stack) => stack.pop(),
            Self::Lowest(heap) => heap.pop().map(|Reverse(id)| id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Lifo(stack) => stack.len(),
            Self::Lowest(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match self {
            Self::Lifo(stack) => stack.clear(),
            Self::Lowest(heap) => heap.clear(),
        }
    }

    /// Free ids in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<PageId> {
        let mut ids: Vec<PageId> = match self {
            Self::Lifo(stack) => stack.clone(),
            Self::Lowest(heap) => heap.iter().map(|Reverse(id)| *id).collect(),
        };
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_reuses_most_recent() {
        let mut free = FreePageIds::new(ReusePolicy::Lifo);
        free.push(2);
        free.push(0);
        free.push(5);
        assert_eq!(free.pop(), Some(5));
        assert_eq!(free.pop(), Some(0));
        assert_eq!(free.pop(), Some(2));
        assert_eq!(free.pop(), None);
    }

    #[test]
    fn test_lowest_reuses_minimum() {
        let mut free = FreePageIds::new(ReusePolicy::Lowest);
        free.push(2);
        free.push(0);
        free.push(5);
        assert_eq!(free.len(), 3);
        assert_eq!(free.pop(), Some(0));
        assert_eq!(free.pop(), Some(2));
        assert_eq!(free.pop(), Some(5));
        assert!(free.is_empty());
    }

    #[test]
    fn test_sorted_view() {
        let mut free = FreePageIds::new(ReusePolicy::Lifo);
        free.push(4);
        free.push(1);
        assert_eq!(free.to_sorted_vec(), vec![1, 4]);
        assert_eq!(free.policy(), ReusePolicy::Lifo);

        free.clear();
        assert!(free.is_empty());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&ReusePolicy::Lowest).unwrap();
        assert_eq!(json, "\"lowest\"");
        let policy: ReusePolicy = serde_json::from_str("\"lifo\"").unwrap();
        assert_eq!(policy, ReusePolicy::Lifo);
    }
}
