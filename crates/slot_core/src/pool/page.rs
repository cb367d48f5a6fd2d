use super::PageId;

/// Fixed-capacity page of `S` tagged slots.
///
/// A page only knows offsets `0..S` and its own id; translating to the
/// table-wide identifier space is the table's job.
#[derive(Debug, Clone)]
pub struct SlotPage<T, const S: usize> {
    items: Box<[Option<T>]>,
    filled: usize,
    page_id: PageId,
}

impl<T, const S: usize> SlotPage<T, S> {
    const NON_EMPTY: () = assert!(S > 0, "page capacity must be positive");

    /// Create a page with every slot empty.
    pub fn new(page_id: PageId) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            items: (0..S).map(|_| None).collect(),
            filled: 0,
            page_id,
        }
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        S
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == S
    }

    /// Lowest empty offset, or `None` when all `S` slots are taken.
    pub fn first_free_offset(&self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.items.iter().position(Option::is_none)
    }

    #[inline]
    pub fn get(&self, offset: usize) -> Option<&T> {
        self.items.get(offset)?.as_ref()
    }

    /// Store `value` in the first free slot and return its offset.
    ///
    /// A full page hands the value back untouched.
    pub fn insert(&mut self, value: T) -> Result<usize, T> {
        match self.first_free_offset() {
            Some(offset) => {
                self.items[offset] = Some(value);
                self.filled += 1;
                Ok(offset)
            }
            None => Err(value),
        }
    }

    /// Vacate the slot at `offset`, returning what it held.
    pub fn remove_at(&mut self, offset: usize) -> Option<T> {
        let value = self.items.get_mut(offset)?.take()?;
        self.filled -= 1;
        Some(value)
    }

    /// Iterate occupied slots as `(offset, value)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(offset, slot)| slot.as_ref().map(|value| (offset, value)))
    }
}

impl<T: PartialEq, const S: usize> SlotPage<T, S> {
    /// Offset of the first slot holding a value equal to `value`.
    pub fn offset_of(&self, value: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.offset_of(value).is_some()
    }

    /// Vacate the first slot equal to `value` and return the freed offset.
    pub fn remove(&mut self, value: &T) -> Option<usize> {
        let offset = self.offset_of(value)?;
        self.remove_at(offset);
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_empty() {
        let page: SlotPage<u32, 4> = SlotPage::new(3);
        assert_eq!(page.page_id(), 3);
        assert_eq!(page.capacity(), 4);
        assert!(page.is_empty());
        assert_eq!(page.first_free_offset(), Some(0));
        assert_eq!(page.get(0), None);
    }

    #[test]
    fn test_insert_is_first_fit() {
        let mut page: SlotPage<u32, 4> = SlotPage::new(0);
        assert_eq!(page.insert(10), Ok(0));
        assert_eq!(page.insert(11), Ok(1));
        assert_eq!(page.insert(12), Ok(2));

        // Vacating a hole makes it the next landing spot.
        assert_eq!(page.remove(&11), Some(1));
        assert_eq!(page.first_free_offset(), Some(1));
        assert_eq!(page.insert(13), Ok(1));
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_full_page_returns_value() {
        let mut page: SlotPage<&str, 2> = SlotPage::new(0);
        page.insert("a").unwrap();
        page.insert("b").unwrap();
        assert!(page.is_full());
        assert_eq!(page.first_free_offset(), None);
        assert_eq!(page.insert("c"), Err("c"));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_duplicates_resolve_to_lowest_offset() {
        let mut page: SlotPage<u8, 4> = SlotPage::new(0);
        page.insert(7).unwrap();
        page.insert(9).unwrap();
        page.insert(7).unwrap();

        assert_eq!(page.offset_of(&7), Some(0));
        assert_eq!(page.remove(&7), Some(0));
        assert_eq!(page.offset_of(&7), Some(2));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_remove_missing_value() {
        let mut page: SlotPage<u8, 4> = SlotPage::new(0);
        page.insert(1).unwrap();
        assert_eq!(page.remove(&2), None);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_remove_at_vacates_exact_slot() {
        let mut page: SlotPage<u8, 4> = SlotPage::new(0);
        page.insert(5).unwrap();
        page.insert(5).unwrap();

        assert_eq!(page.remove_at(1), Some(5));
        assert_eq!(page.get(0), Some(&5));
        assert_eq!(page.get(1), None);
        assert_eq!(page.remove_at(1), None);
        assert_eq!(page.remove_at(99), None);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_default_value_is_storable() {
        let mut page: SlotPage<u32, 2> = SlotPage::new(0);
        assert_eq!(page.insert(0), Ok(0));
        assert_eq!(page.get(0), Some(&0));
        assert_eq!(page.first_free_offset(), Some(1));
        assert_eq!(page.offset_of(&0), Some(0));
    }

    #[test]
    fn test_iter_skips_empty_slots() {
        let mut page: SlotPage<char, 4> = SlotPage::new(0);
        page.insert('a').unwrap();
        page.insert('b').unwrap();
        page.insert('c').unwrap();
        page.remove(&'b');

        let seen: Vec<_> = page.iter().collect();
        assert_eq!(seen, vec![(0, &'a'), (2, &'c')]);
    }
}
