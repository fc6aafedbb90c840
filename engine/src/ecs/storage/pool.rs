/// A column of optional component values indexed by entity slot.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    /// Create a new empty pool.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Create a new empty pool with room for `slots` entity slots.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            slots: Vec::with_capacity(slots),
            len: 0,
        }
    }

    /// Reserve room for at least `additional` more entity slots.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Store a value at the given slot, growing the pool if needed.
    ///
    /// Returns the value previously stored at the slot, if any.
    pub fn insert(&mut self, slot: usize, value: T) -> Option<T> {
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, || None);
        }
        let previous = self.slots[slot].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Take the value stored at the given slot, if any.
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        let previous = self.slots.get_mut(slot)?.take();
        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }

    /// Get the value stored at the given slot.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref()
    }

    /// Get the value stored at the given slot, mutably.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Determine if a value is stored at the given slot.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the pool currently spans, occupied or not.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    /// Drop every stored value. The pool keeps its slots.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Iterate the stored values with their slots, in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_ref().map(|value| (slot, value)))
    }

    /// Iterate the stored values mutably with their slots, in ascending slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, value)| value.as_mut().map(|value| (slot, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_grows_pool() {
        // Given
        let mut pool = Pool::new();

        // When
        let previous = pool.insert(4, "four");

        // Then
        assert_eq!(previous, None);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.slots(), 5);
        assert_eq!(pool.get(4), Some(&"four"));
        assert_eq!(pool.get(0), None);
        assert_eq!(pool.get(99), None);
    }

    #[test]
    fn insert_replaces_existing() {
        // Given
        let mut pool = Pool::new();
        pool.insert(1, 10);

        // When
        let previous = pool.insert(1, 20);

        // Then
        assert_eq!(previous, Some(10));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(1), Some(&20));
    }

    #[test]
    fn remove_keeps_slots() {
        // Given
        let mut pool = Pool::new();
        pool.insert(0, 'a');
        pool.insert(2, 'c');

        // When
        let removed = pool.remove(2);

        // Then
        assert_eq!(removed, Some('c'));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.slots(), 3);
        assert!(!pool.contains(2));
        assert_eq!(pool.remove(2), None);
        assert_eq!(pool.remove(50), None);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn get_mut_updates_value() {
        // Given
        let mut pool = Pool::new();
        pool.insert(3, 1.5);

        // When
        if let Some(value) = pool.get_mut(3) {
            *value *= 2.0;
        }

        // Then
        assert_eq!(pool.get(3), Some(&3.0));
        assert_eq!(pool.get_mut(1), None);
    }

    #[test]
    fn iter_skips_empty_slots() {
        // Given
        let mut pool = Pool::new();
        pool.insert(5, 50);
        pool.insert(1, 10);
        pool.insert(3, 30);
        pool.remove(3);

        // When
        let values: Vec<_> = pool.iter().map(|(slot, value)| (slot, *value)).collect();

        // Then
        assert_eq!(values, vec![(1, 10), (5, 50)]);
    }

    #[test]
    fn iter_mut_and_clear() {
        // Given
        let mut pool = Pool::new();
        pool.insert(0, 1);
        pool.insert(2, 2);

        // When
        pool.iter_mut().for_each(|(_, value)| *value += 100);

        // Then
        assert_eq!(pool.get(0), Some(&101));
        assert_eq!(pool.get(2), Some(&102));

        // When
        pool.clear();

        // Then
        assert!(pool.is_empty());
        assert_eq!(pool.slots(), 3);
        assert_eq!(pool.iter().count(), 0);
    }

    #[test]
    fn dropped_values_are_released() {
        // Given
        use std::rc::Rc;
        let shared = Rc::new(());
        let mut pool = Pool::with_capacity(4);
        pool.insert(0, Rc::clone(&shared));
        pool.insert(1, Rc::clone(&shared));

        // When
        pool.remove(0);
        pool.clear();

        // Then
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
