//! Round-robin scheduling
//!
//! Cycles over a fixed sequence forever so every neighborhood gets its turn
//! before any neighborhood gets a second one.

use crate::error::{AesehError, EvoResult};

/// Endless cyclic iterator over a non-empty slice
#[derive(Clone, Debug)]
pub struct RoundRobin<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> RoundRobin<'a, T> {
    /// Create a scheduler over `items`
    ///
    /// Fails with [`AesehError::InvalidTargetSize`] if `items` is empty.
    pub fn new(items: &'a [T]) -> EvoResult<Self> {
        if items.is_empty() {
            return Err(AesehError::InvalidTargetSize {
                requested: 1,
                available: 0,
            });
        }
        Ok(Self { items, position: 0 })
    }

    /// Number of items in one cycle
    pub fn cycle_len(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> Iterator for RoundRobin<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = &self.items[self.position];
        self.position = (self.position + 1) % self.items.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_in_order() {
        let items = vec!['a', 'b', 'c'];
        let scheduled: Vec<char> = RoundRobin::new(&items).unwrap().take(7).copied().collect();
        assert_eq!(scheduled, vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
    }

    #[test]
    fn test_single_item() {
        let items = vec![42];
        let mut scheduler = RoundRobin::new(&items).unwrap();
        assert_eq!(scheduler.next(), Some(&42));
        assert_eq!(scheduler.next(), Some(&42));
        assert_eq!(scheduler.cycle_len(), 1);
    }

    #[test]
    fn test_empty_fails() {
        let items: Vec<u8> = vec![];
        assert!(matches!(
            RoundRobin::new(&items),
            Err(AesehError::InvalidTargetSize { .. })
        ));
    }

    #[test]
    fn test_does_not_mutate_items() {
        let items = vec![vec![1, 2], vec![3]];
        let _: Vec<&Vec<i32>> = RoundRobin::new(&items).unwrap().take(5).collect();
        assert_eq!(items, vec![vec![1, 2], vec![3]]);
    }
}
