//! Fixed-capacity LIFO used by the automated opponent to remember cells
//! adjacent to confirmed hits.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::StackError;

/// Bounded stack with a linear membership test.
///
/// Storage for `capacity` items is reserved once in [`BoundedStack::new`];
/// pushes never grow it and [`BoundedStack::clear`] keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Copy + PartialEq> BoundedStack<T> {
    /// Reserve a stack holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::Allocation)?;
        Ok(Self { items, capacity })
    }

    /// Push `value`. A full stack drops the value and reports `Full`.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            log::warn!("candidate stack full ({} items), dropping push", self.capacity);
            return Err(StackError::Full);
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop the most recently pushed value.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, value: T) -> bool {
        self.items.iter().any(|&v| v == value)
    }

    /// Empty the stack without releasing its storage.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
