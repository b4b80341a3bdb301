use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

/// A bounded LIFO stack that forgets its oldest entry when full.
#[derive(Debug, Clone)]
pub(crate) struct UndoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
}

impl<T> UndoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Oldest first.
    #[must_use]
    pub(crate) fn entries(&self) -> vec_deque::Iter<'_, T> {
        self.stack.iter()
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }

    pub(crate) fn restore_from_parts(&mut self, mut stack: VecDeque<T>) {
        if stack.len() > self.capacity.get() {
            let overflow = stack.len() - self.capacity.get();
            stack.drain(..overflow);
        }
        self.stack = stack;
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, num::NonZero};

    use super::UndoStack;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = UndoStack::new(NonZero::new(10).unwrap());
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut stack = UndoStack::new(NonZero::new(3).unwrap());
        for i in 1..=4 {
            stack.push(i);
        }

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.entries().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(stack.pop(), Some(4));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn push_after_pop_reuses_space() {
        let mut stack = UndoStack::new(NonZero::new(2).unwrap());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        stack.push(3);

        assert_eq!(stack.entries().copied().collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn clear_resets_stack() {
        let mut stack = UndoStack::new(NonZero::new(5).unwrap());
        stack.push(1);
        stack.push(2);

        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.capacity().get(), 5);
    }

    #[test]
    fn restore_truncates_oldest_overflow() {
        let mut stack = UndoStack::new(NonZero::new(3).unwrap());
        stack.restore_from_parts(VecDeque::from([1, 2, 3, 4, 5]));

        assert_eq!(stack.entries().copied().collect::<Vec<_>>(), [3, 4, 5]);
        assert_eq!(stack.pop(), Some(5));
    }
}
