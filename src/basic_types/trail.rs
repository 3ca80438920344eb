use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::boolprop_assert_simple;

/// A checkpointed log of state changes. Entries pushed after a checkpoint can be
/// drained again, in reverse order, by synchronising back to that checkpoint.
#[derive(Debug, Clone)]
pub struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th checkpoint ends (exclusive) on the trail.
    delimiters: Vec<usize>,
    entries: Vec<T>,
}

// Implemented by hand to avoid requiring `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            delimiters: Vec::default(),
            entries: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    pub fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.delimiters.push(self.entries.len());
    }

    pub fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry)
    }

    /// Remove every entry pushed after `new_checkpoint` and hand them back in
    /// reverse push order, so the caller can undo them.
    pub fn synchronise(&mut self, new_checkpoint: usize) -> Rev<Drain<'_, T>> {
        boolprop_assert_simple!(new_checkpoint < self.current_checkpoint);

        let new_len = self.delimiters[new_checkpoint];

        self.current_checkpoint = new_checkpoint;
        self.delimiters.truncate(new_checkpoint);
        self.entries.drain(new_len..).rev()
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_entries_are_observable() {
        let mut trail = Trail::default();

        for elem in [1, 2, 3] {
            trail.push(elem);
        }

        assert_eq!(&[1, 2, 3], trail.deref());
    }

    #[test]
    fn synchronising_drops_entries_beyond_the_checkpoint() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.new_checkpoint();
        trail.push(2);
        trail.new_checkpoint();
        trail.push(3);

        let _ = trail.synchronise(0);

        assert_eq!(&[1], trail.deref());
    }

    #[test]
    fn synchronising_yields_entries_in_reverse_push_order() {
        let mut trail = Trail::default();

        trail.new_checkpoint();
        trail.push(1);
        trail.push(2);
        trail.new_checkpoint();
        trail.push(3);

        let undone = trail.synchronise(0).collect::<Vec<_>>();
        assert_eq!(vec![3, 2, 1], undone);
    }

    #[test]
    fn synchronising_is_nonchronological() {
        let mut trail = Trail::default();

        trail.new_checkpoint();
        trail.push(1);
        trail.new_checkpoint();
        trail.push(2);
        trail.new_checkpoint();
        trail.push(3);

        let _ = trail.synchronise(1);

        assert_eq!(&[1], trail.deref());
        assert_eq!(1, trail.get_checkpoint());
    }
}
