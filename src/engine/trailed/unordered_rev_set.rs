use super::TrailedInteger;
use super::TrailedValues;
use crate::boolprop_assert_simple;

/// An unordered collection with O(1) insertion and O(1) removal, whose removals
/// are undone on backtrack.
///
/// Only the number of live elements is trailed: removal swaps the victim to the
/// end of the live range and shrinks the range, so restoring the old length
/// restores membership. Element order is not preserved across a remove.
///
/// Insertions are expected to happen at setup time, before the first checkpoint;
/// interleaving inserts with trailed removals on the same branch would let a
/// backtrack resurrect the wrong elements.
#[derive(Debug, Clone)]
pub struct UnorderedRevSet<T> {
    elements: Vec<T>,
    len: TrailedInteger,
}

impl<T: Copy + Eq> UnorderedRevSet<T> {
    pub fn new(trailed: &mut TrailedValues) -> Self {
        UnorderedRevSet {
            elements: Vec::new(),
            len: trailed.grow(0),
        }
    }

    pub fn len(&self, trailed: &TrailedValues) -> usize {
        trailed.read(self.len) as usize
    }

    pub fn is_empty(&self, trailed: &TrailedValues) -> bool {
        self.len(trailed) == 0
    }

    pub fn insert(&mut self, element: T, trailed: &mut TrailedValues) {
        let len = self.len(trailed);
        if len == self.elements.len() {
            self.elements.push(element);
        } else {
            // Reuse a slot left behind by a backtracked insertion.
            self.elements[len] = element;
        }
        trailed.add_assign(self.len, 1);
    }

    /// Remove `element` from the live range. Returns whether it was present.
    pub fn remove(&mut self, element: T, trailed: &mut TrailedValues) -> bool {
        let len = self.len(trailed);
        for position in 0..len {
            if self.elements[position] == element {
                self.elements.swap(position, len - 1);
                trailed.add_assign(self.len, -1);
                return true;
            }
        }
        false
    }

    pub fn contains(&self, element: T, trailed: &TrailedValues) -> bool {
        self.iter(trailed).any(|&live| live == element)
    }

    pub fn iter<'a>(&'a self, trailed: &TrailedValues) -> impl Iterator<Item = &'a T> {
        let len = self.len(trailed);
        boolprop_assert_simple!(len <= self.elements.len());
        self.elements[..len].iter()
    }

    /// Reversibly empty the set.
    pub fn clear(&mut self, trailed: &mut TrailedValues) {
        trailed.assign(self.len, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_is_undone_by_backtracking() {
        let mut trailed = TrailedValues::default();
        let mut set = UnorderedRevSet::new(&mut trailed);

        set.insert(1, &mut trailed);
        set.insert(2, &mut trailed);
        set.insert(3, &mut trailed);

        trailed.new_checkpoint();

        assert!(set.remove(2, &mut trailed));
        assert!(!set.contains(2, &trailed));
        assert_eq!(set.len(&trailed), 2);

        trailed.synchronise(0);

        assert!(set.contains(2, &trailed));
        assert_eq!(set.len(&trailed), 3);
    }

    #[test]
    fn removing_an_absent_element_is_a_noop() {
        let mut trailed = TrailedValues::default();
        let mut set = UnorderedRevSet::new(&mut trailed);

        set.insert(1, &mut trailed);

        assert!(!set.remove(7, &mut trailed));
        assert_eq!(set.len(&trailed), 1);
    }

    #[test]
    fn removed_elements_are_not_visited() {
        let mut trailed = TrailedValues::default();
        let mut set = UnorderedRevSet::new(&mut trailed);

        for element in [10, 20, 30] {
            set.insert(element, &mut trailed);
        }

        let _ = set.remove(10, &mut trailed);

        let mut live = set.iter(&trailed).copied().collect::<Vec<_>>();
        live.sort_unstable();
        assert_eq!(live, vec![20, 30]);
    }

    #[test]
    fn clearing_is_reversible() {
        let mut trailed = TrailedValues::default();
        let mut set = UnorderedRevSet::new(&mut trailed);

        set.insert(4, &mut trailed);
        set.insert(5, &mut trailed);

        trailed.new_checkpoint();
        set.clear(&mut trailed);
        assert!(set.is_empty(&trailed));

        trailed.synchronise(0);
        assert_eq!(set.len(&trailed), 2);
    }
}
