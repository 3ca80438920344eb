use super::TrailedChange;
use super::TrailedInteger;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;

/// The solver-scoped log of reversible integer cells. Every piece of
/// search-branch-scoped state in the boolean layer (flip switches, cardinality
/// counters, reversible set sizes, variable domains) lives in one of these cells,
/// so a single [`TrailedValues::synchronise`] restores all of it exactly.
#[derive(Default, Debug, Clone)]
pub struct TrailedValues {
    trail: Trail<TrailedChange>,
    values: KeyedVec<TrailedInteger, i64>,
}

impl TrailedValues {
    /// Create a new cell holding `initial_value`.
    pub fn grow(&mut self, initial_value: i64) -> TrailedInteger {
        self.values.push(initial_value)
    }

    /// Open a new search node; all writes from here on are undone by
    /// synchronising back to the checkpoint this returns to.
    pub fn new_checkpoint(&mut self) {
        self.trail.new_checkpoint()
    }

    pub fn get_checkpoint(&self) -> usize {
        self.trail.get_checkpoint()
    }

    pub fn read(&self, cell: TrailedInteger) -> i64 {
        self.values[cell]
    }

    /// Backtrack to `new_checkpoint`, restoring every cell written since.
    pub fn synchronise(&mut self, new_checkpoint: usize) {
        self.trail
            .synchronise(new_checkpoint)
            .for_each(|change| self.values[change.reference] = change.old_value)
    }

    pub fn assign(&mut self, cell: TrailedInteger, value: i64) {
        self.write(cell, value);
    }

    pub fn add_assign(&mut self, cell: TrailedInteger, addition: i64) {
        self.write(cell, self.values[cell] + addition);
    }

    fn write(&mut self, cell: TrailedInteger, value: i64) {
        let old_value = self.values[cell];
        if old_value == value {
            return;
        }
        self.trail.push(TrailedChange {
            old_value,
            reference: cell,
        });
        self.values[cell] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_undone_by_synchronising() {
        let mut trailed = TrailedValues::default();
        let cell = trailed.grow(0);

        assert_eq!(trailed.read(cell), 0);

        trailed.new_checkpoint();
        trailed.add_assign(cell, 5);
        trailed.add_assign(cell, 5);

        assert_eq!(trailed.read(cell), 10);

        trailed.new_checkpoint();
        trailed.assign(cell, 11);

        assert_eq!(trailed.read(cell), 11);

        trailed.synchronise(1);
        assert_eq!(trailed.read(cell), 10);

        trailed.synchronise(0);
        assert_eq!(trailed.read(cell), 0);
    }

    #[test]
    fn rewriting_the_same_value_is_not_trailed() {
        let mut trailed = TrailedValues::default();
        let cell = trailed.grow(3);

        trailed.new_checkpoint();
        trailed.assign(cell, 3);
        trailed.assign(cell, 7);

        trailed.synchronise(0);
        assert_eq!(trailed.read(cell), 3);
    }
}
