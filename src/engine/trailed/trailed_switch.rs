use super::TrailedInteger;
use super::TrailedValues;
use crate::boolprop_assert_simple;

/// A one-shot reversible boolean: it only ever moves from `false` to `true`
/// within a search branch, and backtracking restores it.
///
/// Switching a switch that is already on is a wiring defect and is caught by an
/// assertion; callers are expected to check [`TrailedSwitch::is_switched`] first.
#[derive(Debug, Clone, Copy)]
pub struct TrailedSwitch {
    cell: TrailedInteger,
}

impl TrailedSwitch {
    pub fn new(trailed: &mut TrailedValues) -> Self {
        TrailedSwitch {
            cell: trailed.grow(0),
        }
    }

    pub fn is_switched(&self, trailed: &TrailedValues) -> bool {
        trailed.read(self.cell) != 0
    }

    pub fn switch(&self, trailed: &mut TrailedValues) {
        boolprop_assert_simple!(
            !self.is_switched(trailed),
            "a one-shot switch must not be switched twice on the same branch"
        );
        trailed.assign(self.cell, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_is_undone_by_backtracking() {
        let mut trailed = TrailedValues::default();
        let switch = TrailedSwitch::new(&mut trailed);

        assert!(!switch.is_switched(&trailed));

        trailed.new_checkpoint();
        switch.switch(&mut trailed);
        assert!(switch.is_switched(&trailed));

        trailed.synchronise(0);
        assert!(!switch.is_switched(&trailed));
    }

    #[test]
    #[should_panic(expected = "switched twice")]
    fn double_switching_is_a_defect() {
        let mut trailed = TrailedValues::default();
        let switch = TrailedSwitch::new(&mut trailed);

        switch.switch(&mut trailed);
        switch.switch(&mut trailed);
    }
}
