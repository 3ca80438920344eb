use super::AtomIndex;
use crate::boolprop_assert_simple;
use crate::containers::StorageKey;
use crate::engine::trailed::TrailedInteger;
use crate::engine::trailed::TrailedValues;

/// Identifies a [`CardinalityTrigger`] owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerId {
    id: u32,
}

impl StorageKey for TriggerId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        TriggerId { id: index as u32 }
    }
}

/// "Once at least `threshold` of these atoms are true, force every action atom
/// true, then disengage." After firing, the trigger deregisters from all its
/// members so it can neither re-fire nor be revisited later in the same
/// cascade; backtracking past the firing point re-registers it automatically.
#[derive(Debug)]
pub struct CardinalityTrigger {
    members: Box<[AtomIndex]>,
    threshold: u32,
    actions: Box<[AtomIndex]>,
    flipped_members: TrailedInteger,
}

impl CardinalityTrigger {
    pub(crate) fn new(
        members: Box<[AtomIndex]>,
        threshold: u32,
        actions: Box<[AtomIndex]>,
        trailed: &mut TrailedValues,
    ) -> CardinalityTrigger {
        boolprop_assert_simple!(
            members.iter().all(|&member| member != AtomIndex::Fail),
            "the fail sentinel cannot be a member of a cardinality constraint"
        );
        CardinalityTrigger {
            members,
            threshold,
            actions,
            flipped_members: trailed.grow(0),
        }
    }

    pub fn members(&self) -> &[AtomIndex] {
        &self.members
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn actions(&self) -> &[AtomIndex] {
        &self.actions
    }

    pub fn flipped_members(&self, trailed: &TrailedValues) -> u32 {
        trailed.read(self.flipped_members) as u32
    }

    /// Account for one member having flipped true; returns whether the trigger
    /// fires now.
    pub(crate) fn on_member_flipped(&self, trailed: &mut TrailedValues) -> bool {
        trailed.add_assign(self.flipped_members, 1);
        trailed.read(self.flipped_members) >= i64::from(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::atoms::SlotId;

    #[test]
    fn fires_at_the_threshold() {
        let mut trailed = TrailedValues::default();
        let members = (0..3)
            .map(|raw| AtomIndex::Positive(SlotId::create_from_index(raw)))
            .collect();
        let trigger = CardinalityTrigger::new(members, 2, Box::new([]), &mut trailed);

        assert!(!trigger.on_member_flipped(&mut trailed));
        assert!(trigger.on_member_flipped(&mut trailed));
    }
}
