use super::AtomIndex;
use crate::boolprop_assert_simple;
use crate::containers::StorageKey;
use crate::engine::trailed::TrailedInteger;
use crate::engine::trailed::TrailedValues;

/// Identifies a [`CardinalityUpperBound`] owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtMostId {
    id: u32,
}

impl StorageKey for AtMostId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        AtMostId { id: index as u32 }
    }
}

/// What the store must do after a member of an upper bound flipped true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtMostEvent {
    /// The bound is not yet reached.
    Nothing,
    /// Exactly the bound is reached: every remaining member must be closed off
    /// by flipping its negation.
    Close,
    /// A member beyond the bound became true.
    Exceeded,
}

/// "At most `bound` of these atoms may be true." Once `bound` members have
/// flipped true, the negation of every other member is forced; a further member
/// becoming true is a contradiction.
#[derive(Debug)]
pub struct CardinalityUpperBound {
    members: Box<[AtomIndex]>,
    bound: u32,
    flipped_members: TrailedInteger,
}

impl CardinalityUpperBound {
    pub(crate) fn new(
        members: Box<[AtomIndex]>,
        bound: u32,
        trailed: &mut TrailedValues,
    ) -> CardinalityUpperBound {
        boolprop_assert_simple!(
            members.iter().all(|&member| member != AtomIndex::Fail),
            "the fail sentinel cannot be a member of a cardinality constraint"
        );
        CardinalityUpperBound {
            members,
            bound,
            flipped_members: trailed.grow(0),
        }
    }

    pub fn members(&self) -> &[AtomIndex] {
        &self.members
    }

    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn flipped_members(&self, trailed: &TrailedValues) -> u32 {
        trailed.read(self.flipped_members) as u32
    }

    /// Account for one member having flipped true. The comparison is exact:
    /// strictly above the bound fails, exactly the bound closes. Multiple
    /// members can be forced true before the closure itself has run, which is
    /// why the exceeded case must be checked even though closure is eager.
    pub(crate) fn on_member_flipped(&self, trailed: &mut TrailedValues) -> AtMostEvent {
        trailed.add_assign(self.flipped_members, 1);

        let flipped = trailed.read(self.flipped_members);
        if flipped > i64::from(self.bound) {
            AtMostEvent::Exceeded
        } else if flipped == i64::from(self.bound) {
            AtMostEvent::Close
        } else {
            AtMostEvent::Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::atoms::SlotId;

    fn members(count: usize) -> Box<[AtomIndex]> {
        (0..count)
            .map(|raw| AtomIndex::Positive(SlotId::create_from_index(raw)))
            .collect()
    }

    #[test]
    fn the_threshold_comparisons_are_exact() {
        let mut trailed = TrailedValues::default();
        let at_most = CardinalityUpperBound::new(members(4), 2, &mut trailed);

        assert_eq!(at_most.on_member_flipped(&mut trailed), AtMostEvent::Nothing);
        assert_eq!(at_most.on_member_flipped(&mut trailed), AtMostEvent::Close);
        assert_eq!(
            at_most.on_member_flipped(&mut trailed),
            AtMostEvent::Exceeded
        );
    }

    #[test]
    fn the_counter_is_restored_on_backtrack() {
        let mut trailed = TrailedValues::default();
        let at_most = CardinalityUpperBound::new(members(3), 2, &mut trailed);

        let _ = at_most.on_member_flipped(&mut trailed);
        trailed.new_checkpoint();
        let _ = at_most.on_member_flipped(&mut trailed);

        assert_eq!(at_most.flipped_members(&trailed), 2);

        trailed.synchronise(0);
        assert_eq!(at_most.flipped_members(&trailed), 1);
    }
}
