use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Not;

use crate::containers::StorageKey;

/// Identifies the variable slot shared by both polarities of a boolean variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    id: u32,
}

impl StorageKey for SlotId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        SlotId { id: index as u32 }
    }
}

/// Identifies one boolean literal: a variable slot bound to a polarity, or the
/// reserved fail sentinel whose flip encodes an immediate contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomIndex {
    /// Flipping this atom is a contradiction by definition.
    Fail,
    /// The atom asserting that the slot's variable is true.
    Positive(SlotId),
    /// The atom asserting that the slot's variable is false.
    Negative(SlotId),
}

impl AtomIndex {
    /// The slot this atom addresses; the fail sentinel addresses none.
    pub fn slot(self) -> Option<SlotId> {
        match self {
            AtomIndex::Fail => None,
            AtomIndex::Positive(slot) | AtomIndex::Negative(slot) => Some(slot),
        }
    }

    /// The legacy signed encoding: sign selects polarity, magnitude is the slot
    /// offset by one so that it can never collide with the zero fail sentinel.
    pub fn code(self) -> i32 {
        match self {
            AtomIndex::Fail => 0,
            AtomIndex::Positive(slot) => slot.index() as i32 + 1,
            AtomIndex::Negative(slot) => -(slot.index() as i32 + 1),
        }
    }

    pub fn from_code(code: i32) -> AtomIndex {
        match code {
            0 => AtomIndex::Fail,
            positive if positive > 0 => {
                AtomIndex::Positive(SlotId::create_from_index(positive as usize - 1))
            }
            negative => AtomIndex::Negative(SlotId::create_from_index(-negative as usize - 1)),
        }
    }
}

impl Not for AtomIndex {
    type Output = AtomIndex;

    fn not(self) -> AtomIndex {
        match self {
            AtomIndex::Fail => AtomIndex::Fail,
            AtomIndex::Positive(slot) => AtomIndex::Negative(slot),
            AtomIndex::Negative(slot) => AtomIndex::Positive(slot),
        }
    }
}

impl Display for AtomIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomIndex::Fail => write!(f, "fail"),
            AtomIndex::Positive(slot) => write!(f, "b{}", slot.index()),
            AtomIndex::Negative(slot) => write!(f, "!b{}", slot.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        let atom = AtomIndex::Positive(SlotId::create_from_index(3));

        assert_eq!(!atom, AtomIndex::Negative(SlotId::create_from_index(3)));
        assert_eq!(!!atom, atom);
        assert_eq!(!AtomIndex::Fail, AtomIndex::Fail);
    }

    #[test]
    fn code_magnitude_is_offset_by_one_from_the_slot() {
        // The magnitude of an addressable atom's code is never the raw
        // zero-based slot, and never zero.
        for raw_slot in 0..4_usize {
            let slot = SlotId::create_from_index(raw_slot);

            let positive = AtomIndex::Positive(slot).code();
            let negative = AtomIndex::Negative(slot).code();

            assert_eq!(positive, raw_slot as i32 + 1);
            assert_eq!(negative, -(raw_slot as i32 + 1));
            assert_ne!(positive.unsigned_abs() as usize, raw_slot);
            assert_ne!(positive, 0);
            assert_ne!(negative, 0);
        }
        assert_eq!(AtomIndex::Fail.code(), 0);
    }

    #[test]
    fn code_round_trips() {
        for code in [-5, -1, 0, 1, 5] {
            assert_eq!(AtomIndex::from_code(code).code(), code);
        }

        let slot = SlotId::create_from_index(0);
        assert_eq!(AtomIndex::from_code(1), AtomIndex::Positive(slot));
        assert_eq!(AtomIndex::from_code(-1), AtomIndex::Negative(slot));
        assert_eq!(AtomIndex::from_code(0), AtomIndex::Fail);
    }
}
