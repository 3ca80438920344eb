//! The boolean literal graph: one atom per polarity of every variable, the
//! implication edges between them, and the cardinality constraints listening on
//! them.

mod atom;
mod atom_index;
mod atom_store;
mod cardinality_trigger;
mod cardinality_upper_bound;

pub use atom_index::AtomIndex;
pub use atom_index::SlotId;
pub use atom_store::AtomStore;
pub use cardinality_trigger::CardinalityTrigger;
pub use cardinality_trigger::TriggerId;
pub use cardinality_upper_bound::AtMostId;
pub use cardinality_upper_bound::CardinalityUpperBound;

pub(crate) use atom::Atom;
pub(crate) use cardinality_upper_bound::AtMostEvent;
