use crate::engine::atoms::AtomIndex;
use crate::engine::boolean_assignments::VariableId;

/// The result of propagating forced flips through the atom graph. Propagation
/// either succeeds or detects a contradiction, in which case the host is expected
/// to backtrack the active search node.
pub type PropagationStatus = Result<(), Inconsistency>;

/// A contradiction detected during propagation. Contradictions are the normal
/// enforcement mechanism of the boolean layer, not programming errors; wiring
/// defects are caught by assertions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    /// A flip targeted the fail sentinel, which encodes "this combination is
    /// impossible" directly in the graph.
    #[error("a flip targeted the fail sentinel")]
    FailSentinel,
    /// An atom was forced true while its negation already holds.
    #[error("atom {0} and its negation were both forced true")]
    MutuallyExclusive(AtomIndex),
    /// More members of an at-most-k constraint became true than its bound allows.
    #[error("more than {bound} members of a cardinality upper bound became true")]
    BoundExceeded { bound: u32 },
    /// A variable was assigned both truth values.
    #[error("conflicting assignment empties the domain of {0}")]
    EmptyDomain(VariableId),
}
