//! A boolean-literal propagation core for backtracking constraint solvers.
//!
//! Every boolean variable is represented by a pair of *atoms*, one per
//! polarity. Atoms are linked by implication edges, and flipping an atom true
//! cascades along those edges until a fixpoint is reached or a contradiction
//! surfaces. Cardinality constraints (at-most-k and k-of-n triggers) listen on
//! their member atoms and take part in the same cascade. All branch-scoped
//! state lives in trailed cells, so a single synchronise call backtracks the
//! entire layer.
//!
//! ```
//! use boolprop::constraints::post_equal;
//! use boolprop::constraints::BoolExpression;
//! use boolprop::engine::atoms::AtomStore;
//! use boolprop::engine::boolean_assignments::BooleanAssignments;
//! use boolprop::engine::trailed::TrailedValues;
//! use boolprop::engine::watch_list::WatchList;
//!
//! let mut trailed = TrailedValues::default();
//! let mut assignments = BooleanAssignments::default();
//! let mut store = AtomStore::default();
//! let mut watch_list = WatchList::default();
//!
//! let a = assignments.new_variable(&mut trailed);
//! let b = assignments.new_variable(&mut trailed);
//! assert!(post_equal(
//!     &BoolExpression::Variable(a),
//!     &BoolExpression::Variable(b),
//!     &mut store,
//!     &mut trailed,
//! ));
//! let b_true = store.resolve(b, false, &mut trailed);
//!
//! // The host subscribes the store to its variables, then starts branching.
//! store.post(&mut watch_list);
//! trailed.new_checkpoint();
//!
//! assignments
//!     .assign(a, true, &mut trailed)
//!     .expect("a is unassigned");
//! for &slot in watch_list.watchers(a) {
//!     store
//!         .notify_bound(slot, &assignments, &mut trailed)
//!         .expect("no contradiction");
//! }
//! assert!(store.is_flipped(b_true, &trailed));
//!
//! // Backtracking undoes the flip along with the assignment.
//! trailed.synchronise(0);
//! assert!(!store.is_flipped(b_true, &trailed));
//! ```

pub mod asserts;
pub mod basic_types;
pub mod constraints;
pub mod containers;
pub mod engine;

pub use basic_types::Inconsistency;
pub use basic_types::PropagationStatus;
pub use engine::atoms::AtomIndex;
pub use engine::atoms::AtomStore;
pub use engine::atoms::SlotId;
pub use engine::boolean_assignments::BooleanAssignments;
pub use engine::boolean_assignments::VariableId;
pub use engine::trailed::TrailedValues;
pub use engine::watch_list::WatchList;
