#![cfg(any(test, doc))]
//! A convenience wrapper around the boolean layer and its host-side pieces, to
//! cut down the boilerplate of writing propagation tests.

use crate::basic_types::PropagationStatus;
use crate::constraints::post_equal;
use crate::constraints::post_less_equal;
use crate::constraints::post_not_equal;
use crate::constraints::BoolExpression;
use crate::containers::StorageKey;
use crate::engine::atoms::AtomIndex;
use crate::engine::atoms::AtomStore;
use crate::engine::atoms::SlotId;
use crate::engine::boolean_assignments::BooleanAssignments;
use crate::engine::boolean_assignments::VariableId;
use crate::engine::trailed::TrailedValues;
use crate::engine::watch_list::WatchList;

/// The store together with the host pieces it plugs into, driven the way a
/// search loop would drive them.
#[derive(Default, Debug)]
pub(crate) struct TestSolver {
    pub trailed: TrailedValues,
    pub assignments: BooleanAssignments,
    pub watch_list: WatchList,
    pub store: AtomStore,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self) -> VariableId {
        self.assignments.new_variable(&mut self.trailed)
    }

    pub(crate) fn resolve(&mut self, variable: VariableId, negated: bool) -> AtomIndex {
        self.store.resolve(variable, negated, &mut self.trailed)
    }

    pub(crate) fn post_equal(&mut self, left: VariableId, right: VariableId) -> bool {
        post_equal(
            &BoolExpression::Variable(left),
            &BoolExpression::Variable(right),
            &mut self.store,
            &mut self.trailed,
        )
    }

    pub(crate) fn post_less_equal(&mut self, left: VariableId, right: VariableId) -> bool {
        post_less_equal(
            &BoolExpression::Variable(left),
            &BoolExpression::Variable(right),
            &mut self.store,
            &mut self.trailed,
        )
    }

    pub(crate) fn post_not_equal(&mut self, left: VariableId, right: VariableId) -> bool {
        post_not_equal(
            &BoolExpression::Variable(left),
            &BoolExpression::Variable(right),
            &mut self.store,
            &mut self.trailed,
        )
    }

    /// Subscribe the store to its variables and run the initial propagation,
    /// as the host does once before search starts.
    pub(crate) fn prepare(&mut self) {
        self.store.post(&mut self.watch_list);
        self.store
            .initial_propagate(&self.assignments, &mut self.trailed)
            .expect("the initial assignment is consistent");
    }

    /// Bind `variable` and notify every slot watching it.
    pub(crate) fn bind(&mut self, variable: VariableId, value: bool) -> PropagationStatus {
        self.assignments.assign(variable, value, &mut self.trailed)?;
        let watchers = self.watch_list.watchers(variable).to_vec();
        for slot in watchers {
            self.store
                .notify_bound(slot, &self.assignments, &mut self.trailed)?;
        }
        Ok(())
    }

    /// Open a search node; the returned token is what [`TestSolver::backtrack`]
    /// jumps back to.
    pub(crate) fn checkpoint(&mut self) -> usize {
        let checkpoint = self.trailed.get_checkpoint();
        self.trailed.new_checkpoint();
        checkpoint
    }

    /// Undo everything since `checkpoint` was taken, then reopen the node so it
    /// can be explored again.
    pub(crate) fn backtrack(&mut self, checkpoint: usize) {
        self.trailed.synchronise(checkpoint);
        self.trailed.new_checkpoint();
    }

    pub(crate) fn is_flipped(&self, atom: AtomIndex) -> bool {
        self.store.is_flipped(atom, &self.trailed)
    }

    /// Bind every event in order, conflicts included, and report the signed
    /// codes of all atoms that ended up flipped.
    pub(crate) fn replay(&mut self, events: &[(VariableId, bool)]) -> Vec<i32> {
        for &(variable, value) in events {
            let _ = self.bind(variable, value);
        }

        let mut flipped = Vec::new();
        for position in 0..self.store.num_slots() {
            let slot = SlotId::create_from_index(position);
            for atom in [AtomIndex::Positive(slot), AtomIndex::Negative(slot)] {
                if self.is_flipped(atom) {
                    flipped.push(atom.code());
                }
            }
        }
        flipped
    }
}
