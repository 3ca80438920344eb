use log::debug;
use log::trace;

use super::AtMostEvent;
use super::AtMostId;
use super::Atom;
use super::AtomIndex;
use super::CardinalityTrigger;
use super::CardinalityUpperBound;
use super::SlotId;
use super::TriggerId;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::boolprop_assert_eq_simple;
use crate::boolprop_assert_extreme;
use crate::boolprop_assert_simple;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::boolean_assignments::BooleanAssignments;
use crate::engine::boolean_assignments::VariableId;
use crate::engine::trailed::TrailedValues;
use crate::engine::watch_list::WatchList;

/// Owns the variable-to-atom mapping, the atom graph, and every cardinality
/// constraint wired into it. Receives "variable became bound" notifications
/// from the host, translates them into flips, and runs the cascade.
///
/// Atoms reference constraints by id only; the registries in this store are the
/// single owner of all constraint objects.
#[derive(Default, Debug)]
pub struct AtomStore {
    variable_slots: HashMap<VariableId, SlotId>,
    variables: KeyedVec<SlotId, VariableId>,
    true_atoms: KeyedVec<SlotId, Atom>,
    false_atoms: KeyedVec<SlotId, Atom>,
    upper_bounds: KeyedVec<AtMostId, CardinalityUpperBound>,
    triggers: KeyedVec<TriggerId, CardinalityTrigger>,
}

impl AtomStore {
    /// The atom for `variable` bound to the requested polarity, allocating the
    /// variable's slot on first reference.
    pub fn resolve(
        &mut self,
        variable: VariableId,
        negated: bool,
        trailed: &mut TrailedValues,
    ) -> AtomIndex {
        let slot = self.slot_of(variable, trailed);
        if negated {
            AtomIndex::Negative(slot)
        } else {
            AtomIndex::Positive(slot)
        }
    }

    pub fn num_slots(&self) -> usize {
        self.variables.len()
    }

    /// Whether `atom` holds on the current branch. The fail sentinel never
    /// holds.
    pub fn is_flipped(&self, atom: AtomIndex, trailed: &TrailedValues) -> bool {
        match atom {
            AtomIndex::Fail => false,
            _ => self.atom(atom).is_flipped(trailed),
        }
    }

    /// Append the implication edge `source -> destination` to the graph.
    pub fn add_flip_action(&mut self, source: AtomIndex, destination: AtomIndex) {
        self.atom_mut(source).add_flip_action(destination);
    }

    /// Create an at-most-`bound` constraint over `members`, register it for
    /// ownership, and subscribe it to all its members.
    pub fn add_at_most(
        &mut self,
        members: impl Into<Box<[AtomIndex]>>,
        bound: u32,
        trailed: &mut TrailedValues,
    ) -> AtMostId {
        let constraint = CardinalityUpperBound::new(members.into(), bound, trailed);
        let id = self.upper_bounds.push(constraint);

        for position in 0..self.upper_bounds[id].members().len() {
            let member = self.upper_bounds[id].members()[position];
            self.atom_mut(member).listen_at_most(id);
        }

        debug!(
            "posted at-most-{bound} over {} members",
            self.upper_bounds[id].members().len()
        );
        id
    }

    /// Create a trigger constraint, register it for ownership, and subscribe it
    /// to all its members.
    pub fn add_trigger(
        &mut self,
        members: impl Into<Box<[AtomIndex]>>,
        threshold: u32,
        actions: impl Into<Box<[AtomIndex]>>,
        trailed: &mut TrailedValues,
    ) -> TriggerId {
        let constraint =
            CardinalityTrigger::new(members.into(), threshold, actions.into(), trailed);
        let id = self.triggers.push(constraint);

        for position in 0..self.triggers[id].members().len() {
            let member = self.triggers[id].members()[position];
            self.listen(member, id, trailed);
        }

        debug!(
            "posted trigger at {threshold} over {} members with {} actions",
            self.triggers[id].members().len(),
            self.triggers[id].actions().len()
        );
        id
    }

    pub fn upper_bound(&self, constraint: AtMostId) -> &CardinalityUpperBound {
        &self.upper_bounds[constraint]
    }

    pub fn trigger(&self, constraint: TriggerId) -> &CardinalityTrigger {
        &self.triggers[constraint]
    }

    /// One-time setup: subscribe to the bound notification of every variable
    /// slot known so far.
    pub fn post(&self, watch_list: &mut WatchList) {
        for slot in self.variables.keys() {
            watch_list.watch(self.variables[slot], slot);
        }
    }

    /// One-time initial propagation: process every variable that was already
    /// bound before the first choice point.
    pub fn initial_propagate(
        &mut self,
        assignments: &BooleanAssignments,
        trailed: &mut TrailedValues,
    ) -> PropagationStatus {
        for position in 0..self.variables.len() {
            let slot = SlotId::create_from_index(position);
            if assignments.is_assigned(self.variables[slot], trailed) {
                self.notify_bound(slot, assignments, trailed)?;
            }
        }
        Ok(())
    }

    /// The host bound the variable of `slot`; flip the matching polarity.
    pub fn notify_bound(
        &mut self,
        slot: SlotId,
        assignments: &BooleanAssignments,
        trailed: &mut TrailedValues,
    ) -> PropagationStatus {
        let variable = self.variables[slot];
        let value = assignments.value(variable, trailed);
        boolprop_assert_simple!(
            value.is_some(),
            "notify_bound requires the variable to be bound"
        );
        match value {
            Some(true) => self.flip(AtomIndex::Positive(slot), trailed),
            Some(false) => self.flip(AtomIndex::Negative(slot), trailed),
            None => Ok(()),
        }
    }

    /// Force `atom` to hold and run the cascade of consequences to a fixpoint
    /// or to the first contradiction. The cascade is processed iteratively from
    /// a pending work list; the set of atoms that end up flipped is independent
    /// of the visitation order, so only the point at which a contradiction is
    /// first detected can vary with it.
    pub fn flip(&mut self, atom: AtomIndex, trailed: &mut TrailedValues) -> PropagationStatus {
        let mut pending = vec![atom];
        while let Some(next) = pending.pop() {
            self.process(next, &mut pending, trailed)?;
        }

        boolprop_assert_extreme!(
            self.closed_upper_bounds_have_exact_counts(trailed),
            "a closed upper bound must have exactly its bound of flipped members"
        );
        Ok(())
    }

    fn process(
        &mut self,
        atom: AtomIndex,
        pending: &mut Vec<AtomIndex>,
        trailed: &mut TrailedValues,
    ) -> PropagationStatus {
        if atom == AtomIndex::Fail {
            return Err(Inconsistency::FailSentinel);
        }
        if self.atom(!atom).is_flipped(trailed) {
            return Err(Inconsistency::MutuallyExclusive(atom));
        }
        if self.atom(atom).is_flipped(trailed) {
            // Already derived through another path in the graph.
            return Ok(());
        }

        trace!("flipping {atom}");
        self.atom(atom).set_flipped(trailed);

        // Schedule the implication edges, keeping edge-list order under the
        // LIFO work list.
        let first_pending = pending.len();
        pending.extend(self.atom(atom).flip_actions().iter().copied());
        pending[first_pending..].reverse();

        for position in 0..self.atom(atom).at_most_listeners().len() {
            let listener = self.atom(atom).at_most_listeners()[position];
            self.notify_at_most(listener, pending, trailed)?;
        }

        // Notify the trigger listeners as the reversible set stands right now;
        // a trigger that deregisters during this very loop is not revisited.
        let listeners = self
            .atom(atom)
            .trigger_listeners()
            .iter(trailed)
            .copied()
            .collect::<Vec<_>>();
        for listener in listeners {
            if !self
                .atom(atom)
                .trigger_listeners()
                .contains(listener, trailed)
            {
                continue;
            }
            self.notify_trigger(listener, pending, trailed);
        }

        Ok(())
    }

    fn notify_at_most(
        &mut self,
        constraint: AtMostId,
        pending: &mut Vec<AtomIndex>,
        trailed: &mut TrailedValues,
    ) -> PropagationStatus {
        match self.upper_bounds[constraint].on_member_flipped(trailed) {
            AtMostEvent::Nothing => Ok(()),
            AtMostEvent::Exceeded => Err(Inconsistency::BoundExceeded {
                bound: self.upper_bounds[constraint].bound(),
            }),
            AtMostEvent::Close => {
                // The bound is reached: no remaining member may become true.
                let first_pending = pending.len();
                let at_most = &self.upper_bounds[constraint];
                pending.extend(
                    at_most
                        .members()
                        .iter()
                        .copied()
                        .filter(|&member| !self.is_flipped(member, trailed))
                        .map(|member| !member),
                );
                pending[first_pending..].reverse();
                Ok(())
            }
        }
    }

    fn notify_trigger(
        &mut self,
        constraint: TriggerId,
        pending: &mut Vec<AtomIndex>,
        trailed: &mut TrailedValues,
    ) {
        if !self.triggers[constraint].on_member_flipped(trailed) {
            return;
        }

        trace!(
            "trigger over {} members fired",
            self.triggers[constraint].members().len()
        );

        // Disengage before scheduling the actions so the rest of the cascade
        // cannot make the trigger fire again.
        for position in 0..self.triggers[constraint].members().len() {
            let member = self.triggers[constraint].members()[position];
            self.stop_listening(member, constraint, trailed);
        }

        let first_pending = pending.len();
        pending.extend(self.triggers[constraint].actions().iter().copied());
        pending[first_pending..].reverse();
    }

    pub(crate) fn listen(
        &mut self,
        atom: AtomIndex,
        constraint: TriggerId,
        trailed: &mut TrailedValues,
    ) {
        self.atom_mut(atom).listen_trigger(constraint, trailed);
    }

    pub(crate) fn stop_listening(
        &mut self,
        atom: AtomIndex,
        constraint: TriggerId,
        trailed: &mut TrailedValues,
    ) {
        self.atom_mut(atom).stop_listening_trigger(constraint, trailed);
    }

    fn slot_of(&mut self, variable: VariableId, trailed: &mut TrailedValues) -> SlotId {
        if let Some(&slot) = self.variable_slots.get(&variable) {
            return slot;
        }

        let slot = self.variables.push(variable);
        let true_slot = self.true_atoms.push(Atom::new(trailed));
        let false_slot = self.false_atoms.push(Atom::new(trailed));
        boolprop_assert_eq_simple!(slot, true_slot);
        boolprop_assert_eq_simple!(slot, false_slot);
        let _ = self.variable_slots.insert(variable, slot);
        slot
    }

    fn atom(&self, atom: AtomIndex) -> &Atom {
        match atom {
            AtomIndex::Fail => unreachable!("the fail sentinel has no atom record"),
            AtomIndex::Positive(slot) => &self.true_atoms[slot],
            AtomIndex::Negative(slot) => &self.false_atoms[slot],
        }
    }

    fn atom_mut(&mut self, atom: AtomIndex) -> &mut Atom {
        match atom {
            AtomIndex::Fail => unreachable!("the fail sentinel has no atom record"),
            AtomIndex::Positive(slot) => &mut self.true_atoms[slot],
            AtomIndex::Negative(slot) => &mut self.false_atoms[slot],
        }
    }

    /// Every upper bound whose counter reached its bound must count exactly as
    /// many flipped members as the bound, and none may have overshot it.
    fn closed_upper_bounds_have_exact_counts(&self, trailed: &TrailedValues) -> bool {
        self.upper_bounds.iter().all(|at_most| {
            let flipped = at_most
                .members()
                .iter()
                .filter(|&&member| self.is_flipped(member, trailed))
                .count() as u32;
            let counted = at_most.flipped_members(trailed);
            counted == flipped && counted <= at_most.bound()
        })
    }
}
