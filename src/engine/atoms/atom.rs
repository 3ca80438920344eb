use super::AtMostId;
use super::AtomIndex;
use super::TriggerId;
use crate::engine::trailed::TrailedSwitch;
use crate::engine::trailed::TrailedValues;
use crate::engine::trailed::UnorderedRevSet;

/// The per-literal record: the one-shot flip switch, the implication edges this
/// literal fires when it flips, and the constraints listening on it.
///
/// Upper-bound listeners never detach, so a plain append-only list suffices.
/// Trigger listeners deregister mid-search, so they live in a reversible set to
/// keep other listeners' positions intact and to restore membership on
/// backtrack.
#[derive(Debug)]
pub(crate) struct Atom {
    flipped: TrailedSwitch,
    flip_actions: Vec<AtomIndex>,
    at_most_listeners: Vec<AtMostId>,
    trigger_listeners: UnorderedRevSet<TriggerId>,
}

impl Atom {
    pub(crate) fn new(trailed: &mut TrailedValues) -> Atom {
        Atom {
            flipped: TrailedSwitch::new(trailed),
            flip_actions: Vec::new(),
            at_most_listeners: Vec::new(),
            trigger_listeners: UnorderedRevSet::new(trailed),
        }
    }

    pub(crate) fn is_flipped(&self, trailed: &TrailedValues) -> bool {
        self.flipped.is_switched(trailed)
    }

    pub(crate) fn set_flipped(&self, trailed: &mut TrailedValues) {
        self.flipped.switch(trailed);
    }

    pub(crate) fn add_flip_action(&mut self, target: AtomIndex) {
        self.flip_actions.push(target);
    }

    pub(crate) fn flip_actions(&self) -> &[AtomIndex] {
        &self.flip_actions
    }

    pub(crate) fn listen_at_most(&mut self, constraint: AtMostId) {
        self.at_most_listeners.push(constraint);
    }

    pub(crate) fn at_most_listeners(&self) -> &[AtMostId] {
        &self.at_most_listeners
    }

    pub(crate) fn listen_trigger(&mut self, constraint: TriggerId, trailed: &mut TrailedValues) {
        self.trigger_listeners.insert(constraint, trailed);
    }

    pub(crate) fn stop_listening_trigger(
        &mut self,
        constraint: TriggerId,
        trailed: &mut TrailedValues,
    ) {
        let _ = self.trigger_listeners.remove(constraint, trailed);
    }

    pub(crate) fn trigger_listeners(&self) -> &UnorderedRevSet<TriggerId> {
        &self.trigger_listeners
    }
}
