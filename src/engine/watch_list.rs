use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::atoms::SlotId;
use crate::engine::boolean_assignments::VariableId;

/// A minimal stand-in for the host's demon scheduling: it records which variable
/// slots want to hear about a variable becoming bound. The host loop is expected
/// to call [`AtomStore::notify_bound`] for every watcher of a freshly bound
/// variable.
///
/// [`AtomStore::notify_bound`]: crate::engine::atoms::AtomStore::notify_bound
#[derive(Default, Debug, Clone)]
pub struct WatchList {
    watchers: KeyedVec<VariableId, Vec<SlotId>>,
}

impl WatchList {
    pub fn watch(&mut self, variable: VariableId, slot: SlotId) {
        self.watchers.accomodate(variable, Vec::new());
        self.watchers[variable].push(slot);
    }

    pub fn watchers(&self, variable: VariableId) -> &[SlotId] {
        if variable.index() < self.watchers.len() {
            &self.watchers[variable]
        } else {
            &[]
        }
    }
}
