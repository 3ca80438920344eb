use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::trailed::TrailedInteger;
use crate::engine::trailed::TrailedValues;

/// Identifies a boolean variable managed by [`BooleanAssignments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId {
    id: u32,
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

const UNASSIGNED: i64 = -1;
const ASSIGNED_FALSE: i64 = 0;
const ASSIGNED_TRUE: i64 = 1;

/// A minimal boolean variable layer standing in for the host solver's domain
/// store. Each variable is a tri-state domain held in a trailed cell, so
/// assignments are undone on backtrack along with everything else.
#[derive(Default, Debug, Clone)]
pub struct BooleanAssignments {
    domains: KeyedVec<VariableId, TrailedInteger>,
}

impl BooleanAssignments {
    pub fn new_variable(&mut self, trailed: &mut TrailedValues) -> VariableId {
        self.domains.push(trailed.grow(UNASSIGNED))
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub fn is_assigned(&self, variable: VariableId, trailed: &TrailedValues) -> bool {
        trailed.read(self.domains[variable]) != UNASSIGNED
    }

    /// The value the variable is bound to, if any.
    pub fn value(&self, variable: VariableId, trailed: &TrailedValues) -> Option<bool> {
        match trailed.read(self.domains[variable]) {
            UNASSIGNED => None,
            ASSIGNED_FALSE => Some(false),
            _ => Some(true),
        }
    }

    /// Bind `variable` to `value`. Re-binding to the same value is a no-op;
    /// binding to the opposite value empties the domain.
    pub fn assign(
        &self,
        variable: VariableId,
        value: bool,
        trailed: &mut TrailedValues,
    ) -> PropagationStatus {
        match self.value(variable, trailed) {
            None => {
                let encoded = if value { ASSIGNED_TRUE } else { ASSIGNED_FALSE };
                trailed.assign(self.domains[variable], encoded);
                Ok(())
            }
            Some(current) if current == value => Ok(()),
            Some(_) => Err(Inconsistency::EmptyDomain(variable)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_are_undone_by_backtracking() {
        let mut trailed = TrailedValues::default();
        let mut assignments = BooleanAssignments::default();
        let x = assignments.new_variable(&mut trailed);

        trailed.new_checkpoint();
        assignments
            .assign(x, true, &mut trailed)
            .expect("fresh variable");
        assert_eq!(assignments.value(x, &trailed), Some(true));

        trailed.synchronise(0);
        assert_eq!(assignments.value(x, &trailed), None);
    }

    #[test]
    fn conflicting_assignment_empties_the_domain() {
        let mut trailed = TrailedValues::default();
        let mut assignments = BooleanAssignments::default();
        let x = assignments.new_variable(&mut trailed);

        assignments
            .assign(x, false, &mut trailed)
            .expect("fresh variable");
        assert_eq!(
            assignments.assign(x, true, &mut trailed),
            Err(Inconsistency::EmptyDomain(x))
        );

        // Re-binding to the held value is fine.
        assignments
            .assign(x, false, &mut trailed)
            .expect("same value");
    }
}
