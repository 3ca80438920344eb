use log::debug;

use crate::engine::atoms::AtomStore;
use crate::engine::boolean_assignments::VariableId;
use crate::engine::trailed::TrailedValues;

/// A boolean expression as the host's model layer hands it over. The boolean
/// layer only understands literals: a variable, possibly under a stack of
/// negations. Anything else is opaque and is left to other propagators.
#[derive(Debug, Clone)]
pub enum BoolExpression {
    Variable(VariableId),
    Not(Box<BoolExpression>),
    /// An expression the boolean layer cannot decompose.
    Opaque,
}

impl BoolExpression {
    /// The literal this expression denotes, if it is one: the underlying
    /// variable and whether the negations on top of it flip its polarity.
    pub fn as_literal(&self) -> Option<(VariableId, bool)> {
        let mut negated = false;
        let mut expression = self;
        loop {
            match expression {
                BoolExpression::Variable(variable) => return Some((*variable, negated)),
                BoolExpression::Not(inner) => {
                    negated = !negated;
                    expression = inner;
                }
                BoolExpression::Opaque => return None,
            }
        }
    }
}

/// Post `left == right` as implication edges in both polarities. Returns false,
/// without touching the store, when either side is not a literal.
pub fn post_equal(
    left: &BoolExpression,
    right: &BoolExpression,
    store: &mut AtomStore,
    trailed: &mut TrailedValues,
) -> bool {
    let Some((left_variable, left_negated)) = left.as_literal() else {
        return false;
    };
    let Some((right_variable, right_negated)) = right.as_literal() else {
        return false;
    };

    let left_atom = store.resolve(left_variable, left_negated, trailed);
    let right_atom = store.resolve(right_variable, right_negated, trailed);
    debug!("posting {left_atom} == {right_atom}");

    store.add_flip_action(left_atom, right_atom);
    store.add_flip_action(right_atom, left_atom);
    store.add_flip_action(!left_atom, !right_atom);
    store.add_flip_action(!right_atom, !left_atom);
    true
}

/// Post `left <= right` (`left` implies `right`), forward edge plus
/// contrapositive. Returns false, without touching the store, when either side
/// is not a literal.
pub fn post_less_equal(
    left: &BoolExpression,
    right: &BoolExpression,
    store: &mut AtomStore,
    trailed: &mut TrailedValues,
) -> bool {
    let Some((left_variable, left_negated)) = left.as_literal() else {
        return false;
    };
    let Some((right_variable, right_negated)) = right.as_literal() else {
        return false;
    };

    let left_atom = store.resolve(left_variable, left_negated, trailed);
    let right_atom = store.resolve(right_variable, right_negated, trailed);
    debug!("posting {left_atom} <= {right_atom}");

    store.add_flip_action(left_atom, right_atom);
    store.add_flip_action(!right_atom, !left_atom);
    true
}

/// Post `left != right` by linking each side to the other's negation. Returns
/// false, without touching the store, when either side is not a literal.
pub fn post_not_equal(
    left: &BoolExpression,
    right: &BoolExpression,
    store: &mut AtomStore,
    trailed: &mut TrailedValues,
) -> bool {
    let Some((left_variable, left_negated)) = left.as_literal() else {
        return false;
    };
    let Some((right_variable, right_negated)) = right.as_literal() else {
        return false;
    };

    let left_atom = store.resolve(left_variable, left_negated, trailed);
    let right_atom = store.resolve(right_variable, right_negated, trailed);
    debug!("posting {left_atom} != {right_atom}");

    store.add_flip_action(left_atom, !right_atom);
    store.add_flip_action(right_atom, !left_atom);
    store.add_flip_action(!left_atom, right_atom);
    store.add_flip_action(!right_atom, left_atom);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StorageKey;

    fn variable(index: usize) -> BoolExpression {
        BoolExpression::Variable(VariableId::create_from_index(index))
    }

    #[test]
    fn negations_toggle_the_literal_polarity() {
        let plain = variable(0);
        let negated = BoolExpression::Not(Box::new(variable(0)));
        let double = BoolExpression::Not(Box::new(BoolExpression::Not(Box::new(variable(0)))));

        let id = VariableId::create_from_index(0);
        assert_eq!(plain.as_literal(), Some((id, false)));
        assert_eq!(negated.as_literal(), Some((id, true)));
        assert_eq!(double.as_literal(), Some((id, false)));
    }

    #[test]
    fn opaque_expressions_are_not_literals() {
        assert_eq!(BoolExpression::Opaque.as_literal(), None);
        assert_eq!(
            BoolExpression::Not(Box::new(BoolExpression::Opaque)).as_literal(),
            None
        );
    }

    #[test]
    fn posting_against_an_opaque_side_leaves_the_store_untouched() {
        let mut trailed = TrailedValues::default();
        let mut store = AtomStore::default();

        assert!(!post_equal(
            &variable(0),
            &BoolExpression::Opaque,
            &mut store,
            &mut trailed,
        ));
        assert!(!post_less_equal(
            &BoolExpression::Opaque,
            &variable(1),
            &mut store,
            &mut trailed,
        ));
        assert!(!post_not_equal(
            &BoolExpression::Opaque,
            &BoolExpression::Opaque,
            &mut store,
            &mut trailed,
        ));

        assert_eq!(store.num_slots(), 0);
    }

    #[test]
    fn posting_between_literals_allocates_their_slots() {
        let mut trailed = TrailedValues::default();
        let mut store = AtomStore::default();

        let negated = BoolExpression::Not(Box::new(variable(1)));
        assert!(post_equal(&variable(0), &negated, &mut store, &mut trailed));

        assert_eq!(store.num_slots(), 2);
    }
}
