//! Per-category selection state machine.
//!
//! A toggle on a single-select group replaces or clears the group's value; a
//! toggle on a multi-select group flips set membership. Transitions are pure:
//! no I/O, no timers, no implicit resets.

use std::collections::BTreeSet;

use cafe_model::{Cardinality, OptionId, Selection, SelectionState};

/// A discrete "toggle option" user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAction {
    pub group: String,
    pub option_id: OptionId,
    pub cardinality: Cardinality,
}

impl ToggleAction {
    pub fn new(group: impl Into<String>, option_id: OptionId, cardinality: Cardinality) -> Self {
        Self {
            group: group.into(),
            option_id,
            cardinality,
        }
    }
}

/// Compute the state that follows `prior` under `action`.
pub fn transition(prior: &SelectionState, action: &ToggleAction) -> SelectionState {
    let mut next = prior.clone();
    next.toggle(action);
    next
}

/// In-place form of [`transition`] on a [`SelectionState`].
pub trait Toggle {
    fn toggle(&mut self, action: &ToggleAction);
}

impl Toggle for SelectionState {
    fn toggle(&mut self, action: &ToggleAction) {
        apply(self, action);
    }
}

fn apply(state: &mut SelectionState, action: &ToggleAction) {
    // A value of the other cardinality is stale and does not carry over.
    let current = state
        .remove(&action.group)
        .filter(|selection| selection.cardinality() == action.cardinality);

    let next = match (action.cardinality, current) {
        (Cardinality::Single, Some(Selection::Single(selected)))
            if selected == action.option_id =>
        {
            None
        }
        (Cardinality::Single, _) => Some(Selection::Single(action.option_id.clone())),
        (Cardinality::Multi, current) => {
            let mut selected = match current {
                Some(Selection::Multi(selected)) => selected,
                _ => BTreeSet::new(),
            };
            if !selected.remove(&action.option_id) {
                selected.insert(action.option_id.clone());
            }
            (!selected.is_empty()).then_some(Selection::Multi(selected))
        }
    };

    if let Some(selection) = next {
        state.insert(action.group.clone(), selection);
    }
}
