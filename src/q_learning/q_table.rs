//! Q-table implementation for temporal difference learning

use std::collections::{HashMap, hash_map};

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Per-action estimates for one state, indexed by board position.
pub type ActionValues = [f64; 9];

/// Q-table mapping board states to one estimate per action.
///
/// Entries are created zero-filled the first time a state is referenced
/// through [`QTable::values_for`] and are never removed.
/// Serializes as a plain map from state key to its nine estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    entries: HashMap<StateKey, ActionValues>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimates for `state`, inserting a zeroed entry on first reference.
    ///
    /// The returned slot is the table's own storage, so writes through it are
    /// seen by every later lookup of the same state.
    pub fn values_for(&mut self, state: &StateKey) -> &mut ActionValues {
        self.entries.entry(state.clone()).or_insert([0.0; 9])
    }

    /// Look up a state without creating an entry.
    pub fn get(&self, state: &StateKey) -> Option<&ActionValues> {
        self.entries.get(state)
    }

    /// Estimate for a single state-action pair (zero when unseen).
    pub fn value(&self, state: &StateKey, action: usize) -> f64 {
        self.get(state).map_or(0.0, |values| values[action])
    }

    /// Get maximum estimate over legal actions in a state
    pub fn max_value(&mut self, state: &StateKey, legal_actions: &[usize]) -> f64 {
        let values = self.values_for(state);
        legal_actions
            .iter()
            .map(|&action| values[action])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn contains(&self, state: &StateKey) -> bool {
        self.entries.contains_key(state)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, StateKey, ActionValues> {
        self.entries.iter()
    }

    /// Number of states stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a QTable {
    type Item = (&'a StateKey, &'a ActionValues);
    type IntoIter = hash_map::Iter<'a, StateKey, ActionValues>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
