//! Set of cards currently showing their detail face.

use crate::types::Repository;
use std::collections::HashSet;

/// Identifier-keyed toggle set of expanded ("flipped") cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCards {
    ids: HashSet<u64>,
}

impl ExpandedCards {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the card for `id`, returning whether it is now expanded.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Shows the detail face for `id`. Expanding an expanded card keeps it so.
    pub fn expand(&mut self, id: u64) {
        self.ids.insert(id);
    }

    /// Returns true if the card for `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Drops identifiers that no longer appear in `source`.
    pub fn retain_present(&mut self, source: &[Repository]) {
        let present: HashSet<u64> = source.iter().map(|repo| repo.id).collect();
        self.ids.retain(|id| present.contains(id));
    }

    /// Number of expanded cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no card is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u64> for ExpandedCards {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
