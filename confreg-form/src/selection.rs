//! Checked-activity state with conflict and cost derivation
use crate::catalog::ActivityCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of checked activities together with the running cost total.
///
/// The total is maintained incrementally: each accepted toggle adds or
/// subtracts that activity's cost. Invariant: at most one checked
/// activity per time-slot key; [`ActivitySelection::set_checked`] rejects
/// a check that would break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivitySelection {
    checked: BTreeSet<String>,
    total_cents: u32,
}

impl ActivitySelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.checked.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.checked.len()
    }

    pub fn checked_ids(&self) -> impl Iterator<Item = &str> {
        self.checked.iter().map(String::as_str)
    }

    #[must_use]
    pub fn total_cents(&self) -> u32 {
        self.total_cents
    }

    /// Running total in whole dollars, as shown by the "Total: $N" line.
    #[must_use]
    pub fn total_dollars(&self) -> u32 {
        self.total_cents / 100
    }

    /// Whether `id` is blocked by a schedule conflict.
    ///
    /// Derived from the full set of currently checked activities: an
    /// unchecked activity is blocked while ANY checked activity occupies
    /// its slot key. A checked activity is never blocked.
    #[must_use]
    pub fn is_blocked(&self, catalog: &ActivityCatalog, id: &str) -> bool {
        if self.checked.contains(id) {
            return false;
        }
        catalog
            .conflicting_ids(id)
            .iter()
            .any(|peer| self.checked.contains(*peer))
    }

    /// Apply a checkbox toggle. Returns `true` when the selection changed.
    ///
    /// Unknown ids, redundant toggles, and checks of a blocked activity
    /// are all rejected without touching the total.
    pub fn set_checked(&mut self, catalog: &ActivityCatalog, id: &str, checked: bool) -> bool {
        let Some(activity) = catalog.get(id) else {
            return false;
        };
        if checked {
            if self.is_blocked(catalog, id) || !self.checked.insert(id.to_string()) {
                return false;
            }
            self.total_cents = self.total_cents.saturating_add(activity.cost_cents);
        } else {
            if !self.checked.remove(id) {
                return false;
            }
            self.total_cents = self.total_cents.saturating_sub(activity.cost_cents);
        }
        true
    }
}
