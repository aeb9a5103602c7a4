// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tutorial queue management.
//!
//! This module provides state for the personal tutorial queue: the ordered
//! subset of catalog tutorials marked as queued. The queue is rebuilt from the
//! catalog every time the queue view becomes visible, then mutated locally by
//! removal and by promoting tutorials with pending updates to the front.
//!
//! The queue holds only [`TutorialKey`]s. Queue membership and update counts
//! live on the tutorial records owned by the [`Catalog`].

use std::collections::BTreeSet;

use rand::{rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::model::{TutorialKey, catalog::Catalog, snapshot::Snapshot};

/// Update count assigned to a tutorial by a simulated update check.
pub(crate) const SIMULATED_UPDATE_COUNT: u32 = 3;

/// Queues this short are never reordered by [`Queue::apply_updates`].
const MIN_REORDER_LEN: usize = 3;

/// Queue view projection: a single section of queued tutorials.
pub(crate) type QueueViewSnapshot = Snapshot<&'static str, TutorialKey>;

pub(crate) const QUEUE_SECTION: &str = "Queue";

/// What happens to a tutorial's queued flag when it is removed from the
/// visible queue.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RemovalPolicy {
    /// Leave the flag set; the tutorial reappears on the next rebuild.
    #[default]
    KeepQueued,
    /// Clear the flag, so the tutorial stays out of the queue on rebuild.
    ClearQueued,
}

/// Immutable ordered sequence of queued tutorials.
///
/// Every queue mutation produces a new snapshot that replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueueSnapshot {
    keys: Vec<TutorialKey>,
}

impl QueueSnapshot {
    /// Projects the queued tutorials of a catalog, in traversal order.
    pub(crate) fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            keys: catalog.queued_keys(),
        }
    }

    pub(crate) fn keys(&self) -> &[TutorialKey] {
        &self.keys
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn get(&self, position: usize) -> Option<TutorialKey> {
        self.keys.get(position).copied()
    }

    fn without_positions(&self, positions: &BTreeSet<usize>) -> Self {
        Self {
            keys: self
                .keys
                .iter()
                .enumerate()
                .filter(|(position, _)| !positions.contains(position))
                .map(|(_, key)| *key)
                .collect(),
        }
    }

    /// Moves every tutorial with pending updates in front of the current
    /// anchor, making it the new anchor.
    ///
    /// The anchor starts as the first tutorial. Updated tutorials end up at
    /// the front in reverse encounter order; the rest keep their relative
    /// order.
    fn promote_updated(&self, catalog: &Catalog) -> (Self, Vec<TutorialKey>) {
        let mut keys = self.keys.clone();
        let mut promoted = Vec::new();

        let Some(mut anchor) = keys.first().copied() else {
            return (self.clone(), promoted);
        };

        let updated: Vec<TutorialKey> = self
            .keys
            .iter()
            .copied()
            .filter(|key| catalog.tutorial(*key).is_some_and(|t| t.has_updates()))
            .collect();

        for key in updated {
            promoted.push(key);

            if key == anchor {
                continue;
            }

            if let Some(from) = keys.iter().position(|k| *k == key) {
                keys.remove(from);
            }
            let to = keys.iter().position(|k| *k == anchor).unwrap_or(0);
            keys.insert(to, key);

            anchor = key;
        }

        (Self { keys }, promoted)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Queue {
    snapshot: QueueSnapshot,
    removal_policy: RemovalPolicy,
}

impl Queue {
    pub(crate) fn new(removal_policy: RemovalPolicy) -> Self {
        Self {
            snapshot: QueueSnapshot::default(),
            removal_policy,
        }
    }

    pub(crate) fn snapshot(&self) -> &QueueSnapshot {
        &self.snapshot
    }

    pub(crate) fn view_snapshot(&self) -> QueueViewSnapshot {
        Snapshot::new().with_section(QUEUE_SECTION, self.snapshot.keys().iter().copied())
    }

    /// Replaces the queue with the catalog's queued tutorials.
    ///
    /// Any ordering established by [`Self::apply_updates`] is discarded.
    pub(crate) fn rebuild(&mut self, catalog: &Catalog) {
        self.snapshot = QueueSnapshot::from_catalog(catalog);
        log::debug!("Queue rebuilt with {} tutorials", self.snapshot.len());
    }

    /// Removes the tutorials at the given queue positions.
    ///
    /// Positions outside the queue are ignored. Depending on the
    /// [`RemovalPolicy`], the removed tutorials are also unqueued in the
    /// catalog. Returns the removed keys, in queue order.
    pub(crate) fn remove_selected(
        &mut self,
        catalog: &mut Catalog,
        positions: &BTreeSet<usize>,
    ) -> Vec<TutorialKey> {
        let removed: Vec<TutorialKey> = positions
            .iter()
            .filter_map(|position| self.snapshot.get(*position))
            .collect();

        if removed.is_empty() {
            return removed;
        }

        if self.removal_policy == RemovalPolicy::ClearQueued {
            for key in &removed {
                if let Some(tutorial) = catalog.tutorial_mut(*key) {
                    tutorial.is_queued = false;
                }
            }
        }

        self.snapshot = self.snapshot.without_positions(positions);
        log::info!("Removed {} tutorials from the queue", removed.len());

        removed
    }

    /// Simulates an update notification for one randomly chosen tutorial.
    ///
    /// Does nothing on an empty queue.
    pub(crate) fn trigger_update(&mut self, catalog: &mut Catalog) -> Option<TutorialKey> {
        let positions: Vec<usize> = (0..self.snapshot.len()).collect();
        let position = *positions.choose(&mut rng())?;

        self.trigger_update_at(catalog, position)
    }

    /// Marks the tutorial at a queue position as having pending updates.
    pub(crate) fn trigger_update_at(
        &mut self,
        catalog: &mut Catalog,
        position: usize,
    ) -> Option<TutorialKey> {
        let key = self.snapshot.get(position)?;
        let tutorial = catalog.tutorial_mut(key)?;
        tutorial.update_count = SIMULATED_UPDATE_COUNT;

        log::info!("Update available for '{}'", tutorial.title);

        Some(key)
    }

    /// Promotes tutorials with pending updates to the front of the queue and
    /// clears their update counts.
    ///
    /// Queues with fewer than three tutorials are left untouched. Returns the
    /// promoted keys in the order they were processed.
    pub(crate) fn apply_updates(&mut self, catalog: &mut Catalog) -> Vec<TutorialKey> {
        if self.snapshot.len() < MIN_REORDER_LEN {
            return Vec::new();
        }

        let (snapshot, promoted) = self.snapshot.promote_updated(catalog);

        for key in &promoted {
            if let Some(tutorial) = catalog.tutorial_mut(*key) {
                tutorial.update_count = 0;
            }
        }

        self.snapshot = snapshot;

        if !promoted.is_empty() {
            log::info!("Applied updates to {} tutorials", promoted.len());
        }

        promoted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::tests::tutorial;

    /// Builds a catalog where every tutorial is queued, with the given
    /// update counts, and a queue rebuilt from it.
    fn queued(updates: &[(&str, u32)], policy: RemovalPolicy) -> (Catalog, Queue) {
        let tutorials = updates
            .iter()
            .enumerate()
            .map(|(i, (title, update_count))| {
                let mut t = tutorial(title, (2020, 1, i as u32 + 1));
                t.is_queued = true;
                t.update_count = *update_count;
                t
            })
            .collect();

        let catalog = Catalog::from_collections(vec![("All", tutorials)]);
        let mut queue = Queue::new(policy);
        queue.rebuild(&catalog);

        (catalog, queue)
    }

    fn titles(catalog: &Catalog, queue: &Queue) -> Vec<String> {
        queue
            .snapshot()
            .keys()
            .iter()
            .map(|key| catalog.tutorial(*key).unwrap().title.clone())
            .collect()
    }

    fn update_counts(catalog: &Catalog) -> Vec<u32> {
        catalog.keys().map(|k| catalog.tutorial(k).unwrap().update_count).collect()
    }

    #[test]
    fn rebuild_projects_queued_tutorials_in_catalog_order() {
        let mut a = tutorial("A", (2020, 1, 1));
        let b = tutorial("B", (2020, 1, 2));
        let mut c = tutorial("C", (2020, 1, 3));
        a.is_queued = true;
        c.is_queued = true;

        let mut catalog = Catalog::from_collections(vec![("One", vec![a]), ("Two", vec![b, c])]);
        let mut queue = Queue::default();
        queue.rebuild(&catalog);
        assert_eq!(titles(&catalog, &queue), vec!["A", "C"]);

        catalog.toggle_queued(TutorialKey(1));
        queue.rebuild(&catalog);
        assert_eq!(titles(&catalog, &queue), vec!["A", "B", "C"]);
    }

    #[test]
    fn apply_updates_promotes_in_front_of_anchor() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 2), ("C", 0), ("D", 1)], RemovalPolicy::default());

        let promoted = queue.apply_updates(&mut catalog);

        assert_eq!(promoted, vec![TutorialKey(1), TutorialKey(3)]);
        assert_eq!(titles(&catalog, &queue), vec!["D", "B", "A", "C"]);
        assert_eq!(update_counts(&catalog), vec![0, 0, 0, 0]);
    }

    #[test]
    fn apply_updates_resets_anchor_that_has_updates() {
        let (mut catalog, mut queue) =
            queued(&[("A", 1), ("B", 0), ("C", 3)], RemovalPolicy::default());

        let promoted = queue.apply_updates(&mut catalog);

        assert_eq!(promoted, vec![TutorialKey(0), TutorialKey(2)]);
        assert_eq!(titles(&catalog, &queue), vec!["C", "A", "B"]);
        assert_eq!(update_counts(&catalog), vec![0, 0, 0]);
    }

    #[test]
    fn apply_updates_keeps_non_updated_relative_order() {
        let (mut catalog, mut queue) = queued(
            &[("A", 0), ("B", 0), ("C", 1), ("D", 0), ("E", 1), ("F", 0)],
            RemovalPolicy::default(),
        );

        queue.apply_updates(&mut catalog);

        let order = titles(&catalog, &queue);
        assert_eq!(&order[..2], &["E", "C"]);
        assert_eq!(&order[2..], &["A", "B", "D", "F"]);
    }

    #[test]
    fn apply_updates_is_idempotent_without_pending_updates() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 2), ("C", 0), ("D", 1)], RemovalPolicy::default());

        queue.apply_updates(&mut catalog);
        let first = titles(&catalog, &queue);

        let promoted = queue.apply_updates(&mut catalog);
        assert!(promoted.is_empty());
        assert_eq!(titles(&catalog, &queue), first);
    }

    #[test]
    fn apply_updates_ignores_short_queues() {
        for updates in [&[("A", 0), ("B", 2)][..], &[("A", 5)][..], &[][..]] {
            let (mut catalog, mut queue) = queued(updates, RemovalPolicy::default());
            let before_order = titles(&catalog, &queue);
            let before_counts = update_counts(&catalog);

            assert!(queue.apply_updates(&mut catalog).is_empty());
            assert_eq!(titles(&catalog, &queue), before_order);
            assert_eq!(update_counts(&catalog), before_counts);
        }
    }

    #[test]
    fn trigger_update_marks_exactly_one_tutorial() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)], RemovalPolicy::default());

        let key = queue.trigger_update(&mut catalog).unwrap();

        assert!(queue.snapshot().keys().contains(&key));
        let counts = update_counts(&catalog);
        assert_eq!(counts.iter().filter(|c| **c > 0).count(), 1);
        assert_eq!(catalog.tutorial(key).unwrap().update_count, SIMULATED_UPDATE_COUNT);
    }

    #[test]
    fn trigger_update_on_empty_queue_is_a_no_op() {
        let (mut catalog, mut queue) = queued(&[], RemovalPolicy::default());

        assert_eq!(queue.trigger_update(&mut catalog), None);
        assert_eq!(queue.trigger_update_at(&mut catalog, 0), None);
    }

    #[test]
    fn trigger_update_at_position() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0)], RemovalPolicy::default());

        assert_eq!(queue.trigger_update_at(&mut catalog, 1), Some(TutorialKey(1)));
        assert_eq!(queue.trigger_update_at(&mut catalog, 3), None);
        assert_eq!(update_counts(&catalog), vec![0, SIMULATED_UPDATE_COUNT, 0]);
    }

    #[test]
    fn remove_selected_drops_positions() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0)], RemovalPolicy::default());

        let removed = queue.remove_selected(&mut catalog, &BTreeSet::from([1, 7]));

        assert_eq!(removed, vec![TutorialKey(1)]);
        assert_eq!(titles(&catalog, &queue), vec!["A", "C"]);
    }

    #[test]
    fn clear_policy_keeps_removed_tutorials_out_after_rebuild() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0)], RemovalPolicy::ClearQueued);

        queue.remove_selected(&mut catalog, &BTreeSet::from([1]));
        assert!(!catalog.tutorial(TutorialKey(1)).unwrap().is_queued);

        queue.rebuild(&catalog);
        assert_eq!(titles(&catalog, &queue), vec!["A", "C"]);
    }

    #[test]
    fn default_policy_keeps_queued_flag() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0)], RemovalPolicy::default());

        queue.remove_selected(&mut catalog, &BTreeSet::from([0]));

        assert!(catalog.tutorial(TutorialKey(0)).unwrap().is_queued);
        assert_eq!(titles(&catalog, &queue), vec!["B", "C"]);
    }

    #[test]
    fn keep_policy_restores_removed_tutorials_on_rebuild() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 0)], RemovalPolicy::KeepQueued);

        queue.remove_selected(&mut catalog, &BTreeSet::from([1]));
        assert_eq!(titles(&catalog, &queue), vec!["A", "C"]);
        assert!(catalog.tutorial(TutorialKey(1)).unwrap().is_queued);

        queue.rebuild(&catalog);
        assert_eq!(titles(&catalog, &queue), vec!["A", "B", "C"]);
    }

    #[test]
    fn rebuild_discards_applied_order() {
        let (mut catalog, mut queue) =
            queued(&[("A", 0), ("B", 0), ("C", 1)], RemovalPolicy::default());

        queue.apply_updates(&mut catalog);
        assert_eq!(titles(&catalog, &queue), vec!["C", "A", "B"]);

        queue.rebuild(&catalog);
        assert_eq!(titles(&catalog, &queue), vec!["A", "B", "C"]);
    }

    #[test]
    fn view_snapshot_has_single_section() {
        let (_, queue) = queued(&[("A", 0), ("B", 0)], RemovalPolicy::default());
        let snapshot = queue.view_snapshot();

        assert_eq!(snapshot.section_count(), 1);
        assert_eq!(snapshot.items_in(0), &[TutorialKey(0), TutorialKey(1)]);
    }
}
