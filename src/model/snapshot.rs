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

//! Sectioned, ordered projections of catalog entities.
//!
//! A [`Snapshot`] is what a view renders: a sequence of sections, each with
//! its ordered items. Snapshots are plain values. A view replaces its
//! snapshot wholesale when the underlying data changes rather than editing
//! it in place.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot<S, I> {
    sections: Vec<(S, Vec<I>)>,
}

impl<S, I> Default for Snapshot<S, I> {
    fn default() -> Self {
        Self { sections: Vec::new() }
    }
}

impl<S, I> Snapshot<S, I> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a section with its items, returning the extended snapshot.
    pub(crate) fn with_section(mut self, section: S, items: impl IntoIterator<Item = I>) -> Self {
        self.sections.push((section, items.into_iter().collect()));
        self
    }

    pub(crate) fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub(crate) fn item_count(&self) -> usize {
        self.sections.iter().map(|(_, items)| items.len()).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub(crate) fn sections(&self) -> impl Iterator<Item = (&S, &[I])> {
        self.sections.iter().map(|(section, items)| (section, items.as_slice()))
    }

    pub(crate) fn items_in(&self, section: usize) -> &[I] {
        self.sections
            .get(section)
            .map(|(_, items)| items.as_slice())
            .unwrap_or_default()
    }

    /// All items across sections, in section order.
    pub(crate) fn items(&self) -> impl Iterator<Item = &I> {
        self.sections.iter().flat_map(|(_, items)| items.iter())
    }

    /// Looks up an item by its position in the flattened item order.
    pub(crate) fn item_at(&self, position: usize) -> Option<&I> {
        self.items().nth(position)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flattens_items_in_section_order() {
        let snapshot = Snapshot::new()
            .with_section("Swift", ["a", "b"])
            .with_section("Android", Vec::<&str>::new())
            .with_section("Unity", ["c"]);

        assert_eq!(snapshot.section_count(), 3);
        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.items().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(snapshot.item_at(2), Some(&"c"));
        assert_eq!(snapshot.item_at(3), None);
        assert_eq!(snapshot.items_in(1), &[] as &[&str]);
        assert_eq!(snapshot.items_in(9), &[] as &[&str]);
        assert_eq!(
            snapshot.sections().map(|(section, _)| *section).collect::<Vec<_>>(),
            vec!["Swift", "Android", "Unity"]
        );
    }

    #[test]
    fn empty_snapshot() {
        let snapshot: Snapshot<&str, u32> = Snapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.section_count(), 0);
    }
}
