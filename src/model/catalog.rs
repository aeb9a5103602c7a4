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

//! Tutorial catalog store.
//!
//! This module loads the fixed tutorial catalog once and exposes it as the
//! single source of truth for the library, detail and queue views. The store
//! owns every [`Tutorial`] record in an arena; collections and views refer to
//! records by [`TutorialKey`], so toggling a tutorial in one view is visible
//! in all the others.

use std::{collections::HashMap, fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Tutorial, TutorialCollection, TutorialId, TutorialKey, snapshot::Snapshot};

/// The catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../assets/tutorials.json");

#[derive(Error, Debug)]
pub(crate) enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Library view projection: collection titles to tutorial keys.
pub(crate) type LibrarySnapshot = Snapshot<String, TutorialKey>;

#[derive(Deserialize)]
struct CollectionRecord {
    title: String,
    #[serde(default)]
    tutorials: Vec<Tutorial>,
}

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    collections: Vec<TutorialCollection>,
    tutorials: Vec<Tutorial>,
    index: HashMap<TutorialId, TutorialKey>,
}

impl Catalog {
    /// Loads the catalog from a file.
    ///
    /// A missing or malformed file yields an empty catalog. The failure is
    /// logged and otherwise ignored, there is nothing to recover to.
    pub(crate) fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let result = fs::read_to_string(path)
            .map_err(CatalogError::from)
            .and_then(|json| Self::from_json(&json));

        match result {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} collections ({} tutorials) from {}",
                    catalog.collections.len(),
                    catalog.tutorials.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                log::warn!("Using empty catalog, {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Loads the catalog bundled with the application.
    pub(crate) fn bundled() -> Self {
        Self::from_json(BUNDLED_CATALOG).unwrap_or_else(|e| {
            log::warn!("Using empty catalog, bundled catalog is invalid: {}", e);
            Self::default()
        })
    }

    /// Decodes a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the document is not a list of
    /// collections, or if any tutorial is missing a required field.
    pub(crate) fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CollectionRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<CollectionRecord>) -> Self {
        let mut catalog = Self::default();

        for record in records {
            let keys = record
                .tutorials
                .into_iter()
                .map(|tutorial| catalog.insert(tutorial))
                .collect();

            catalog.collections.push(TutorialCollection {
                title: record.title,
                tutorials: keys,
            });
        }

        catalog
    }

    fn insert(&mut self, tutorial: Tutorial) -> TutorialKey {
        let key = TutorialKey(self.tutorials.len());
        self.index.insert(tutorial.id, key);
        self.tutorials.push(tutorial);
        key
    }

    pub(crate) fn collections(&self) -> &[TutorialCollection] {
        &self.collections
    }

    pub(crate) fn tutorial(&self, key: TutorialKey) -> Option<&Tutorial> {
        self.tutorials.get(key.0)
    }

    pub(crate) fn tutorial_mut(&mut self, key: TutorialKey) -> Option<&mut Tutorial> {
        self.tutorials.get_mut(key.0)
    }

    pub(crate) fn find(&self, id: &TutorialId) -> Option<TutorialKey> {
        self.index.get(id).copied()
    }

    /// Number of tutorial records across all collections.
    pub(crate) fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }

    /// Keys of every tutorial in traversal order, collection by collection.
    pub(crate) fn keys(&self) -> impl Iterator<Item = TutorialKey> + '_ {
        self.collections
            .iter()
            .flat_map(|collection| collection.tutorials.iter().copied())
    }

    /// Keys of queued tutorials in traversal order.
    pub(crate) fn queued_keys(&self) -> Vec<TutorialKey> {
        self.keys()
            .filter(|key| self.tutorial(*key).is_some_and(|t| t.is_queued))
            .collect()
    }

    /// Flips the queued flag of a tutorial, returning the new value.
    pub(crate) fn toggle_queued(&mut self, key: TutorialKey) -> Option<bool> {
        let tutorial = self.tutorial_mut(key)?;
        tutorial.is_queued = !tutorial.is_queued;

        log::debug!("Tutorial '{}' queued: {}", tutorial.title, tutorial.is_queued);

        Some(tutorial.is_queued)
    }

    pub(crate) fn library_snapshot(&self) -> LibrarySnapshot {
        self.collections
            .iter()
            .fold(Snapshot::new(), |snapshot, collection| {
                snapshot.with_section(collection.title.clone(), collection.tutorials.iter().copied())
            })
    }

    #[cfg(test)]
    pub(crate) fn from_collections(collections: Vec<(&str, Vec<Tutorial>)>) -> Self {
        Self::from_records(
            collections
                .into_iter()
                .map(|(title, tutorials)| CollectionRecord {
                    title: title.to_string(),
                    tutorials,
                })
                .collect(),
        )
    }
}
