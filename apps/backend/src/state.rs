//! The library: catalog plus card store, persisted as one snapshot.

use vocab_core::{CardStore, Catalog};

use crate::services::storage::LibrarySnapshot;

#[derive(Debug, Clone, Default)]
pub struct Library {
    pub catalog: Catalog,
    pub store: CardStore,
}

impl Library {
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self {
            catalog: Catalog::from_units(snapshot.units),
            store: CardStore::from_cards(snapshot.cards),
        }
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot::new(self.catalog.units().to_vec(), self.store.cards().to_vec())
    }
}
