// Process-wide holder of the active Catalog.
// Readers clone an Arc under a read lock, so every query runs against one
// consistent catalog generation; the refresh worker builds the next
// Catalog entirely outside the lock and swaps it with a single write.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Catalog;

pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(initial: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The currently-active catalog. The returned Arc stays valid across
    /// later swaps; queries never see a half-replaced catalog.
    pub async fn current(&self) -> Arc<Catalog> {
        self.current.read().await.clone()
    }

    /// Publish a new catalog wholesale. The lock is held only for the
    /// pointer assignment.
    pub async fn replace(&self, catalog: Catalog) {
        *self.current.write().await = Arc::new(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;
    use chrono::NaiveDateTime;

    fn catalog_of(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|n| Snapshot {
                    name: n.to_string(),
                    timestamp: NaiveDateTime::parse_from_str(
                        "2024-01-01 10:00:00",
                        "%Y-%m-%d %H:%M:%S",
                    )
                    .unwrap(),
                    records: vec![],
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn replace_swaps_wholesale_and_old_reference_survives() {
        let store = CatalogStore::new(catalog_of(&["a.json"]));
        let before = store.current().await;
        store.replace(catalog_of(&["b.json", "c.json"])).await;
        let after = store.current().await;

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(before.snapshots[0].name, "a.json");
    }
}
