use crate::serialization::JsonSerializer;
use crate::store::json_file_store::JsonFileStore;
use crate::traits::{
    PersistenceMetadata, PersistenceStore, Serializer, StoreSnapshot, FORMAT_VERSION,
};
use metabase_core::ExportResult;
use metabase_domain::ExportedState;
use std::path::Path;

/// Typed access to an exported state file.
pub struct StateStore {
    store: JsonFileStore,
    serializer: JsonSerializer,
}

impl StateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: JsonFileStore::new(path),
            serializer: JsonSerializer,
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub async fn save(&self, state: &ExportedState) -> ExportResult<PersistenceMetadata> {
        let data = self.serializer.serialize(state)?;
        let snapshot = StoreSnapshot {
            data,
            metadata: PersistenceMetadata::new(FORMAT_VERSION, self.store.instance_id()),
        };
        let metadata = self.store.save(snapshot).await?;

        tracing::info!(
            "Wrote {} collections, {} cards, {} dashboards to {}",
            state.collections.len(),
            state.cards.len(),
            state.dashboards.len(),
            self.path().display()
        );
        Ok(metadata)
    }

    pub async fn load(&self) -> ExportResult<ExportedState> {
        let (snapshot, _metadata) = self.store.load().await?;
        self.serializer.deserialize(&snapshot.data)
    }
}
