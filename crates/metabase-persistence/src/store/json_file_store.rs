use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot, FORMAT_VERSION};
use metabase_core::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file-based persistence store
/// Implements the PersistenceStore trait for JSON file operations
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// Wrapper structure for the versioned JSON file format
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: Value,
}

impl JsonEnvelope {
    pub fn new(data: Value) -> Self {
        Self {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(FORMAT_VERSION, Uuid::new_v4()),
            data,
        }
    }

    pub fn to_json_string(&self) -> ExportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl JsonFileStore {
    /// Create a new JSON file store
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Create a new JSON file store with a specific instance ID
    /// (useful for testing)
    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    /// Get the instance ID for this store
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Split a file's JSON into envelope parts.
    ///
    /// A document without a `version` field is a bare payload written by
    /// something other than this store; it is accepted as-is.
    fn open_envelope(&self, value: Value) -> ExportResult<JsonEnvelope> {
        if value.get("version").is_none() {
            tracing::info!(
                "No envelope found in {}; reading it as a bare payload",
                self.path.display()
            );
            return Ok(JsonEnvelope {
                version: FORMAT_VERSION,
                metadata: PersistenceMetadata::new(FORMAT_VERSION, self.instance_id),
                data: value,
            });
        }

        let envelope: JsonEnvelope =
            serde_json::from_value(value).map_err(|e| ExportError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(ExportError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> ExportResult<PersistenceMetadata> {
        // Update metadata with current instance and time
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let data_value: Value = serde_json::from_slice(&snapshot.data)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: snapshot.metadata.clone(),
            data: data_value,
        };

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );

        Ok(snapshot.metadata)
    }

    async fn load(&self) -> ExportResult<(StoreSnapshot, PersistenceMetadata)> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;

        let value: Value = serde_json::from_slice(&file_bytes)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        let envelope = self.open_envelope(value)?;

        let data = serde_json::to_vec(&envelope.data)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        let snapshot = StoreSnapshot {
            data,
            metadata: envelope.metadata.clone(),
        };

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok((snapshot, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("state.json");
        let store = JsonFileStore::new(&file_path);

        let data = json!({ "collections": [], "cards": [], "dashboards": [] });
        let snapshot = StoreSnapshot {
            data: serde_json::to_vec(&data).unwrap(),
            metadata: PersistenceMetadata::new(FORMAT_VERSION, store.instance_id()),
        };

        let metadata = store.save(snapshot).await.unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert!(file_path.exists());

        let (loaded_snapshot, loaded_metadata) = store.load().await.unwrap();
        assert_eq!(loaded_metadata.instance_id, store.instance_id());

        let loaded_data: Value = serde_json::from_slice(&loaded_snapshot.data).unwrap();
        assert_eq!(loaded_data, data);
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.json");
        let store = JsonFileStore::new(&file_path);

        assert!(!store.exists().await);

        let snapshot = StoreSnapshot {
            data: serde_json::to_vec(&json!({})).unwrap(),
            metadata: PersistenceMetadata::new(FORMAT_VERSION, store.instance_id()),
        };
        store.save(snapshot).await.unwrap();

        assert!(store.exists().await);
    }

    #[tokio::test]
    async fn test_load_bare_payload() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bare.json");
        let data = json!({ "cards": [{ "id": 1, "name": "Revenue" }] });
        std::fs::write(&file_path, serde_json::to_vec(&data).unwrap()).unwrap();

        let store = JsonFileStore::new(&file_path);
        let (snapshot, _metadata) = store.load().await.unwrap();

        let loaded: Value = serde_json::from_slice(&snapshot.data).unwrap();
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("future.json");
        let mut envelope = JsonEnvelope::new(json!({}));
        envelope.version = 99;
        envelope.metadata.format_version = 99;
        std::fs::write(&file_path, envelope.to_json_string().unwrap()).unwrap();

        let store = JsonFileStore::new(&file_path);
        let result = store.load().await;
        assert!(matches!(result, Err(ExportError::Serialization(_))));
    }
}
