//! A source instance captured to a JSON file.
//!
//! Lets an export run offline against data fetched earlier, and gives tests a
//! concrete `EntitySource`.

use crate::serialization::JsonSerializer;
use crate::store::json_file_store::JsonFileStore;
use crate::traits::{PersistenceStore, Serializer};
use async_trait::async_trait;
use metabase_core::{EntitySource, ExportResult};
use metabase_domain::{Card, Collection, Dashboard};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything read from a source instance, with dashboards fully hydrated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSnapshot {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub dashboards: Vec<Dashboard>,
}

/// Serves a `SourceSnapshot` through `EntitySource`.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: SourceSnapshot,
}

impl SnapshotSource {
    pub fn new(snapshot: SourceSnapshot) -> Self {
        Self { snapshot }
    }

    /// Read a snapshot file, either bare or wrapped in a store envelope.
    pub async fn open(path: impl AsRef<Path>) -> ExportResult<Self> {
        let store = JsonFileStore::new(path);
        let (raw, _metadata) = store.load().await?;
        let snapshot: SourceSnapshot = JsonSerializer.deserialize(&raw.data)?;

        tracing::info!(
            "Opened source snapshot {}: {} collections, {} cards, {} dashboards",
            store.path().display(),
            snapshot.collections.len(),
            snapshot.cards.len(),
            snapshot.dashboards.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &SourceSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl EntitySource<Collection> for SnapshotSource {
    async fn fetch_all(&self) -> ExportResult<Vec<Collection>> {
        Ok(self.snapshot.collections.clone())
    }
}

#[async_trait]
impl EntitySource<Card> for SnapshotSource {
    async fn fetch_all(&self) -> ExportResult<Vec<Card>> {
        Ok(self.snapshot.cards.clone())
    }
}

#[async_trait]
impl EntitySource<Dashboard> for SnapshotSource {
    async fn fetch_all(&self) -> ExportResult<Vec<Dashboard>> {
        Ok(self.snapshot.dashboards.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StateStore;
    use metabase_core::ExportError;
    use metabase_domain::{CardId, CollectionId, DashboardId, ExportOptions, Exporter, Sources};
    use tempfile::tempdir;

    const SOURCE_JSON: &str = r#"{
        "collections": [
            { "id": 4, "name": "Personal", "personal_owner_id": 1, "location": "/" },
            { "id": 6, "name": "Scratch", "location": "/4/" },
            { "id": 9, "name": "Finance", "location": "/" }
        ],
        "cards": [
            {
                "id": 15,
                "name": "Revenue",
                "description": "",
                "collection_id": 9,
                "dataset_query": { "database": 1, "type": "native", "native": { "query": "select 1" } }
            },
            {
                "id": 16,
                "name": "Drafts",
                "collection_id": 6,
                "dataset_query": { "database": 1, "type": "native", "native": { "query": "select 2" } }
            }
        ],
        "dashboards": [
            {
                "id": 30,
                "name": "Finance overview",
                "collection_id": 9,
                "ordered_cards": [
                    { "id": 300, "card_id": 15, "parameter_mappings": [], "series": [] }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_open_bare_snapshot_and_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.json");
        std::fs::write(&path, SOURCE_JSON).unwrap();

        let source = SnapshotSource::open(&path).await.unwrap();
        assert_eq!(source.snapshot().collections.len(), 3);

        let report = Exporter::export(
            &Sources::from_single(&source),
            &ExportOptions::new().excluding_personal(),
        )
        .await
        .unwrap();

        let state = report.into_state();
        assert_eq!(state.collections.len(), 1);
        assert_eq!(state.collections[0].id, CollectionId(1));
        assert_eq!(state.cards.len(), 1);
        assert_eq!(state.cards[0].id, CardId(1));
        assert_eq!(state.cards[0].description, None);
        assert_eq!(state.dashboards[0].id, DashboardId(1));
        assert_eq!(state.dashboards[0].cards[0].card_id, Some(CardId(1)));
    }

    #[tokio::test]
    async fn test_export_then_persist_is_reproducible() {
        let dir = tempdir().unwrap();
        let source: SourceSnapshot = serde_json::from_str(SOURCE_JSON).unwrap();
        let source = SnapshotSource::new(source);

        let first = StateStore::new(dir.path().join("first.json"));
        let second = StateStore::new(dir.path().join("second.json"));
        for store in [&first, &second] {
            let report = Exporter::export(&Sources::from_single(&source), &ExportOptions::new())
                .await
                .unwrap();
            store.save(&report.state).await.unwrap();
        }

        assert_eq!(first.load().await.unwrap(), second.load().await.unwrap());
    }

    #[tokio::test]
    async fn test_open_rejects_malformed_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.json");
        std::fs::write(&path, r#"{ "cards": [ { "id": "not-a-number" } ] }"#).unwrap();

        let result = SnapshotSource::open(&path).await;
        assert!(matches!(result, Err(ExportError::Serialization(_))));
    }
}
