use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{CardId, CollectionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeQuery {
    pub query: String,
    #[serde(
        rename = "template-tags",
        default,
        skip_serializing_if = "Value::is_null"
    )]
    pub template_tags: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetQuery {
    #[serde(default)]
    pub database: Option<i64>,
    #[serde(rename = "type", default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub native: Option<NativeQuery>,
    /// Structured (non-SQL) query definition, carried through untouched.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub query: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub collection_id: Option<CollectionId>,
    #[serde(default)]
    pub dataset_query: DatasetQuery,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub visualization_settings: Value,
}

impl Card {
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            archived: false,
            collection_id: None,
            dataset_query: DatasetQuery::default(),
            display: None,
            visualization_settings: Value::Null,
        }
    }

    pub fn with_collection(mut self, collection_id: CollectionId) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    pub fn with_native_query(mut self, sql: impl Into<String>) -> Self {
        self.dataset_query.query_type = Some("native".to_string());
        self.dataset_query.native = Some(NativeQuery {
            query: sql.into(),
            template_tags: Value::Null,
        });
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Cards without a native definition may not survive export/import intact.
    pub fn is_native(&self) -> bool {
        self.dataset_query.native.is_some()
    }

    pub fn normalize_description(&mut self) {
        if self.description.as_deref().is_some_and(str::is_empty) {
            self.description = None;
        }
    }
}
