//! Export data models.
//!
//! These types carry the result of an export run to whatever persists or
//! replays it.

use crate::renumber::IdMapping;
use crate::{Card, CardId, Collection, CollectionId, Dashboard, DashboardId};
use metabase_core::{ExportConfig, LogEntry, Loggable};
use serde::{Deserialize, Serialize};

/// The renumbered, self-contained graph ready for import elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportedState {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub dashboards: Vec<Dashboard>,
}

impl ExportedState {
    /// Create an empty export.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.cards.is_empty() && self.dashboards.is_empty()
    }
}

/// Knobs that decide which part of the source graph is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub exclude_personal_collections: bool,
    pub target_collection_id: Option<CollectionId>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding_personal(mut self) -> Self {
        self.exclude_personal_collections = true;
        self
    }

    pub fn with_target(mut self, target: CollectionId) -> Self {
        self.target_collection_id = Some(target);
        self
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            exclude_personal_collections: config.exclude_personal_collections,
            target_collection_id: config.target_collection_id.map(CollectionId),
        }
    }
}

/// Outcome of a successful export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub state: ExportedState,
    pub collection_mapping: IdMapping<CollectionId>,
    pub card_mapping: IdMapping<CardId>,
    pub dashboard_mapping: IdMapping<DashboardId>,
    logs: Vec<LogEntry>,
}

impl ExportReport {
    pub fn new(
        state: ExportedState,
        collection_mapping: IdMapping<CollectionId>,
        card_mapping: IdMapping<CardId>,
        dashboard_mapping: IdMapping<DashboardId>,
    ) -> Self {
        Self {
            state,
            collection_mapping,
            card_mapping,
            dashboard_mapping,
            logs: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.logs.is_empty()
    }

    pub fn into_state(self) -> ExportedState {
        self.state
    }
}

impl Loggable for ExportReport {
    fn add_log(&mut self, message: String) {
        self.logs.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
