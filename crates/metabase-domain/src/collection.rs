use metabase_core::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};

use crate::ids::CollectionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    /// Set only on a user's private root collection.
    #[serde(default)]
    pub personal_owner_id: Option<i64>,
    /// Ancestor path from the root to the parent, e.g. `/1/4/`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Collection {
    pub fn new(id: CollectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            archived: false,
            personal_owner_id: None,
            location: None,
            color: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_personal_owner(mut self, owner_id: i64) -> Self {
        self.personal_owner_id = Some(owner_id);
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// The first segment of `location`, or `None` for a root-level collection.
    ///
    /// A segment that is not an integer means the hierarchy data is corrupt.
    pub fn root_ancestor(&self) -> ExportResult<Option<CollectionId>> {
        let Some(location) = self.location.as_deref() else {
            return Ok(None);
        };

        let segment = location.split('/').nth(1).unwrap_or_default();
        if segment.is_empty() {
            return Ok(None);
        }

        segment
            .parse::<i64>()
            .map(|raw| Some(CollectionId(raw)))
            .map_err(|e| ExportError::HierarchyResolution {
                collection: self.id.0,
                location: location.to_string(),
                reason: e.to_string(),
            })
    }

    /// Personal either directly or through its root ancestor in `all`.
    ///
    /// A root ancestor missing from `all` counts as not personal.
    pub fn is_personal(&self, all: &[Collection]) -> ExportResult<bool> {
        if self.personal_owner_id.is_some() {
            return Ok(true);
        }

        let Some(root_id) = self.root_ancestor()? else {
            return Ok(false);
        };

        match all.iter().find(|c| c.id == root_id) {
            Some(root) => Ok(root.personal_owner_id.is_some()),
            None => {
                tracing::debug!(
                    "Collection {} has unknown root ancestor {}; treating as not personal",
                    self.id,
                    root_id
                );
                Ok(false)
            }
        }
    }

    /// True when this collection is `target` or sits under it as root ancestor.
    pub fn is_in_subtree_of(&self, target: CollectionId) -> ExportResult<bool> {
        if self.id == target {
            return Ok(true);
        }
        Ok(self.root_ancestor()? == Some(target))
    }
}
