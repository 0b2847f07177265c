use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{CardId, CollectionId, DashboardCardId, DashboardId};

/// Wires a dashboard filter to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMapping {
    pub parameter_id: String,
    pub card_id: CardId,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub target: Value,
}

/// An extra card overlaid on a dashboard card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCard {
    #[serde(rename = "id")]
    pub card_id: CardId,
    #[serde(default)]
    pub name: String,
}

/// Placement of a card (or a text tile when `card_id` is absent) on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub id: DashboardCardId,
    #[serde(default)]
    pub card_id: Option<CardId>,
    #[serde(default)]
    pub parameter_mappings: Vec<ParameterMapping>,
    #[serde(default)]
    pub series: Vec<SeriesCard>,
    #[serde(default)]
    pub size_x: i32,
    #[serde(default)]
    pub size_y: i32,
    #[serde(default)]
    pub row: i32,
    #[serde(default)]
    pub col: i32,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub visualization_settings: Value,
}

impl DashboardCard {
    pub fn new(id: DashboardCardId, card_id: Option<CardId>) -> Self {
        Self {
            id,
            card_id,
            parameter_mappings: Vec::new(),
            series: Vec::new(),
            size_x: 4,
            size_y: 4,
            row: 0,
            col: 0,
            visualization_settings: Value::Null,
        }
    }

    pub fn with_parameter(mut self, parameter_id: impl Into<String>, card_id: CardId) -> Self {
        self.parameter_mappings.push(ParameterMapping {
            parameter_id: parameter_id.into(),
            card_id,
            target: Value::Null,
        });
        self
    }

    pub fn with_series(mut self, name: impl Into<String>, card_id: CardId) -> Self {
        self.series.push(SeriesCard {
            card_id,
            name: name.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: DashboardId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub collection_id: Option<CollectionId>,
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(default, alias = "ordered_cards", alias = "dashcards")]
    pub cards: Vec<DashboardCard>,
}

impl Dashboard {
    pub fn new(id: DashboardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            archived: false,
            collection_id: None,
            parameters: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn with_collection(mut self, collection_id: CollectionId) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    pub fn with_card(mut self, card: DashboardCard) -> Self {
        self.cards.push(card);
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Every card id this dashboard points at, across placements,
    /// parameter mappings and series.
    pub fn referenced_card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().flat_map(|dc| {
            dc.card_id
                .into_iter()
                .chain(dc.parameter_mappings.iter().map(|p| p.card_id))
                .chain(dc.series.iter().map(|s| s.card_id))
        })
    }
}
