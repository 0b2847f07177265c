use metabase_core::ExportResult;

use super::Selection;
use crate::renumber::{renumber, IdMapping};
use crate::{Card, CardId, CollectionId};

/// Pick the cards to export, renumber them and point them at renumbered collections.
///
/// A card is kept when it is not archived and either lives in the root
/// collection or in a collection present in `collection_mapping`.
pub fn select_cards(
    all: Vec<Card>,
    collection_mapping: &IdMapping<CollectionId>,
) -> ExportResult<Selection<Card, CardId>> {
    let total = all.len();
    let mut selected: Vec<Card> = all
        .into_iter()
        .filter(|card| !card.archived)
        .filter(|card| {
            card.collection_id
                .map_or(true, |id| collection_mapping.contains(id))
        })
        .collect();
    selected.sort_by_key(|card| card.id);

    let mapping = renumber(selected.iter().map(|card| card.id));
    let mut warnings = Vec::new();

    for card in &mut selected {
        let old_id = card.id;
        card.id = mapping.resolve(old_id, || "card not found in card mapping".to_string())?;
        tracing::info!("Mapping card {} to {} ({})", old_id, card.id, card.name);

        if let Some(collection_id) = card.collection_id {
            card.collection_id = Some(collection_mapping.resolve(collection_id, || {
                format!("collection not found in collection mapping for card {old_id}")
            })?);
        }

        if !card.is_native() {
            let warning = format!(
                "card {} has a non-SQL definition. Its state might not be exported/imported correctly. ({})",
                old_id, card.name
            );
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }

        card.normalize_description();
    }

    tracing::info!("Selected {} of {} cards", selected.len(), total);

    let mut selection = Selection::new(selected, mapping);
    selection.warnings = warnings;
    Ok(selection)
}
