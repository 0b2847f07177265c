use metabase_core::ExportResult;

use super::Selection;
use crate::filter::{
    ActiveFilter, CollectionFilter, CompositeFilter, NonPersonalFilter, SubtreeFilter,
};
use crate::renumber::renumber;
use crate::{Collection, CollectionId};

/// Pick the collections to export and renumber them from 1.
///
/// Archived collections are always dropped. Personal detection resolves root
/// ancestors against the whole of `all`, archived entries included.
pub fn select_collections(
    all: &[Collection],
    exclude_personal: bool,
    target: Option<CollectionId>,
) -> ExportResult<Selection<Collection, CollectionId>> {
    let mut filter = CompositeFilter::new().with_filter(Box::new(ActiveFilter));
    if exclude_personal {
        filter = filter.with_filter(Box::new(NonPersonalFilter::new(all)));
    }
    if let Some(target) = target {
        filter = filter.with_filter(Box::new(SubtreeFilter::new(target)));
    }

    let mut selected = Vec::new();
    for collection in all {
        if filter.matches(collection)? {
            selected.push(collection.clone());
        }
    }
    selected.sort_by_key(|c| c.id);

    let mapping = renumber(selected.iter().map(|c| c.id));
    for collection in &mut selected {
        let old_id = collection.id;
        collection.id = mapping.resolve(old_id, || {
            "collection not found in collection mapping".to_string()
        })?;
        tracing::debug!(
            "Mapping collection {} to {} ({})",
            old_id,
            collection.id,
            collection.name
        );
    }

    tracing::info!("Selected {} of {} collections", selected.len(), all.len());

    Ok(Selection::new(selected, mapping))
}
