use metabase_core::ExportResult;

use super::Selection;
use crate::renumber::{renumber, IdMapping};
use crate::{CardId, CollectionId, Dashboard, DashboardId};

/// Pick the dashboards to export and rewrite every card reference they hold.
///
/// Only dashboards filed in an exported collection survive. `card_mapping`
/// must be the mapping produced by the card stage of the same run.
pub fn select_dashboards(
    all: Vec<Dashboard>,
    card_mapping: &IdMapping<CardId>,
    collection_mapping: &IdMapping<CollectionId>,
) -> ExportResult<Selection<Dashboard, DashboardId>> {
    let total = all.len();
    let mut selected: Vec<Dashboard> = all
        .into_iter()
        .filter(|dashboard| !dashboard.archived)
        .filter(|dashboard| {
            dashboard
                .collection_id
                .is_some_and(|id| collection_mapping.contains(id))
        })
        .collect();
    selected.sort_by_key(|dashboard| dashboard.id);

    let mapping = renumber(selected.iter().map(|dashboard| dashboard.id));
    for dashboard in &mut selected {
        rewrite_dashboard(dashboard, &mapping, card_mapping, collection_mapping)?;
    }

    tracing::info!("Selected {} of {} dashboards", selected.len(), total);

    Ok(Selection::new(selected, mapping))
}

fn rewrite_dashboard(
    dashboard: &mut Dashboard,
    mapping: &IdMapping<DashboardId>,
    card_mapping: &IdMapping<CardId>,
    collection_mapping: &IdMapping<CollectionId>,
) -> ExportResult<()> {
    let old_id = dashboard.id;
    dashboard.id = mapping.resolve(old_id, || "dashboard not found in mapping".to_string())?;

    if let Some(collection_id) = dashboard.collection_id {
        dashboard.collection_id = Some(collection_mapping.resolve(collection_id, || {
            format!("collection not found in collection mapping for dashboard {old_id}")
        })?);
    }

    // Placement ids are only unique within one dashboard.
    dashboard.cards.sort_by_key(|dc| dc.id);
    let placement_mapping = renumber(dashboard.cards.iter().map(|dc| dc.id));

    for dc in &mut dashboard.cards {
        dc.id = placement_mapping.resolve(dc.id, || {
            format!("dashboard card not found in mapping for dashboard {old_id}")
        })?;

        if let Some(card_id) = dc.card_id {
            dc.card_id = Some(card_mapping.resolve(card_id, || {
                format!("card not found in dashboard card mapping for dashboard {old_id}")
            })?);
        }

        for parameter in &mut dc.parameter_mappings {
            parameter.card_id = card_mapping.resolve(parameter.card_id, || {
                format!(
                    "card not found in card mapping for parameter {}, dashboard {}",
                    parameter.parameter_id, old_id
                )
            })?;
        }

        for series in &mut dc.series {
            series.card_id = card_mapping.resolve(series.card_id, || {
                format!(
                    "card not found in card mapping for series {}, dashboard {}",
                    series.name, old_id
                )
            })?;
        }
    }

    tracing::debug!(
        "Mapping dashboard {} to {} ({}, {} cards)",
        old_id,
        dashboard.id,
        dashboard.name,
        dashboard.cards.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DashboardCard, DashboardCardId};
    use metabase_core::ExportError;

    fn cards(ids: &[i64]) -> IdMapping<CardId> {
        renumber(ids.iter().map(|id| CardId(*id)))
    }

    fn collections(ids: &[i64]) -> IdMapping<CollectionId> {
        renumber(ids.iter().map(|id| CollectionId(*id)))
    }

    #[test]
    fn test_requires_exported_collection() {
        let all = vec![
            Dashboard::new(DashboardId(1), "Root level"),
            Dashboard::new(DashboardId(2), "Kept").with_collection(CollectionId(5)),
            Dashboard::new(DashboardId(3), "Dropped collection").with_collection(CollectionId(6)),
            Dashboard::new(DashboardId(4), "Archived")
                .with_collection(CollectionId(5))
                .archived(),
        ];

        let selection = select_dashboards(all, &cards(&[]), &collections(&[5])).unwrap();

        assert_eq!(selection.items.len(), 1);
        assert_eq!(selection.items[0].name, "Kept");
        assert_eq!(selection.items[0].id, DashboardId(1));
        assert_eq!(selection.items[0].collection_id, Some(CollectionId(1)));
    }

    #[test]
    fn test_rewrites_every_card_reference() {
        let all = vec![Dashboard::new(DashboardId(8), "Sales")
            .with_collection(CollectionId(2))
            .with_card(
                DashboardCard::new(DashboardCardId(50), Some(CardId(7)))
                    .with_parameter("date", CardId(7))
                    .with_series("Returns", CardId(9)),
            )
            .with_card(DashboardCard::new(DashboardCardId(12), None))];

        let selection =
            select_dashboards(all, &cards(&[1, 4, 7, 9]), &collections(&[2])).unwrap();
        let dashboard = &selection.items[0];

        assert_eq!(dashboard.id, DashboardId(1));
        assert_eq!(dashboard.cards[0].id, DashboardCardId(1));
        assert_eq!(dashboard.cards[0].card_id, None);
        assert_eq!(dashboard.cards[1].id, DashboardCardId(2));
        assert_eq!(dashboard.cards[1].card_id, Some(CardId(3)));
        assert_eq!(dashboard.cards[1].parameter_mappings[0].card_id, CardId(3));
        assert_eq!(dashboard.cards[1].series[0].card_id, CardId(4));
    }

    #[test]
    fn test_placement_ids_renumbered_per_dashboard() {
        let all = vec![
            Dashboard::new(DashboardId(1), "A")
                .with_collection(CollectionId(1))
                .with_card(DashboardCard::new(DashboardCardId(100), None))
                .with_card(DashboardCard::new(DashboardCardId(101), None)),
            Dashboard::new(DashboardId(2), "B")
                .with_collection(CollectionId(1))
                .with_card(DashboardCard::new(DashboardCardId(102), None)),
        ];

        let selection = select_dashboards(all, &cards(&[]), &collections(&[1])).unwrap();

        let first: Vec<i64> = selection.items[0].cards.iter().map(|dc| dc.id.0).collect();
        let second: Vec<i64> = selection.items[1].cards.iter().map(|dc| dc.id.0).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![1]);
    }

    #[test]
    fn test_missing_card_is_lookup_error() {
        let all = vec![Dashboard::new(DashboardId(3), "Broken")
            .with_collection(CollectionId(1))
            .with_card(DashboardCard::new(DashboardCardId(1), Some(CardId(7))))];

        let err = select_dashboards(all, &cards(&[1]), &collections(&[1])).unwrap_err();

        match err {
            ExportError::MappingLookup { kind, id, context } => {
                assert_eq!(kind, "card");
                assert_eq!(id, 7);
                assert_eq!(
                    context,
                    "card not found in dashboard card mapping for dashboard 3"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_parameter_card_names_parameter() {
        let all = vec![Dashboard::new(DashboardId(3), "Filters")
            .with_collection(CollectionId(1))
            .with_card(
                DashboardCard::new(DashboardCardId(1), Some(CardId(1)))
                    .with_parameter("region", CardId(2)),
            )];

        let err = select_dashboards(all, &cards(&[1]), &collections(&[1])).unwrap_err();
        assert!(err.to_string().contains("parameter region, dashboard 3"));
    }

    #[test]
    fn test_missing_series_card_names_series() {
        let all = vec![Dashboard::new(DashboardId(4), "Overlay")
            .with_collection(CollectionId(1))
            .with_card(
                DashboardCard::new(DashboardCardId(1), Some(CardId(1)))
                    .with_series("Forecast", CardId(5)),
            )];

        let err = select_dashboards(all, &cards(&[1]), &collections(&[1])).unwrap_err();
        assert!(err.to_string().contains("series Forecast, dashboard 4"));
    }
}
