//! Export orchestration.
//!
//! Runs the selection stages in dependency order and assembles the result.

use super::models::{ExportOptions, ExportReport, ExportedState};
use crate::select::{select_cards, select_collections, select_dashboards, Selection};
use crate::{Card, CardId, Collection, CollectionId, Dashboard, DashboardId};
use metabase_core::{EntitySource, ExportResult, Loggable};

/// The three read-side sources an export pulls from.
pub struct Sources<'a> {
    pub collections: &'a dyn EntitySource<Collection>,
    pub cards: &'a dyn EntitySource<Card>,
    pub dashboards: &'a dyn EntitySource<Dashboard>,
}

impl<'a> Sources<'a> {
    /// Use one value that can serve every entity kind.
    pub fn from_single<S>(source: &'a S) -> Self
    where
        S: EntitySource<Collection> + EntitySource<Card> + EntitySource<Dashboard>,
    {
        Self {
            collections: source,
            cards: source,
            dashboards: source,
        }
    }
}

/// Exports a consistent, renumbered subset of a source instance.
pub struct Exporter;

impl Exporter {
    /// Fetch everything from `sources` and export it.
    ///
    /// Collections are fetched and selected before cards, and cards before
    /// dashboards, since each stage needs the previous stage's mapping.
    pub async fn export(
        sources: &Sources<'_>,
        options: &ExportOptions,
    ) -> ExportResult<ExportReport> {
        let collections = sources.collections.fetch_all().await?;
        let collection_selection = select_collections(
            &collections,
            options.exclude_personal_collections,
            options.target_collection_id,
        )?;

        let cards = sources.cards.fetch_all().await?;
        let card_selection = select_cards(cards, &collection_selection.mapping)?;

        let dashboards = sources.dashboards.fetch_all().await?;
        let dashboard_selection = select_dashboards(
            dashboards,
            &card_selection.mapping,
            &collection_selection.mapping,
        )?;

        let report = Self::assemble(collection_selection, card_selection, dashboard_selection);
        tracing::info!(
            "Exported {} collections, {} cards, {} dashboards ({} warnings)",
            report.state.collections.len(),
            report.state.cards.len(),
            report.state.dashboards.len(),
            report.get_logs().len()
        );

        Ok(report)
    }

    /// Export an in-memory snapshot without going through a source.
    pub fn export_snapshot(
        collections: Vec<Collection>,
        cards: Vec<Card>,
        dashboards: Vec<Dashboard>,
        options: &ExportOptions,
    ) -> ExportResult<ExportReport> {
        let collection_selection = select_collections(
            &collections,
            options.exclude_personal_collections,
            options.target_collection_id,
        )?;
        let card_selection = select_cards(cards, &collection_selection.mapping)?;
        let dashboard_selection = select_dashboards(
            dashboards,
            &card_selection.mapping,
            &collection_selection.mapping,
        )?;

        Ok(Self::assemble(
            collection_selection,
            card_selection,
            dashboard_selection,
        ))
    }

    fn assemble(
        collections: Selection<Collection, CollectionId>,
        cards: Selection<Card, CardId>,
        dashboards: Selection<Dashboard, DashboardId>,
    ) -> ExportReport {
        let mut report = ExportReport::new(
            ExportedState {
                collections: collections.items,
                cards: cards.items,
                dashboards: dashboards.items,
            },
            collections.mapping,
            cards.mapping,
            dashboards.mapping,
        );
        for warning in collections
            .warnings
            .into_iter()
            .chain(cards.warnings)
            .chain(dashboards.warnings)
        {
            report.add_log(warning);
        }
        report
    }
}
