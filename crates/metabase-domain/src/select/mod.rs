//! Selection and renumbering of each entity kind.
//!
//! Stages must run in dependency order: collections, then cards (which point
//! at collections), then dashboards (which point at cards).

pub mod cards;
pub mod collections;
pub mod dashboards;

pub use cards::select_cards;
pub use collections::select_collections;
pub use dashboards::select_dashboards;

use crate::ids::OrderedId;
use crate::renumber::IdMapping;

/// Surviving entities of one kind, already rewritten, plus the mapping used.
#[derive(Debug, Clone)]
pub struct Selection<E, T: OrderedId> {
    /// Ordered by new id.
    pub items: Vec<E>,
    pub mapping: IdMapping<T>,
    /// Non-fatal diagnostics raised while rewriting.
    pub warnings: Vec<String>,
}

impl<E, T: OrderedId> Selection<E, T> {
    pub fn new(items: Vec<E>, mapping: IdMapping<T>) -> Self {
        Self {
            items,
            mapping,
            warnings: Vec::new(),
        }
    }
}
