//! Collection filtering implementations.
//!
//! Provides the CollectionFilter trait and the filters used to pick which
//! collections take part in an export.

use crate::{Collection, CollectionId};
use metabase_core::ExportResult;

/// Trait for filtering collections.
///
/// Matching is fallible because hierarchy checks parse the collection's
/// location path.
pub trait CollectionFilter {
    /// Returns true if the collection should be kept.
    fn matches(&self, collection: &Collection) -> ExportResult<bool>;
}

/// Keeps collections that are not archived.
pub struct ActiveFilter;

impl CollectionFilter for ActiveFilter {
    fn matches(&self, collection: &Collection) -> ExportResult<bool> {
        Ok(!collection.archived)
    }
}

/// Drops personal collections and anything rooted in one.
///
/// Root ancestors are looked up in the full, unfiltered collection set.
pub struct NonPersonalFilter<'a> {
    all: &'a [Collection],
}

impl<'a> NonPersonalFilter<'a> {
    pub fn new(all: &'a [Collection]) -> Self {
        Self { all }
    }
}

impl CollectionFilter for NonPersonalFilter<'_> {
    fn matches(&self, collection: &Collection) -> ExportResult<bool> {
        Ok(!collection.is_personal(self.all)?)
    }
}

/// Keeps the target collection and collections whose root ancestor is the target.
pub struct SubtreeFilter {
    target: CollectionId,
}

impl SubtreeFilter {
    pub fn new(target: CollectionId) -> Self {
        Self { target }
    }
}

impl CollectionFilter for SubtreeFilter {
    fn matches(&self, collection: &Collection) -> ExportResult<bool> {
        collection.is_in_subtree_of(self.target)
    }
}

/// Combine multiple filters with AND logic.
///
/// Filters run in insertion order and stop at the first rejection.
pub struct CompositeFilter<'a> {
    filters: Vec<Box<dyn CollectionFilter + 'a>>,
}

impl<'a> CompositeFilter<'a> {
    /// Create an empty composite filter (matches all collections).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn CollectionFilter + 'a>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionFilter for CompositeFilter<'_> {
    fn matches(&self, collection: &Collection) -> ExportResult<bool> {
        for filter in &self.filters {
            if !filter.matches(collection)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
