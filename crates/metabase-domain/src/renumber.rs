//! Dense renumbering of identifier sets.

use crate::ids::OrderedId;
use metabase_core::{ExportError, ExportResult};
use std::collections::BTreeMap;

/// Total, injective mapping from original identifiers to `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMapping<T: OrderedId> {
    entries: BTreeMap<T, T>,
}

impl<T: OrderedId> IdMapping<T> {
    pub fn get(&self, original: T) -> Option<T> {
        self.entries.get(&original).copied()
    }

    pub fn contains(&self, original: T) -> bool {
        self.entries.contains_key(&original)
    }

    /// Look up `original`, failing with a lookup error that carries `context`.
    ///
    /// The context closure only runs on a miss.
    pub fn resolve<F>(&self, original: T, context: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.get(original)
            .ok_or_else(|| ExportError::mapping_lookup(T::KIND, original.raw(), context()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs of `(original, renumbered)`, ascending by original id.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.entries.iter().map(|(old, new)| (*old, *new))
    }
}

impl<T: OrderedId> Default for IdMapping<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

/// Assign `1..=N` to the distinct ids in ascending order of their raw value.
pub fn renumber<T, I>(ids: I) -> IdMapping<T>
where
    T: OrderedId,
    I: IntoIterator<Item = T>,
{
    let mut sorted: Vec<T> = ids.into_iter().collect();
    sorted.sort();
    sorted.dedup();

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(index, original)| (original, T::from_raw(index as i64 + 1)))
        .collect();

    IdMapping { entries }
}
