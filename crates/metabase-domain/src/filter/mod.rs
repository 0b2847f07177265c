//! Collection filtering functionality.
//!
//! Provides traits and implementations for choosing which collections are exported.

pub mod collection_filter;

pub use collection_filter::{
    ActiveFilter, CollectionFilter, CompositeFilter, NonPersonalFilter, SubtreeFilter,
};
