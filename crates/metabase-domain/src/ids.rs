//! Typed identifiers for every entity kind.
//!
//! Each kind gets its own newtype over the raw integer so that a card id can
//! never be looked up in a collection mapping by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Capability shared by all identifier kinds: ordered by the raw value and
/// constructible from it.
pub trait OrderedId: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    /// Human-readable kind name, used in error messages.
    const KIND: &'static str;

    fn from_raw(value: i64) -> Self;

    fn raw(self) -> i64;
}

macro_rules! ordered_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl OrderedId for $name {
            const KIND: &'static str = $kind;

            fn from_raw(value: i64) -> Self {
                Self(value)
            }

            fn raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

ordered_id!(
    /// Identifier of a collection.
    CollectionId,
    "collection"
);
ordered_id!(
    /// Identifier of a saved question.
    CardId,
    "card"
);
ordered_id!(
    /// Identifier of a dashboard.
    DashboardId,
    "dashboard"
);
ordered_id!(
    /// Identifier of a card placement, unique only within its dashboard.
    DashboardCardId,
    "dashboard card"
);
