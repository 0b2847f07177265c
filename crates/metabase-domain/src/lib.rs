pub mod card;
pub mod collection;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod ids;
pub mod renumber;
pub mod select;

pub use card::{Card, DatasetQuery, NativeQuery};
pub use collection::Collection;
pub use dashboard::{Dashboard, DashboardCard, ParameterMapping, SeriesCard};
pub use export::{ExportOptions, ExportReport, ExportedState, Exporter, Sources};
pub use filter::CollectionFilter;
pub use ids::{CardId, CollectionId, DashboardCardId, DashboardId, OrderedId};
pub use renumber::{renumber, IdMapping};
pub use select::Selection;
