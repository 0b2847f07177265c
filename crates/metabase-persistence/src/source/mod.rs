pub mod snapshot_source;

pub use snapshot_source::{SnapshotSource, SourceSnapshot};
