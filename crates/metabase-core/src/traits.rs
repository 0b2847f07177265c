use crate::ExportResult;
use async_trait::async_trait;

/// Read side of a source instance: yields every entity of one kind.
///
/// Implementations return fully hydrated entities; any secondary fetch needed
/// to obtain full detail happens behind this call.
#[async_trait]
pub trait EntitySource<T>: Send + Sync {
    async fn fetch_all(&self) -> ExportResult<Vec<T>>;
}
