use crate::traits::Serializer;
use metabase_core::{ExportError, ExportResult};

/// JSON serializer for domain models
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> ExportResult<Vec<u8>> {
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        Ok(json)
    }

    fn deserialize(&self, bytes: &[u8]) -> ExportResult<T> {
        let data = serde_json::from_slice(bytes)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        Ok(data)
    }
}
