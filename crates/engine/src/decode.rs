use serde::de::DeserializeOwned;
use shared_types::AppError;

/// Deserialize a stored JSON payload into its domain type.
///
/// Pure transform, no merge logic. A malformed payload is upstream data
/// corruption: the error is surfaced to the caller, never retried, and
/// the fragment must be corrected at the source.
pub fn decode_fragment<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::decode(format!("malformed stored payload: {e}")))
}
