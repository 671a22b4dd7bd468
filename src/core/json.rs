use serde::de::DeserializeOwned;

use crate::core::error::{InvokeError, ParseSource};

pub const CONTENT_TYPE: &str = "application/json";

/// Parses `content` as JSON, tagging failures with where the text came from.
pub fn parse<T: DeserializeOwned>(content: &str, source: ParseSource) -> Result<T, InvokeError> {
    serde_json::from_str(content).map_err(|e| InvokeError::parse(source, e))
}
