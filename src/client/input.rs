use crate::core::error::{InvokeError, ParseSource};
use crate::core::logger::Logger;
use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt;

/// Reads stdin until end-of-stream. Invalid UTF-8 is replaced, not rejected.
pub async fn read_stdin() -> Result<String, InvokeError> {
    let mut buffer = Vec::new();
    tokio::io::stdin().read_to_end(&mut buffer).await?;
    Logger::debug(&format!("Read {} bytes from stdin", buffer.len()));
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn parse_input<T: DeserializeOwned>(text: &str) -> Result<T, InvokeError> {
    crate::core::json::parse(text, ParseSource::Input)
}
