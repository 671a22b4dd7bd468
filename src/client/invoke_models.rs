use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Payload accepted by the `basic` and `raw` commands; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

/// Payload accepted by the `auth` command.
#[derive(Debug, Default, Deserialize)]
pub struct RequestSpec {
    pub url: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub custom_headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct InvokeConfig {
    pub timeout: Option<Duration>,
}
