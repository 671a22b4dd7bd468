mod credentials;
mod env_file;

pub use credentials::{Credentials, API_KEY, API_TOKEN, FACEBOOK_ACCESS_TOKEN};
pub use env_file::default_env_file;

use crate::core::logger::Logger;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "X-API-Key";

pub type Headers = Vec<(String, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Bearer,
    Facebook,
    ApiKey,
    Custom,
    None,
}

impl AuthType {
    /// Unknown or absent names select no injection at all.
    pub fn from_name(name: Option<&str>) -> AuthType {
        match name {
            Some("bearer") => AuthType::Bearer,
            Some("facebook") => AuthType::Facebook,
            Some("api_key") => AuthType::ApiKey,
            Some("custom") => AuthType::Custom,
            _ => AuthType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Bearer => "bearer",
            AuthType::Facebook => "facebook",
            AuthType::ApiKey => "api_key",
            AuthType::Custom => "custom",
            AuthType::None => "none",
        }
    }

    fn credential_key(&self) -> Option<&'static str> {
        match self {
            AuthType::Bearer => Some(API_TOKEN),
            AuthType::Facebook => Some(FACEBOOK_ACCESS_TOKEN),
            AuthType::ApiKey => Some(API_KEY),
            AuthType::Custom | AuthType::None => None,
        }
    }

    /// Headers this auth type contributes to the outgoing request.
    ///
    /// A missing credential yields no header; the request then goes out
    /// unauthenticated.
    pub fn headers(
        &self,
        credentials: &Credentials,
        custom_headers: &HashMap<String, String>,
    ) -> Headers {
        if let Some(key) = self.credential_key() {
            let Some(secret) = credentials.get(key) else {
                Logger::debug(&format!(
                    "Warning: {key} not found, sending request without '{}' auth",
                    self.as_str()
                ));
                return Vec::new();
            };
            return match self {
                AuthType::ApiKey => vec![(API_KEY_HEADER.to_string(), secret.to_string())],
                _ => vec![bearer_header(secret)],
            };
        }

        match self {
            AuthType::Custom => {
                let mut headers: Headers = custom_headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                headers.sort();
                headers
            }
            _ => Vec::new(),
        }
    }
}

fn bearer_header(token: &str) -> (String, String) {
    (
        reqwest::header::AUTHORIZATION.as_str().to_string(),
        format!("Bearer {token}"),
    )
}

/// Applies `overrides` on top of `base`; header names compare case-insensitively.
pub fn merge_headers(base: Headers, overrides: Headers) -> Headers {
    let mut merged = base;
    for (key, value) in overrides {
        if let Some(i) = merged
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(&key))
        {
            merged[i] = (key, value);
        } else {
            merged.push((key, value));
        }
    }
    merged
}
