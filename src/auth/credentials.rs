use crate::auth::env_file;
use crate::core::error::InvokeError;
use std::collections::HashMap;
use std::path::Path;

pub const API_TOKEN: &str = "API_TOKEN";
pub const FACEBOOK_ACCESS_TOKEN: &str = "FACEBOOK_ACCESS_TOKEN";
pub const API_KEY: &str = "API_KEY";

/// Secrets available to header injection, resolved once at startup.
///
/// The process environment takes precedence over the `.env` file, and the
/// process environment itself is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    values: HashMap<String, String>,
}

impl Credentials {
    pub fn load(env_file: Option<&Path>) -> Result<Self, InvokeError> {
        let file_entries = match env_file {
            Some(path) => env_file::load_env_file(path)?,
            None => Vec::new(),
        };
        let process_env = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        Ok(Self::from_sources(file_entries, process_env))
    }

    pub fn from_sources<F, P>(file_entries: F, process_env: P) -> Self
    where
        F: IntoIterator<Item = (String, String)>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, String> = file_entries.into_iter().collect();
        values.extend(process_env);
        Self { values }
    }

    /// Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
