use crate::core::error::InvokeError;
use crate::core::logger::Logger;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_FILE_NAME: &str = ".env";

/// Default `.env` location: next to the running executable.
pub fn default_env_file() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(ENV_FILE_NAME))
}

/// Reads `KEY=VALUE` pairs from `env_file`. A missing file yields no entries.
pub fn load_env_file(env_file: &Path) -> Result<Vec<(String, String)>, InvokeError> {
    if !env_file.exists() {
        Logger::debug(&format!(
            "{} not found, using process environment only",
            env_file.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(env_file).map_err(|e| {
        InvokeError::Config(format!("failed to read {}: {e}", env_file.display()))
    })?;
    let entries = parse_env_file(&content);
    Logger::debug(&format!(
        "Loaded {} entries from {}",
        entries.len(),
        env_file.display()
    ));
    Ok(entries)
}

pub fn parse_env_file(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key_raw, value_raw)) = trimmed.split_once('=') {
            let key = key_raw.trim();
            if key.is_empty() {
                continue;
            }
            let value = strip_quotes(value_raw.trim());
            entries.push((key.to_string(), value.to_string()));
        }
    }

    entries
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
