use crate::grammar::{GrammarNameViolation, Platform};
use std::env;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "WINPATH_CONFIG";
pub const PLATFORM_ENV: &str = "WINPATH_PLATFORM";
pub const JSON_ENV: &str = "WINPATH_JSON";

pub fn env_flag_enabled(name: &str) -> bool {
    let Ok(value) = env::var(name) else {
        return false;
    };
    let normalized = value.trim().to_ascii_lowercase();
    matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
}

pub fn env_path_override(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Unset and blank values mean "no override"; anything else must name a grammar.
pub fn env_platform_override(name: &str) -> Result<Option<Platform>, GrammarNameViolation> {
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}
