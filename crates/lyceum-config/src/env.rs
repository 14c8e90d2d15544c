//! Helpers for reading typed values from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::warn;

/// Read `key`, falling back to `default` when unset or blank.
pub fn string_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read `key` if set and non-blank.
pub fn optional_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse `key`, falling back to `default` when unset or invalid.
pub fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match optional_string(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default");
            default
        }),
        None => default,
    }
}
