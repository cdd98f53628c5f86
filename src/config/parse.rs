//! Environment variable parsing utilities.

use super::ConfigError;

/// Get environment variable with default value.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get optional environment variable (None if empty or missing).
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Parse byte size string (e.g., "1048576", "512MiB", "2GiB").
/// Returns `i64::MAX` for "off".
pub fn parse_byte_size(s: &str) -> Result<i64, String> {
    let s = s.trim().to_lowercase();

    if s == "off" {
        return Ok(i64::MAX);
    }

    // Split into number and unit
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (num_str, unit) = s.split_at(split);

    if num_str.is_empty() {
        return Err(format!("invalid byte size: {}", s));
    }

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    let multiplier: u64 = match unit {
        "" | "b" => 1,
        "kib" => 1 << 10,
        "mib" => 1 << 20,
        "gib" => 1 << 30,
        "tib" => 1 << 40,
        _ => return Err(format!("invalid unit: {}", unit)),
    };

    num.checked_mul(multiplier)
        .and_then(|bytes| i64::try_from(bytes).ok())
        .ok_or_else(|| format!("byte size out of range: {}", s))
}

/// Parse optional environment variable as byte size.
pub fn env_byte_size(key: &str) -> Result<Option<i64>, ConfigError> {
    match env_opt(key) {
        Some(value) => parse_byte_size(&value)
            .map(Some)
            .map_err(|e| ConfigError::Parse {
                key: key.into(),
                value,
                error: e,
            }),
        None => Ok(None),
    }
}
