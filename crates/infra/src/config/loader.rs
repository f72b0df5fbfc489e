//! Configuration loader
//!
//! Loads [`SuggestConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `SUGGEST_SOURCE` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SUGGEST_SOURCE`: Default source identifier (required)
//! - `SUGGEST_CACHE_ENABLED`: Reuse cached payloads (true/false)
//! - `SUGGEST_MAX_RESULTS`: Default result cap
//! - `SUGGEST_FETCH_TIMEOUT`: Fetch timeout in seconds
//! - `SUGGEST_FETCH_ATTEMPTS`: Total fetch attempts
//! - `SUGGEST_ROOT_DIR`: Base directory for relative file identifiers
//! - `SUGGEST_LOG`: Tracing filter directive
//! - `SUGGEST_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./suggest.json` or `./suggest.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use suggest_domain::constants::DEFAULT_CACHE_ENABLED;
use suggest_domain::{Result, SuggestConfig, SuggestError};

use crate::errors::InfraError;

const SOURCE_VAR: &str = "SUGGEST_SOURCE";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SuggestError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails validation
pub fn load() -> Result<SuggestConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Like [`load`], but returns the built-in defaults when neither the
/// environment nor any probed file provides a configuration.
///
/// Errors in a configuration that *is* present are still reported.
///
/// # Errors
/// Returns `SuggestError::Config` for invalid values or malformed files.
pub fn load_or_default() -> Result<SuggestConfig> {
    if std::env::var_os(SOURCE_VAR).is_some() {
        return load_from_env();
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(SuggestConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `SUGGEST_SOURCE` must be present; every other variable overrides the
/// corresponding default when set.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `SuggestError::Config` if `SUGGEST_SOURCE` is missing or a value
/// is invalid.
pub fn load_from_env() -> Result<SuggestConfig> {
    let mut config = SuggestConfig::default();

    config.source.identifier = env_var(SOURCE_VAR)?;
    config.source.cache_enabled = env_bool("SUGGEST_CACHE_ENABLED", DEFAULT_CACHE_ENABLED);
    if let Some(max) = env_parse("SUGGEST_MAX_RESULTS")? {
        config.source.default_max_results = max;
    }

    if let Some(timeout) = env_parse("SUGGEST_FETCH_TIMEOUT")? {
        config.fetch.timeout_seconds = timeout;
    }
    if let Some(attempts) = env_parse("SUGGEST_FETCH_ATTEMPTS")? {
        config.fetch.max_attempts = attempts;
    }
    config.fetch.root_dir = std::env::var_os("SUGGEST_ROOT_DIR").map(PathBuf::from);

    if let Ok(filter) = std::env::var("SUGGEST_LOG") {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool("SUGGEST_LOG_JSON", false);

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SuggestError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<SuggestConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SuggestError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SuggestError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SuggestError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); files without
/// an extension are read as JSON.
///
/// # Errors
/// Returns `SuggestError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<SuggestConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => Ok(serde_json::from_str(contents).map_err(InfraError::from)?),
        _ => Err(SuggestError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./suggest.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("suggest.json"),
        dir.join("suggest.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `SuggestError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SuggestError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `SuggestError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| SuggestError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
