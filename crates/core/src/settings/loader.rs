//! Configuration loader
//!
//! Loads assertion defaults from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CHRONASSERT_DEFAULT_PRECISION_MS`: Default `be_close_to` precision
//! - `CHRONASSERT_LOG_PASSES`: Trace passing predicates (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./chronassert.toml` or `./chronassert.json` (current working directory)
//! 2. `../chronassert.{toml,json}` (parent directory)
//! 3. `../../chronassert.{toml,json}` (grandparent directory)

use std::path::{Path, PathBuf};

use chronassert_domain::constants::{CONFIG_FILE_STEM, ENV_DEFAULT_PRECISION_MS, ENV_LOG_PASSES};
use chronassert_domain::{AssertionConfig, DomainError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DomainError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded values fail validation
pub fn load() -> Result<AssertionConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Assertion configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `DomainError::Config` if `CHRONASSERT_DEFAULT_PRECISION_MS` is
/// missing, not an integer, or negative.
pub fn load_from_env() -> Result<AssertionConfig> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from any key/value source shaped like the environment
fn load_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<AssertionConfig> {
    let default_precision_ms = lookup(ENV_DEFAULT_PRECISION_MS)
        .ok_or_else(|| {
            DomainError::Config(format!(
                "Missing required environment variable: {}",
                ENV_DEFAULT_PRECISION_MS
            ))
        })?
        .trim()
        .parse::<i64>()
        .map_err(|e| DomainError::Config(format!("Invalid default precision: {}", e)))?;
    let log_passes = parse_bool(lookup(ENV_LOG_PASSES), false);

    let config = AssertionConfig { default_precision_ms, log_passes };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `DomainError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or values fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<AssertionConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DomainError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DomainError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading assertion configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DomainError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AssertionConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DomainError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DomainError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DomainError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory and its two parents for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_from(&cwd)
}

fn probe_from(base: &Path) -> Option<PathBuf> {
    let toml_name = format!("{CONFIG_FILE_STEM}.toml");
    let json_name = format!("{CONFIG_FILE_STEM}.json");

    base.ancestors()
        .take(3)
        .flat_map(|dir| [dir.join(&toml_name), dir.join(&json_name)])
        .find(|path| path.exists())
}

/// Parse an optional boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_bool_parsing() {
        assert!(parse_bool(Some("On".to_string()), false));
        assert!(parse_bool(Some(" YES ".to_string()), false));
        assert!(!parse_bool(Some("0".to_string()), true));
        assert!(!parse_bool(Some("maybe".to_string()), true));
        assert!(parse_bool(None, true));
    }

    #[test]
    fn test_load_from_lookup() {
        let config = load_from_lookup(lookup(&[
            (ENV_DEFAULT_PRECISION_MS, "50"),
            (ENV_LOG_PASSES, "true"),
        ]))
        .unwrap();
        assert_eq!(config.default_precision_ms, 50);
        assert!(config.log_passes);

        let negative = load_from_lookup(lookup(&[(ENV_DEFAULT_PRECISION_MS, "-5")]));
        assert!(matches!(negative, Err(DomainError::Config(_))));

        let garbage = load_from_lookup(lookup(&[(ENV_DEFAULT_PRECISION_MS, "soon")]));
        assert!(matches!(garbage, Err(DomainError::Config(_))));

        let missing = load_from_lookup(lookup(&[(ENV_LOG_PASSES, "true")]));
        assert!(matches!(missing, Err(DomainError::Config(msg)) if msg.contains("Missing")));
    }

    #[test]
    fn test_load_from_toml_file() {
        let file = temp_config(".toml", "default_precision_ms = 100\nlog_passes = true\n");
        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, AssertionConfig { default_precision_ms: 100, log_passes: true });
    }

    #[test]
    fn test_load_from_json_file() {
        let file = temp_config(".json", r#"{"default_precision_ms": 7}"#);
        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.default_precision_ms, 7);
        assert!(!config.log_passes);
    }

    #[test]
    fn test_load_from_file_errors() {
        let missing = load_from_file(Some(PathBuf::from("/nonexistent/chronassert.toml")));
        assert!(matches!(missing, Err(DomainError::Config(msg)) if msg.contains("not found")));

        let invalid = temp_config(".toml", "default_precision_ms = \"fast\"");
        assert!(load_from_file(Some(invalid.path().to_path_buf())).is_err());

        let negative = temp_config(".json", r#"{"default_precision_ms": -1}"#);
        assert!(load_from_file(Some(negative.path().to_path_buf())).is_err());

        let unsupported = temp_config(".yaml", "default_precision_ms: 1");
        let err = load_from_file(Some(unsupported.path().to_path_buf())).unwrap_err();
        assert_eq!(err, DomainError::Config("Unsupported config format: yaml".to_string()));
    }

    #[test]
    fn test_probe_walks_up_two_levels() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(probe_from(&nested), None);

        let config = root.path().join("chronassert.json");
        std::fs::write(&config, "{}").unwrap();
        assert_eq!(probe_from(&nested), Some(config));

        let deeper = nested.join("c");
        std::fs::create_dir_all(&deeper).unwrap();
        assert_eq!(probe_from(&deeper), None);
    }
}
