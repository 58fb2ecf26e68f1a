//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cinelog/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The Gemini API key is the one setting without a default. Resolution fails
//! with `ConfigError::MissingApiKey` when it isn't set anywhere, and the
//! program stops before the UI starts.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assist::providers::gemini::DEFAULT_GEMINI_BASE_URL;
use crate::core::locale::Locale;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CinelogConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub locale: Option<Locale>,
    pub model: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Clone)]
pub struct ResolvedConfig {
    pub locale: Locale,
    pub model_name: String,
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("locale", &self.locale)
            .field("model_name", &self.model_name)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingApiKey => write!(
                f,
                "GEMINI_API_KEY (or API_KEY) environment variable is not set, and [gemini] api_key is missing from the config file"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cinelog/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cinelog").join("config.toml"))
}

/// Load config from `~/.cinelog/config.toml`.
pub fn load_config() -> Result<CinelogConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CinelogConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CinelogConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<CinelogConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CinelogConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CinelogConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config locale={:?} model={:?}", config.general.locale, config.general.model);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# cinelog configuration
# All settings are optional except the API key, which may also come from the
# GEMINI_API_KEY (or API_KEY) environment variable.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "ko"                      # "ko" or "en"
# model = "gemini-2.5-flash"

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &CinelogConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `lookup_env` reads an environment variable; empty values count as unset.
pub fn resolve_with_env(
    config: &CinelogConfig,
    cli: &CliOverrides,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let env = |key: &str| lookup_env(key).filter(|v| !v.trim().is_empty());

    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .or_else(|| env("CINELOG_LOCALE").and_then(|code| Locale::from_code(&code)))
        .or_else(|| {
            config.general.locale.as_deref().and_then(|code| {
                let parsed = Locale::from_code(code);
                if parsed.is_none() {
                    warn!("Unknown locale '{}' in config, using default", code);
                }
                parsed
            })
        })
        .unwrap_or_default();

    // Model: CLI → env → config → default
    let model_name = cli
        .model
        .clone()
        .or_else(|| env("CINELOG_MODEL"))
        .or_else(|| config.general.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // API key: env (GEMINI_API_KEY, then API_KEY) → config
    let api_key = env("GEMINI_API_KEY")
        .or_else(|| env("API_KEY"))
        .or_else(|| config.gemini.api_key.clone().filter(|k| !k.trim().is_empty()))
        .ok_or(ConfigError::MissingApiKey)?;

    // Base URL: env → config → default
    let base_url = env("GEMINI_BASE_URL")
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    Ok(ResolvedConfig {
        locale,
        model_name,
        api_key,
        base_url,
    })
}
