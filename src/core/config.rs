//! # Configuration
//!
//! Everything here is optional: with no file, no env vars and no flags the
//! navigator runs with built-in defaults. Override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vita/config.toml` unless `--config` points elsewhere.
//! A missing file is not an error and nothing is written on first run.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Colour overrides. Values are ratatui colour names ("cyan", "darkgray")
/// or hex strings ("#5A56E0"); they are parsed by `tui::theme`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub title_fg: Option<String>,
    pub title_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub label_fg: Option<String>,
    pub description_fg: Option<String>,
    pub hint_fg: Option<String>,
    pub detail_title_fg: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const CONFIG_DIR: &str = ".vita";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "vita.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    /// `None` when no home directory is known and nothing was configured.
    pub log_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

/// Values taken from command-line flags (`None` = not given).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the `~/.vita/` directory.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.vita/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Load config from `path`, or from `~/.vita/config.toml` when `path` is None.
///
/// A missing file yields `VitaConfig::default()`. A file that exists but is
/// malformed yields `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<VitaConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VitaConfig::default());
        }
    };

    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(VitaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<VitaConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VitaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &VitaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("VITA_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → ~/.vita/vita.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("VITA_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.clone())
        .or_else(|| config_dir().map(|d| d.join(LOG_FILE)));

    ResolvedConfig {
        log_level,
        log_file,
        theme: config.theme.clone(),
    }
}

fn parse_level(raw: &str) -> LevelFilter {
    match raw.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            warn!("Unknown log level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = VitaConfig::default();
        assert!(config.general.log_level.is_none());
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&VitaConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.theme, ThemeConfig::default());
        if let Some(path) = resolved.log_file {
            assert!(path.ends_with(".vita/vita.log"));
        }
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VitaConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some(PathBuf::from("/tmp/vita-test.log")),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/vita-test.log")));
    }

    #[test]
    fn test_resolve_env_beats_config() {
        let config = VitaConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "VITA_LOG_LEVEL").then(|| "warn".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = VitaConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some(PathBuf::from("from-config.log")),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            log_level: Some("trace".to_string()),
            log_file: Some(PathBuf::from("from-cli.log")),
        };
        let env = |_: &str| Some("error".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.log_file, Some(PathBuf::from("from-cli.log")));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&VitaConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r##"
[general]
log_level = "debug"
log_file = "/tmp/vita.log"

[theme]
title_fg = "white"
title_bg = "#5A56E0"
selected_fg = "magenta"
"##;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.theme.title_bg.as_deref(), Some("#5A56E0"));
        assert_eq!(config.theme.selected_fg.as_deref(), Some("magenta"));
        assert!(config.theme.hint_fg.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[theme]\nhint_fg = \"gray\"\n").unwrap();
        assert_eq!(config.theme.hint_fg.as_deref(), Some("gray"));
        assert!(config.general.log_level.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nlog_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("vita-definitely-missing-config.toml");
        let config = load_config(Some(&path)).unwrap();
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let path = std::env::temp_dir().join(format!("vita-config-{}.toml", std::process::id()));
        fs::write(&path, "[general]\nlog_level = \"warn\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
    }
}
