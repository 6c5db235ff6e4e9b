//! Shared configuration for the alarmdesk CLI.
//!
//! A TOML file layered over built-in defaults and `ALARMDESK_` environment
//! variables, and its translation to `alarmdesk_core::DeskConfig`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use alarmdesk_core::DeskConfig;
use alarmdesk_core::config::{DEFAULT_OPERATOR_NAME, DEFAULT_RECENT_LIMIT};

/// Prefix for environment overrides. Nested keys are joined with `__`, e.g.
/// `ALARMDESK_DESK__OPERATOR_NAME`.
pub const ENV_PREFIX: &str = "ALARMDESK_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Output defaults for the CLI.
    #[serde(default)]
    pub defaults: Defaults,

    /// Desk behaviour.
    #[serde(default)]
    pub desk: DeskSection,

    /// Simulated advisor.
    #[serde(default)]
    pub advisor: AdvisorSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeskSection {
    /// Author recorded on notes added from the CLI.
    #[serde(default = "default_operator_name")]
    pub operator_name: String,

    /// Alarms listed under "recent" on the dashboard.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DeskSection {
    fn default() -> Self {
        Self {
            operator_name: default_operator_name(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_operator_name() -> String {
    DEFAULT_OPERATOR_NAME.into()
}
fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdvisorSection {
    /// Human-readable duration, e.g. `800ms` or `2s`.
    #[serde(default = "default_delay")]
    pub delay: String,
}

impl Default for AdvisorSection {
    fn default() -> Self {
        Self {
            delay: default_delay(),
        }
    }
}

fn default_delay() -> String {
    "800ms".into()
}

impl Config {
    /// Render as the pretty TOML that `save_config` writes.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Translate to the core runtime config.
    pub fn to_desk_config(&self) -> Result<DeskConfig, ConfigError> {
        let advisor_delay =
            humantime::parse_duration(&self.advisor.delay).map_err(|e| ConfigError::Validation {
                field: "advisor.delay".into(),
                reason: format!("'{}': {e}", self.advisor.delay),
            })?;

        let operator_name = self.desk.operator_name.trim();
        if operator_name.is_empty() {
            return Err(ConfigError::Validation {
                field: "desk.operator_name".into(),
                reason: "must not be blank".into(),
            });
        }

        Ok(DeskConfig {
            operator_name: operator_name.to_owned(),
            recent_limit: self.desk.recent_limit,
            advisor_delay,
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "alarmdesk", "alarmdesk").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("alarmdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the full Config from file + environment. `None` means the
/// platform default path. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let config: Config = figment_for(&path).extract()?;
    Ok(config)
}

/// Load config, falling back to defaults if it cannot be read.
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path` (or the platform default),
/// creating parent directories. Returns the path written.
pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, cfg.to_toml()?)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.to_desk_config().unwrap(), DeskConfig::default());
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[desk]\noperator_name = \"Night Shift\"\n\n[advisor]\ndelay = \"2s\"\n",
        )
        .unwrap();

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.desk.recent_limit, 5);

        let desk = cfg.to_desk_config().unwrap();
        assert_eq!(desk.operator_name, "Night Shift");
        assert_eq!(desk.advisor_delay, Duration::from_secs(2));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[desk\nrecent_limit = ").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Figment(_))
        ));
        assert_eq!(load_config_or_default(Some(&path)), Config::default());
    }

    #[test]
    fn bad_delay_is_a_validation_error() {
        let mut cfg = Config::default();
        cfg.advisor.delay = "soon".into();
        let err = cfg.to_desk_config().unwrap_err();
        assert!(err.to_string().starts_with("invalid advisor.delay"));
    }

    #[test]
    fn blank_operator_name_is_rejected() {
        let mut cfg = Config::default();
        cfg.desk.operator_name = "  ".into();
        assert!(matches!(
            cfg.to_desk_config(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.defaults.output = "json".into();
        cfg.desk.recent_limit = 2;

        let written = save_config(&cfg, Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_config(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn rendered_toml_parses_back_with_quoted_names() {
        let mut cfg = Config::default();
        cfg.desk.operator_name = r#"Night "Owl" \ Shift"#.into();

        let rendered = cfg.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, cfg);
    }
}
