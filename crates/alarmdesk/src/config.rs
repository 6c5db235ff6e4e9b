//! CLI configuration: thin wrapper around `alarmdesk_config`.
//!
//! Adds the `--config` override and resolves output/color settings where the
//! flag wins over the file.

use std::path::PathBuf;

use clap::ValueEnum;

use alarmdesk_core::DeskConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use alarmdesk_config::{Config, load_config, load_config_or_default, save_config};

/// The config file this invocation reads: `--config`, else the platform path.
pub fn effective_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(alarmdesk_config::config_path)
}

/// Load the config for this invocation. A malformed file is an error here,
/// unlike `config show`, which falls back to defaults.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(load_config(Some(&effective_path(global)))?)
}

/// Fill unset output and color flags from the config file.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    if global.output.is_none() {
        global.output = Some(parse_value("defaults.output", &cfg.defaults.output)?);
    }
    if global.color.is_none() {
        global.color = Some(parse_value("defaults.color", &cfg.defaults.color)?);
    }
    Ok(())
}

/// Build the core desk config from file settings.
pub fn desk_config(cfg: &Config) -> Result<DeskConfig, CliError> {
    Ok(cfg.to_desk_config()?)
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| {
        let expected: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_owned()))
            .collect();
        CliError::ConfigValue {
            field: field.into(),
            reason: format!("'{raw}' (expected one of: {})", expected.join(", ")),
        }
    })
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or(ColorMode::Auto)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn config_values_parse_like_flags() {
        let fmt: OutputFormat = parse_value("defaults.output", "json-compact").unwrap();
        assert_eq!(fmt, OutputFormat::JsonCompact);
        let color: ColorMode = parse_value("defaults.color", "NEVER").unwrap();
        assert_eq!(color, ColorMode::Never);
    }

    #[test]
    fn unknown_config_value_lists_choices() {
        let err = parse_value::<OutputFormat>("defaults.output", "xml").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("defaults.output"));
        assert!(text.contains("json-compact"));
    }
}
