//! Configuration file parsing and resolution.
//!
//! Parses a `.quarry.toml` file into an intermediate [`RawConfig`] that
//! preserves the optional nature of every field, then resolves it against
//! the defaults into a [`Config`] with absolute source paths.

use std::{collections::HashMap, fs, path::Path};

use quarry_highlight::HighlightOptions;
use serde::Deserialize;

use crate::{Config, ConfigError, Settings, Source};

/// Default include patterns when a source defines none.
pub const DEFAULT_INCLUDE: &[&str] = &["**/*"];

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional so that a config file may set only what it
/// cares about. This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Highlight settings section.
    pub highlight: Option<RawHighlight>,
    /// Source definitions: name -> source config.
    pub source: Option<HashMap<String, RawSource>>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Maximum results per page.
    pub default_limit: Option<usize>,
    /// Stemming language ("none" disables stemming).
    pub stemmer: Option<String>,
}

/// Raw highlight settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHighlight {
    /// Context lines to include on each side of a match.
    pub max_lines: Option<usize>,
    /// Markup inserted before a matched span.
    pub markup_open: Option<String>,
    /// Markup inserted after a matched span.
    pub markup_close: Option<String>,
    /// Line terminator used for boundary scanning.
    pub line_break: Option<char>,
}

/// Raw source definition from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSource {
    /// Path to the source directory, absolute or relative to the config file.
    pub path: String,
    /// Include patterns (optional, defaults to `**/*`).
    pub include: Option<Vec<String>>,
    /// Exclude patterns (optional, defaults to none).
    pub exclude: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves a raw config against defaults into a full [`Config`].
///
/// Relative source paths are resolved against the config file's directory.
/// Sources are ordered by name so that resolution is deterministic
/// regardless of TOML table ordering.
pub fn resolve_config(raw: RawConfig, config_path: &Path) -> Result<Config, ConfigError> {
    let config_root = config_path.parent().map(Path::to_path_buf);

    let mut settings = Settings::default();
    if let Some(raw_settings) = raw.settings {
        if let Some(limit) = raw_settings.default_limit {
            settings.default_limit = limit;
        }
        if let Some(stemmer) = raw_settings.stemmer {
            settings.stemmer = stemmer;
        }
    }

    let mut highlight = HighlightOptions::default();
    if let Some(raw_highlight) = raw.highlight {
        if let Some(max_lines) = raw_highlight.max_lines {
            highlight.max_lines = max_lines;
        }
        if let Some(open) = raw_highlight.markup_open {
            highlight.markup_open = open;
        }
        if let Some(close) = raw_highlight.markup_close {
            highlight.markup_close = close;
        }
        if let Some(line_break) = raw_highlight.line_break {
            highlight.line_break = line_break;
        }
    }
    if highlight.max_lines == 0 {
        return Err(ConfigError::InvalidMaxLines);
    }

    let mut sources: Vec<Source> = raw
        .source
        .unwrap_or_default()
        .into_iter()
        .map(|(name, raw_source)| {
            let path = Path::new(&raw_source.path);
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                match &config_root {
                    Some(root) => root.join(path),
                    None => path.to_path_buf(),
                }
            };

            Source {
                name,
                path,
                include: raw_source
                    .include
                    .unwrap_or_else(|| DEFAULT_INCLUDE.iter().map(ToString::to_string).collect()),
                exclude: raw_source.exclude.unwrap_or_default(),
            }
        })
        .collect();
    sources.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Config {
        settings,
        highlight,
        sources,
        config_root,
    })
}
