//! Configuration system for quarry.
//!
//! quarry uses TOML configuration files named `.quarry.toml`. The governing
//! file is found by walking up the directory tree from the current working
//! directory; when no local file exists, the global `~/.quarry.toml` is
//! used. The nearest file wins outright.
//!
//! A configuration names the source directories to index, the stemming
//! language, the per-page result limit, and the highlight rendering
//! options (context line budget, markup, line terminator).

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod patterns;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_file, global_config_path, is_global_config};
pub use error::ConfigError;
pub use parse::{
    DEFAULT_INCLUDE, RawConfig, RawHighlight, RawSettings, RawSource, parse_config_file,
    parse_config_str, resolve_config,
};
pub use patterns::CompiledPatterns;
pub use quarry_highlight::HighlightOptions;
use serde::{Deserialize, Serialize};

/// Default maximum results per page.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Top-level resolved configuration for quarry.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Highlight rendering options.
    pub highlight: HighlightOptions,
    /// Resolved sources with absolute paths and patterns.
    pub sources: Vec<Source>,
    /// Directory containing the governing config file (determines index location).
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering the governing `.quarry.toml`.
    ///
    /// Returns `Ok(Config::default())` if no configuration file is found;
    /// the default config has no sources and no `config_root`.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        resolve_config(raw, path)
    }

    /// Compiles the include/exclude patterns for this configuration.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.sources)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Outputs the resolved settings in the same shape as a `.quarry.toml`
    /// file, making the effective configuration easy to inspect. Sources
    /// are omitted since their paths are resolved and machine-specific.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
            highlight: self.highlight.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for quarry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum results per page.
    pub default_limit: usize,
    /// Stemming language ("none" disables stemming).
    pub stemmer: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            stemmer: String::from("none"),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
    /// Highlight rendering options.
    highlight: HighlightOptions,
}

/// A named source directory to index.
#[derive(Debug, Clone)]
pub struct Source {
    /// Name of the source (recorded with each indexed file).
    pub name: String,
    /// Resolved absolute path to the source directory.
    pub path: PathBuf,
    /// Include patterns for files to index (defaults to `**/*`).
    pub include: Vec<String>,
    /// Exclude patterns for files to skip (defaults to empty).
    pub exclude: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(settings.stemmer, "none");
    }

    #[test]
    fn config_default_has_no_sources() {
        let config = Config::default();
        assert!(config.sources.is_empty());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn load_from_file_resolves_sources() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            "[settings]\ndefault_limit = 3\n\n[source.code]\npath = \"src\"\ninclude = [\"**/*.rs\"]\n",
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.settings.default_limit, 3);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].path, temp.path().join("src"));
        assert_eq!(config.config_root.as_deref(), Some(temp.path()));
    }

    #[test]
    fn load_without_config_returns_default() {
        let temp = tempfile::tempdir().unwrap();
        // No .quarry.toml anywhere under the temp root; the walk may still
        // find a global config, in which case sources can be non-empty.
        let config = Config::load(temp.path()).unwrap();
        if config.config_root.is_none() {
            assert!(config.sources.is_empty());
        }
    }

    #[test]
    fn settings_to_toml_round_trips() {
        let config = Config::default();
        let toml_str = config.settings_to_toml();

        assert!(toml_str.contains("[settings]"));
        assert!(toml_str.contains("[highlight]"));
        assert!(toml_str.contains("default_limit = 10"));
        assert!(toml_str.contains("stemmer = \"none\""));
        assert!(toml_str.contains("max_lines = 2"));

        let parsed: toml::Value = toml::from_str(&toml_str).unwrap();
        assert!(parsed.get("settings").is_some());
        assert!(parsed.get("highlight").is_some());
    }

    #[test]
    fn compile_patterns_covers_all_sources() {
        let config = Config {
            sources: vec![Source {
                name: "code".to_string(),
                path: PathBuf::from("/tmp/code"),
                include: vec!["**/*.rs".to_string()],
                exclude: vec![],
            }],
            ..Config::default()
        };

        let patterns = config.compile_patterns().unwrap();
        assert!(patterns.matches("code", Path::new("main.rs")));
    }
}
