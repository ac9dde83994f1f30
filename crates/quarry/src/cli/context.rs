//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use quarry_config::{Config, HighlightOptions};
use quarry_index::{Searcher, index_directory, open_searcher};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config file found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which must work even when an existing config file
    /// is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Ensures at least one source is configured, optionally printing an init hint.
    pub fn require_sources(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.config.sources.is_empty() {
            eprintln!("error: no sources defined in configuration");
            if show_init_hint {
                eprintln!(
                    "Run 'quarry init' to create a configuration file, then add source definitions."
                );
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the index directory for this configuration, if any.
    pub fn index_dir(&self) -> Option<PathBuf> {
        index_directory(&self.config)
    }

    /// Opens a searcher, optionally overriding the context line budget.
    pub fn searcher(&self, context_override: Option<usize>) -> Result<Searcher, ExitCode> {
        let config = match context_override {
            Some(max_lines) => Config {
                highlight: HighlightOptions {
                    max_lines,
                    ..self.config.highlight.clone()
                },
                ..self.config.clone()
            },
            None => self.config.clone(),
        };

        open_searcher(&config).map_err(|e| {
            eprintln!("error: failed to open index: {e}");
            eprintln!("Run 'quarry update' to build the index.");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
