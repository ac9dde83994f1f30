//! Index location resolution.
//!
//! Determines where the search index is stored based on configuration.
//! The index lives in `.quarry/index/` under the directory containing the
//! governing `.quarry.toml`, or in `~/.quarry/index/` when only the global
//! config exists.

use std::path::PathBuf;

use directories::BaseDirs;
use quarry_config::Config;

/// Directory name for quarry data (sibling to .quarry.toml).
const QUARRY_DIR: &str = ".quarry";
/// Subdirectory within .quarry for the index.
const INDEX_DIR: &str = "index";

/// Computes the index directory path based on configuration.
///
/// Returns `None` when no configuration was found (no `config_root`).
pub fn index_directory(config: &Config) -> Option<PathBuf> {
    config
        .config_root
        .as_ref()
        .map(|root| root.join(QUARRY_DIR).join(INDEX_DIR))
}

/// Returns the global index directory path (`~/.quarry/index/`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_index_directory() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(QUARRY_DIR).join(INDEX_DIR))
}
