//! Configuration file discovery.
//!
//! Finds the governing `.quarry.toml` by walking up the directory tree from
//! a starting point; falls back to the global `~/.quarry.toml` when no
//! local file exists. The nearest file wins outright — partial configs are
//! not merged across directories.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".quarry.toml";

/// Finds the configuration file governing the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first
/// `.quarry.toml` found. When none exists on the walk, returns the global
/// `~/.quarry.toml` if present, otherwise `None`.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    global_config_path().filter(|path| path.is_file())
}

/// Returns the path to the global configuration file (`~/.quarry.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn nearest_config_wins() {
        let temp = tempfile::tempdir().unwrap();
        let outer = temp.path().join(CONFIG_FILENAME);
        fs::write(&outer, "# outer\n").unwrap();

        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();
        let inner = project.join(CONFIG_FILENAME);
        fs::write(&inner, "# inner\n").unwrap();

        let deep = project.join("src/nested");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(discover_config_file(&deep), Some(inner));
    }

    #[test]
    fn walks_up_to_ancestor_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join(CONFIG_FILENAME);
        fs::write(&config, "# config\n").unwrap();

        let deep = temp.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(discover_config_file(&deep), Some(config));
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = temp.path().join("subdir");
        fs::create_dir_all(&subdir).unwrap();

        let found = discover_config_file(&subdir);
        // Only the global config may surface here, never the directory.
        if let Some(path) = found {
            assert!(is_global_config(&path));
        }
    }

    #[test]
    fn global_config_path_ends_with_filename() {
        let path = global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with(CONFIG_FILENAME));
    }

    #[test]
    fn is_global_config_distinguishes_local_paths() {
        let local = PathBuf::from("/some/other/path/.quarry.toml");
        assert!(!is_global_config(&local));

        if let Some(global) = global_config_path() {
            assert!(is_global_config(&global));
        }
    }
}
