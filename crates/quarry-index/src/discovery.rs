//! File discovery for indexing.
//!
//! Walks configured sources to discover files that should be indexed,
//! applying include/exclude patterns and filtering out hidden entries,
//! symlinks, and files that are binary by extension.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use quarry_config::{CompiledPatterns, Source};
use walkdir::WalkDir;

use crate::IndexError;

/// A file discovered for indexing.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Source name this file belongs to.
    pub source: String,
    /// Absolute path to the file.
    pub abs_path: PathBuf,
    /// Relative path within the source.
    pub rel_path: PathBuf,
}

/// Discovers all files that should be indexed from the given sources.
///
/// For each source, walks the directory tree and returns files that:
/// - Match at least one include pattern and no exclude pattern
/// - Are regular files (not directories or symlinks)
/// - Are not binary files (based on extension heuristics)
///
/// Sources whose directory is missing are skipped silently; a source that
/// hasn't been created yet is not an error.
pub fn discover_files(
    sources: &[Source],
    patterns: &CompiledPatterns,
) -> Result<Vec<DiscoveredFile>, IndexError> {
    let mut files = Vec::new();

    for source in sources {
        if !source.path.exists() {
            continue;
        }

        for entry in WalkDir::new(&source.path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e.file_name()))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };

            if entry.file_type().is_dir() || entry.file_type().is_symlink() {
                continue;
            }

            let abs_path = entry.path().to_path_buf();

            let rel_path = match abs_path.strip_prefix(&source.path) {
                Ok(p) => p.to_path_buf(),
                Err(_) => continue,
            };

            if !patterns.matches(&source.name, &rel_path) {
                continue;
            }

            if is_binary_path(&abs_path) {
                continue;
            }

            files.push(DiscoveredFile {
                source: source.name.clone(),
                abs_path,
                rel_path,
            });
        }
    }

    Ok(files)
}

/// Checks if a filename represents a hidden entry (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Checks if a file is likely binary based on extension.
///
/// Unknown extensions are assumed to be text; non-UTF-8 content slips past
/// this heuristic and is dropped later when the file is read.
fn is_binary_path(path: &Path) -> bool {
    const BINARY_EXTENSIONS: &[&str] = &[
        "png", "jpg", "jpeg", "gif", "ico", "webp", "svg", "mp3", "wav", "ogg", "mp4", "mkv",
        "webm", "zip", "tar", "gz", "bz2", "xz", "7z", "exe", "dll", "so", "dylib", "bin", "pdf",
        "doc", "docx", "xls", "xlsx", "ttf", "otf", "woff", "woff2", "db", "sqlite", "class",
        "pyc", "o", "a", "wasm",
    ];

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
