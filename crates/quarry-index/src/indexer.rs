//! Index building over configured sources.
//!
//! The indexer performs a full rebuild: discover files, wipe the index,
//! add every readable file, commit once. There is no incremental path;
//! `quarry update` is cheap enough to run whenever sources change.

use std::{
    fs,
    path::{Path, PathBuf},
};

use quarry_config::Config;

use crate::{
    IndexError,
    discovery::discover_files,
    document::FileDocument,
    location::index_directory,
    writer::IndexWriter,
};

/// Statistics from one indexing run.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexStats {
    /// Files added to the index.
    pub files_indexed: usize,
    /// Files discovered but skipped (unreadable or not valid UTF-8).
    pub files_skipped: usize,
}

/// Builds the search index from configured sources.
pub struct Indexer {
    /// Writer for the target index.
    writer: IndexWriter,
}

impl std::fmt::Debug for Indexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indexer").finish_non_exhaustive()
    }
}

impl Indexer {
    /// Opens an indexer writing to the given index directory.
    pub fn open(index_dir: &Path, stemmer: &str) -> Result<Self, IndexError> {
        let writer = IndexWriter::open(index_dir, stemmer)?;
        Ok(Self { writer })
    }

    /// Opens an indexer at the configuration's index location.
    pub fn from_config(config: &Config) -> Result<Self, IndexError> {
        let index_dir = index_directory(config).ok_or_else(|| IndexError::OpenIndex {
            path: PathBuf::new(),
            message: "no configuration found".to_string(),
        })?;
        Self::open(&index_dir, &config.settings.stemmer)
    }

    /// Rebuilds the index from scratch for the given configuration.
    ///
    /// Files that vanish between discovery and reading, and files whose
    /// contents are not valid UTF-8, are counted as skipped rather than
    /// failing the build.
    pub fn rebuild(&mut self, config: &Config) -> Result<IndexStats, IndexError> {
        let patterns = config
            .compile_patterns()
            .map_err(|e| IndexError::Write(e.to_string()))?;
        let files = discover_files(&config.sources, &patterns)?;

        self.writer.delete_all()?;

        let mut stats = IndexStats::default();
        for file in files {
            let Ok(bytes) = fs::read(&file.abs_path) else {
                stats.files_skipped += 1;
                continue;
            };

            match String::from_utf8(bytes) {
                Ok(content) => {
                    self.writer
                        .add_document(&FileDocument::new(&file.abs_path, content))?;
                    stats.files_indexed += 1;
                }
                Err(_) => stats.files_skipped += 1,
            }
        }

        self.writer.commit()?;
        Ok(stats)
    }

    /// Returns the number of documents currently visible in the index.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        self.writer.num_docs()
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use quarry_config::Source;
    use tempfile::TempDir;

    use super::*;

    /// Builds a config with one source over `root` and an index under `temp`.
    fn config_for(temp: &TempDir, root: &Path) -> Config {
        Config {
            sources: vec![Source {
                name: "code".to_string(),
                path: root.to_path_buf(),
                include: vec!["**/*".to_string()],
                exclude: vec![],
            }],
            config_root: Some(temp.path().to_path_buf()),
            ..Config::default()
        }
    }

    #[test]
    fn rebuild_indexes_discovered_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("one.txt"), "alpha beta").unwrap();
        fs::write(root.join("two.txt"), "gamma delta").unwrap();

        let config = config_for(&temp, &root);
        let mut indexer = Indexer::from_config(&config).unwrap();
        let stats = indexer.rebuild(&config).unwrap();

        assert_eq!(stats.files_indexed, 2);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(indexer.num_docs().unwrap(), 2);
    }

    #[test]
    fn rebuild_skips_non_utf8_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("good.txt"), "readable").unwrap();
        fs::write(root.join("bad.dat"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let config = config_for(&temp, &root);
        let mut indexer = Indexer::from_config(&config).unwrap();
        let stats = indexer.rebuild(&config).unwrap();

        assert_eq!(stats.files_indexed, 1);
        assert_eq!(stats.files_skipped, 1);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.txt"), "first").unwrap();

        let config = config_for(&temp, &root);
        let mut indexer = Indexer::from_config(&config).unwrap();
        indexer.rebuild(&config).unwrap();
        assert_eq!(indexer.num_docs().unwrap(), 1);

        fs::remove_file(root.join("a.txt")).unwrap();
        fs::write(root.join("b.txt"), "second").unwrap();

        let stats = indexer.rebuild(&config).unwrap();
        assert_eq!(stats.files_indexed, 1);
        assert_eq!(indexer.num_docs().unwrap(), 1);
    }

    #[test]
    fn from_config_requires_config_root() {
        let config = Config {
            config_root: None,
            ..Config::default()
        };

        let err = Indexer::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("no configuration"));
    }

    #[test]
    fn index_lands_under_quarry_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.txt"), "content").unwrap();

        let config = config_for(&temp, &root);
        let mut indexer = Indexer::from_config(&config).unwrap();
        indexer.rebuild(&config).unwrap();

        assert!(
            PathBuf::from(temp.path())
                .join(".quarry/index/meta.json")
                .exists()
        );
    }
}
