//! Index writer for adding documents to the Tantivy index.

use std::{fs, path::Path};

use tantivy::{
    Index, IndexWriter as TantivyIndexWriter, TantivyDocument, Term, directory::MmapDirectory,
};

use crate::{
    analyzer::{QUARRY_TOKENIZER, build_analyzer_from_name},
    document::FileDocument,
    error::IndexError,
    schema::IndexSchema,
};

/// Default heap size for the index writer (50 MB).
const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes file documents to a Tantivy index.
///
/// The writer opens or creates an index at the specified path and provides
/// methods to add, delete, and commit documents.
pub struct IndexWriter {
    /// The Tantivy index.
    index: Index,
    /// The underlying Tantivy writer.
    writer: TantivyIndexWriter,
    /// Schema with field handles.
    schema: IndexSchema,
}

impl IndexWriter {
    /// Opens or creates an index at the given path.
    ///
    /// If the index doesn't exist, it will be created with the standard
    /// schema. The analyzer for `stemmer` is registered so that added
    /// content is tokenized the same way searches will be.
    pub fn open(path: &Path, stemmer: &str) -> Result<Self, IndexError> {
        let schema = IndexSchema::new();

        // Ensure directory exists
        fs::create_dir_all(path)?;

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open_or_create(dir, schema.schema().clone())
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        let analyzer = build_analyzer_from_name(stemmer)?;
        index.tokenizers().register(QUARRY_TOKENIZER, analyzer);

        let writer = index
            .writer(DEFAULT_HEAP_SIZE)
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        Ok(Self {
            index,
            writer,
            schema,
        })
    }

    /// Adds a file document to the index.
    ///
    /// The document is staged for writing but not committed until
    /// [`Self::commit`] is called.
    pub fn add_document(&mut self, doc: &FileDocument) -> Result<(), IndexError> {
        let mut tantivy_doc = TantivyDocument::new();

        tantivy_doc.add_text(self.schema.path, &doc.path);
        tantivy_doc.add_text(self.schema.filename, &doc.filename);
        tantivy_doc.add_text(self.schema.content, &doc.content);

        self.writer
            .add_document(tantivy_doc)
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Adds multiple file documents to the index.
    pub fn add_documents(&mut self, docs: &[FileDocument]) -> Result<(), IndexError> {
        for doc in docs {
            self.add_document(doc)?;
        }
        Ok(())
    }

    /// Deletes the document for the given absolute path.
    pub fn delete_by_path(&mut self, path: &str) {
        let term = Term::from_field_text(self.schema.path, path);
        self.writer.delete_term(term);
    }

    /// Deletes all documents from the index.
    pub fn delete_all(&mut self) -> Result<(), IndexError> {
        self.writer
            .delete_all_documents()
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Commits all pending changes to the index.
    ///
    /// This makes all added and deleted documents visible to readers.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer.commit().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Rolls back any uncommitted changes.
    pub fn rollback(&mut self) -> Result<(), IndexError> {
        self.writer.rollback().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Returns the number of documents in the index.
    ///
    /// Note: this requires creating a reader and does not reflect
    /// uncommitted changes.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self
            .index
            .reader()
            .map_err(|e| IndexError::Write(e.to_string()))?;
        Ok(reader.searcher().num_docs())
    }
}
