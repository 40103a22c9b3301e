use std::fmt::Debug;

use crate::error::{CatalogError, CatalogResult};

pub mod directory;
pub mod memory;

/// Supplies raw lesson documents by file name
pub trait DocumentSource: Send + Sync + Debug {
    /// Read the raw bytes of a document, `None` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the source exists but cannot be read
    fn read(&self, file_name: &str) -> CatalogResult<Option<Vec<u8>>>;

    /// List all document file names, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be enumerated
    fn list(&self) -> CatalogResult<Vec<String>>;

    /// Read a document as text
    ///
    /// # Errors
    ///
    /// Returns `MissingDocument` if the file is absent and `InvalidUtf8` if
    /// its bytes are not UTF-8
    fn read_text(&self, file_name: &str) -> CatalogResult<String> {
        let bytes = self
            .read(file_name)?
            .ok_or_else(|| CatalogError::missing_document(file_name))?;
        String::from_utf8(bytes).map_err(|_| CatalogError::invalid_utf8(file_name))
    }
}
