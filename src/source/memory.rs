use std::collections::{BTreeMap, HashMap};

use crate::{error::CatalogResult, source::DocumentSource};

/// Documents held in memory, e.g. bundled with the application
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentSource {
    documents: BTreeMap<String, Vec<u8>>,
}

impl MemoryDocumentSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a text document
    pub fn insert(&mut self, file_name: impl Into<String>, content: impl Into<String>) {
        self.documents
            .insert(file_name.into(), content.into().into_bytes());
    }

    /// Add or replace a document from raw bytes
    pub fn insert_bytes(&mut self, file_name: impl Into<String>, content: Vec<u8>) {
        self.documents.insert(file_name.into(), content);
    }

    #[must_use]
    pub fn with_document(mut self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(file_name, content);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl From<HashMap<String, String>> for MemoryDocumentSource {
    fn from(documents: HashMap<String, String>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .map(|(name, text)| (name, text.into_bytes()))
                .collect(),
        }
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn read(&self, file_name: &str) -> CatalogResult<Option<Vec<u8>>> {
        Ok(self.documents.get(file_name).cloned())
    }

    fn list(&self) -> CatalogResult<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_basic_operations() {
        let source = MemoryDocumentSource::new()
            .with_document("2-b.md", "# B")
            .with_document("1-a.md", "# A");

        assert_eq!(source.len(), 2);
        assert_eq!(source.read("1-a.md").unwrap(), Some(b"# A".to_vec()));
        assert_eq!(source.read("3-c.md").unwrap(), None);
        assert_eq!(source.list().unwrap(), vec!["1-a.md", "2-b.md"]);
    }

    #[test]
    fn memory_source_from_map() {
        let map = HashMap::from([("x.md".to_string(), "# X".to_string())]);
        let source = MemoryDocumentSource::from(map);
        assert_eq!(source.read_text("x.md").unwrap(), "# X");
    }

    #[test]
    fn insert_replaces_existing() {
        let mut source = MemoryDocumentSource::new();
        source.insert("a.md", "old");
        source.insert("a.md", "new");
        assert_eq!(source.len(), 1);
        assert_eq!(source.read_text("a.md").unwrap(), "new");
    }
}
