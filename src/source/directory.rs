use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{CatalogError, CatalogResult},
    source::DocumentSource,
};

const DOCUMENT_EXTENSION: &str = "md";

/// Reads `*.md` documents from a single directory
#[derive(Debug, Clone)]
pub struct DirectoryDocumentSource {
    base: PathBuf,
}

impl DirectoryDocumentSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    // Only bare file names resolve; anything with a separator stays outside.
    fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let name = Path::new(file_name);
        let is_bare = name.file_name().is_some_and(|n| n == name.as_os_str());
        is_bare.then(|| self.base.join(name))
    }
}

impl DocumentSource for DirectoryDocumentSource {
    fn read(&self, file_name: &str) -> CatalogResult<Option<Vec<u8>>> {
        let Some(path) = self.resolve(file_name) else {
            tracing::trace!(file_name, "rejected non-bare file name");
            return Ok(None);
        };

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CatalogError::source_failed(format!(
                "{}: {err}",
                path.display()
            ))),
        }
    }

    fn list(&self) -> CatalogResult<Vec<String>> {
        let entries = fs::read_dir(&self.base).map_err(|err| {
            CatalogError::source_failed(format!("{}: {err}", self.base.display()))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|err| CatalogError::source_failed(err.to_string()))?
                .path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != DOCUMENT_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2-routing.md"), "# Routing").unwrap();
        fs::write(dir.path().join("1-intro.md"), "# Intro").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.md")).unwrap();

        let source = DirectoryDocumentSource::new(dir.path());
        assert_eq!(source.list().unwrap(), vec!["1-intro.md", "2-routing.md"]);
    }

    #[test]
    fn reads_existing_and_missing_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1-intro.md"), "# Intro").unwrap();

        let source = DirectoryDocumentSource::new(dir.path());
        assert_eq!(source.read_text("1-intro.md").unwrap(), "# Intro");
        assert_eq!(source.read("absent.md").unwrap(), None);
    }

    #[test]
    fn rejects_paths_outside_base() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryDocumentSource::new(dir.path().join("lessons"));
        assert_eq!(source.read("../secret.md").unwrap(), None);
        assert_eq!(source.read("a/b.md").unwrap(), None);
    }

    #[test]
    fn missing_directory_fails_to_list() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryDocumentSource::new(dir.path().join("absent"));
        assert!(matches!(source.list(), Err(CatalogError::Source(_))));
    }
}
