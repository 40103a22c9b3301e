//! `UniFFI` bindings for presentation layers
//!
//! A [`LessonLibrary`] owns an immutable catalog built once from a file map
//! and a curated order; the free functions expose the single-document
//! pipeline.
#![allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]

use std::collections::HashMap;

use crate::{
    assembler::LessonAssembler,
    catalog::{LessonCatalog, QuizOverrides},
    config::AssemblerConfig,
    error::LessonError,
    markup,
    models::Lesson,
    quiz::QuizOverride,
    source::memory::MemoryDocumentSource,
};

/// Ordered lesson set shared with foreign code
#[derive(Debug, uniffi::Object)]
pub struct LessonLibrary {
    catalog: LessonCatalog,
}

#[uniffi::export]
impl LessonLibrary {
    /// Build every lesson in `order` from `documents` (file name to text)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a curated document
    /// is missing, or two documents derive the same id
    #[uniffi::constructor]
    pub fn new(
        documents: HashMap<String, String>,
        order: Vec<String>,
        config: Option<AssemblerConfig>,
        overrides: Option<HashMap<String, QuizOverride>>,
    ) -> Result<Self, LessonError> {
        let assembler = LessonAssembler::new(config.unwrap_or_default())?;
        let source = MemoryDocumentSource::from(documents);
        let overrides: QuizOverrides = overrides.unwrap_or_default();

        let catalog = LessonCatalog::build_with_overrides(&source, &order, &assembler, &overrides)?;
        Ok(Self { catalog })
    }

    /// Restore a library from a snapshot taken with [`LessonLibrary::snapshot`]
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be decoded
    #[uniffi::constructor]
    pub fn from_snapshot(bytes: Vec<u8>) -> Result<Self, LessonError> {
        Ok(Self {
            catalog: LessonCatalog::from_cbor(&bytes)?,
        })
    }

    pub fn lesson_count(&self) -> u32 {
        self.catalog.len() as u32
    }

    /// All lessons in curated order
    pub fn lessons(&self) -> Vec<Lesson> {
        self.catalog.lessons().to_vec()
    }

    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id
    pub fn get_lesson(&self, id: String) -> Result<Lesson, LessonError> {
        Ok(self.catalog.get(&id)?.clone())
    }

    pub fn search(&self, term: String) -> Vec<Lesson> {
        self.catalog.search(&term).into_iter().cloned().collect()
    }

    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn snapshot(&self) -> Result<Vec<u8>, LessonError> {
        Ok(self.catalog.to_cbor()?)
    }
}

/// Render one markup document to HTML
#[uniffi::export]
pub fn render_markup(markup: String) -> String {
    markup::render(&markup)
}

/// Build a single lesson with the default configuration
#[uniffi::export]
pub fn build_lesson(file_name: String, content: String) -> Lesson {
    LessonAssembler::default().build(&file_name, &content)
}
