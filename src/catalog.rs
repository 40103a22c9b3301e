use std::collections::HashMap;

use crate::{
    assembler::LessonAssembler,
    error::{CatalogError, CatalogResult, LessonResult, SerializationError, SerializationResult},
    models::Lesson,
    quiz::QuizOverride,
    source::DocumentSource,
};

/// Hand-written quizzes keyed by lesson id
pub type QuizOverrides = HashMap<String, QuizOverride>;

/// The ordered, immutable set of lessons built from a document source
///
/// Lessons keep the curated order they were built in. Lookup by id is
/// constant time.
#[derive(Debug, Clone, Default)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    index: HashMap<String, usize>,
}

impl LessonCatalog {
    /// Build every lesson named in `order`, in that order
    ///
    /// # Errors
    ///
    /// Fails if a curated name has no document, a document is not UTF-8,
    /// the source fails, or two names derive the same lesson id
    pub fn build<S>(
        source: &dyn DocumentSource,
        order: &[S],
        assembler: &LessonAssembler,
    ) -> CatalogResult<Self>
    where
        S: AsRef<str>,
    {
        Self::build_with_overrides(source, order, assembler, &QuizOverrides::new())
    }

    /// Like [`LessonCatalog::build`], replacing the quiz of every lesson
    /// whose id has an override
    ///
    /// # Errors
    ///
    /// Same as [`LessonCatalog::build`]
    pub fn build_with_overrides<S>(
        source: &dyn DocumentSource,
        order: &[S],
        assembler: &LessonAssembler,
        overrides: &QuizOverrides,
    ) -> CatalogResult<Self>
    where
        S: AsRef<str>,
    {
        let mut lessons = Vec::with_capacity(order.len());

        for file_name in order {
            let file_name = file_name.as_ref();
            let content = source.read_text(file_name).inspect_err(|err| {
                tracing::warn!(file_name, error = %err, "curated document unavailable");
            })?;

            let mut lesson = assembler.build(file_name, &content);
            if let Some(quiz_override) = overrides.get(&lesson.id) {
                tracing::debug!(id = %lesson.id, "applying quiz override");
                lesson.quiz = quiz_override.to_quiz(&lesson.title, &lesson.id, assembler.shuffler());
            }
            lessons.push(lesson);
        }

        for id in overrides.keys() {
            if !lessons.iter().any(|l| &l.id == id) {
                tracing::warn!(id = %id, "quiz override matches no lesson");
            }
        }

        let catalog = Self::from_lessons(lessons)?;
        tracing::info!(lessons = catalog.len(), "built lesson catalog");
        Ok(catalog)
    }

    /// Wrap already built lessons, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two lessons share an id
    pub fn from_lessons(lessons: Vec<Lesson>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(lessons.len());
        for (position, lesson) in lessons.iter().enumerate() {
            if index.insert(lesson.id.clone(), position).is_some() {
                return Err(CatalogError::duplicate_id(&lesson.id));
            }
        }
        Ok(Self { lessons, index })
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look up a lesson by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id
    pub fn get(&self, id: &str) -> CatalogResult<&Lesson> {
        self.index
            .get(id)
            .map(|&position| &self.lessons[position])
            .ok_or_else(|| CatalogError::not_found(id))
    }

    /// Lessons matching `term`, in catalog order
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.matches(term)).collect()
    }

    /// Serialize the ordered lessons to CBOR
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn to_cbor(&self) -> SerializationResult<Vec<u8>> {
        serde_cbor::to_vec(&self.lessons)
            .map_err(|e| SerializationError::serialization_failed(e.to_string()))
    }

    /// Restore a catalog from a CBOR snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or the snapshot has duplicate ids
    pub fn from_cbor(bytes: &[u8]) -> LessonResult<Self> {
        let lessons: Vec<Lesson> = serde_cbor::from_slice(bytes)
            .map_err(|e| SerializationError::deserialization_failed(e.to_string()))?;
        Ok(Self::from_lessons(lessons)?)
    }
}
