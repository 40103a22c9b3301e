#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ffi;
pub mod markup;
pub mod models;
pub mod parser;
pub mod quiz;
pub mod source;

pub use assembler::LessonAssembler;
pub use catalog::LessonCatalog;
pub use config::{AssemblerConfig, ShuffleMode};
pub use markup::{MarkupRenderer, render};
pub use models::Lesson;
pub use quiz::generate_quiz_options;

// Re-export common error types for convenience
pub use error::{
    CatalogError, CatalogResult, LessonError, LessonResult, ParseError, ParseResult,
    SerializationError, SerializationResult,
};
