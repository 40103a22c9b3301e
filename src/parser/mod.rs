//! Extractors over raw lesson documents
//!
//! Each extractor is a pure function of the document text:
//! - `sections` locates marker-delimited regions
//! - `fences` recognizes fenced code blocks and collects their bodies
//! - `questions` recovers the quiz prompt and exercise tasks
//! - `activity` recovers the interactive activity

pub mod activity;
pub mod fences;
pub mod questions;
pub mod sections;

pub use fences::FenceGrammar;
pub use questions::QuestionsAndTasks;
pub use sections::{Section, extract_section};
