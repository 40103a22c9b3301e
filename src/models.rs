use serde::{Deserialize, Serialize};

use crate::markup::escape::decode_html;

/// One answer choice of a quiz
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

impl QuizOption {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A single-answer quiz with exactly four options
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub correct_answer_id: String,
    pub explanation: String,
}

impl Quiz {
    /// The option whose id is `correct_answer_id`
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == self.correct_answer_id)
    }
}

/// A practice step, optionally paired with starter code
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct MiniTask {
    pub task: String,
    pub code: String,
    pub hint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub title: String,
    pub description: String,
    pub solution_hint: String,
    pub mini_tasks: Vec<MiniTask>,
}

/// Every fenced block of a document joined into one sample
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub description: String,
    pub code: String,
    pub output_description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct InteractiveExample {
    pub description: String,
    pub tasks: Vec<String>,
}

/// A structured lesson built from one document
///
/// Built once per document and read-only afterwards; any document change
/// requires a full rebuild.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub path: String,
    pub explanation_html: String,
    pub code_example: CodeExample,
    pub quiz: Quiz,
    pub exercise: Exercise,
    pub interactive_example: InteractiveExample,
    pub keywords: Vec<String>,
}

impl Lesson {
    /// Explanation with tags removed and entities decoded, for substring search
    #[must_use]
    pub fn explanation_text(&self) -> String {
        let mut text = String::with_capacity(self.explanation_html.len());
        let mut in_tag = false;

        for c in self.explanation_html.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => {
                    in_tag = false;
                    text.push(' ');
                }
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }

        decode_html(&text)
    }

    /// Case-insensitive match against title, keywords and explanation text
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&needle))
            || self.explanation_text().to_lowercase().contains(&needle)
    }
}
