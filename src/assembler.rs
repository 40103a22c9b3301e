//! Composes the extractors and the renderer into one [`Lesson`] per document

use std::sync::LazyLock;

use regex::Regex;

use crate::config::AssemblerConfig;
use crate::error::ParseResult;
use crate::markup::MarkupRenderer;
use crate::models::{CodeExample, Exercise, Lesson, MiniTask, Quiz};
use crate::parser::fences::FenceGrammar;
use crate::parser::sections::{NEXT_LINK_MARKER, Section};
use crate::parser::{activity, questions};
use crate::quiz::OptionShuffler;

/// Title used when a document has no level-1 header
pub const UNTITLED_TOPIC: &str = "Untitled Topic";

/// Visible separator between concatenated code blocks
pub const CODE_BLOCK_SEPARATOR: &str = "\n\n/* --- Next Code Block --- */\n\n";

const CODE_OUTPUT_DESCRIPTION: &str = "The code demonstrates key concepts or functionality.";

const EXERCISE_DESCRIPTION: &str =
    "Complete the following tasks to apply the concepts learned in this section.";
const EXERCISE_SOLUTION_HINT: &str =
    "Review the provided code examples and explanations for guidance.";

const GENERIC_EXERCISE_DESCRIPTION: &str =
    "Practice the main ideas from this topic to solidify your understanding.";
const GENERIC_EXERCISE_SOLUTION_HINT: &str =
    "Refer back to the explanation and code examples in this section.";
const GENERIC_TASK: &str = "Summarize the primary learning objective in your own words.";
const GENERIC_TASK_CODE: &str = "// Write your summary or a simple code snippet here";
const GENERIC_TASK_HINT: &str = "Focus on the 'Summary' section of this topic.";

/// Body tokens considered for keywords
const BODY_KEYWORD_CANDIDATES: usize = 5;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static ORDINAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+-").unwrap());
static LEARNING_OBJECTIVES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \d+\. Learning Objectives.*$").unwrap());
static BODY_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,.]+").unwrap());

/// Builds lessons from raw documents
///
/// Every build is independent; the assembler holds only compiled patterns and
/// configuration.
#[derive(Debug, Clone)]
pub struct LessonAssembler {
    config: AssemblerConfig,
    fences: FenceGrammar,
    renderer: MarkupRenderer,
    shuffler: OptionShuffler,
}

impl LessonAssembler {
    /// Create an assembler for the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured language tags do not compile
    pub fn new(config: AssemblerConfig) -> ParseResult<Self> {
        let fences = FenceGrammar::new(&config.code_languages)?;
        Ok(Self {
            renderer: MarkupRenderer::new(fences.clone()),
            shuffler: OptionShuffler::new(config.shuffle),
            fences,
            config,
        })
    }

    #[must_use]
    pub const fn shuffler(&self) -> &OptionShuffler {
        &self.shuffler
    }

    /// Build the lesson for one document; never fails
    #[must_use]
    pub fn build(&self, file_name: &str, content: &str) -> Lesson {
        let id = lesson_id(file_name);
        let (title, content_start) = find_title(content)
            .map_or((UNTITLED_TOPIC.to_string(), 0), |(title, end)| (title.to_string(), end));
        let explanation = tidy_explanation(explanation_region(content, content_start));

        let code_blocks = self.fences.collect_all(content);
        let parsed = questions::parse(content);
        let interactive_example = activity::extract(content);

        let quiz_fallback = parsed.question.is_empty();
        let exercise_fallback = parsed.tasks.is_empty();

        let quiz = if quiz_fallback {
            self.generic_quiz(&id, &title)
        } else {
            self.quiz_for(&id, &title, parsed.question)
        };
        let exercise = if exercise_fallback {
            generic_exercise(&title)
        } else {
            Exercise {
                title: format!("Practice Exercise: {title}"),
                description: EXERCISE_DESCRIPTION.to_string(),
                solution_hint: EXERCISE_SOLUTION_HINT.to_string(),
                mini_tasks: parsed.tasks,
            }
        };

        tracing::debug!(
            id = %id,
            code_blocks = code_blocks.len(),
            tasks = exercise.mini_tasks.len(),
            quiz_fallback,
            exercise_fallback,
            "assembled lesson"
        );

        Lesson {
            path: format!("/{id}"),
            explanation_html: self.renderer.render(&explanation),
            code_example: code_example(&code_blocks),
            keywords: extract_keywords(&title, &explanation, self.config.keyword_limit as usize),
            quiz,
            exercise,
            interactive_example,
            title,
            id,
        }
    }

    fn quiz_for(&self, id: &str, title: &str, question: String) -> Quiz {
        let subject = title
            .split(". ")
            .nth(1)
            .filter(|s| !s.is_empty())
            .unwrap_or(title);
        let correct = format!("The primary concept of {subject}.");
        let generated = self.shuffler.generate(&correct, title, id);

        Quiz {
            question,
            options: generated.options,
            correct_answer_id: generated.correct_answer_id,
            explanation: format!(
                "The core idea of this section is: {correct} Refer back to the topic for details."
            ),
        }
    }

    fn generic_quiz(&self, id: &str, title: &str) -> Quiz {
        let generated = self
            .shuffler
            .generate(&format!("A fundamental idea from {title}"), title, id);

        Quiz {
            question: format!("What is a key concept covered in \"{title}\"?"),
            options: generated.options,
            correct_answer_id: generated.correct_answer_id,
            explanation: format!("This question covers a core concept from the topic \"{title}\"."),
        }
    }
}

impl Default for LessonAssembler {
    fn default() -> Self {
        let fences = FenceGrammar::default();
        Self {
            config: AssemblerConfig::default(),
            renderer: MarkupRenderer::new(fences.clone()),
            shuffler: OptionShuffler::default(),
            fences,
        }
    }
}

/// Stable lesson id: drop `.md`, drop a leading `N-` ordinal, then turn
/// remaining dots into hyphens (`3.1-intro.md` becomes `3-1-intro`)
#[must_use]
pub fn lesson_id(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    ORDINAL_PREFIX_RE.replace(stem, "").replace('.', "-")
}

/// First level-1 header text and the byte offset right after its line
#[must_use]
pub fn find_title(content: &str) -> Option<(&str, usize)> {
    let caps = TITLE_RE.captures(content)?;
    let title = caps.get(1)?.as_str().trim();
    if title.is_empty() {
        return None;
    }
    Some((title, caps.get(0)?.end()))
}

/// Body between the title and the earliest of the summary heading, the
/// questions heading, a next-lesson link, or the end of the document
#[must_use]
pub fn explanation_region(content: &str, content_start: usize) -> &str {
    let body = &content[content_start..];
    let end = [
        Section::Summary.find_offset(body),
        Section::QuestionsAndTasks.find_offset(body),
        body.find(NEXT_LINK_MARKER),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(body.len());

    body[..end].trim()
}

/// Drop the first `---` rule line and numbered "Learning Objectives" headings
#[must_use]
pub fn tidy_explanation(region: &str) -> String {
    let mut offset = 0;
    let mut text = region.to_string();
    for line in region.split_inclusive('\n') {
        if line.trim() == "---" {
            text = format!("{}{}", &region[..offset], &region[offset + line.len()..]);
            break;
        }
        offset += line.len();
    }

    LEARNING_OBJECTIVES_RE.replace_all(&text, "").trim().to_string()
}

/// Up to `limit` distinct lowercase alphanumeric tokens longer than two
/// characters, title words first, then the first words of the explanation
#[must_use]
pub fn extract_keywords(title: &str, explanation: &str, limit: usize) -> Vec<String> {
    let title_words = title.split(' ').filter(|w| w.chars().count() > 2);
    let body_words = BODY_SEPARATOR_RE
        .split(explanation)
        .filter(|w| w.chars().count() > 2)
        .take(BODY_KEYWORD_CANDIDATES);

    let mut keywords: Vec<String> = Vec::new();
    for word in title_words.chain(body_words) {
        if keywords.len() >= limit {
            break;
        }

        let token: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        if token.chars().count() > 2 && !keywords.contains(&token) {
            keywords.push(token);
        }
    }
    keywords
}

fn code_example(blocks: &[String]) -> CodeExample {
    let description = match blocks.len() {
        0 => "Illustrative code example(s) from this topic:",
        1 => "Illustrative code example:",
        _ => "Multiple code examples from this topic:",
    };

    CodeExample {
        description: description.to_string(),
        code: blocks.join(CODE_BLOCK_SEPARATOR),
        output_description: CODE_OUTPUT_DESCRIPTION.to_string(),
    }
}

fn generic_exercise(title: &str) -> Exercise {
    Exercise {
        title: format!("General Practice for \"{title}\""),
        description: GENERIC_EXERCISE_DESCRIPTION.to_string(),
        solution_hint: GENERIC_EXERCISE_SOLUTION_HINT.to_string(),
        mini_tasks: vec![MiniTask {
            task: GENERIC_TASK.to_string(),
            code: GENERIC_TASK_CODE.to_string(),
            hint: GENERIC_TASK_HINT.to_string(),
        }],
    }
}
