//! Recovers the quiz prompt and exercise tasks from a "Questions & Tasks" region
//!
//! The region is scanned line by line, blank lines dropped. A fence toggles a
//! code block; a `Task:` line opens a task that either stands alone or claims
//! the code block right after it; the first numbered line is the quiz prompt.

use std::sync::LazyLock;

use regex::Regex;

use super::sections;
use crate::models::MiniTask;

/// Hint attached to every recovered task
pub const TASK_HINT: &str = "Review the section's content for guidance.";

static NUMBERED_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. ").unwrap());
static ORDINAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Quiz prompt and tasks found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionsAndTasks {
    /// First numbered line, ordinal and bold markers removed; empty if none
    pub question: String,
    /// Tasks in encounter order
    pub tasks: Vec<MiniTask>,
}

/// A task whose description is still being accumulated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PendingTask {
    /// The `Task:` line that opened this task, absent once it has been emitted
    heading: Option<String>,
    text: String,
}

impl PendingTask {
    fn opened_by(heading: &str, text: &str) -> Self {
        Self {
            heading: Some(heading.to_string()),
            text: text.to_string(),
        }
    }

    /// Still inside the task section, nothing pending
    fn residual() -> Self {
        Self::default()
    }

    fn append(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    fn title(&self) -> Option<String> {
        self.text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| self.heading.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ScanState {
    #[default]
    Idle,
    InTask(PendingTask),
    InCodeBlock {
        code: String,
        task: Option<PendingTask>,
    },
}

#[derive(Debug, Default)]
struct Scanner {
    state: ScanState,
    question: Option<String>,
    tasks: Vec<MiniTask>,
}

impl Scanner {
    fn step(&mut self, line: &str, next: Option<&str>) {
        let trimmed = line.trim();
        let state = std::mem::take(&mut self.state);

        self.state = match state {
            ScanState::InCodeBlock { code, task } if is_fence(trimmed) => match task {
                Some(task) => {
                    if let Some(title) = task.title() {
                        self.emit(title, code);
                    }
                    ScanState::InTask(PendingTask::residual())
                }
                None => ScanState::Idle,
            },
            ScanState::InCodeBlock { mut code, task } => {
                code.push_str(line);
                code.push('\n');
                ScanState::InCodeBlock { code, task }
            }
            state if is_fence(trimmed) => ScanState::InCodeBlock {
                code: String::new(),
                task: match state {
                    ScanState::InTask(task) => Some(task),
                    _ => None,
                },
            },
            state => {
                if let Some(rest) = task_marker(trimmed) {
                    self.open_task(trimmed, rest, next)
                } else {
                    match state {
                        ScanState::InTask(mut task)
                            if trimmed.starts_with("//") || trimmed.starts_with("- ") =>
                        {
                            task.append(trimmed);
                            ScanState::InTask(task)
                        }
                        other => {
                            self.capture_question(trimmed);
                            other
                        }
                    }
                }
            }
        };
    }

    fn open_task(&mut self, line: &str, rest: &str, next: Option<&str>) -> ScanState {
        let next_opens_code = next.is_some_and(|n| is_fence(n.trim()));

        if !rest.is_empty() && !next_opens_code {
            self.emit(rest.to_string(), String::new());
            return ScanState::InTask(PendingTask::residual());
        }

        ScanState::InTask(PendingTask::opened_by(&line.replace("**", ""), rest))
    }

    fn capture_question(&mut self, line: &str) {
        if self.question.is_none() && NUMBERED_LINE_RE.is_match(line) {
            let question = ORDINAL_PREFIX_RE.replace(line, "").replace("**", "");
            self.question = Some(question.trim().to_string());
        }
    }

    fn emit(&mut self, task: String, code: String) {
        tracing::trace!(task = %task, has_code = !code.is_empty(), "recovered task");
        self.tasks.push(MiniTask {
            task,
            code,
            hint: TASK_HINT.to_string(),
        });
    }

    fn finish(self) -> QuestionsAndTasks {
        QuestionsAndTasks {
            question: self.question.unwrap_or_default(),
            tasks: self.tasks,
        }
    }
}

fn is_fence(line: &str) -> bool {
    line.starts_with("```")
}

/// Remainder of a `Task:` (or `**Task:**`) line
fn task_marker(line: &str) -> Option<&str> {
    line.strip_prefix("**Task:**")
        .or_else(|| line.strip_prefix("Task:"))
        .map(str::trim)
}

/// Parse the "Questions & Tasks" region of a whole document
#[must_use]
pub fn parse(document: &str) -> QuestionsAndTasks {
    parse_region(sections::questions_and_tasks(document))
}

/// Parse an already extracted region
#[must_use]
pub fn parse_region(region: &str) -> QuestionsAndTasks {
    let lines: Vec<&str> = region
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();

    let mut scanner = Scanner::default();
    for (i, line) in lines.iter().enumerate() {
        scanner.step(line, lines.get(i + 1).copied());
    }
    scanner.finish()
}
