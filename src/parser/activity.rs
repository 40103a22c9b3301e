//! Interactive activity recovered from a numbered "Activity" heading

use std::sync::LazyLock;

use regex::Regex;

use crate::models::InteractiveExample;

/// Line marking the goal statement of an activity, never a task
pub const GOAL_MARKER: &str = "> **Goal:**";

pub const GENERIC_ACTIVITY_DESCRIPTION: &str =
    "Experiment with the concepts presented in this topic.";

pub const GENERIC_ACTIVITY_TASKS: [&str; 3] = [
    "Review the main explanations and code examples.",
    "Consider how these concepts could be applied in a real-world Next.js application.",
    "If code is provided, try to run it locally and modify it to see the effects.",
];

static ACTIVITY_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## \d+\. (?:Project )?Activity: ([^\n]+)\n").unwrap());
static NUMBERED_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## \d+\. ").unwrap());
static ORDINAL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. ").unwrap());

/// Title and body of the first activity section in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySection<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Locate the first activity heading that has a body
///
/// The body runs to the next numbered heading, a `---` rule, or the end of
/// the document, whichever comes first.
#[must_use]
pub fn find_activity(document: &str) -> Option<ActivitySection<'_>> {
    ACTIVITY_HEADING_RE.captures_iter(document).find_map(|caps| {
        let heading = caps.get(0)?;
        let title = caps.get(1)?.as_str().trim();

        let rest = &document[heading.end()..];
        let first = rest.chars().next()?.len_utf8();
        let tail = &rest[first..];

        let end = [
            NUMBERED_HEADING_RE.find(tail).map(|m| m.start()),
            tail.find("---"),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(tail.len());

        Some(ActivitySection {
            title,
            body: rest[..first + end].trim(),
        })
    })
}

fn strip_list_marker(line: &str) -> String {
    let line = line.trim();
    let line = line.strip_prefix("- ").unwrap_or(line);
    ORDINAL_PREFIX_RE.replace(line, "").trim().to_string()
}

/// Derive the interactive example of a document
///
/// Always yields at least one task; without an activity section a generic
/// study-review activity is returned.
#[must_use]
pub fn extract(document: &str) -> InteractiveExample {
    let Some(section) = find_activity(document) else {
        tracing::trace!("no activity section, using generic activity");
        return generic();
    };

    let mut tasks: Vec<String> = section
        .body
        .split('\n')
        .filter(|line| line.trim().chars().count() > 5 && !line.contains(GOAL_MARKER))
        .map(strip_list_marker)
        .collect();

    if tasks.is_empty() {
        let first_line = section.body.split('\n').next().unwrap_or_default();
        tasks.push(first_line.trim().to_string());
    }

    InteractiveExample {
        description: format!("{}.", section.title),
        tasks,
    }
}

/// The fallback activity
#[must_use]
pub fn generic() -> InteractiveExample {
    InteractiveExample {
        description: GENERIC_ACTIVITY_DESCRIPTION.to_string(),
        tasks: GENERIC_ACTIVITY_TASKS
            .iter()
            .map(std::string::ToString::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTFOLIO: &str = "# 3.1 Intro\n\n---\n\n## 4. Project Activity: Start Your Portfolio!\n\n\
> **Goal:** Think about what you want to showcase.\n\n\
- What sections will your portfolio have?\n\
- What information do you want to highlight?\n\n\
In the next session, you will build it!\n\n---\n\n## 5. Summary\n- Done";

    #[test]
    fn test_activity_with_list() {
        let activity = extract(PORTFOLIO);
        assert_eq!(activity.description, "Start Your Portfolio!.");
        assert_eq!(
            activity.tasks,
            vec![
                "What sections will your portfolio have?",
                "What information do you want to highlight?",
                "In the next session, you will build it!",
            ]
        );
    }

    #[test]
    fn test_body_stops_at_numbered_heading() {
        let doc = "## 7. Activity: Explore Features\n1. Open the dev tools panel\n## 8. Summary\n- not a task";
        let activity = extract(doc);
        assert_eq!(activity.description, "Explore Features.");
        assert_eq!(activity.tasks, vec!["Open the dev tools panel"]);
    }

    #[test]
    fn test_body_runs_to_end() {
        let doc = "## 5. Activity: Customize Your Pages\n- Edit your homepage and about page.";
        let activity = extract(doc);
        assert_eq!(activity.tasks, vec!["Edit your homepage and about page."]);
    }

    #[test]
    fn test_short_lines_fall_back_to_first_line() {
        let doc = "## 2. Activity: Tiny\nGo!\nRun\n---\n";
        let activity = extract(doc);
        assert_eq!(activity.description, "Tiny.");
        assert_eq!(activity.tasks, vec!["Go!"]);
    }

    #[test]
    fn test_no_activity_is_generic() {
        let activity = extract("# Plain\n\nNo activity here.");
        assert_eq!(activity.description, GENERIC_ACTIVITY_DESCRIPTION);
        assert_eq!(activity.tasks.len(), 3);
        assert_eq!(
            activity.tasks[1],
            "Consider how these concepts could be applied in a real-world Next.js application."
        );
    }

    #[test]
    fn test_unnumbered_heading_is_not_an_activity() {
        let activity = extract("## Activity: Missing Ordinal\n- Some long enough task\n");
        assert_eq!(activity, generic());
    }
}
