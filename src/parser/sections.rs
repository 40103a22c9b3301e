//! Marker-delimited regions of an unstructured document

use std::sync::LazyLock;

use regex::Regex;

/// Link that closes a lesson and points at the next one
pub const NEXT_LINK_MARKER: &str = "[Next:";

static QUESTIONS_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## +(?:\d+(?:\.\d+)*\.? +)?Questions & Tasks:?").unwrap()
});
static SUMMARY_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## +(?:\d+(?:\.\d+)*\.? +)?Summary:?").unwrap());

/// Named level-2 sections a lesson document may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    QuestionsAndTasks,
    Summary,
}

impl Section {
    fn heading_re(self) -> &'static Regex {
        match self {
            Self::QuestionsAndTasks => &QUESTIONS_HEADING_RE,
            Self::Summary => &SUMMARY_HEADING_RE,
        }
    }

    /// The exact heading line text of the first such section in `text`
    ///
    /// Matches `## Summary`, `## Summary:` and numbered forms like
    /// `## 5. Summary`. The returned text can be used as a marker.
    #[must_use]
    pub fn find_marker(self, text: &str) -> Option<&str> {
        self.heading_re().find(text).map(|m| m.as_str())
    }

    /// Byte offset of the first such heading in `text`
    #[must_use]
    pub fn find_offset(self, text: &str) -> Option<usize> {
        self.heading_re().find(text).map(|m| m.start())
    }
}

/// Text after `start_marker` up to the first `end_marker` that follows it
///
/// Returns an empty string when the start marker is absent. Without an end
/// marker, or when it does not occur after the start, the region runs to the
/// end of the document. The result is trimmed.
#[must_use]
pub fn extract_section<'a>(document: &'a str, start_marker: &str, end_marker: Option<&str>) -> &'a str {
    let Some(start) = document.find(start_marker) else {
        return "";
    };

    let rest = &document[start + start_marker.len()..];
    let end = end_marker
        .filter(|m| !m.is_empty())
        .and_then(|m| rest.find(m))
        .unwrap_or(rest.len());

    rest[..end].trim()
}

/// The "Questions & Tasks" region, bounded below by the next-lesson link
#[must_use]
pub fn questions_and_tasks(document: &str) -> &str {
    Section::QuestionsAndTasks
        .find_marker(document)
        .map_or("", |marker| extract_section(document, marker, Some(NEXT_LINK_MARKER)))
}
