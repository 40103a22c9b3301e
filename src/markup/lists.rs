//! List item markup, run wrapping and merging

use std::sync::LazyLock;

use regex::Regex;

pub const SHALLOW_ITEM_OPEN: &str = r#"<li class="ml-4">"#;
pub const DEEP_ITEM_OPEN: &str = r#"<li class="ml-8">"#;
pub const LIST_OPEN: &str = r#"<ul class="list-disc list-inside mb-4 space-y-1">"#;
pub const NESTED_LIST_OPEN: &str = r#"<ul class="list-disc list-inside ml-4">"#;
pub const LIST_CLOSE: &str = "</ul>";

static SHALLOW_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());
static DEEP_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{2,}- (.*)$").unwrap());
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());
static ADJACENT_LISTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"</ul>\s*<ul class="[^"]*">"#).unwrap());

/// Turn `- `, indented `- ` and `N. ` lines into list items
///
/// Ordered items keep document order; numbering is left to styling.
#[must_use]
pub fn mark_items(text: &str) -> String {
    let text = SHALLOW_ITEM_RE.replace_all(text, format!("{SHALLOW_ITEM_OPEN}${{1}}</li>").as_str());
    let text = DEEP_ITEM_RE.replace_all(&text, format!("{DEEP_ITEM_OPEN}${{1}}</li>").as_str());
    ORDERED_ITEM_RE
        .replace_all(&text, format!("{SHALLOW_ITEM_OPEN}${{1}}</li>").as_str())
        .into_owned()
}

fn is_item(line: &str) -> bool {
    line.starts_with(SHALLOW_ITEM_OPEN) || line.starts_with(DEEP_ITEM_OPEN)
}

fn flush_run(run: &mut Vec<&str>, out: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }

    let open = if run.iter().any(|l| l.starts_with(DEEP_ITEM_OPEN)) {
        NESTED_LIST_OPEN
    } else {
        LIST_OPEN
    };
    out.push(format!("{open}{}{LIST_CLOSE}", run.join("\n")));
    run.clear();
}

/// Wrap each run of contiguous item lines in one list container (the nested
/// class when any item in the run is deep), then merge
/// lists separated only by whitespace so no two containers are adjacent
#[must_use]
pub fn wrap_runs(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_item(line) {
            run.push(line);
        } else {
            flush_run(&mut run, &mut out);
            out.push(line.to_string());
        }
    }
    flush_run(&mut run, &mut out);

    ADJACENT_LISTS_RE.replace_all(&out.join("\n"), "\n").into_owned()
}
