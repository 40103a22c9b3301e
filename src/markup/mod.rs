//! Markup-to-HTML renderer for the lesson dialect
//!
//! Supports the subset the lesson documents use: headers 1-3, bold, italic,
//! links, flat and one-level nested lists, blockquotes, fenced and inline
//! code, horizontal rules and paragraphs. Rendering is total: malformed input
//! degrades to literal text instead of failing.
//!
//! The pipeline protects code first (fenced blocks, then inline spans) behind
//! placeholder tokens, applies line and inline substitutions to what remains,
//! wraps paragraphs, and finally restores the protected code escaped exactly
//! once.

pub mod escape;
pub mod lists;
pub mod placeholders;

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::fences::{FENCE_PAIR_RE, FenceGrammar};
use escape::escape_html;
use placeholders::Placeholders;

pub const H1_OPEN: &str = r#"<h1 class="text-3xl font-bold mb-4 text-sky-900">"#;
pub const H2_OPEN: &str = r#"<h2 class="text-2xl font-bold mb-3 text-sky-800">"#;
pub const H3_OPEN: &str = r#"<h3 class="text-xl font-semibold mb-2 text-sky-700">"#;
pub const PARAGRAPH_OPEN: &str = r#"<p class="mb-4">"#;
pub const BLOCKQUOTE_OPEN: &str = r#"<blockquote class="border-l-4 border-gray-300 pl-4 italic my-4">"#;
pub const HORIZONTAL_RULE: &str = r#"<hr class="my-4" />"#;
pub const INLINE_CODE_OPEN: &str = r#"<code class="bg-gray-100 text-red-600 px-1 py-0.5 rounded text-sm">"#;

/// Chunks starting with these are already block markup
const BLOCK_PREFIXES: [&str; 5] = ["<h", "<ul", "<blockquote", "<pre", "<table"];

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());
static EMPTY_PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<p class="mb-4">\s*</p>"#).unwrap());
static EMPTY_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<ul class="[^"]*">\s*</ul>"#).unwrap());
static RULE_BEFORE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<hr class="my-4" />\s*<h"#).unwrap());

static DEFAULT_RENDERER: LazyLock<MarkupRenderer> = LazyLock::new(MarkupRenderer::default);

/// Render lesson markup with the default fence grammar
#[must_use]
pub fn render(markup: &str) -> String {
    DEFAULT_RENDERER.render(markup)
}

/// Stateless markup renderer parameterized by its fence grammar
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    fences: FenceGrammar,
}

impl MarkupRenderer {
    #[must_use]
    pub const fn new(fences: FenceGrammar) -> Self {
        Self { fences }
    }

    /// Render `markup` to HTML; never fails
    #[must_use]
    pub fn render(&self, markup: &str) -> String {
        let text = markup.replace("\r\n", "\n");

        let mut blocks = Placeholders::new("CODE_BLOCK");
        let text = FENCE_PAIR_RE
            .replace_all(&text, |caps: &regex::Captures<'_>| blocks.protect(&caps[0]))
            .into_owned();

        let mut inline = Placeholders::new("INLINE_CODE");
        let text = INLINE_CODE_RE
            .replace_all(&text, |caps: &regex::Captures<'_>| inline.protect(&caps[1]))
            .into_owned();

        let html = substitute_headers(&text);
        let html = substitute_inline(&html);
        let html = lists::wrap_runs(&lists::mark_items(&html));
        let html = BLOCKQUOTE_RE
            .replace_all(&html, format!("{BLOCKQUOTE_OPEN}${{1}}</blockquote>").as_str())
            .into_owned();
        let html = wrap_paragraphs(&html, blocks.prefix());

        let html = inline.restore(html, |code| {
            format!("{INLINE_CODE_OPEN}{}</code>", escape_html(code))
        });
        let html = blocks.restore(html, |block| self.restore_block(block));

        cleanup(&html)
    }

    fn restore_block(&self, block: &str) -> String {
        match self.fences.parse_block(block) {
            Some(parsed) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                parsed.language,
                escape_html(parsed.body)
            ),
            None => block.to_string(),
        }
    }
}

/// Longest prefix first; only the first `# ` line becomes a level-1 header
fn substitute_headers(text: &str) -> String {
    let text = H3_RE.replace_all(text, format!("{H3_OPEN}${{1}}</h3>").as_str());
    let text = H2_RE.replace_all(&text, format!("{H2_OPEN}${{1}}</h2>").as_str());
    H1_RE
        .replace(&text, format!("{H1_OPEN}${{1}}</h1>").as_str())
        .into_owned()
}

/// Bold before italic, then links
fn substitute_inline(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>${1}</em>");
    LINK_RE
        .replace_all(&text, r#"<a href="${2}" class="text-blue-600 hover:underline">${1}</a>"#)
        .into_owned()
}

fn wrap_paragraphs(html: &str, block_token_prefix: &str) -> String {
    html.split("\n\n")
        .map(|chunk| {
            let head = chunk.trim_start();
            if head.is_empty()
                || BLOCK_PREFIXES.iter().any(|p| head.starts_with(p))
                || head.starts_with(block_token_prefix)
            {
                chunk.to_string()
            } else if chunk.trim() == "---" {
                HORIZONTAL_RULE.to_string()
            } else {
                format!("{PARAGRAPH_OPEN}{chunk}</p>")
            }
        })
        .collect()
}

fn cleanup(html: &str) -> String {
    let html = EMPTY_PARAGRAPH_RE.replace_all(html, "");
    let html = EMPTY_LIST_RE.replace_all(&html, "");
    let html = RULE_BEFORE_HEADING_RE.replace_all(&html, format!("{HORIZONTAL_RULE}<h").as_str());
    html.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_emphasis() {
        let html = render("# Hello\n\nThis is **bold** and *italic*.");
        assert_eq!(
            html,
            format!(
                "{H1_OPEN}Hello</h1>{PARAGRAPH_OPEN}This is <strong>bold</strong> and <em>italic</em>.</p>"
            )
        );
    }

    #[test]
    fn test_only_first_level_one_header() {
        let html = render("# One\n\n# Two\n\n## Sub\n\n### Deeper");
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains(&format!("{PARAGRAPH_OPEN}# Two</p>")));
        assert!(html.contains(&format!("{H2_OPEN}Sub</h2>")));
        assert!(html.contains(&format!("{H3_OPEN}Deeper</h3>")));
    }

    #[test]
    fn test_horizontal_rule() {
        let html = render("Intro\n\n---\n\nOutro");
        assert_eq!(
            html,
            format!("{PARAGRAPH_OPEN}Intro</p>{HORIZONTAL_RULE}{PARAGRAPH_OPEN}Outro</p>")
        );
        assert!(!html.contains("<p class=\"mb-4\">---"));
    }

    #[test]
    fn test_rule_then_heading() {
        let html = render("---\n\n## Next");
        assert_eq!(html, format!("{HORIZONTAL_RULE}{H2_OPEN}Next</h2>"));
    }

    #[test]
    fn test_link() {
        let html = render("See [docs](https://nextjs.org/docs?a=1&b=2).");
        assert!(html.contains(
            r#"<a href="https://nextjs.org/docs?a=1&b=2" class="text-blue-600 hover:underline">docs</a>"#
        ));
    }

    #[test]
    fn test_fenced_block_is_escaped_and_untouched() {
        let html = render("Run:\n\n```js\nconst a = **b** < c && '# x';\n```\n\nDone.");
        assert!(html.contains(
            "<pre><code class=\"language-js\">const a = **b** &lt; c &amp;&amp; &#39;# x&#39;;</code></pre>"
        ));
        assert!(!html.contains("<strong>b</strong>"));
        assert!(!html.contains("__CODE_BLOCK_"));
    }

    #[test]
    fn test_unrecognized_block_is_verbatim() {
        let html = render("```cobol\nDISPLAY <X>.\n```");
        assert_eq!(html, "```cobol\nDISPLAY <X>.\n```");
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let html = render("Start ```js\nnot code");
        assert!(html.contains("```js"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn test_inline_code_escaped_once() {
        let html = render("Use `<Link href=\"/\">` here.");
        assert_eq!(
            html,
            format!(
                "{PARAGRAPH_OPEN}Use {INLINE_CODE_OPEN}&lt;Link href=&quot;/&quot;&gt;</code> here.</p>"
            )
        );
    }

    #[test]
    fn test_inline_code_not_emphasized() {
        let html = render("Glob `**/*.md` files");
        assert!(html.contains("**/*.md</code>"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_list_wrapping() {
        let html = render("Intro\n\n- one\n- two\n  - nested\n\n1. first\n2. second");
        assert_eq!(html.matches("<ul").count(), 1);
        assert!(html.contains("<li class=\"ml-8\">nested</li>"));
        assert!(html.contains("<li class=\"ml-4\">second</li>"));
        assert!(html.contains(lists::NESTED_LIST_OPEN));
        assert!(!html.contains("</ul><ul"));
    }

    #[test]
    fn test_nested_item_under_parent_selects_nested_wrapper() {
        let html = render("- parent\n  - child\n- sibling");
        assert!(html.starts_with(lists::NESTED_LIST_OPEN));
        assert_eq!(html.matches("<ul").count(), 1);
    }

    #[test]
    fn test_blockquote_per_line() {
        let html = render("> **Goal:** learn\n> more");
        assert_eq!(html.matches("<blockquote").count(), 2);
        assert!(html.contains("<strong>Goal:</strong> learn"));
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n\n"), "");
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let inputs = [
            "**unclosed bold",
            "*",
            "[text](",
            "`",
            "``````",
            "```\n```",
            "# \n## \n### ",
            "  - \n- \n1. ",
            "> ",
            "é**ü*ß`∂`",
        ];
        for input in inputs {
            let _ = render(input);
        }
    }

    #[test]
    fn test_rendering_output_again_does_not_double_escape() {
        let once = render("# T\n\n```html\n<div class=\"x\">a & b</div>\n```\n\nUse `<br>` tags.");
        let twice = render(&once);
        assert!(once.contains("&lt;div class=&quot;x&quot;&gt;a &amp; b&lt;/div&gt;"));
        assert!(twice.contains("&lt;div class=&quot;x&quot;&gt;a &amp; b&lt;/div&gt;"));
        assert!(!twice.contains("&amp;lt;"));
        assert!(!twice.contains("&amp;amp;"));
    }

    #[test]
    fn test_crlf_input() {
        let html = render("# Title\r\n\r\nBody");
        assert_eq!(html, format!("{H1_OPEN}Title</h1>{PARAGRAPH_OPEN}Body</p>"));
    }

    #[test]
    fn test_custom_grammar() {
        let renderer = MarkupRenderer::new(FenceGrammar::new(&["rust".to_string()]).unwrap());
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert_eq!(html, "<pre><code class=\"language-rust\">fn main() {}</code></pre>");
    }
}
