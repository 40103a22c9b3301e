//! Fenced code block grammar shared by the renderer and the collector

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_CODE_LANGUAGES;
use crate::error::{ParseError, ParseResult};

/// A complete pair of triple-backtick fences, non-greedy across lines
pub static FENCE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static DEFAULT_GRAMMAR: LazyLock<FenceGrammar> = LazyLock::new(|| {
    let languages: Vec<String> = DEFAULT_CODE_LANGUAGES
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    FenceGrammar::new(&languages).unwrap()
});

/// A fenced block split into its language tag and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Recognized language tag, empty when the fence carries none
    pub language: &'a str,
    /// Text between the opening line and the closing fence
    pub body: &'a str,
}

/// Recognizes the shape of one fenced block for a fixed set of language tags
#[derive(Debug, Clone)]
pub struct FenceGrammar {
    shape: Regex,
}

impl FenceGrammar {
    /// Build a grammar recognizing the given language tags
    ///
    /// # Errors
    ///
    /// Returns an error if the tags do not compile into a valid pattern
    pub fn new(languages: &[String]) -> ParseResult<Self> {
        let mut tags: Vec<&str> = languages
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        // Longer tags first so `tsx` is tried before `ts`.
        tags.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tags.dedup();

        let alternation = tags
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = if alternation.is_empty() {
            r"\A```()\s*\n((?s:.*?))\n```\z".to_string()
        } else {
            format!(r"\A```(?:({alternation}))?\s*\n((?s:.*?))\n```\z")
        };

        let shape = Regex::new(&pattern).map_err(|e| ParseError::invalid_pattern(e.to_string()))?;
        Ok(Self { shape })
    }

    /// Split a complete fenced block (fences included) into tag and body
    ///
    /// Returns `None` when the opening line carries an unrecognized tag or the
    /// block has no body line.
    #[must_use]
    pub fn parse_block<'a>(&self, block: &'a str) -> Option<FencedBlock<'a>> {
        let caps = self.shape.captures(block)?;
        Some(FencedBlock {
            language: caps.get(1).map_or("", |m| m.as_str()),
            body: caps.get(2).map_or("", |m| m.as_str()),
        })
    }

    /// Every fenced block body in document order, trimmed
    ///
    /// Blocks with an unrecognized tag still count; their opening line is
    /// dropped and the rest is kept.
    #[must_use]
    pub fn collect_all(&self, document: &str) -> Vec<String> {
        let blocks: Vec<String> = FENCE_PAIR_RE
            .find_iter(document)
            .map(|m| {
                let block = m.as_str();
                self.parse_block(block).map_or_else(
                    || loose_body(block).trim().to_string(),
                    |parsed| parsed.body.trim().to_string(),
                )
            })
            .collect();

        tracing::trace!(count = blocks.len(), "collected fenced blocks");
        blocks
    }
}

impl Default for FenceGrammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

/// Body of a block whose opening line was not recognized
fn loose_body(block: &str) -> &str {
    let inner = &block[3..block.len() - 3];
    match inner.split_once('\n') {
        Some((_, rest)) => rest,
        None => inner,
    }
}
