//! Protect-then-restore side table for spans the renderer must not touch

use uuid::Uuid;

/// Ordered mapping from placeholder token to the original text it replaced
///
/// Tokens carry a per-table nonce so no document text can collide with them.
#[derive(Debug, Clone)]
pub struct Placeholders {
    prefix: String,
    entries: Vec<(String, String)>,
}

impl Placeholders {
    /// Create an empty table whose tokens read `__<KIND>_<nonce>_<n>__`
    #[must_use]
    pub fn new(kind: &str) -> Self {
        Self {
            prefix: format!("__{kind}_{}_", Uuid::new_v4().simple()),
            entries: Vec::new(),
        }
    }

    /// Remember `original` and return the token standing in for it
    pub fn protect(&mut self, original: impl Into<String>) -> String {
        let token = format!("{}{}__", self.prefix, self.entries.len());
        self.entries.push((token.clone(), original.into()));
        token
    }

    /// Common prefix of every token in this table
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace each token in `text` with `restore(original)`, in insertion order
    #[must_use]
    pub fn restore<F>(&self, text: String, restore: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.entries
            .iter()
            .fold(text, |acc, (token, original)| {
                acc.replacen(token.as_str(), &restore(original), 1)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_and_restore() {
        let mut table = Placeholders::new("INLINE_CODE");
        let a = table.protect("x < y");
        let b = table.protect("z");
        let text = format!("first {a} then {b}");

        let restored = table.restore(text, |s| format!("[{s}]"));
        assert_eq!(restored, "first [x < y] then [z]");
    }

    #[test]
    fn test_tokens_are_distinct_and_prefixed() {
        let mut table = Placeholders::new("CODE_BLOCK");
        let tokens: Vec<String> = (0..12).map(|i| table.protect(i.to_string())).collect();

        assert_eq!(table.len(), 12);
        assert!(tokens.iter().all(|t| t.starts_with(table.prefix())));
        assert!(!tokens[10].contains(&tokens[1]));
    }

    #[test]
    fn test_tables_use_different_nonces() {
        assert_ne!(
            Placeholders::new("CODE_BLOCK").prefix(),
            Placeholders::new("CODE_BLOCK").prefix()
        );
    }

    #[test]
    fn test_restore_missing_token_is_noop() {
        let mut table = Placeholders::new("CODE_BLOCK");
        table.protect("gone");
        assert_eq!(table.restore("nothing".to_string(), str::to_string), "nothing");
    }
}
