//! Assembly configuration

use serde::{Deserialize, Serialize};

/// Fence language tags recognized out of the box
pub const DEFAULT_CODE_LANGUAGES: &[&str] = &[
    "bash",
    "javascript",
    "js",
    "typescript",
    "ts",
    "toml",
    "dockerfile",
    "css",
    "html",
    "tsx",
    "jsx",
    "json",
    "sh",
    "shell",
    "text",
];

/// How quiz options are ordered on each build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Fresh process-wide randomness; the correct answer id varies across builds
    #[default]
    Random,
    /// Seeded from the lesson id; identical builds yield identical quizzes
    SeededById,
}

/// Configuration for [`crate::assembler::LessonAssembler`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Quiz option ordering
    pub shuffle: ShuffleMode,
    /// Recognized fence language tags
    pub code_languages: Vec<String>,
    /// Maximum number of keywords per lesson
    pub keyword_limit: u32,
}

impl AssemblerConfig {
    /// Default config with reproducible quiz ordering
    #[must_use]
    pub fn reproducible() -> Self {
        Self {
            shuffle: ShuffleMode::SeededById,
            ..Self::default()
        }
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            shuffle: ShuffleMode::default(),
            code_languages: DEFAULT_CODE_LANGUAGES
                .iter()
                .map(std::string::ToString::to_string)
                .collect(),
            keyword_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssemblerConfig::default();
        assert_eq!(config.shuffle, ShuffleMode::Random);
        assert_eq!(config.keyword_limit, 5);
        assert!(config.code_languages.iter().any(|l| l == "dockerfile"));
    }

    #[test]
    fn test_reproducible_config() {
        let config = AssemblerConfig::reproducible();
        assert_eq!(config.shuffle, ShuffleMode::SeededById);
        assert_eq!(config.code_languages.len(), DEFAULT_CODE_LANGUAGES.len());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let mut partial = std::collections::BTreeMap::new();
        partial.insert("keyword_limit".to_string(), 3u32);
        let bytes = serde_cbor::to_vec(&partial).unwrap();

        let decoded: AssemblerConfig = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(decoded.keyword_limit, 3);
        assert_eq!(decoded.shuffle, ShuffleMode::Random);
        assert_eq!(decoded.code_languages.len(), DEFAULT_CODE_LANGUAGES.len());
    }
}
