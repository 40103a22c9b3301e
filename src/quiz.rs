//! Quiz option generation

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use serde::{Deserialize, Serialize};

use crate::config::ShuffleMode;
use crate::models::{Quiz, QuizOption};

/// Option ids, assigned positionally after the shuffle
pub const OPTION_IDS: [&str; 4] = ["a", "b", "c", "d"];

/// Four shuffled options and the id of the correct one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOptions {
    pub options: Vec<QuizOption>,
    pub correct_answer_id: String,
}

/// Build the correct answer plus three distractors about `topic_title`,
/// shuffle them with `rng`, then label them `a..d` in their new order
pub fn generate_quiz_options<R: Rng + ?Sized>(
    correct_text: &str,
    topic_title: &str,
    rng: &mut R,
) -> GeneratedOptions {
    let mut texts = [
        correct_text.to_string(),
        format!("An incorrect option related to {topic_title} (B)"),
        format!("Another incorrect option related to {topic_title} (C)"),
        format!("A misleading option about {topic_title} (D)"),
    ];

    // SliceRandom::shuffle is an in-place Fisher-Yates shuffle.
    texts.shuffle(rng);

    let options: Vec<QuizOption> = OPTION_IDS
        .iter()
        .zip(texts)
        .map(|(id, text)| QuizOption::new(*id, text))
        .collect();

    let correct_answer_id = options
        .iter()
        .find(|o| o.text == correct_text)
        .map_or_else(|| OPTION_IDS[0].to_string(), |o| o.id.clone());

    GeneratedOptions {
        options,
        correct_answer_id,
    }
}

/// Chooses the random source for option shuffles
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionShuffler {
    mode: ShuffleMode,
}

impl OptionShuffler {
    #[must_use]
    pub const fn new(mode: ShuffleMode) -> Self {
        Self { mode }
    }

    /// Generate options for the lesson identified by `lesson_id`
    #[must_use]
    pub fn generate(&self, correct_text: &str, topic_title: &str, lesson_id: &str) -> GeneratedOptions {
        match self.mode {
            ShuffleMode::Random => {
                generate_quiz_options(correct_text, topic_title, &mut rand::thread_rng())
            }
            ShuffleMode::SeededById => {
                let mut rng = StdRng::seed_from_u64(seed_for(lesson_id));
                generate_quiz_options(correct_text, topic_title, &mut rng)
            }
        }
    }
}

/// A hand-written quiz that replaces the generated one for a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct QuizOverride {
    pub question: String,
    /// Text of the correct answer; used to generate options when none are fixed
    pub correct_answer: String,
    pub explanation: String,
    /// Fixed options shown in this order, instead of generated ones
    #[serde(default)]
    pub options: Option<Vec<QuizOption>>,
    /// Correct id among the fixed options
    #[serde(default)]
    pub correct_answer_id: Option<String>,
}

impl QuizOverride {
    /// Build the replacement quiz for `lesson_id`
    ///
    /// With fixed options the correct id is the explicit one if given, else
    /// the option whose text equals `correct_answer`, else the first option.
    #[must_use]
    pub fn to_quiz(&self, topic_title: &str, lesson_id: &str, shuffler: &OptionShuffler) -> Quiz {
        let (options, correct_answer_id) = match &self.options {
            Some(options) if !options.is_empty() => {
                let correct_answer_id = self
                    .correct_answer_id
                    .clone()
                    .or_else(|| {
                        options
                            .iter()
                            .find(|o| o.text == self.correct_answer)
                            .map(|o| o.id.clone())
                    })
                    .unwrap_or_else(|| options[0].id.clone());
                (options.clone(), correct_answer_id)
            }
            _ => {
                let generated = shuffler.generate(&self.correct_answer, topic_title, lesson_id);
                (generated.options, generated.correct_answer_id)
            }
        };

        Quiz {
            question: self.question.clone(),
            options,
            correct_answer_id,
            explanation: self.explanation.clone(),
        }
    }
}

/// 64-bit FNV-1a of the lesson id, stable across platforms and releases
fn seed_for(lesson_id: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    lesson_id
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
