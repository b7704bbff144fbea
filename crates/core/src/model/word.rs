use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word text cannot be empty")]
    EmptyWord,

    #[error("definition cannot be empty")]
    EmptyDefinition,

    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),
}

/// A single vocabulary entry: the word itself plus its teaching material.
///
/// Immutable once constructed; owned by the catalog and borrowed by sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    word: String,
    definition: String,
    example: String,
    synonyms: Vec<String>,
    difficulty: u8,
}

impl VocabularyWord {
    /// Creates a validated vocabulary entry.
    ///
    /// # Errors
    ///
    /// Returns `WordError` if the word or definition is empty, or the
    /// difficulty is outside 1..=5.
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        synonyms: Vec<String>,
        difficulty: u8,
    ) -> Result<Self, WordError> {
        let word = word.into();
        let definition = definition.into();
        if word.trim().is_empty() {
            return Err(WordError::EmptyWord);
        }
        if definition.trim().is_empty() {
            return Err(WordError::EmptyDefinition);
        }
        if !(1..=5).contains(&difficulty) {
            return Err(WordError::InvalidDifficulty(difficulty));
        }

        Ok(Self {
            word,
            definition,
            example: example.into(),
            synonyms,
            difficulty,
        })
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// The grammatical bucket this word most likely belongs to.
    #[must_use]
    pub fn class(&self) -> WordClass {
        WordClass::classify(&self.word)
    }
}

//
// ─── WORD CLASSIFICATION ───────────────────────────────────────────────────────
//

const VERB_ENDINGS: &[&str] = &["ize", "ise", "ate", "ify", "en"];
const ADJECTIVE_ENDINGS: &[&str] = &["ive", "ous", "ful", "less", "able", "ible", "ant", "ent"];
const NOUN_ENDINGS: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ogy", "ism", "ist"];

const COMMON_VERBS: &[&str] = &[
    "analyze",
    "synthesize",
    "evaluate",
    "compare",
    "contrast",
    "examine",
    "investigate",
    "demonstrate",
    "illustrate",
    "identify",
    "predict",
    "conclude",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "significant",
    "comprehensive",
    "legitimate",
    "substantial",
    "accurate",
    "precise",
    "relevant",
    "appropriate",
    "effective",
    "efficient",
];

/// Heuristic grammatical classification used to pick a cloze sentence
/// template that reads naturally around the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordClass {
    Verb,
    Adjective,
    Noun,
}

impl WordClass {
    /// Classifies a word by suffix pattern, falling back to a small list of
    /// known academic verbs and adjectives, then defaulting to `Noun`.
    #[must_use]
    pub fn classify(word: &str) -> Self {
        let lower = word.to_lowercase();

        if VERB_ENDINGS.iter().any(|suffix| lower.ends_with(suffix)) {
            return Self::Verb;
        }
        if ADJECTIVE_ENDINGS.iter().any(|suffix| lower.ends_with(suffix)) {
            return Self::Adjective;
        }
        if NOUN_ENDINGS.iter().any(|suffix| lower.ends_with(suffix)) {
            return Self::Noun;
        }

        if COMMON_VERBS.contains(&lower.as_str()) {
            return Self::Verb;
        }
        if COMMON_ADJECTIVES.contains(&lower.as_str()) {
            return Self::Adjective;
        }

        Self::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_word(word: &str) -> VocabularyWord {
        VocabularyWord::new(word, "a definition", "An example.", vec![], 1).unwrap()
    }

    #[test]
    fn rejects_empty_word() {
        let err = VocabularyWord::new("  ", "def", "ex", vec![], 1).unwrap_err();
        assert_eq!(err, WordError::EmptyWord);
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let err = VocabularyWord::new("word", "def", "ex", vec![], 6).unwrap_err();
        assert_eq!(err, WordError::InvalidDifficulty(6));
    }

    #[test]
    fn classifies_by_suffix() {
        assert_eq!(WordClass::classify("summarize"), WordClass::Verb);
        assert_eq!(WordClass::classify("ambiguous"), WordClass::Adjective);
        assert_eq!(WordClass::classify("correlation"), WordClass::Noun);
    }

    #[test]
    fn suffix_patterns_win_over_word_lists() {
        // "evaluate" is in the known-verb list but also matches "ate".
        assert_eq!(WordClass::classify("evaluate"), WordClass::Verb);
    }

    #[test]
    fn falls_back_to_known_academic_lists() {
        assert_eq!(WordClass::classify("compare"), WordClass::Verb);
    }

    #[test]
    fn defaults_to_noun() {
        assert_eq!(WordClass::classify("evidence"), WordClass::Noun);
        assert_eq!(build_word("evidence").class(), WordClass::Noun);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(WordClass::classify("Analyze"), WordClass::Verb);
    }
}
