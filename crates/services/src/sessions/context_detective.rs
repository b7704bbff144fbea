//! Context detective: pick the word that fits the blank in a cloze sentence.

use std::collections::BTreeSet;

use vocab_core::model::{VocabularyWord, WordClass};

use crate::error::ActivityError;
use crate::rng::Sampler;

use super::outcome::AnswerOutcome;

/// XP for solving a case on the first try.
const CASE_SOLVED_XP: u32 = 25;

/// Total options shown per case, correct word included.
const OPTION_COUNT: usize = 4;

const VERB_TEMPLATES: &[&str] = &[
    "Students need to _____ the information before writing their essays.",
    "The teacher asked us to _____ the main ideas from the text.",
    "Scientists _____ data to understand patterns and trends.",
    "We must _____ the problem carefully before finding a solution.",
    "The detective will _____ all the evidence from the crime scene.",
];

const ADJECTIVE_TEMPLATES: &[&str] = &[
    "The _____ results showed clear improvement in student performance.",
    "Her _____ explanation helped everyone understand the concept.",
    "The scientist made a _____ discovery that changed everything.",
    "This _____ information is important for our research project.",
    "The student's _____ work impressed the entire class.",
];

const NOUN_TEMPLATES: &[&str] = &[
    "The _____ of the experiment surprised all the researchers.",
    "Students studied the _____ to better understand the topic.",
    "The teacher explained the _____ using simple examples.",
    "This _____ is essential for understanding the subject.",
    "The _____ shows how different concepts are connected.",
];

fn templates_for(class: WordClass) -> &'static [&'static str] {
    match class {
        WordClass::Verb => VERB_TEMPLATES,
        WordClass::Adjective => ADJECTIVE_TEMPLATES,
        WordClass::Noun => NOUN_TEMPLATES,
    }
}

/// One mystery case: a cloze sentence, four options, and the reveal state.
///
/// The case freezes after the first selection; only `advance` produces a new
/// one.
#[derive(Debug, Clone)]
pub struct ContextDetectiveSession {
    sentence: String,
    target: VocabularyWord,
    options: Vec<String>,
    correct: usize,
    selected: Option<usize>,
    cases_solved: u32,
    show_hint: bool,
}

impl ContextDetectiveSession {
    /// Builds a case from the level's words: the target plus three distinct
    /// distractors drawn without replacement, in shuffled order. Levels with
    /// fewer than four distinct words simply show fewer options.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::EmptyPool` if no words are available.
    pub fn start(words: &[VocabularyWord], sampler: &mut Sampler) -> Result<Self, ActivityError> {
        let target = sampler
            .pick(words)
            .or_else(|| words.first())
            .cloned()
            .ok_or(ActivityError::EmptyPool)?;

        let mut seen = BTreeSet::new();
        let mut pool: Vec<String> = words
            .iter()
            .map(|word| word.word().to_string())
            .filter(|word| word.as_str() != target.word() && seen.insert(word.clone()))
            .collect();

        let mut options = vec![target.word().to_string()];
        while options.len() < OPTION_COUNT {
            match sampler.take(&mut pool) {
                Some(distractor) => options.push(distractor),
                None => break,
            }
        }
        sampler.shuffle(&mut options);

        let correct = options
            .iter()
            .position(|option| option == target.word())
            .unwrap_or(0);

        let templates = templates_for(target.class());
        let sentence = sampler
            .pick(templates)
            .copied()
            .unwrap_or(NOUN_TEMPLATES[0])
            .to_string();

        Ok(Self {
            sentence,
            target,
            options,
            correct,
            selected: None,
            cases_solved: 0,
            show_hint: false,
        })
    }

    /// Locks in an option. Exactly one selection per case; afterwards the
    /// session is read-only reveal state until `advance`.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::AlreadyAnswered` after the first selection and
    /// `ActivityError::UnknownOption` for an out-of-range index.
    pub fn submit(&mut self, index: usize) -> Result<AnswerOutcome, ActivityError> {
        if self.selected.is_some() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if index >= self.options.len() {
            return Err(ActivityError::UnknownOption(index));
        }

        self.selected = Some(index);
        if index != self.correct {
            return Ok(AnswerOutcome::try_again("Keep investigating! The clues point elsewhere."));
        }

        self.cases_solved += 1;
        Ok(AnswerOutcome {
            correct: true,
            points: CASE_SOLVED_XP,
            xp: CASE_SOLVED_XP,
            words_learned: 1,
            mastered_word: Some(self.target.word().to_string()),
            feedback: format!("Case solved! {}", self.target.definition()),
            auto_advance: false,
        })
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    #[must_use]
    pub fn target(&self) -> &VocabularyWord {
        &self.target
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option after shuffling.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// True once an option has been chosen and the explanation is showing.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn cases_solved(&self) -> u32 {
        self.cases_solved
    }

    /// Running score for this case.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.cases_solved * CASE_SOLVED_XP
    }

    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }
}
