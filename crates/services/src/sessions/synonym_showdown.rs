//! Synonym showdown: select every synonym of the target word, dodging decoys.

use std::collections::BTreeSet;

use vocab_core::catalog::SynonymBattle;
use vocab_core::model::VocabularyWord;

use crate::error::ActivityError;
use crate::rng::Sampler;

use super::outcome::AnswerOutcome;

/// Fixed bonus for an exact-set answer.
const PERFECT_POINTS: u32 = 75;
/// Per-correct-selection credit when correct selections outnumber mistakes.
const PARTIAL_POINTS_EACH: u32 = 20;
/// Per-correct-selection credit otherwise.
const MINIMAL_POINTS_EACH: u32 = 10;

/// Synonyms per battle (the target's first three).
const SYNONYM_COUNT: usize = 3;
const DECOY_COUNT: usize = 3;

/// One battle: the target word, its synonym set, sampled decoys, and the
/// student's toggled selection.
#[derive(Debug, Clone)]
pub struct SynonymShowdownSession {
    target_word: String,
    definition: String,
    synonyms: Vec<String>,
    decoys: Vec<String>,
    choices: Vec<String>,
    selected: BTreeSet<String>,
    score: u32,
    feedback: String,
    show_hint: bool,
    submitted: bool,
}

impl SynonymShowdownSession {
    /// Samples a battle from the level's words, falling back to a curated
    /// battle template when the level has none.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::EmptyPool` if neither source has material.
    pub fn start(
        words: &[VocabularyWord],
        templates: &[SynonymBattle],
        sampler: &mut Sampler,
    ) -> Result<Self, ActivityError> {
        if let Some(target) = sampler.pick(words).cloned() {
            let synonyms: Vec<String> = target.synonyms().iter().take(SYNONYM_COUNT).cloned().collect();
            let decoys = pick_decoys(&target, words, DECOY_COUNT, sampler);
            return Ok(Self::assemble(
                target.word().to_string(),
                target.definition().to_string(),
                synonyms,
                decoys,
                sampler,
            ));
        }

        let template = sampler.pick(templates).cloned().ok_or(ActivityError::EmptyPool)?;
        Ok(Self::assemble(
            template.target_word().to_string(),
            template.definition().to_string(),
            template.synonyms().to_vec(),
            template.decoys().to_vec(),
            sampler,
        ))
    }

    fn assemble(
        target_word: String,
        definition: String,
        synonyms: Vec<String>,
        decoys: Vec<String>,
        sampler: &mut Sampler,
    ) -> Self {
        let mut choices: Vec<String> = synonyms.iter().chain(decoys.iter()).cloned().collect();
        sampler.shuffle(&mut choices);

        Self {
            target_word,
            definition,
            synonyms,
            decoys,
            choices,
            selected: BTreeSet::new(),
            score: 0,
            feedback: String::new(),
            show_hint: false,
            submitted: false,
        }
    }

    /// Toggles a word in or out of the selected set. Returns whether the word
    /// is selected after the toggle.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::AlreadyAnswered` once the battle is submitted
    /// and `ActivityError::UnknownWord` for words not on the board.
    pub fn toggle(&mut self, word: &str) -> Result<bool, ActivityError> {
        if self.submitted {
            return Err(ActivityError::AlreadyAnswered);
        }
        if !self.choices.iter().any(|choice| choice == word) {
            return Err(ActivityError::UnknownWord(word.to_string()));
        }

        if self.selected.remove(word) {
            Ok(false)
        } else {
            self.selected.insert(word.to_string());
            Ok(true)
        }
    }

    /// Scores the selected set against the synonym set and freezes the battle.
    ///
    /// Full credit only for an exact match. Partial credit, scaled by correct
    /// selections, when correct selections outnumber mistakes; the answer
    /// counts toward progress only if every synonym was found. Minimal credit
    /// otherwise, local to the battle.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::AlreadyAnswered` on a second submit.
    pub fn submit(&mut self) -> Result<AnswerOutcome, ActivityError> {
        if self.submitted {
            return Err(ActivityError::AlreadyAnswered);
        }
        self.submitted = true;

        let correct = self
            .selected
            .iter()
            .filter(|word| self.synonyms.contains(*word))
            .count();
        let incorrect = self.selected.len() - correct;
        let total = self.synonyms.len();
        let found_all = correct == total;

        let outcome = if found_all && incorrect == 0 {
            AnswerOutcome {
                correct: true,
                points: PERFECT_POINTS,
                xp: PERFECT_POINTS,
                words_learned: 1,
                mastered_word: Some(self.target_word.clone()),
                feedback: format!("Victory! Perfect synonym match! +{PERFECT_POINTS} points"),
                auto_advance: true,
            }
        } else if correct > incorrect {
            let points = PARTIAL_POINTS_EACH * u32::try_from(correct).unwrap_or(0);
            AnswerOutcome {
                correct: false,
                points,
                xp: if found_all { points } else { 0 },
                words_learned: u32::from(found_all),
                mastered_word: found_all.then(|| self.target_word.clone()),
                feedback: format!("Good battle! You found {correct}/{total} synonyms. +{points} points"),
                auto_advance: true,
            }
        } else {
            let points = MINIMAL_POINTS_EACH * u32::try_from(correct).unwrap_or(0);
            AnswerOutcome {
                correct: false,
                points,
                xp: 0,
                words_learned: 0,
                mastered_word: None,
                feedback: format!("Keep fighting! You found {correct}/{total} synonyms. +{points} points"),
                auto_advance: true,
            }
        };

        self.score += outcome.points;
        self.feedback = outcome.feedback.clone();
        Ok(outcome)
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    #[must_use]
    pub fn decoys(&self) -> &[String] {
        &self.decoys
    }

    /// Synonyms and decoys in their shuffled board order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

/// Samples decoys from the level, excluding the target and its synonyms,
/// without replacement. Falls back to the full level list (minus the target)
/// when the filtered pool is empty, and stops early once the pool runs dry.
fn pick_decoys(
    target: &VocabularyWord,
    words: &[VocabularyWord],
    count: usize,
    sampler: &mut Sampler,
) -> Vec<String> {
    let mut pool: Vec<String> = words
        .iter()
        .map(|word| word.word().to_string())
        .filter(|word| {
            word.as_str() != target.word() && !target.synonyms().iter().any(|s| s == word)
        })
        .collect();

    if pool.is_empty() {
        pool = words
            .iter()
            .map(|word| word.word().to_string())
            .filter(|word| word.as_str() != target.word())
            .collect();
    }

    let mut decoys = Vec::with_capacity(count);
    while decoys.len() < count {
        match sampler.take(&mut pool) {
            Some(decoy) => decoys.push(decoy),
            None => break,
        }
    }
    decoys
}
