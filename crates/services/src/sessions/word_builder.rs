//! Word builder: spell the word that matches a definition, with a partially
//! masked spelling hint.

use vocab_core::model::VocabularyWord;

use crate::error::ActivityError;
use crate::rng::Sampler;

use super::outcome::AnswerOutcome;

/// Points for building a word correctly.
const WORD_BUILT_POINTS: u32 = 50;

const MASK: char = '_';

/// Builds the spelling hint for a target word.
///
/// Words of three characters or fewer reveal only the first character; up to
/// six characters reveal first and last. Longer words reveal the first and
/// last characters plus even-positioned interior characters until 40% of the
/// word (rounded up) is visible, masking the rest.
#[must_use]
pub fn generate_hint(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len == 0 {
        return String::new();
    }
    if len <= 3 {
        let mut hint = String::from(chars[0]);
        hint.extend(std::iter::repeat_n(MASK, len - 1));
        return hint;
    }
    if len <= 6 {
        let mut hint = String::from(chars[0]);
        hint.extend(std::iter::repeat_n(MASK, len - 2));
        hint.push(chars[len - 1]);
        return hint;
    }

    let visible_target = (len * 2).div_ceil(5);
    let mut hint = String::with_capacity(len);
    let mut visible = 0;
    for (i, &c) in chars.iter().enumerate() {
        if i == 0 || i == len - 1 || (i % 2 == 0 && visible < visible_target) {
            hint.push(c);
            visible += 1;
        } else {
            hint.push(MASK);
        }
    }
    hint
}

/// One word-building challenge plus its transient answer state.
#[derive(Debug, Clone)]
pub struct WordBuilderSession {
    target: VocabularyWord,
    hint: String,
    feedback: String,
    score: u32,
    words_completed: u32,
    show_hint: bool,
    solved: bool,
}

impl WordBuilderSession {
    /// Samples one word from the level and builds its challenge.
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
        let hint = generate_hint(target.word());

        Ok(Self {
            target,
            hint,
            feedback: String::new(),
            score: 0,
            words_completed: 0,
            show_hint: false,
            solved: false,
        })
    }

    /// Checks a spelling attempt. Case-insensitive, whitespace-trimmed exact
    /// match. Wrong attempts may be retried; a solved challenge rejects
    /// further submissions until the next challenge starts.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::AlreadyAnswered` once the word is built.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome, ActivityError> {
        if self.solved {
            return Err(ActivityError::AlreadyAnswered);
        }

        let attempt = answer.trim().to_lowercase();
        if attempt != self.target.word().to_lowercase() {
            let outcome = AnswerOutcome::try_again("Not quite right! Try again or use a hint.");
            self.feedback = outcome.feedback.clone();
            return Ok(outcome);
        }

        self.solved = true;
        self.score += WORD_BUILT_POINTS;
        self.words_completed += 1;
        self.feedback = "Perfect! You built the word!".to_string();

        Ok(AnswerOutcome {
            correct: true,
            points: WORD_BUILT_POINTS,
            xp: WORD_BUILT_POINTS,
            words_learned: 1,
            mastered_word: Some(self.target.word().to_string()),
            feedback: self.feedback.clone(),
            auto_advance: true,
        })
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    #[must_use]
    pub fn target(&self) -> &VocabularyWord {
        &self.target
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn words_completed(&self) -> u32 {
        self.words_completed
    }

    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_words() -> Vec<VocabularyWord> {
        vec![
            VocabularyWord::new("analyze", "to examine in detail", "ex", vec![], 1).unwrap(),
        ]
    }

    #[test]
    fn short_words_reveal_only_the_first_character() {
        assert_eq!(generate_hint("cat"), "c__");
        assert_eq!(generate_hint("go"), "g_");
        assert_eq!(generate_hint("a"), "a");
    }

    #[test]
    fn medium_words_reveal_first_and_last() {
        assert_eq!(generate_hint("orbit"), "o___t");
        assert_eq!(generate_hint("happen"), "h____n");
    }

    #[test]
    fn long_words_reveal_evenly_spaced_interior_characters() {
        // len 7, 40% rounded up = 3: interior even indices fill in until the
        // quota is met, then only the final character is revealed.
        assert_eq!(generate_hint("analyze"), "a_a_y_e");
        // len 8, quota 4: even indices reveal until the quota fills, and the
        // final character is always shown.
        assert_eq!(generate_hint("evidence"), "e_i_e_ce");
    }

    #[test]
    fn answer_check_ignores_case_and_whitespace() {
        let mut sampler = Sampler::seeded(1);
        let mut session = WordBuilderSession::start(&build_words(), &mut sampler).unwrap();
        let outcome = session.submit("  Analyze ").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points, 50);
        assert_eq!(outcome.mastered_word.as_deref(), Some("analyze"));
        assert!(outcome.auto_advance);
    }

    #[test]
    fn wrong_answer_keeps_the_challenge_open() {
        let mut sampler = Sampler::seeded(1);
        let mut session = WordBuilderSession::start(&build_words(), &mut sampler).unwrap();

        let outcome = session.submit("analyse").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points, 0);
        assert!(!session.is_solved());

        // A retry can still succeed.
        assert!(session.submit("analyze").unwrap().correct);
    }

    #[test]
    fn solved_challenge_rejects_further_submissions() {
        let mut sampler = Sampler::seeded(1);
        let mut session = WordBuilderSession::start(&build_words(), &mut sampler).unwrap();
        session.submit("analyze").unwrap();

        let err = session.submit("analyze").unwrap_err();
        assert_eq!(err, ActivityError::AlreadyAnswered);
        assert_eq!(session.score(), 50);
    }

    #[test]
    fn empty_level_cannot_start() {
        let mut sampler = Sampler::seeded(1);
        let err = WordBuilderSession::start(&[], &mut sampler).unwrap_err();
        assert_eq!(err, ActivityError::EmptyPool);
    }
}
