//! Etymology explorer: reveal the members of a root word's family.

use std::collections::BTreeSet;

use vocab_core::catalog::EtymologyJourney;

use crate::error::ActivityError;
use crate::rng::Sampler;

use super::outcome::AnswerOutcome;

/// Points per newly discovered family member.
const DISCOVERY_POINTS: u32 = 30;
/// Bonus for completing the whole family, paid on the final discovery.
const FAMILY_COMPLETE_BONUS: u32 = 100;

/// One journey through a root/suffix word family, tracking which members the
/// student has discovered so far.
#[derive(Debug, Clone)]
pub struct EtymologyExplorerSession {
    journey: EtymologyJourney,
    discovered: BTreeSet<String>,
    exploration_points: u32,
    show_hint: bool,
}

impl EtymologyExplorerSession {
    /// Picks a random journey from the catalog's fixed set.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::EmptyPool` if no journeys are configured.
    pub fn start(
        journeys: &[EtymologyJourney],
        sampler: &mut Sampler,
    ) -> Result<Self, ActivityError> {
        let journey = sampler
            .pick(journeys)
            .or_else(|| journeys.first())
            .cloned()
            .ok_or(ActivityError::EmptyPool)?;

        Ok(Self {
            journey,
            discovered: BTreeSet::new(),
            exploration_points: 0,
            show_hint: false,
        })
    }

    /// Reveals one word-family member. Discovery is monotonic set insertion;
    /// completing the family adds a bonus on top of the per-word award.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::UnknownWord` for words outside the family and
    /// `ActivityError::AlreadyDiscovered` for repeat discoveries, so the same
    /// click can never double-award.
    pub fn discover(&mut self, word: &str) -> Result<AnswerOutcome, ActivityError> {
        if !self.journey.word_family().iter().any(|member| member == word) {
            return Err(ActivityError::UnknownWord(word.to_string()));
        }
        if !self.discovered.insert(word.to_string()) {
            return Err(ActivityError::AlreadyDiscovered(word.to_string()));
        }

        let complete = self.discovered.len() == self.journey.word_family().len();
        let points = if complete {
            DISCOVERY_POINTS + FAMILY_COMPLETE_BONUS
        } else {
            DISCOVERY_POINTS
        };
        self.exploration_points += points;

        let feedback = if complete {
            format!(
                "Amazing! You discovered the entire {} family! +{FAMILY_COMPLETE_BONUS} bonus points",
                self.journey.word()
            )
        } else {
            format!("Treasure found: {word}!")
        };

        Ok(AnswerOutcome {
            correct: true,
            points,
            xp: points,
            words_learned: 1,
            mastered_word: Some(word.to_string()),
            feedback,
            auto_advance: false,
        })
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    #[must_use]
    pub fn journey(&self) -> &EtymologyJourney {
        &self.journey
    }

    #[must_use]
    pub fn discovered(&self) -> &BTreeSet<String> {
        &self.discovered
    }

    #[must_use]
    pub fn exploration_points(&self) -> u32 {
        self.exploration_points
    }

    #[must_use]
    pub fn is_family_complete(&self) -> bool {
        self.discovered.len() == self.journey.word_family().len()
    }

    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_journeys() -> Vec<EtymologyJourney> {
        vec![EtymologyJourney::new(
            "democracy",
            "demos",
            "people",
            "cracy",
            "rule/government",
            "Greek",
            vec![
                "democratic".into(),
                "democratize".into(),
                "democrat".into(),
            ],
            "a system of government by the whole population",
        )]
    }

    fn start_session() -> EtymologyExplorerSession {
        let mut sampler = Sampler::seeded(1);
        EtymologyExplorerSession::start(&build_journeys(), &mut sampler).unwrap()
    }

    #[test]
    fn discovery_awards_points_once() {
        let mut session = start_session();

        let outcome = session.discover("democratic").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points, 30);
        assert_eq!(outcome.mastered_word.as_deref(), Some("democratic"));

        let err = session.discover("democratic").unwrap_err();
        assert_eq!(err, ActivityError::AlreadyDiscovered("democratic".to_string()));
        assert_eq!(session.exploration_points(), 30);
        assert_eq!(session.discovered().len(), 1);
    }

    #[test]
    fn completing_the_family_awards_the_bonus() {
        let mut session = start_session();
        session.discover("democratic").unwrap();
        session.discover("democratize").unwrap();

        let outcome = session.discover("democrat").unwrap();
        assert_eq!(outcome.points, 130);
        assert!(session.is_family_complete());
        assert_eq!(session.exploration_points(), 30 + 30 + 130);
    }

    #[test]
    fn words_outside_the_family_are_rejected() {
        let mut session = start_session();
        let err = session.discover("geology").unwrap_err();
        assert_eq!(err, ActivityError::UnknownWord("geology".to_string()));
        assert_eq!(session.exploration_points(), 0);
    }

    #[test]
    fn no_journeys_cannot_start() {
        let mut sampler = Sampler::seeded(1);
        let err = EtymologyExplorerSession::start(&[], &mut sampler).unwrap_err();
        assert_eq!(err, ActivityError::EmptyPool);
    }
}
