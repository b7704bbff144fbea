//! Read-only snapshots of the student's standing, shaped for the dashboard
//! screen.

use serde::Serialize;

use vocab_core::model::LevelId;
use vocab_core::progression::LevelState;
use vocab_core::ProgressTracker;

/// One row of the level map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelOverview {
    pub id: LevelId,
    pub name: String,
    /// Words of this level the student has mastered.
    pub mastered: usize,
    /// Total words in this level.
    pub total: usize,
    /// Mastered words needed before the next level unlocks.
    pub threshold: usize,
    pub unlocked: bool,
    /// True for the student's active level.
    pub selected: bool,
}

/// Everything the dashboard renders, captured in one pass.
///
/// A plain value: capture it, hand it to the presentation layer, throw it
/// away. It never observes later progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub level: LevelId,
    pub experience: u32,
    /// Progress toward the next level's XP requirement, in 0..=100.
    pub experience_percent: u8,
    pub streak: u32,
    pub accuracy: u8,
    pub words_today: u32,
    pub daily_goal: u32,
    pub total_words: u32,
    /// Mastered words still needed to unlock the next level.
    pub words_needed: usize,
    pub levels: Vec<LevelOverview>,
}

impl DashboardView {
    /// Captures the current standing from the tracker.
    #[must_use]
    pub fn capture(tracker: &ProgressTracker) -> Self {
        let progress = tracker.progress();
        let catalog = tracker.catalog();
        let active = progress.level();

        let levels = catalog
            .levels()
            .iter()
            .map(|level| LevelOverview {
                id: level.id(),
                name: level.name().to_string(),
                mastered: tracker.mastered_in_level(level.id()),
                total: level.words().len(),
                threshold: level.mastery_threshold(),
                unlocked: tracker.level_state(level.id()) != LevelState::Locked,
                selected: level.id() == active,
            })
            .collect();

        Self {
            level: active,
            experience: progress.experience(),
            experience_percent: experience_percent(tracker),
            streak: progress.streak(),
            accuracy: progress.accuracy(),
            words_today: progress.words_today(),
            daily_goal: progress.daily_goal(),
            total_words: progress.total_words(),
            words_needed: tracker.words_needed_for_unlock(),
            levels,
        }
    }
}

/// Experience as a percentage of the next level's XP requirement, capped at
/// 100. The top level always reads 100.
fn experience_percent(tracker: &ProgressTracker) -> u8 {
    let progress = tracker.progress();
    let next = progress.level().next();
    let Ok(level) = tracker.catalog().level(next) else {
        return 100;
    };
    if level.xp_required() == 0 {
        return 100;
    }
    let percent = u64::from(progress.experience()) * 100 / u64::from(level.xp_required());
    u8::try_from(percent.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use vocab_core::progression::AnswerRecord;
    use vocab_core::WordCatalog;

    fn build_tracker() -> ProgressTracker {
        ProgressTracker::new(Arc::new(WordCatalog::builtin()))
    }

    #[test]
    fn fresh_student_snapshot() {
        let tracker = build_tracker();
        let view = DashboardView::capture(&tracker);

        assert_eq!(view.level, LevelId::new(1));
        assert_eq!(view.experience, 0);
        assert_eq!(view.experience_percent, 0);
        assert_eq!(view.words_needed, 16);
        assert_eq!(view.levels.len(), 5);

        let first = &view.levels[0];
        assert!(first.unlocked);
        assert!(first.selected);
        assert_eq!(first.mastered, 0);
        assert_eq!(first.total, 20);
        assert_eq!(first.threshold, 16);
        assert!(view.levels[1..].iter().all(|level| !level.unlocked));
    }

    #[test]
    fn experience_percent_tracks_the_next_requirement() {
        let mut tracker = build_tracker();
        // Level two requires 200 XP.
        tracker.record_answer(AnswerRecord {
            xp: 50,
            ..AnswerRecord::default()
        });
        assert_eq!(DashboardView::capture(&tracker).experience_percent, 25);

        tracker.record_answer(AnswerRecord {
            xp: 450,
            ..AnswerRecord::default()
        });
        // Overshoot is capped.
        assert_eq!(DashboardView::capture(&tracker).experience_percent, 100);
    }

    #[test]
    fn mastery_counts_appear_per_level() {
        let mut tracker = build_tracker();
        let words: Vec<String> = tracker
            .catalog()
            .words_for_level(LevelId::new(1))
            .unwrap()
            .iter()
            .take(3)
            .map(|w| w.word().to_string())
            .collect();
        for word in words {
            tracker.record_answer(AnswerRecord {
                xp: 25,
                words_learned: 1,
                mastered_word: Some(word),
            });
        }

        let view = DashboardView::capture(&tracker);
        assert_eq!(view.levels[0].mastered, 3);
        assert_eq!(view.words_needed, 13);
        assert_eq!(view.words_today, 3);
        assert_eq!(view.total_words, 3);
    }
}
