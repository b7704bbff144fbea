//! End-to-end flows through the coordinator: mastery, level unlock, level
//! switching, and the deferred auto-advance lifecycle.

use std::sync::Arc;

use chrono::Duration;

use services::{
    ActivityKind, ActivitySession, Answer, CoordinatorEvent, Sampler, SessionCoordinator, View,
};
use vocab_core::model::LevelId;
use vocab_core::progression::LevelState;
use vocab_core::time::fixed_clock;
use vocab_core::WordCatalog;

fn build_coordinator(seed: u64) -> SessionCoordinator {
    SessionCoordinator::new(Arc::new(WordCatalog::builtin()))
        .with_sampler(Sampler::seeded(seed))
        .with_clock(fixed_clock())
}

/// Answers builder challenges until the target number of words is mastered.
fn master_words(coordinator: &mut SessionCoordinator, count: usize) {
    for _ in 0..1000 {
        if coordinator.tracker().progress().mastered_words().len() >= count {
            return;
        }
        coordinator.start_activity(ActivityKind::WordBuilder);
        let target = match coordinator.session() {
            Some(ActivitySession::WordBuilder(session)) => session.target().word().to_string(),
            _ => panic!("expected a word builder session"),
        };
        coordinator
            .submit_answer(&Answer::Spelling(target))
            .expect("correct spelling should be accepted");
    }
    panic!("failed to master {count} words");
}

#[test]
fn mastering_sixteen_words_unlocks_the_next_level() {
    let mut coordinator = build_coordinator(41);

    master_words(&mut coordinator, 15);
    assert!(!coordinator.tracker().progress().is_unlocked(LevelId::new(2)));
    assert!(coordinator.take_events().is_empty());

    master_words(&mut coordinator, 16);
    assert!(coordinator.tracker().progress().is_unlocked(LevelId::new(2)));
    assert_eq!(
        coordinator.take_events(),
        vec![CoordinatorEvent::LevelUp(LevelId::new(2))]
    );

    // The unlock extends the map; the student still practices level one.
    assert_eq!(coordinator.tracker().progress().level(), LevelId::new(1));
    assert_eq!(
        coordinator.tracker().level_state(LevelId::new(1)),
        LevelState::Mastered
    );
    coordinator.tracker().progress().check_invariants().unwrap();
}

#[test]
fn unlocked_level_can_be_selected_and_practiced() {
    let mut coordinator = build_coordinator(42);
    master_words(&mut coordinator, 16);

    coordinator.select_level(LevelId::new(2));
    assert_eq!(coordinator.tracker().progress().level(), LevelId::new(2));
    assert_eq!(coordinator.view(), View::Dashboard);

    // The next activity draws from the newly selected level.
    coordinator.start_activity(ActivityKind::WordBuilder);
    let target = match coordinator.session() {
        Some(ActivitySession::WordBuilder(session)) => session.target().word().to_string(),
        _ => panic!("expected a word builder session"),
    };
    let level_two: Vec<&str> = coordinator
        .tracker()
        .catalog()
        .words_for_level(LevelId::new(2))
        .unwrap()
        .iter()
        .map(|w| w.word())
        .collect();
    assert!(level_two.contains(&target.as_str()));
}

#[test]
fn selecting_a_locked_level_changes_nothing() {
    let mut coordinator = build_coordinator(43);
    let before = coordinator.dashboard();

    coordinator.select_level(LevelId::new(5));
    assert_eq!(coordinator.tracker().progress().level(), LevelId::new(1));
    assert_eq!(coordinator.dashboard(), before);
}

#[test]
fn dashboard_snapshot_tracks_mastery_and_xp() {
    let mut coordinator = build_coordinator(44);
    master_words(&mut coordinator, 4);

    let view = coordinator.dashboard();
    assert_eq!(view.levels[0].mastered, 4);
    assert_eq!(view.words_needed, 12);
    // Repeated targets re-award XP, so 4 masteries mean at least 4 answers.
    assert!(view.experience >= 200);
    // Level two requires 200 XP, so the bar fills before the word mastery
    // threshold is met.
    assert_eq!(view.experience_percent, 100);
    assert!(!view.levels[1].unlocked);
}

#[test]
fn deferred_advance_fires_only_for_the_session_that_scheduled_it() {
    let mut clock = fixed_clock();
    let mut coordinator = build_coordinator(45).with_clock(clock);

    coordinator.start_activity(ActivityKind::WordBuilder);
    let target = match coordinator.session() {
        Some(ActivitySession::WordBuilder(session)) => session.target().word().to_string(),
        _ => panic!("expected a word builder session"),
    };
    coordinator.submit_answer(&Answer::Spelling(target)).unwrap();
    assert!(coordinator.has_pending_advance());

    // Leaving the activity abandons the timer.
    coordinator.return_to_dashboard();
    assert!(!coordinator.has_pending_advance());

    // A much later poll must not resurrect anything.
    clock.advance(Duration::seconds(30));
    let mut coordinator = coordinator.with_clock(clock);
    coordinator.poll();
    assert_eq!(coordinator.view(), View::Dashboard);
    assert!(coordinator.session().is_none());
}

#[test]
fn etymology_discoveries_earn_xp_without_polluting_mastery() {
    let mut coordinator = build_coordinator(46);
    coordinator.start_activity(ActivityKind::EtymologyExplorer);

    let family = match coordinator.session() {
        Some(ActivitySession::EtymologyExplorer(session)) => {
            session.journey().word_family().to_vec()
        }
        _ => panic!("expected an etymology session"),
    };

    let outcome = coordinator
        .submit_answer(&Answer::Discover(family[0].clone()))
        .unwrap();
    assert!(outcome.correct);
    assert_eq!(coordinator.tracker().progress().experience(), 30);
    // Family members live outside the leveled word lists, so the mastered
    // set stays empty and no unlock can be triggered by exploration alone.
    assert!(coordinator.tracker().progress().mastered_words().is_empty());

    // Repeat discovery is refused and awards nothing.
    assert!(coordinator
        .submit_answer(&Answer::Discover(family[0].clone()))
        .is_none());
    assert_eq!(coordinator.tracker().progress().experience(), 30);
}

#[test]
fn showdown_flow_records_progress_through_the_coordinator() {
    let mut coordinator = build_coordinator(47);
    coordinator.start_activity(ActivityKind::SynonymShowdown);

    let (synonyms, target) = match coordinator.session() {
        Some(ActivitySession::SynonymShowdown(session)) => (
            session.synonyms().to_vec(),
            session.target_word().to_string(),
        ),
        _ => panic!("expected a showdown session"),
    };
    for synonym in &synonyms {
        assert_eq!(coordinator.toggle_selection(synonym), Some(true));
    }

    let outcome = coordinator.submit_answer(&Answer::Selection).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.points, 75);
    assert!(coordinator.has_pending_advance());
    assert!(coordinator.tracker().progress().has_mastered(&target));
}

#[test]
fn word_of_day_comes_from_the_active_level() {
    let coordinator = build_coordinator(48);
    let word = coordinator.word_of_day().unwrap().word().to_string();

    let level_one: Vec<&str> = coordinator
        .tracker()
        .catalog()
        .words_for_level(LevelId::new(1))
        .unwrap()
        .iter()
        .map(|w| w.word())
        .collect();
    assert!(level_one.contains(&word.as_str()));
}
