//! The session coordinator: one struct owning the live session, the student's
//! progress, and the view state, driven by presentation-layer intents.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Utc};

use vocab_core::model::{LevelId, VocabularyWord};
use vocab_core::progression::AnswerRecord;
use vocab_core::{Clock, ProgressTracker, WordCatalog};

use crate::dashboard::DashboardView;
use crate::rng::Sampler;
use crate::sessions::{ActivityKind, ActivitySession, Answer, AnswerOutcome};

/// Seconds between a built word and the next challenge.
const BUILDER_ADVANCE_DELAY: i64 = 2;
/// Seconds between a showdown submit and the next battle.
const SHOWDOWN_ADVANCE_DELAY: i64 = 3;

/// Which screen the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Activity(ActivityKind),
}

/// Notifications queued for the presentation layer, drained by `take_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// A new level became available.
    LevelUp(LevelId),
}

/// A scheduled replacement of the live session, created when an outcome asks
/// for auto-advance. The token pins it to the session that scheduled it.
#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    token: u64,
    due: DateTime<Utc>,
}

/// Single-writer front door for the whole game.
///
/// Every intent is a method; session errors (double answers, stale indices)
/// are swallowed into no-ops so the presentation layer never has to handle
/// them. There is at most one live session and at most one pending advance.
#[derive(Debug, Clone)]
pub struct SessionCoordinator {
    catalog: Arc<WordCatalog>,
    tracker: ProgressTracker,
    sampler: Sampler,
    clock: Clock,
    view: View,
    session: Option<ActivitySession>,
    // Bumped on every session replacement; stale pending advances are
    // detected by token mismatch.
    session_token: u64,
    pending: Option<PendingAdvance>,
    events: Vec<CoordinatorEvent>,
}

impl SessionCoordinator {
    /// A coordinator for a brand-new student on the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<WordCatalog>) -> Self {
        Self {
            tracker: ProgressTracker::new(Arc::clone(&catalog)),
            catalog,
            sampler: Sampler::new(),
            clock: Clock::default_clock(),
            view: View::Dashboard,
            session: None,
            session_token: 0,
            pending: None,
            events: Vec::new(),
        }
    }

    /// Replaces the random source, for deterministic tests.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Replaces the time source, for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Resumes from existing student progress.
    #[must_use]
    pub fn with_tracker(mut self, tracker: ProgressTracker) -> Self {
        self.tracker = tracker;
        self
    }

    // ─── Intents ───

    /// Opens an activity at the student's active level. If the challenge
    /// cannot be built the coordinator stays on the dashboard.
    pub fn start_activity(&mut self, kind: ActivityKind) {
        let level = self.tracker.progress().level();
        match ActivitySession::start(kind, &self.catalog, level, &mut self.sampler) {
            Ok(session) => {
                self.install_session(session);
                self.view = View::Activity(kind);
            }
            Err(_) => {
                self.drop_session();
                self.view = View::Dashboard;
            }
        }
    }

    /// Routes an answer to the live session, applies its outcome to the
    /// student's progress, and schedules the auto-advance if the activity
    /// asks for one.
    ///
    /// Returns `None` when there is no live session or the session refuses
    /// the answer (already answered, out-of-range option, wrong payload).
    pub fn submit_answer(&mut self, answer: &Answer) -> Option<AnswerOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.submit(answer).ok()?;

        let update = self.tracker.record_answer(AnswerRecord {
            xp: outcome.xp,
            words_learned: outcome.words_learned,
            mastered_word: outcome.mastered_word.clone(),
        });
        if let Some(level) = update.level_up {
            self.events.push(CoordinatorEvent::LevelUp(level));
        }

        if outcome.auto_advance {
            self.schedule_advance();
        }
        Some(outcome)
    }

    /// Toggles a word in the showdown's selection. Returns the membership
    /// after the toggle, or `None` if the intent does not apply.
    pub fn toggle_selection(&mut self, word: &str) -> Option<bool> {
        self.session.as_mut()?.toggle_selection(word).ok()
    }

    pub fn toggle_hint(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_hint();
        }
    }

    /// Immediately replaces the live session with a fresh challenge of the
    /// same kind. Any pending auto-advance is superseded.
    pub fn advance(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let level = self.tracker.progress().level();
        match session.advance(&self.catalog, level, &mut self.sampler) {
            Ok(next) => self.install_session(next),
            Err(_) => self.drop_session(),
        }
    }

    /// Switches the student's active level. Locked levels are a silent no-op;
    /// a successful switch returns to the dashboard so the next activity is
    /// built from the new level.
    pub fn select_level(&mut self, id: LevelId) {
        if self.tracker.select_level(id) {
            self.return_to_dashboard();
        }
    }

    /// Abandons the live session (progress already recorded stays recorded).
    pub fn return_to_dashboard(&mut self) {
        self.drop_session();
        self.view = View::Dashboard;
    }

    /// Runs a due auto-advance. A pending task whose token no longer matches
    /// the live session is discarded without running; an early poll leaves
    /// the task in place.
    pub fn poll(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };
        if pending.token != self.session_token {
            self.pending = None;
            return;
        }
        if self.clock.now() < pending.due {
            return;
        }
        self.pending = None;
        self.advance();
    }

    // ─── Queries ───

    /// Today's featured word: the active level's list rotated by day of year.
    #[must_use]
    pub fn word_of_day(&self) -> Option<&VocabularyWord> {
        let level = self.tracker.progress().level();
        let words = self.catalog.words_for_level(level).ok()?;
        if words.is_empty() {
            return None;
        }
        let day = self.clock.now().ordinal() as usize;
        Some(&words[day % words.len()])
    }

    /// Jumps into a practice round for the featured word: a randomly chosen
    /// builder or detective session at the active level.
    pub fn practice_word_of_day(&mut self) {
        let kind = if self.sampler.pick_index(2) == Some(0) {
            ActivityKind::WordBuilder
        } else {
            ActivityKind::ContextDetective
        };
        self.start_activity(kind);
    }

    /// Snapshot of everything the dashboard screen renders.
    #[must_use]
    pub fn dashboard(&self) -> DashboardView {
        DashboardView::capture(&self.tracker)
    }

    /// Drains the queued notifications.
    pub fn take_events(&mut self) -> Vec<CoordinatorEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn session(&self) -> Option<&ActivitySession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    // ─── Internals ───

    fn install_session(&mut self, session: ActivitySession) {
        self.session_token += 1;
        self.session = Some(session);
        self.pending = None;
    }

    fn drop_session(&mut self) {
        self.session_token += 1;
        self.session = None;
        self.pending = None;
    }

    fn schedule_advance(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let delay = match session.kind() {
            ActivityKind::WordBuilder => BUILDER_ADVANCE_DELAY,
            ActivityKind::SynonymShowdown => SHOWDOWN_ADVANCE_DELAY,
            // The other activities advance only on explicit intent.
            _ => return,
        };
        self.pending = Some(PendingAdvance {
            token: self.session_token,
            due: self.clock.now() + Duration::seconds(delay),
        });
    }
}
