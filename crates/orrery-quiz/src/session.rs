//! Quiz session management.
//!
//! `QuizSession` owns the catalog, the current round, the RNG, and the
//! success counter, and moves through the round phases as the front end
//! submits choices and reports the passage of time.

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use orrery_core::{Catalog, CatalogSource};

use crate::config::QuizConfig;
use crate::error::{QuizError, QuizResult};
use crate::presenter::{Presenter, Tone};
use crate::round::{Choice, Round};
use crate::schedule::{ScheduleHandle, Timer};
use crate::select::{pick_comparison_pair, pick_identification_round};
use crate::store::{ProgressStore, SuccessCounter};

const COMPARISON_PROMPT: &str = "Which is bigger? Pick one!";
const COMPARISON_CORRECT: &str = "Great job!";
const COMPARISON_RETRY: &str = "Try again!";
const IDENTIFICATION_PROMPT: &str = "What is this astronomical object?";
const IDENTIFICATION_RETRY: &str = "Not quite! Try again.";

/// Which game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pick the bigger of two bodies.
    Comparison,
    /// Name the shown body from three options.
    Identification,
}

impl Mode {
    /// Smallest catalog this mode can play with.
    pub fn min_catalog_len(self) -> usize {
        match self {
            Self::Comparison => crate::select::MIN_COMPARISON_BODIES,
            Self::Identification => crate::select::MIN_IDENTIFICATION_BODIES,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison => write!(f, "comparison"),
            Self::Identification => write!(f, "identification"),
        }
    }
}

/// Where the session is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no round started yet.
    Idle,
    /// A round is shown and the next choice will be judged.
    AwaitingInput,
    /// A choice is being judged.
    Evaluating,
    /// Correct answer shown; the next round is scheduled.
    CorrectFeedback,
    /// Wrong answer shown; the retry is scheduled (comparison mode).
    IncorrectFeedback,
    /// No round could be started. Nothing happens until `start` succeeds.
    Halted,
}

/// What became of a submitted choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The choice was right.
    Correct,
    /// The choice was wrong.
    Incorrect,
}

/// Why a choice was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input is disabled while feedback is showing (or before/after play).
    NotAccepting,
    /// The choice does not point at a displayed body.
    NoSuchOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    NextRound,
    ShowAgain,
}

/// An interactive quiz session.
pub struct QuizSession {
    mode: Mode,
    catalog: Catalog,
    config: QuizConfig,
    rng: StdRng,
    phase: Phase,
    round: Option<Round>,
    rounds_started: u32,
    counter: Option<SuccessCounter>,
    store: Box<dyn ProgressStore>,
    timer: Timer<Transition>,
    pending: Option<ScheduleHandle>,
}

impl QuizSession {
    /// Create a session over an already loaded catalog.
    ///
    /// Identification sessions read their starting success count from `store`.
    pub fn new(
        mode: Mode,
        catalog: Catalog,
        config: QuizConfig,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let counter = match mode {
            Mode::Identification => {
                Some(SuccessCounter::load(&*store, config.counter_key.as_str()))
            }
            Mode::Comparison => None,
        };

        Self {
            mode,
            catalog,
            config,
            rng,
            phase: Phase::Idle,
            round: None,
            rounds_started: 0,
            counter,
            store,
            timer: Timer::new(),
            pending: None,
        }
    }

    /// Fetch the catalog once, then start the first round.
    ///
    /// A fetch failure is shown as `Failed to load catalog: …` and returned;
    /// there is no retry. A catalog too small for the mode is shown and
    /// returned as well.
    pub fn launch(
        mode: Mode,
        source: &dyn CatalogSource,
        config: QuizConfig,
        store: Box<dyn ProgressStore>,
        presenter: &mut dyn Presenter,
    ) -> QuizResult<Self> {
        let catalog = match source.fetch() {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(source = %source.describe(), error = %e, "catalog load failed");
                presenter.show_message(&format!("Failed to load catalog: {e}"), Tone::Error);
                return Err(QuizError::from(e));
            }
        };
        tracing::info!(source = %source.describe(), bodies = catalog.len(), %mode, "catalog ready");

        let mut session = Self::new(mode, catalog, config, store);
        session.start(presenter)?;
        Ok(session)
    }

    /// Start (or restart) play with a fresh round.
    ///
    /// Anything still scheduled is cancelled first.
    pub fn start(&mut self, presenter: &mut dyn Presenter) -> QuizResult<()> {
        self.cancel_pending();
        if let Some(counter) = &self.counter {
            presenter.show_success_count(counter.count());
        }
        self.begin_round(presenter)
    }

    /// Judge a choice.
    ///
    /// Choices outside [`Phase::AwaitingInput`], or that do not point at a
    /// displayed body, are ignored and change nothing.
    pub fn submit(
        &mut self,
        choice: &Choice,
        presenter: &mut dyn Presenter,
        now: Instant,
    ) -> Submission {
        if self.phase != Phase::AwaitingInput {
            tracing::trace!(phase = ?self.phase, "input ignored");
            return Submission::Ignored(IgnoreReason::NotAccepting);
        }
        let Some(round) = &self.round else {
            return Submission::Ignored(IgnoreReason::NotAccepting);
        };
        let Some(slot) = round.resolve(choice) else {
            return Submission::Ignored(IgnoreReason::NoSuchOption);
        };

        self.phase = Phase::Evaluating;
        let correct = round.is_correct_slot(slot);
        tracing::debug!(slot, correct, "choice evaluated");

        if correct {
            self.on_correct(presenter, now);
            Submission::Correct
        } else {
            self.on_incorrect(presenter, now);
            Submission::Incorrect
        }
    }

    /// Fire a scheduled transition if one is due. Returns whether one fired.
    pub fn tick(&mut self, presenter: &mut dyn Presenter, now: Instant) -> bool {
        let Some(transition) = self.timer.pop_due(now) else {
            return false;
        };
        self.pending = None;

        match transition {
            Transition::NextRound => {
                // Failure is already on screen and the session is halted.
                let _ = self.begin_round(presenter);
            }
            Transition::ShowAgain => self.present_round(presenter),
        }
        true
    }

    /// Cancel the scheduled transition, if any. Returns whether one was waiting.
    ///
    /// The session stays in its feedback phase until [`start`](Self::start).
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => self.timer.cancel(handle).is_some(),
            None => false,
        }
    }

    /// The game being played.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the next choice will be judged.
    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::AwaitingInput
    }

    /// The round in play.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Identification success count; `None` in comparison mode.
    pub fn success_count(&self) -> Option<u64> {
        self.counter.as_ref().map(SuccessCounter::count)
    }

    /// How many fresh rounds have been dealt (retries not counted).
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// The catalog being played.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session configuration.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The progress store.
    pub fn store(&self) -> &dyn ProgressStore {
        &*self.store
    }

    /// When the scheduled transition is due, if one is waiting.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    fn begin_round(&mut self, presenter: &mut dyn Presenter) -> QuizResult<()> {
        let picked = match self.mode {
            Mode::Comparison => {
                pick_comparison_pair(&self.catalog, &mut self.rng).map(Round::Comparison)
            }
            Mode::Identification => {
                pick_identification_round(&self.catalog, &mut self.rng).map(Round::Identification)
            }
        };

        match picked {
            Ok(round) => {
                self.round = Some(round);
                self.rounds_started += 1;
                self.present_round(presenter);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = %self.mode, "cannot start round");
                self.round = None;
                self.phase = Phase::Halted;
                presenter.show_message(&e.to_string(), Tone::Error);
                Err(e)
            }
        }
    }

    fn present_round(&mut self, presenter: &mut dyn Presenter) {
        let Some(round) = &self.round else {
            return;
        };
        presenter.display_round(round);
        let prompt = match self.mode {
            Mode::Comparison => COMPARISON_PROMPT,
            Mode::Identification => IDENTIFICATION_PROMPT,
        };
        presenter.show_message(prompt, Tone::Prompt);
        self.phase = Phase::AwaitingInput;
    }

    fn on_correct(&mut self, presenter: &mut dyn Presenter, now: Instant) {
        self.phase = Phase::CorrectFeedback;

        let (message, delay) = match &self.round {
            Some(Round::Identification(r)) => (
                format!("Correct! That's {}!", r.target().name),
                self.config.identification_advance,
            ),
            _ => (
                COMPARISON_CORRECT.to_string(),
                self.config.comparison_advance,
            ),
        };

        if let Some(counter) = &mut self.counter {
            let count = counter.increment(&mut *self.store);
            presenter.show_success_count(count);
        }
        presenter.show_message(&message, Tone::Success);
        presenter.signal_outcome(true);
        self.schedule(Transition::NextRound, now + delay);
    }

    fn on_incorrect(&mut self, presenter: &mut dyn Presenter, now: Instant) {
        self.phase = Phase::IncorrectFeedback;

        match self.mode {
            Mode::Comparison => {
                presenter.show_message(COMPARISON_RETRY, Tone::Retry);
                presenter.signal_outcome(false);
                self.schedule(Transition::ShowAgain, now + self.config.comparison_retry);
            }
            Mode::Identification => {
                presenter.show_message(IDENTIFICATION_RETRY, Tone::Retry);
                presenter.signal_outcome(false);
                self.phase = Phase::AwaitingInput;
            }
        }
    }

    fn schedule(&mut self, transition: Transition, due: Instant) {
        tracing::debug!(?transition, phase = ?self.phase, "transition scheduled");
        self.pending = Some(self.timer.schedule(due, transition));
    }
}
