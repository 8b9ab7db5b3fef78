//! The seam between the quiz engine and whatever draws it.

use crate::round::Round;

/// Style hint attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Asking the player to choose.
    Prompt,
    /// A correct answer.
    Success,
    /// A wrong answer; the player gets another go.
    Retry,
    /// Something stopped the game.
    Error,
}

/// Calls the session makes into the front end.
///
/// Implementations own rendering, sound, and effects. They also own hit
/// testing: turning a click or key press into a [`Choice`](crate::Choice)
/// that they hand back to [`QuizSession::submit`](crate::QuizSession::submit).
pub trait Presenter {
    /// Show the bodies of a round (new, or the same one again after a miss).
    fn display_round(&mut self, round: &Round);

    /// Show a status line.
    fn show_message(&mut self, text: &str, tone: Tone);

    /// Celebrate or commiserate.
    fn signal_outcome(&mut self, correct: bool);

    /// Show the identification success counter.
    fn show_success_count(&mut self, _count: u64) {}
}
