//! Quiz engine for Orrery.
//!
//! Picks bodies for each round, runs the input → feedback → next-round
//! state machine, and keeps the identification success counter. Rendering
//! and input translation live behind the [`Presenter`] trait so the engine
//! never touches a terminal, window, or clock on its own.

pub mod config;
pub mod error;
pub mod presenter;
pub mod round;
pub mod schedule;
pub mod select;
pub mod session;
pub mod store;

pub use config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use presenter::{Presenter, Tone};
pub use round::{Choice, ComparisonRound, IdentificationRound, Round, Side};
pub use schedule::{ScheduleHandle, Timer};
pub use session::{IgnoreReason, Mode, Phase, QuizSession, Submission};
pub use store::{JsonFileStore, MemoryStore, ProgressStore, SuccessCounter};
