use std::collections::HashSet;
use std::path::PathBuf;

use ratatui::layout::{Position, Rect};

use orrery_core::Body;
use orrery_quiz::{Mode, Presenter, Round, Tone};

/// What the terminal shows. Updated by the session through [`Presenter`].
pub struct Screen {
    pub mode: Mode,
    pub round: Option<Round>,
    pub message: Option<(String, Tone)>,
    /// Outcome of the last judged choice, cleared when a round is shown.
    pub outcome: Option<bool>,
    pub success_count: Option<u64>,
    /// Where each option was drawn last frame, in display order.
    pub slot_areas: Vec<Rect>,
    pub should_quit: bool,
    texture_dir: PathBuf,
    missing_textures: HashSet<String>,
}

impl Screen {
    pub fn new(mode: Mode, texture_dir: PathBuf) -> Self {
        Self {
            mode,
            round: None,
            message: None,
            outcome: None,
            success_count: None,
            slot_areas: Vec::new(),
            should_quit: false,
            texture_dir,
            missing_textures: HashSet::new(),
        }
    }

    /// Option slot under a mouse click.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.slot_areas.iter().position(|area| area.contains(pos))
    }

    /// Whether this body's texture was looked for and not found.
    pub fn texture_missing(&self, body: &Body) -> bool {
        self.missing_textures.contains(&body.name)
    }

    fn check_textures(&mut self, round: &Round) {
        for body in round.options() {
            let Some(texture) = body.texture.as_deref() else {
                continue;
            };
            if self.missing_textures.contains(&body.name) {
                continue;
            }
            let path = self.texture_dir.join(texture);
            if !path.is_file() {
                tracing::warn!(
                    body = %body.name,
                    texture = %path.display(),
                    "texture not found, drawing flat color"
                );
                self.missing_textures.insert(body.name.clone());
            }
        }
    }
}

impl Presenter for Screen {
    fn display_round(&mut self, round: &Round) {
        self.check_textures(round);
        self.round = Some(round.clone());
        self.outcome = None;
    }

    fn show_message(&mut self, text: &str, tone: Tone) {
        self.message = Some((text.to_string(), tone));
    }

    fn signal_outcome(&mut self, correct: bool) {
        self.outcome = Some(correct);
    }

    fn show_success_count(&mut self, count: u64) {
        self.success_count = Some(count);
    }
}
