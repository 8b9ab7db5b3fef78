//! Terminal front end for a quiz session.

mod app;
mod views;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use orrery_core::CatalogSource;
use orrery_quiz::{Choice, Mode, ProgressStore, QuizConfig, QuizSession};

use app::Screen;

/// How long to wait for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Load the catalog and play until the player quits.
///
/// A catalog that cannot be loaded (or played) stays on screen until the
/// player quits, and is then returned as the error.
pub fn run(
    mode: Mode,
    source: &dyn CatalogSource,
    config: QuizConfig,
    store: Box<dyn ProgressStore>,
    texture_dir: &Path,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut screen = Screen::new(mode, texture_dir.to_path_buf());
    let launched = QuizSession::launch(mode, source, config, store, &mut screen);

    let result = match launched {
        Ok(mut session) => run_loop(&mut terminal, &mut screen, &mut session),
        Err(e) => run_loop_halted(&mut terminal, &mut screen).and(Err(e.to_string())),
    };

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut Screen,
    session: &mut QuizSession,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| views::draw(frame, screen))
            .map_err(|e| format!("draw error: {e}"))?;

        if screen.should_quit {
            return Ok(());
        }

        let now = Instant::now();
        if session.tick(screen, now) {
            continue;
        }

        let timeout = session
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now));
        if !event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            continue;
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        if let Some(choice) = handle_event(screen, event) {
            let outcome = session.submit(&choice, screen, Instant::now());
            tracing::debug!(?choice, ?outcome, "choice submitted");
        }
    }
}

/// Show whatever stopped the game until the player quits.
fn run_loop_halted(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut Screen,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| views::draw(frame, screen))
            .map_err(|e| format!("draw error: {e}"))?;

        if screen.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(screen, event);
    }
}

/// Apply quit keys; return a choice for the session, if the event is one.
fn handle_event(screen: &mut Screen, event: Event) -> Option<Choice> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(screen, key),
        Event::Mouse(mouse) => handle_mouse(screen, mouse),
        _ => None,
    }
}

fn handle_key(screen: &mut Screen, key: KeyEvent) -> Option<Choice> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        screen.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            screen.should_quit = true;
            None
        }
        code => choice_for_key(code),
    }
}

/// Number keys pick options: `1` is the first (left) one.
fn choice_for_key(code: KeyCode) -> Option<Choice> {
    match code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| *d >= 1)
            .map(|d| Choice::Slot(d as usize - 1)),
        _ => None,
    }
}

fn handle_mouse(screen: &Screen, mouse: MouseEvent) -> Option<Choice> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => screen
            .hit_test(mouse.column, mouse.row)
            .map(Choice::Slot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn screen() -> Screen {
        Screen::new(Mode::Comparison, PathBuf::from("textures"))
    }

    #[test]
    fn number_keys_map_to_slots() {
        let mut s = screen();
        assert_eq!(handle_event(&mut s, press(KeyCode::Char('1'))), Some(Choice::Slot(0)));
        assert_eq!(handle_event(&mut s, press(KeyCode::Char('3'))), Some(Choice::Slot(2)));
        assert_eq!(handle_event(&mut s, press(KeyCode::Char('0'))), None);
        assert_eq!(handle_event(&mut s, press(KeyCode::Char('x'))), None);
        assert!(!s.should_quit);
    }

    #[test]
    fn quit_keys() {
        let mut s = screen();
        handle_event(&mut s, press(KeyCode::Char('q')));
        assert!(s.should_quit);

        let mut s = screen();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut s, ctrl_c), None);
        assert!(s.should_quit);
    }

    #[test]
    fn clicks_hit_recorded_slots() {
        let mut s = screen();
        s.slot_areas = vec![Rect::new(0, 1, 30, 10), Rect::new(30, 1, 30, 10)];
        assert_eq!(handle_event(&mut s, click(45, 4)), Some(Choice::Slot(1)));
        assert_eq!(handle_event(&mut s, click(45, 20)), None);
    }
}
