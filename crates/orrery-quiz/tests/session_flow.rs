//! End-to-end quiz session flow tests.
use std::time::{Duration, Instant};

use orrery_core::{Body, Catalog, FileSource};
use orrery_quiz::{
    Choice, JsonFileStore, Mode, Phase, Presenter, ProgressStore, QuizConfig, QuizError,
    QuizSession, Round, Tone,
};

#[derive(Default)]
struct Screen {
    lines: Vec<String>,
    shown: usize,
    count: Option<u64>,
}

impl Presenter for Screen {
    fn display_round(&mut self, _round: &Round) {
        self.shown += 1;
    }

    fn show_message(&mut self, text: &str, tone: Tone) {
        self.lines.push(format!("{tone:?}: {text}"));
    }

    fn signal_outcome(&mut self, _correct: bool) {}

    fn show_success_count(&mut self, count: u64) {
        self.count = Some(count);
    }
}

fn write_catalog(dir: &std::path::Path) -> std::path::PathBuf {
    let catalog = Catalog::new(vec![
        Body::new("Moon", 3474.8),
        Body::new("Earth", 12742.0),
        Body::new("Sun", 1_392_700.0),
        Body::new("Io", 3643.2),
    ])
    .unwrap();
    let path = dir.join("objects.json");
    catalog.save(&path).unwrap();
    path
}

fn correct_slot(session: &QuizSession) -> usize {
    let round = session.round().unwrap();
    (0..round.options().len())
        .find(|s| round.is_correct_slot(*s))
        .unwrap()
}

#[test]
fn identification_progress_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let store_path = dir.path().join("progress.json");
    let config = QuizConfig::default()
        .with_seed(3)
        .with_identification_delay(Duration::from_millis(10));

    let mut screen = Screen::default();
    let mut session = QuizSession::launch(
        Mode::Identification,
        &FileSource::new(&catalog),
        config.clone(),
        Box::new(JsonFileStore::new(&store_path)),
        &mut screen,
    )
    .unwrap();

    let mut now = Instant::now();
    for _ in 0..3 {
        let slot = correct_slot(&session);
        session.submit(&Choice::Slot(slot), &mut screen, now);
        now += Duration::from_millis(10);
        assert!(session.tick(&mut screen, now));
    }
    assert_eq!(screen.count, Some(3));
    assert_eq!(session.rounds_started(), 4);
    drop(session);

    let store = JsonFileStore::new(&store_path);
    assert_eq!(store.read(&config.counter_key).unwrap(), Some(3));

    let mut screen = Screen::default();
    let session = QuizSession::launch(
        Mode::Identification,
        &FileSource::new(&catalog),
        config,
        Box::new(store),
        &mut screen,
    )
    .unwrap();
    assert_eq!(session.success_count(), Some(3));
    assert_eq!(screen.count, Some(3));
}

#[test]
fn comparison_never_touches_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let store_path = dir.path().join("progress.json");

    let mut screen = Screen::default();
    let mut session = QuizSession::launch(
        Mode::Comparison,
        &FileSource::new(&catalog),
        QuizConfig::default(),
        Box::new(JsonFileStore::new(&store_path)),
        &mut screen,
    )
    .unwrap();

    let now = Instant::now();
    let slot = correct_slot(&session);
    session.submit(&Choice::Slot(slot), &mut screen, now);
    assert_eq!(session.success_count(), None);
    assert_eq!(screen.count, None);
    assert!(!store_path.exists());
    assert_eq!(screen.lines.last().unwrap(), "Success: Great job!");
}

#[test]
fn missing_catalog_file_stops_before_play() {
    let dir = tempfile::tempdir().unwrap();
    let mut screen = Screen::default();
    let err = QuizSession::launch(
        Mode::Comparison,
        &FileSource::new(dir.path().join("nope.json")),
        QuizConfig::default(),
        Box::new(JsonFileStore::new(dir.path().join("progress.json"))),
        &mut screen,
    )
    .err()
    .unwrap();

    assert!(matches!(err, QuizError::Catalog(_)));
    assert_eq!(screen.shown, 0);
    assert_eq!(screen.lines.len(), 1);
    assert!(screen.lines[0].starts_with("Error: Failed to load catalog:"));
}

#[test]
fn tiny_catalog_halts_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objects.json");
    std::fs::write(&path, r#"[{"name": "Sun", "size": 1392700}]"#).unwrap();

    let mut screen = Screen::default();
    let result = QuizSession::launch(
        Mode::Comparison,
        &FileSource::new(&path),
        QuizConfig::default(),
        Box::new(JsonFileStore::new(dir.path().join("progress.json"))),
        &mut screen,
    );
    assert!(matches!(result, Err(QuizError::EmptyCatalog { len: 1 })));
    assert!(screen.lines[0].starts_with("Error: comparison needs at least 2 bodies"));

    let catalog = Catalog::new(vec![Body::new("Sun", 1.0)]).unwrap();
    let mut session = QuizSession::new(
        Mode::Comparison,
        catalog,
        QuizConfig::default(),
        Box::new(orrery_quiz::MemoryStore::new()),
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.start(&mut screen).is_err());
    assert_eq!(session.phase(), Phase::Halted);
}
