use std::path::{Path, PathBuf};

use orrery_core::FileSource;
use orrery_quiz::{MemoryStore, Mode, ProgressStore, QuizConfig};

/// Play one of the quiz modes in the terminal until the player quits.
pub fn run(
    mode: Mode,
    catalog: &Path,
    seed: Option<u64>,
    store: Option<&Path>,
) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let config = QuizConfig::default().with_seed(seed);
    tracing::info!(%mode, seed, catalog = %catalog.display(), "starting game");

    // Comparison mode keeps no score.
    let store: Box<dyn ProgressStore> = match mode {
        Mode::Identification => Box::new(super::open_store(store)?),
        Mode::Comparison => Box::new(MemoryStore::new()),
    };

    let source = FileSource::new(catalog);
    let textures = texture_dir(&source);
    crate::tui::run(mode, &source, config, store, &textures)
}

/// `textures/` next to the catalog file.
fn texture_dir(source: &FileSource) -> PathBuf {
    source
        .path()
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("textures")
}
