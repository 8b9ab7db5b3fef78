use std::path::Path;

use colored::Colorize;

use orrery_quiz::ProgressStore;
use orrery_quiz::store::SUCCESS_COUNT_KEY;

pub fn run(store: Option<&Path>, reset: bool) -> Result<(), String> {
    let mut store = super::open_store(store)?;

    if reset {
        store
            .write(SUCCESS_COUNT_KEY, 0)
            .map_err(|e| e.to_string())?;
        println!("  Success counter reset ({}).", store.path().display());
        return Ok(());
    }

    let count = store
        .read(SUCCESS_COUNT_KEY)
        .map_err(|e| e.to_string())?
        .unwrap_or(0);
    println!(
        "  {} {} bodies identified correctly",
        "Score".bold(),
        count.to_string().green().bold()
    );
    Ok(())
}
