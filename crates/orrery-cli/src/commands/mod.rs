pub mod add;
pub mod list;
pub mod play;
pub mod prune;
pub mod score;
pub mod validate;

use std::path::Path;

use orrery_core::Catalog;
use orrery_quiz::JsonFileStore;

/// Load a catalog, turning any error into a printable message.
fn load_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::load(path).map_err(|e| format!("cannot load catalog: {e}"))
}

/// Open the progress store at `path`, or at the platform default.
fn open_store(path: Option<&Path>) -> Result<JsonFileStore, String> {
    match path {
        Some(p) => Ok(JsonFileStore::new(p)),
        None => JsonFileStore::default_path()
            .map(JsonFileStore::new)
            .ok_or_else(|| "no user data directory on this platform; pass --store".to_string()),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `1 body`, `3 bodies`.
fn count_bodies(n: usize) -> String {
    format!("{n} bod{}", if n == 1 { "y" } else { "ies" })
}
