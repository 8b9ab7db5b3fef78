use std::path::{Path, PathBuf};

use crate::body::Body;
use crate::catalog::Catalog;
use crate::error::CoreResult;

/// Somewhere a catalog can be fetched from, once, at startup.
pub trait CatalogSource {
    /// Fetch and validate the catalog.
    fn fetch(&self) -> CoreResult<Catalog>;

    /// Human-readable description of the source, for messages.
    fn describe(&self) -> String;
}

/// A catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> CoreResult<Catalog> {
        Catalog::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A catalog held in memory, validated on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bodies: Vec<Body>,
}

impl StaticSource {
    /// Source that yields these bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> CoreResult<Catalog> {
        Catalog::new(self.bodies.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} bodies)", self.bodies.len())
    }
}
