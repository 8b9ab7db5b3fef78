use std::collections::HashSet;
use std::path::Path;

use crate::body::{Body, BodyKind};
use crate::error::{CoreError, CoreResult};

/// The ordered, immutable list of bodies a game draws from.
///
/// A catalog always holds unique, non-empty names and positive finite
/// sizes. How many bodies a game mode needs is checked by the quiz engine
/// when it starts a round, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    bodies: Vec<Body>,
}

impl Catalog {
    /// Build a catalog, checking names and sizes.
    pub fn new(bodies: Vec<Body>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(bodies.len());
        for (idx, body) in bodies.iter().enumerate() {
            if body.name.trim().is_empty() {
                return Err(CoreError::EmptyName(idx));
            }
            if !(body.size.is_finite() && body.size > 0.0) {
                return Err(CoreError::InvalidSize {
                    name: body.name.clone(),
                    size: body.size,
                });
            }
            if !seen.insert(body.name.as_str()) {
                return Err(CoreError::DuplicateName(body.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// Parse a JSON array of body records.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let bodies: Vec<Body> = serde_json::from_str(json)?;
        Self::new(bodies)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), bodies = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Serialize as a pretty-printed JSON array (two-space indent).
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.bodies)?)
    }

    /// Write the catalog to a file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        std::fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies, in catalog order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Iterate over bodies in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Body at a catalog position.
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Find a body by exact name.
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Bodies of one kind.
    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.kind == Some(kind))
    }

    /// A new catalog with `body` appended. Fails on a duplicate name or bad size.
    pub fn with_body(&self, body: Body) -> CoreResult<Self> {
        let mut bodies = self.bodies.clone();
        bodies.push(body);
        Self::new(bodies)
    }

    /// Split off bodies whose texture file is missing from `texture_dir`.
    ///
    /// Bodies without a texture count as missing. Returns the kept catalog
    /// and the removed bodies.
    pub fn retain_textured(&self, texture_dir: &Path) -> (Self, Vec<Body>) {
        let (kept, removed): (Vec<Body>, Vec<Body>) =
            self.bodies.iter().cloned().partition(|b| {
                b.texture
                    .as_deref()
                    .is_some_and(|t| !t.is_empty() && texture_dir.join(t).is_file())
            });
        (Self { bodies: kept }, removed)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Tint;

    fn solar() -> Catalog {
        Catalog::new(vec![
            Body::new("Mercury", 4879.0).with_kind(BodyKind::Planet),
            Body::new("Earth", 12742.0).with_kind(BodyKind::Planet),
            Body::new("Moon", 3474.8).with_kind(BodyKind::Moon),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Catalog::new(vec![Body::new("Io", 3643.0), Body::new("Io", 1.0)]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(n) if n == "Io"));
    }

    #[test]
    fn rejects_bad_sizes() {
        for size in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = Catalog::new(vec![Body::new("X", size)]).unwrap_err();
            assert!(matches!(err, CoreError::InvalidSize { .. }));
        }
    }

    #[test]
    fn rejects_blank_names() {
        let err = Catalog::new(vec![Body::new("A", 1.0), Body::new("  ", 1.0)]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyName(1)));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let c = Catalog::new(Vec::new()).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn lookups() {
        let c = solar();
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(1).unwrap().name, "Earth");
        assert!(c.find("Moon").is_some());
        assert!(c.find("moon").is_none());
        assert_eq!(c.of_kind(BodyKind::Planet).count(), 2);
        assert_eq!((&c).into_iter().count(), 3);
    }

    #[test]
    fn from_json_reports_shape_errors() {
        assert!(matches!(
            Catalog::from_json(r#"{"name": "x"}"#),
            Err(CoreError::Json(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"name": "x"}]"#),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn with_body_keeps_invariants() {
        let c = solar();
        let bigger = c.with_body(Body::new("Mars", 6779.0)).unwrap();
        assert_eq!(bigger.len(), 4);
        assert_eq!(c.len(), 3);
        assert!(c.with_body(Body::new("Earth", 1.0)).is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objects.json");
        let c = Catalog::new(vec![
            Body::new("Sun", 1_392_700.0)
                .with_color(Tint(0xFFCC00))
                .with_kind(BodyKind::Star)
                .with_emissive(true),
            Body::new("Earth", 12742.0),
        ])
        .unwrap();
        c.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {\n    \"name\": \"Sun\""));
        assert_eq!(Catalog::load(&path).unwrap(), c);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn retain_textured_drops_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("earth.jpg"), b"jpg").unwrap();
        let c = Catalog::new(vec![
            Body::new("Earth", 12742.0).with_texture("earth.jpg"),
            Body::new("Mars", 6779.0).with_texture("mars.jpg"),
            Body::new("Vesta", 525.0),
        ])
        .unwrap();
        let (kept, removed) = c.retain_textured(dir.path());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.get(0).unwrap().name, "Earth");
        let names: Vec<_> = removed.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Mars", "Vesta"]);
    }
}
