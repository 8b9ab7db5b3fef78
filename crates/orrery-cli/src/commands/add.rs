use std::path::Path;

use orrery_core::{Body, BodyKind, Catalog, RenderMode, Tint};

/// Fields for a new catalog entry, as given on the command line.
pub struct NewBody {
    pub name: String,
    pub size: f64,
    pub color: String,
    pub texture: Option<String>,
    pub kind: Option<String>,
    pub render_mode: Option<String>,
    pub parent: Option<String>,
    pub emissive: bool,
}

pub fn run(catalog_path: &Path, new: NewBody) -> Result<(), String> {
    let body = build_body(new)?;

    let catalog = if catalog_path.exists() {
        super::load_catalog(catalog_path)?
    } else {
        tracing::info!(path = %catalog_path.display(), "catalog not found, starting a new one");
        Catalog::default()
    };

    let name = body.name.clone();
    let updated = catalog.with_body(body).map_err(|e| e.to_string())?;
    updated
        .save(catalog_path)
        .map_err(|e| format!("cannot write catalog: {e}"))?;

    println!(
        "  Added '{}' to {} ({})",
        name,
        catalog_path.display(),
        super::count_bodies(updated.len())
    );
    Ok(())
}

fn build_body(new: NewBody) -> Result<Body, String> {
    let name = new.name.trim().to_string();
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }

    let color = Tint::parse_hex(&new.color).map_err(|e| e.to_string())?;
    let mut body = Body::new(name, new.size).with_color(color);

    if let Some(texture) = new.texture.filter(|t| !t.trim().is_empty()) {
        body = body.with_texture(texture.trim());
    }
    let kind = new
        .kind
        .as_deref()
        .map(BodyKind::parse)
        .transpose()
        .map_err(|e| e.to_string())?;
    if let Some(kind) = kind {
        body = body.with_kind(kind);
    }
    if let Some(mode) = new.render_mode.as_deref() {
        body = body.with_render_mode(RenderMode::parse(mode).map_err(|e| e.to_string())?);
    }
    if let Some(parent) = new.parent {
        if kind != Some(BodyKind::Moon) {
            tracing::warn!(parent = %parent, "parent set on a body that is not a moon");
        }
        body = body.with_parent(parent);
    }
    if new.emissive {
        body = body.with_emissive(true);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_body(name: &str, color: &str) -> NewBody {
        NewBody {
            name: name.to_string(),
            size: 3121.6,
            color: color.to_string(),
            texture: Some("europa.jpg".into()),
            kind: Some("moon".into()),
            render_mode: None,
            parent: Some("Jupiter".into()),
            emissive: false,
        }
    }

    #[test]
    fn builds_full_body() {
        let body = build_body(new_body(" Europa ", "#a0522d")).unwrap();
        assert_eq!(body.name, "Europa");
        assert_eq!(body.color, Some(Tint(0xA0522D)));
        assert_eq!(body.kind, Some(BodyKind::Moon));
        assert_eq!(body.parent.as_deref(), Some("Jupiter"));
        assert_eq!(body.emissive, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(build_body(new_body("", "#ffffff")).is_err());
        assert!(build_body(new_body("Europa", "zzz")).is_err());

        let mut bad_kind = new_body("Europa", "#ffffff");
        bad_kind.kind = Some("asteroid".into());
        assert!(build_body(bad_kind).is_err());
    }
}
