use std::path::Path;

pub fn run(catalog_path: &Path, textures: &Path) -> Result<(), String> {
    if !textures.is_dir() {
        return Err(format!("textures directory {} not found", textures.display()));
    }
    let catalog = super::load_catalog(catalog_path)?;

    let (kept, removed) = catalog.retain_textured(textures);
    for body in &removed {
        tracing::debug!(name = %body.name, texture = ?body.texture, "dropping body");
        println!("  - {}", body.name);
    }

    kept.save(catalog_path)
        .map_err(|e| format!("cannot write catalog: {e}"))?;

    println!(
        "  Removed {} with missing textures, {} left.",
        super::count_bodies(removed.len()),
        kept.len()
    );
    Ok(())
}
