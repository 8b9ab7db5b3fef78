use std::path::Path;

use comfy_table::{CellAlignment, ContentArrangement, Table};

use orrery_core::{Body, BodyKind};

pub fn run(catalog: &Path, kind: Option<&str>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let bodies: Vec<&Body> = match kind {
        Some(k) => {
            let kind = BodyKind::parse(k).map_err(|e| e.to_string())?;
            catalog.of_kind(kind).collect()
        }
        None => catalog.iter().collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&bodies)
            .map_err(|e| format!("cannot serialize bodies: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if bodies.is_empty() {
        println!("  No bodies found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Type", "Size (km)", "Color", "Texture"]);

    for body in &bodies {
        let kind = body.kind.map_or_else(|| "—".to_string(), |k| k.to_string());
        let kind = match &body.parent {
            Some(parent) => format!("{kind} of {parent}"),
            None => kind,
        };
        let color = body.color.map_or_else(|| "—".to_string(), |c| c.to_string());
        let texture = body.texture.clone().unwrap_or_else(|| "—".to_string());

        table.add_row(vec![
            body.name.clone(),
            kind,
            format_size(body.size),
            color,
            texture,
        ]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
    println!();
    println!("  {}", super::count_bodies(bodies.len()));

    Ok(())
}

/// Sizes with thousands separators, decimals dropped above 100 km.
fn format_size(size: f64) -> String {
    if size < 100.0 {
        return format!("{size:.1}");
    }
    let digits = format!("{:.0}", size);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_get_separators() {
        assert_eq!(format_size(12.34), "12.3");
        assert_eq!(format_size(3474.8), "3,475");
        assert_eq!(format_size(1_392_700.0), "1,392,700");
        assert_eq!(format_size(100.0), "100");
    }
}
