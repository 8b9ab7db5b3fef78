use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A 24-bit RGB display tint, stored as a plain integer (`0xRRGGBB`).
///
/// Catalog files carry colors as decimal integers; people type them as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tint(pub u32);

impl Tint {
    /// Largest value a 24-bit tint can hold.
    pub const MAX: u32 = 0xFF_FF_FF;

    /// Parse `#RRGGBB`, `0xRRGGBB`, or bare `RRGGBB`.
    pub fn parse_hex(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(CoreError::InvalidTint(input.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| CoreError::InvalidTint(input.to_string()))
    }

    /// Split into red, green, blue channels. Bits above 24 are ignored.
    pub fn rgb(self) -> (u8, u8, u8) {
        let v = self.0 & Self::MAX;
        ((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & Self::MAX)
    }
}

/// What sort of object a body is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// A planet or dwarf planet.
    Planet,
    /// A natural satellite.
    Moon,
    /// A cloud of gas and dust.
    Nebula,
    /// A galaxy.
    Galaxy,
    /// An open or globular star cluster.
    StarCluster,
    /// A single star.
    Star,
}

impl BodyKind {
    /// All kinds, in display order.
    pub const ALL: [BodyKind; 6] = [
        BodyKind::Planet,
        BodyKind::Moon,
        BodyKind::Nebula,
        BodyKind::Galaxy,
        BodyKind::StarCluster,
        BodyKind::Star,
    ];

    /// Parse a kind from its catalog spelling.
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                field: "type",
                value: s.to_string(),
                expected: Self::ALL.map(|k| k.as_str()).join(", "),
            })
    }

    /// The catalog spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Moon => "moon",
            Self::Nebula => "nebula",
            Self::Galaxy => "galaxy",
            Self::StarCluster => "star_cluster",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a front end should draw a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// A textured sphere (planets, moons, stars).
    Sphere,
    /// A face-on flat image (galaxies).
    Flat,
    /// A camera-facing sprite (nebulae, clusters).
    Billboard,
}

impl RenderMode {
    /// All render modes, in display order.
    pub const ALL: [RenderMode; 3] = [RenderMode::Sphere, RenderMode::Flat, RenderMode::Billboard];

    /// Parse a render mode from its catalog spelling.
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                field: "renderMode",
                value: s.to_string(),
                expected: Self::ALL.map(|m| m.as_str()).join(", "),
            })
    }

    /// The catalog spelling of this render mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Flat => "flat",
            Self::Billboard => "billboard",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One astronomical object record.
///
/// Only `name` and `size` take part in the game rules; the rest are hints
/// for whatever is drawing the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Unique display name.
    pub name: String,
    /// Diameter in kilometres. Always positive once in a catalog.
    pub size: f64,
    /// Fallback tint used when no texture is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Tint>,
    /// Texture file name, relative to the textures directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    /// Object category.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BodyKind>,
    /// Preferred drawing style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_mode: Option<RenderMode>,
    /// Name of the body this one orbits (moons).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Whether the body gives off its own light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<bool>,
}

impl Body {
    /// Create a body with just a name and a size.
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            color: None,
            texture: None,
            kind: None,
            render_mode: None,
            parent: None,
            emissive: None,
        }
    }

    /// Set the fallback tint.
    pub fn with_color(mut self, color: Tint) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the texture file name.
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Set the object category.
    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the drawing style.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = Some(mode);
        self
    }

    /// Set the parent body.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Mark the body as emissive.
    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = Some(emissive);
        self
    }

    /// Whether this body is strictly larger than `other`.
    ///
    /// Equal sizes are never "larger", in either direction.
    pub fn is_larger_than(&self, other: &Body) -> bool {
        self.size > other.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_parses_all_hex_spellings() {
        assert_eq!(Tint::parse_hex("#EFEFEF").unwrap(), Tint(0xEFEFEF));
        assert_eq!(Tint::parse_hex("0xefefef").unwrap(), Tint(0xEFEFEF));
        assert_eq!(Tint::parse_hex("EFEFEF").unwrap(), Tint(0xEFEFEF));
        assert_eq!(Tint::parse_hex(" #ff0000 ").unwrap(), Tint(0xFF0000));
    }

    #[test]
    fn tint_rejects_garbage() {
        assert!(Tint::parse_hex("").is_err());
        assert!(Tint::parse_hex("#").is_err());
        assert!(Tint::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn tint_display_and_channels() {
        let t = Tint(0x12AB34);
        assert_eq!(t.to_string(), "#12AB34");
        assert_eq!(t.rgb(), (0x12, 0xAB, 0x34));
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in BodyKind::ALL {
            assert_eq!(BodyKind::parse(kind.as_str()).unwrap(), kind);
        }
        assert!(BodyKind::parse("comet").is_err());
    }

    #[test]
    fn render_mode_parse_error_lists_choices() {
        let err = RenderMode::parse("hologram").unwrap_err().to_string();
        assert!(err.contains("sphere, flat, billboard"));
    }

    #[test]
    fn deserializes_catalog_record() {
        let json = r#"{
            "name": "Europa",
            "size": 3122,
            "color": 15724527,
            "texture": "europa.jpg",
            "type": "moon",
            "renderMode": "sphere",
            "parent": "Jupiter",
            "discovered": 1610
        }"#;
        let body: Body = serde_json::from_str(json).unwrap();
        assert_eq!(body.name, "Europa");
        assert_eq!(body.size, 3122.0);
        assert_eq!(body.color, Some(Tint(15724527)));
        assert_eq!(body.kind, Some(BodyKind::Moon));
        assert_eq!(body.render_mode, Some(RenderMode::Sphere));
        assert_eq!(body.parent.as_deref(), Some("Jupiter"));
        assert_eq!(body.emissive, None);
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let body = Body::new("Mars", 6779.0).with_color(Tint(0xC1440E));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "Mars");
        assert_eq!(json["color"], 0xC1440E);
        assert!(json.get("texture").is_none());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn larger_is_strict() {
        let a = Body::new("A", 10.0);
        let b = Body::new("B", 5.0);
        let c = Body::new("C", 5.0);
        assert!(a.is_larger_than(&b));
        assert!(!b.is_larger_than(&a));
        assert!(!b.is_larger_than(&c));
        assert!(!c.is_larger_than(&b));
    }
}
