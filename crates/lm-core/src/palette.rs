use serde::{Deserialize, Serialize};

use crate::Error;

/// Which of the two routes a breadcrumb pass is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Primary,
    Alternative,
}

impl RouteKind {
    /// Output order of routes.
    pub const ALL: [RouteKind; 2] = [RouteKind::Primary, RouteKind::Alternative];
}

/// Green-channel values that assign a breadcrumb to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteTags {
    pub primary: u8,
    pub alternative: u8,
    /// Breadcrumbs with this tag belong to both routes.
    pub shared: u8,
}

impl Default for RouteTags {
    fn default() -> Self {
        Self {
            primary: 0x00,
            alternative: 0x88,
            shared: 0xFF,
        }
    }
}

impl RouteTags {
    /// `Some(true)` when a breadcrumb tagged `tag` belongs to `kind`,
    /// `None` when the tag is not one of the known values.
    pub fn admits(&self, kind: RouteKind, tag: u8) -> Option<bool> {
        if tag == self.shared {
            return Some(true);
        }
        if tag != self.primary && tag != self.alternative {
            return None;
        }
        let selected = match kind {
            RouteKind::Primary => self.primary,
            RouteKind::Alternative => self.alternative,
        };
        Some(tag == selected)
    }
}

/// Reserved colors of the map encoding.
///
/// Colors are packed `0xAARRGGBB`. In JSON they may be written as integers
/// or as hex strings such as `"0xFF00FF00"` or `"#ff00ff00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    #[serde(with = "hex")]
    pub start: u32,
    #[serde(with = "hex")]
    pub start_look_at: u32,
    #[serde(with = "hex")]
    pub terrain: u32,
    #[serde(with = "hex")]
    pub finish: u32,
    /// Optional cell kind; `None` for encodings without interference.
    #[serde(with = "hex::option")]
    pub interference: Option<u32>,
    /// A pixel is a breadcrumb when `color & mask == mask`.
    #[serde(with = "hex")]
    pub breadcrumb_mask: u32,
    pub route_tags: RouteTags,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: 0xFF00_FF00,
            start_look_at: 0xFF00_8800,
            terrain: 0xFF00_0000,
            finish: 0xFFFF_0000,
            interference: Some(0xFFFF_FF00),
            breadcrumb_mask: 0xFF00_00FF,
            route_tags: RouteTags::default(),
        }
    }
}

impl Palette {
    pub fn is_breadcrumb(&self, color: u32) -> bool {
        color & self.breadcrumb_mask == self.breadcrumb_mask
    }

    /// Colors whose cell kind comes from their neighbors.
    pub fn is_marker(&self, color: u32) -> bool {
        color == self.start || color == self.start_look_at || self.is_breadcrumb(color)
    }

    /// Route tag carried in the green channel.
    pub fn breadcrumb_tag(color: u32) -> u8 {
        crate::decode(color).g
    }

    /// Rejects tables under which classification would be ambiguous.
    pub fn validate(&self) -> Result<(), Error> {
        if self.breadcrumb_mask == 0 {
            return Err(invalid("breadcrumb mask must not be zero"));
        }
        if self.start == self.start_look_at {
            return Err(invalid("start and start_look_at share a colour"));
        }

        let mut cells = vec![("terrain", self.terrain), ("finish", self.finish)];
        if let Some(c) = self.interference {
            cells.push(("interference", c));
        }

        for (i, &(name, color)) in cells.iter().enumerate() {
            if color & 0xFF00_0000 == 0 {
                return Err(invalid(&format!(
                    "{name} #{color:08x} has zero alpha and would read as blank"
                )));
            }
            if self.is_marker(color) {
                return Err(invalid(&format!(
                    "{name} #{color:08x} collides with a marker colour"
                )));
            }
            if let Some((other, _)) = cells[..i].iter().find(|(_, c)| *c == color) {
                return Err(invalid(&format!(
                    "{name} and {other} share colour #{color:08x}"
                )));
            }
        }

        for (name, color) in [("start", self.start), ("start_look_at", self.start_look_at)] {
            if self.is_breadcrumb(color) {
                return Err(invalid(&format!(
                    "{name} #{color:08x} matches the breadcrumb mask"
                )));
            }
        }

        let t = self.route_tags;
        if t.primary == t.alternative || t.primary == t.shared || t.alternative == t.shared {
            return Err(invalid("route tags must be distinct"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidPalette {
        reason: reason.to_owned(),
    }
}

mod hex {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u32),
        Text(String),
    }

    fn parse<E: de::Error>(raw: Raw) -> Result<u32, E> {
        match raw {
            Raw::Int(v) => Ok(v),
            Raw::Text(s) => {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .or_else(|| s.strip_prefix('#'))
                    .unwrap_or(s.as_str())
                    .replace('_', "");
                u32::from_str_radix(&digits, 16)
                    .map_err(|_| E::custom(format!("invalid hex colour {s:?}")))
            }
        }
    }

    pub fn serialize<S: Serializer>(v: &u32, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("0x{v:08X}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        parse(Raw::deserialize(d)?)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        use super::{Raw, parse};

        pub fn serialize<S: Serializer>(v: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
            match v {
                Some(v) => super::serialize(v, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
            Option::<Raw>::deserialize(d)?.map(parse).transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, RouteKind, RouteTags};
    use crate::Error;

    #[test]
    fn default_palette_is_valid() {
        Palette::default().validate().expect("default palette");
    }

    #[test]
    fn breadcrumb_family_ignores_green_and_red() {
        let p = Palette::default();
        for color in [0xFF00_00FF, 0xFF00_88FF, 0xFF00_FFFF, 0xFF12_34FF] {
            assert!(p.is_breadcrumb(color), "{color:08x}");
            assert!(p.is_marker(color));
        }
        assert!(!p.is_breadcrumb(0x0000_00FF));
        assert!(!p.is_breadcrumb(p.terrain));
        assert!(!p.is_breadcrumb(p.finish));
        assert_eq!(Palette::breadcrumb_tag(0xFF00_88FF), 0x88);
    }

    #[test]
    fn route_tag_membership() {
        let t = RouteTags::default();
        assert_eq!(t.admits(RouteKind::Primary, 0x00), Some(true));
        assert_eq!(t.admits(RouteKind::Primary, 0x88), Some(false));
        assert_eq!(t.admits(RouteKind::Alternative, 0x88), Some(true));
        assert_eq!(t.admits(RouteKind::Alternative, 0x00), Some(false));
        assert_eq!(t.admits(RouteKind::Primary, 0xFF), Some(true));
        assert_eq!(t.admits(RouteKind::Alternative, 0xFF), Some(true));
        assert_eq!(t.admits(RouteKind::Primary, 0x40), None);
    }

    #[test]
    fn validate_rejects_colliding_tables() {
        let p = Palette {
            interference: Some(0xFF00_8800),
            ..Palette::default()
        };
        assert!(matches!(p.validate(), Err(Error::InvalidPalette { .. })));

        let p = Palette {
            finish: 0x00FF_0000,
            ..Palette::default()
        };
        assert!(matches!(p.validate(), Err(Error::InvalidPalette { .. })));

        let p = Palette {
            route_tags: RouteTags {
                shared: 0x00,
                ..RouteTags::default()
            },
            ..Palette::default()
        };
        assert!(matches!(p.validate(), Err(Error::InvalidPalette { .. })));

        let p = Palette {
            interference: None,
            ..Palette::default()
        };
        p.validate().expect("interference is optional");
    }

    #[test]
    fn json_accepts_hex_strings_and_integers() {
        let json = r##"{
            "start_look_at": "0xFFFFFF00",
            "interference": null,
            "finish": "#ffff0000",
            "terrain": 4278190080
        }"##;
        let p: Palette = serde_json::from_str(json).expect("parse palette");

        assert_eq!(p.start_look_at, 0xFFFF_FF00);
        assert_eq!(p.interference, None);
        assert_eq!(p.finish, 0xFFFF_0000);
        assert_eq!(p.terrain, 0xFF00_0000);
        assert_eq!(p.start, Palette::default().start);
        p.validate().expect("legacy-style palette");
    }

    #[test]
    fn json_rejects_unknown_fields_and_bad_hex() {
        assert!(serde_json::from_str::<Palette>(r#"{"stat": 1}"#).is_err());
        assert!(serde_json::from_str::<Palette>(r#"{"start": "0xZZ"}"#).is_err());
    }
}
