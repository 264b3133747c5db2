use serde::{Deserialize, Serialize};

use crate::utils::errors::{ChartError, Result};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const BLUE: Color = Color::rgb(0x51, 0x2B, 0xD4);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` hex triplet.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ChartError::InvalidColor(hex.to_string()))
        };
        Ok(Color::rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named palette entry for the line-color picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub value: Color,
}

impl ColorOption {
    pub fn new(name: &str, value: Color) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// The preset line colors offered to the user.
pub fn default_palette() -> Vec<ColorOption> {
    vec![
        ColorOption::new("Blue", Color::BLUE),
        ColorOption::new("Green", Color::GREEN),
        ColorOption::new("Red", Color::RED),
        ColorOption::new("Gold", Color::GOLD),
    ]
}

/// Case-insensitive palette lookup.
pub fn palette_color(name: &str) -> Result<Color> {
    default_palette()
        .into_iter()
        .find(|option| option.name.eq_ignore_ascii_case(name))
        .map(|option| option.value)
        .ok_or_else(|| ChartError::InvalidColor(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() -> Result<()> {
        let color = Color::from_hex("#512BD4")?;
        assert_eq!(color, Color::BLUE);
        assert_eq!(color.to_hex(), "#512bd4");
        Ok(())
    }

    #[test]
    fn hex_without_hash_parses() -> Result<()> {
        assert_eq!(Color::from_hex("FFD700")?, Color::GOLD);
        Ok(())
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#512BD").is_err());
        assert!(Color::from_hex("#51ZBD4").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn palette_has_the_four_presets() {
        let names: Vec<String> = default_palette().into_iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["Blue", "Green", "Red", "Gold"]);
    }

    #[test]
    fn palette_lookup_ignores_case() -> Result<()> {
        assert_eq!(palette_color("gold")?, Color::GOLD);
        assert!(palette_color("magenta").is_err());
        Ok(())
    }
}
