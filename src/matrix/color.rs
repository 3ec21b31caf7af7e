use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors;

/// Fixed LED palette. White doubles as the color of an off cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Pink,
}

impl Color {
    pub const DEFAULT: Color = Color::White;

    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Pink,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Red => "#FF0000",
            Color::Green => "#00FF00",
            Color::Blue => "#0000FF",
            Color::Yellow => "#FFFF00",
            Color::Orange => "#FF8C00",
            Color::Pink => "#FF00FF",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Pink => "Pink",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::Red => (0xFF, 0x00, 0x00),
            Color::Green => (0x00, 0xFF, 0x00),
            Color::Blue => (0x00, 0x00, 0xFF),
            Color::Yellow => (0xFF, 0xFF, 0x00),
            Color::Orange => (0xFF, 0x8C, 0x00),
            Color::Pink => (0xFF, 0x00, 0xFF),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = errors::Color;

    /// Accepts `#RRGGBB` in any letter case, only for palette entries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Color::ALL
            .into_iter()
            .find(|c| c.hex() == normalized)
            .ok_or_else(|| errors::Color::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = errors::Color;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.hex().to_string()
    }
}
