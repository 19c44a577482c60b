use std::{fmt::Display, str::FromStr};

use ansi_term::Colour;
use anyhow::anyhow;

/// Display palette selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Orange,
    Blue,
    Green,
    Purple,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 4] = [
        ColorTheme::Orange,
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Purple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Orange => "orange",
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Purple => "purple",
        }
    }

    /// Theme for a stored value. Anything unrecognized is orange.
    pub fn from_stored(value: &str) -> ColorTheme {
        value.parse::<ColorTheme>().unwrap_or_default()
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorTheme::Orange => Palette {
                primary: Rgb::from_hex(0xFF8C00),
                secondary: Rgb::from_hex(0xFFB74D),
                accent: Rgb::from_hex(0xE65100),
                success: Rgb::from_hex(0x4CAF50),
            },
            ColorTheme::Blue => Palette {
                primary: Rgb::from_hex(0x2196F3),
                secondary: Rgb::from_hex(0x64B5F6),
                accent: Rgb::from_hex(0x1976D2),
                success: Rgb::from_hex(0x4CAF50),
            },
            ColorTheme::Green => Palette {
                primary: Rgb::from_hex(0x4CAF50),
                secondary: Rgb::from_hex(0x81C784),
                accent: Rgb::from_hex(0x388E3C),
                success: Rgb::from_hex(0x66BB6A),
            },
            ColorTheme::Purple => Palette {
                primary: Rgb::from_hex(0x9C27B0),
                secondary: Rgb::from_hex(0xBA68C8),
                accent: Rgb::from_hex(0x7B1FA2),
                success: Rgb::from_hex(0x4CAF50),
            },
        }
    }
}

impl Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorTheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| anyhow!("Unknown color theme {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(value: u32) -> Rgb {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn colour(self) -> Colour {
        Colour::RGB(self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
}

#[cfg(test)]
mod tests {
    use super::{ColorTheme, Rgb};

    #[test]
    fn test_theme_fallback() {
        assert_eq!(ColorTheme::from_stored("blue"), ColorTheme::Blue);
        assert_eq!(ColorTheme::from_stored("purple"), ColorTheme::Purple);
        assert_eq!(ColorTheme::from_stored("magenta"), ColorTheme::Orange);
        assert_eq!(ColorTheme::from_stored("Blue"), ColorTheme::Orange);
        assert_eq!(ColorTheme::from_stored(""), ColorTheme::Orange);
    }

    #[test]
    fn test_theme_palette() {
        assert_eq!(ColorTheme::Orange.palette().primary, Rgb(0xFF, 0x8C, 0x00));
        assert_eq!(ColorTheme::Green.palette().success, Rgb::from_hex(0x66BB6A));
        assert_eq!(
            ColorTheme::from_stored("unknown").palette(),
            ColorTheme::Orange.palette()
        );
    }
}
