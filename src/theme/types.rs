//! Core theme value types: colors and raw font-style decoding

use thiserror::Error;

/// Font name used when a style entry does not declare one.
pub const DEFAULT_FONT_NAME: &str = "Courier New";

/// Font size used when a style entry does not declare one.
pub const DEFAULT_FONT_SIZE: u32 = 10;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// RGB color for editor style slots (8 bits per channel)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Create color from RGB values (0-255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse hex color string (#RGB, #RRGGBB)
    ///
    /// Theme documents carry the triplet without the leading marker; the
    /// document parser prepends `#` before calling this.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let mut chars = hex.chars();
                let r = parse_hex_digit(chars.next().unwrap())? * 17;
                let g = parse_hex_digit(chars.next().unwrap())? * 17;
                let b = parse_hex_digit(chars.next().unwrap())? * 17;
                Ok(Self::rgb(r, g, b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }
}

fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c.to_ascii_lowercase() {
        '0'..='9' => Ok(c as u8 - b'0'),
        c @ 'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(ColorError::InvalidHex(c.to_string())),
    }
}

fn parse_hex_byte(s: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
}

/// Raw font-style integer as found in theme documents.
///
/// The encoding is overloaded: 1 means bold, 2 means italic. Both flags are
/// decoded as independent comparisons against the same raw value, so an entry
/// can never be both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontStyle(pub i32);

impl FontStyle {
    pub const BOLD: i32 = 1;
    pub const ITALIC: i32 = 2;

    pub fn bold(self) -> bool {
        self.0 == Self::BOLD
    }

    pub fn italic(self) -> bool {
        self.0 == Self::ITALIC
    }
}
