//! Color representation for snapshot spans and resolved styles
//!
//! The parser hands colors over as hex strings. They are parsed once at the
//! snapshot boundary into [`Rgba`] so the resolver and compiler never touch
//! strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color length {len} in {input:?} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength { input: String, len: usize },
    #[error("invalid hex digit {digit:?} in {input:?}")]
    InvalidDigit { input: String, digit: char },
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        let mut nibbles = Vec::with_capacity(8);
        for c in hex.chars() {
            let value = c.to_digit(16).ok_or_else(|| ColorError::InvalidDigit {
                input: input.to_string(),
                digit: c,
            })?;
            nibbles.push(value as u8);
        }

        // Short forms repeat each digit: "f80" == "ff8800"
        let short = |n: u8| n << 4 | n;
        let long = |hi: u8, lo: u8| hi << 4 | lo;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(short(*r), short(*g), short(*b))),
            [r, g, b, a] => Ok(Self::rgba(short(*r), short(*g), short(*b), short(*a))),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(long(*r1, *r2), long(*g1, *g2), long(*b1, *b2))),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::rgba(
                long(*r1, *r2),
                long(*g1, *g2),
                long(*b1, *b2),
                long(*a1, *a2),
            )),
            other => Err(ColorError::InvalidLength {
                input: input.to_string(),
                len: other.len(),
            }),
        }
    }

    /// Lowercase hex form. Alpha is only written when not fully opaque.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// RGB components, dropping alpha
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
