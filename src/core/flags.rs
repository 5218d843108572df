//! Span style flags
//!
//! The parser reports text attributes as an integer bitmask. The set of
//! recognized attributes is closed; any other bit is dropped when the mask
//! is decoded so that newer parsers can add attributes without breaking
//! older consumers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Text attributes attached to a snapshot span.
    ///
    /// Bit positions are the wire contract shared with the parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        /// Swap foreground and background at resolve time
        const INVERSE       = 1 << 4;
        const FAINT         = 1 << 5;
    }
}

impl StyleFlags {
    /// Decode a raw wire mask, ignoring unknown bits.
    pub fn from_wire(bits: u64) -> Self {
        // Anything above the low byte is unknown by construction
        Self::from_bits_truncate((bits & 0xff) as u8)
    }
}

impl Serialize for StyleFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

/// Accepts any integer. Negative masks are read as two's complement.
struct WireMaskVisitor;

impl<'de> Visitor<'de> for WireMaskVisitor {
    type Value = StyleFlags;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer style flag mask")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleFlags, E> {
        Ok(StyleFlags::from_wire(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleFlags, E> {
        Ok(StyleFlags::from_wire(v as u64))
    }
}

impl<'de> Deserialize<'de> for StyleFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireMaskVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bit_positions() {
        assert_eq!(StyleFlags::BOLD.bits(), 1);
        assert_eq!(StyleFlags::ITALIC.bits(), 2);
        assert_eq!(StyleFlags::UNDERLINE.bits(), 4);
        assert_eq!(StyleFlags::STRIKETHROUGH.bits(), 8);
        assert_eq!(StyleFlags::INVERSE.bits(), 16);
        assert_eq!(StyleFlags::FAINT.bits(), 32);
    }

    #[test]
    fn test_unknown_bits_dropped() {
        let flags = StyleFlags::from_wire(0b1100_0001);
        assert_eq!(flags, StyleFlags::BOLD);

        let flags = StyleFlags::from_wire(0x1_0000 | 0x10);
        assert_eq!(flags, StyleFlags::INVERSE);
    }

    #[test]
    fn test_deserialize_integer() {
        let flags: StyleFlags = serde_json::from_str("5").unwrap();
        assert_eq!(flags, StyleFlags::BOLD | StyleFlags::UNDERLINE);

        let flags: StyleFlags = serde_json::from_str("4096").unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_deserialize_wide_and_negative_masks() {
        let flags: StyleFlags = serde_json::from_str("4294967297").unwrap();
        assert_eq!(flags, StyleFlags::BOLD);

        let flags: StyleFlags = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(flags, StyleFlags::all());

        // -1 is all ones
        let flags: StyleFlags = serde_json::from_str("-1").unwrap();
        assert_eq!(flags, StyleFlags::all());

        let flags: StyleFlags = serde_json::from_str("-256").unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(serde_json::from_str::<StyleFlags>("\"bold\"").is_err());
    }

    #[test]
    fn test_serialize_integer() {
        let json = serde_json::to_string(&(StyleFlags::ITALIC | StyleFlags::FAINT)).unwrap();
        assert_eq!(json, "34");
    }
}
