//! Renderer text attributes

use crate::core::StyleFlags;

bitflags::bitflags! {
    /// Attribute bits understood by the renderer.
    ///
    /// This is a different vocabulary from [`StyleFlags`]: faint becomes
    /// `DIM`, and `REVERSE`, `BLINK` and `HIDDEN` exist here even though the
    /// span flags never produce them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const REVERSE       = 1 << 5;
        const HIDDEN        = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Source flag to target attribute. INVERSE is absent: it is applied as a
/// color swap, not forwarded.
const FLAG_MAP: [(StyleFlags, TextAttributes); 5] = [
    (StyleFlags::BOLD, TextAttributes::BOLD),
    (StyleFlags::ITALIC, TextAttributes::ITALIC),
    (StyleFlags::UNDERLINE, TextAttributes::UNDERLINE),
    (StyleFlags::STRIKETHROUGH, TextAttributes::STRIKETHROUGH),
    (StyleFlags::FAINT, TextAttributes::DIM),
];

impl From<StyleFlags> for TextAttributes {
    fn from(flags: StyleFlags) -> Self {
        FLAG_MAP
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .fold(TextAttributes::empty(), |acc, (_, attr)| acc | *attr)
    }
}
