//! Span style resolution
//!
//! Defaults are substituted first, then INVERSE swaps the roles of the two
//! colors. So an inverse span with no explicit colors renders as the default
//! background on the default foreground.

use serde::{Deserialize, Serialize};

use super::attributes::TextAttributes;
use crate::core::{Rgba, Span, StyleFlags};

/// Default colors used when a span leaves fg or bg unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Default foreground color
    pub foreground: Rgba,
    /// Default background color. Only used as the foreground of inverse
    /// spans; unset backgrounds otherwise stay unset.
    pub background: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Rgba::rgb(0xd4, 0xd4, 0xd4),
            background: Rgba::rgb(0x1e, 0x1e, 0x1e),
        }
    }
}

impl Palette {
    pub fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// A span style expressed in renderer terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    pub foreground: Rgba,
    /// `None` lets the renderer fall back to its ambient background
    pub background: Option<Rgba>,
    pub attributes: TextAttributes,
}

impl ResolvedStyle {
    /// Default foreground, no background, no attributes
    pub fn plain(palette: &Palette) -> Self {
        Self {
            foreground: palette.foreground,
            background: None,
            attributes: TextAttributes::empty(),
        }
    }
}

/// Resolve explicit colors and flags against a palette.
///
/// Total over every flag value: unknown bits were already dropped when the
/// flags were decoded.
pub fn resolve(
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    flags: StyleFlags,
    palette: &Palette,
) -> ResolvedStyle {
    let mut foreground = fg.unwrap_or(palette.foreground);
    let mut background = bg;

    if flags.contains(StyleFlags::INVERSE) {
        let previous = foreground;
        foreground = background.unwrap_or(palette.background);
        background = Some(previous);
    }

    ResolvedStyle {
        foreground,
        background,
        attributes: TextAttributes::from(flags),
    }
}

/// Resolve a snapshot span. The span is only read.
pub fn resolve_span(span: &Span, palette: &Palette) -> ResolvedStyle {
    resolve(span.fg, span.bg, span.flags, palette)
}
