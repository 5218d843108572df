//! Style resolution
//!
//! Maps a span's optional colors and [`StyleFlags`](crate::core::StyleFlags)
//! onto the renderer's vocabulary: a concrete foreground, an optional
//! background and [`TextAttributes`].

mod attributes;
mod resolve;

pub use attributes::TextAttributes;
pub use resolve::{resolve, resolve_span, Palette, ResolvedStyle};
