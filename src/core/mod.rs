//! Screen Model
//!
//! The data contract produced by the external ANSI/PTY parser. This module
//! contains:
//! - The snapshot itself (dimensions, cursor, scroll length, lines)
//! - Span style flags with their wire bit assignment
//! - Hex color parsing
//!
//! Nothing here has behavior beyond decoding; snapshots are immutable once
//! handed to the compiler.

mod color;
mod flags;
mod model;

pub use color::{ColorError, Rgba};
pub use flags::StyleFlags;
pub use model::{Line, ModelError, ScreenModel, Span};
