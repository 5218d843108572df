//! Terminal views
//!
//! Two ways to hand a snapshot to a renderer:
//! - [`BufferView`]: compiles runs and writes them into a flat [`TextBuffer`]
//! - [`render_tree`]: one markup node per span, kept for comparison

mod buffer;
mod text_buffer;
pub mod tree;

pub use buffer::BufferView;
pub use text_buffer::{Highlight, StyledTextBuffer, TextBuffer};
pub use tree::{render_tree, status_line, Node};
