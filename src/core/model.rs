//! Screen model snapshots
//!
//! A [`ScreenModel`] is the parser's view of the terminal at one refresh:
//! dimensions, cursor, scroll length and the visible lines as styled spans.
//! Snapshots are created per frame, shared by reference and never mutated.

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::flags::StyleFlags;

/// A complete snapshot of the rendered screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenModel {
    /// Display dimensions
    pub cols: usize,
    pub rows: usize,
    /// Cursor position as (x, y), zero-based. Not clamped to the grid.
    pub cursor: (usize, usize),
    /// Total line count including lines scrolled out of this snapshot
    pub total_lines: usize,
    /// Visible lines, top to bottom
    pub lines: Vec<Line>,
}

/// One screen line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub spans: Vec<Span>,
}

/// A run of characters within a line sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Rgba>,
    #[serde(default)]
    pub flags: StyleFlags,
}

/// Error decoding or encoding a snapshot
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("malformed screen snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScreenModel {
    /// Create an empty snapshot with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// Build a snapshot from lines, deriving `total_lines` from them
    pub fn with_lines(cols: usize, rows: usize, lines: Vec<Line>) -> Self {
        Self {
            cols,
            rows,
            cursor: (0, 0),
            total_lines: lines.len(),
            lines,
        }
    }

    /// Parse the parser's JSON output
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the parser's JSON output from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Total number of spans across all lines
    pub fn span_count(&self) -> usize {
        self.lines.iter().map(|line| line.spans.len()).sum()
    }

    /// Text content, lines joined with `\n`. Empty lines render as one blank cell.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                if line.is_empty() {
                    " ".to_string()
                } else {
                    line.text()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Whether the line has no spans
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Concatenated span text
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl Span {
    /// Unstyled span
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_fg(mut self, fg: Rgba) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_bg(mut self, bg: Rgba) -> Self {
        self.bg = Some(bg);
        self
    }
}
