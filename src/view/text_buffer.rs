//! Renderer text surface
//!
//! [`TextBuffer`] is the seam to the UI renderer: it receives the whole run
//! sequence on every recompile. [`StyledTextBuffer`] is the flat
//! implementation shipped with the crate: one contiguous string plus style
//! ranges over it, with line metrics refreshed on each write. Text without
//! an explicit background falls back to the buffer's ambient palette.

use unicode_width::UnicodeWidthStr;

use crate::compile::Run;
use crate::core::Rgba;
use crate::style::{Palette, ResolvedStyle};

/// A renderer-owned surface that accepts compiled runs
pub trait TextBuffer {
    /// Replace the buffer contents with `runs`
    fn set_styled_text(&mut self, runs: &[Run]);

    /// Colors painted where runs leave the background unset
    fn set_ambient(&mut self, _palette: &Palette) {}
}

/// Style applied to a byte range of [`StyledTextBuffer::text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub style: ResolvedStyle,
}

/// Flat text buffer with style ranges. Lines never wrap.
#[derive(Debug, Clone, Default)]
pub struct StyledTextBuffer {
    ambient: Palette,
    text: String,
    highlights: Vec<Highlight>,
    line_count: usize,
    max_line_width: usize,
    writes: usize,
}

impl StyledTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ambient(ambient: Palette) -> Self {
        Self {
            ambient,
            ..Default::default()
        }
    }

    pub fn ambient(&self) -> &Palette {
        &self.ambient
    }

    /// Full buffer text with `\n` line separators
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Number of lines; 0 when the buffer is empty
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Widest line in terminal columns
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Number of times content was replaced
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Style covering the byte at `offset`, if any
    pub fn style_at(&self, offset: usize) -> Option<&ResolvedStyle> {
        let idx = self.highlights.partition_point(|h| h.end <= offset);
        self.highlights
            .get(idx)
            .filter(|h| h.start <= offset && offset < h.end)
            .map(|h| &h.style)
    }

    /// Background painted at `offset`: the run's own or the ambient one
    pub fn background_at(&self, offset: usize) -> Rgba {
        self.style_at(offset)
            .and_then(|style| style.background)
            .unwrap_or(self.ambient.background)
    }

    /// Foreground painted at `offset`
    pub fn foreground_at(&self, offset: usize) -> Rgba {
        self.style_at(offset)
            .map(|style| style.foreground)
            .unwrap_or(self.ambient.foreground)
    }

    fn update_text_info(&mut self) {
        if self.text.is_empty() {
            self.line_count = 0;
            self.max_line_width = 0;
            return;
        }
        self.line_count = self.text.split('\n').count();
        self.max_line_width = self
            .text
            .split('\n')
            .map(|line| line.width())
            .max()
            .unwrap_or(0);
    }
}

impl TextBuffer for StyledTextBuffer {
    fn set_styled_text(&mut self, runs: &[Run]) {
        self.text.clear();
        self.highlights.clear();

        for run in runs {
            match run {
                Run::Text { content, style } => {
                    let start = self.text.len();
                    self.text.push_str(content);
                    if !content.is_empty() {
                        self.highlights.push(Highlight {
                            start,
                            end: self.text.len(),
                            style: *style,
                        });
                    }
                }
                Run::LineBreak => self.text.push('\n'),
            }
        }

        self.writes += 1;
        self.update_text_info();
    }

    fn set_ambient(&mut self, palette: &Palette) {
        self.ambient = *palette;
    }
}
