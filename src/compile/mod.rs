//! Run compiler
//!
//! Flattens a [`ScreenModel`] into a single ordered sequence of [`Run`]s that
//! a renderer can consume in one pass:
//!
//! - one text run per span, in order, carrying the resolved style
//! - a [`Run::LineBreak`] between lines (never after the last one)
//! - a single blank placeholder run for lines with no spans, so they keep
//!   their vertical space
//!
//! Spans are not merged here. [`merge_adjacent`] is available as a separate
//! pass when one-to-one traceability to source spans is not needed.

use crate::core::ScreenModel;
use crate::style::{resolve_span, Palette, ResolvedStyle};

/// Content of the run emitted for a line with no spans
pub const EMPTY_LINE_PLACEHOLDER: &str = " ";

/// A renderer-ready unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Styled text that stays on the current line
    Text {
        content: String,
        style: ResolvedStyle,
    },
    /// Move to the start of the next line
    LineBreak,
}

impl Run {
    pub fn text(content: impl Into<String>, style: ResolvedStyle) -> Self {
        Run::Text {
            content: content.into(),
            style,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Run::LineBreak)
    }

    /// Text content; `"\n"` for a line break
    pub fn content(&self) -> &str {
        match self {
            Run::Text { content, .. } => content,
            Run::LineBreak => "\n",
        }
    }

    pub fn style(&self) -> Option<&ResolvedStyle> {
        match self {
            Run::Text { style, .. } => Some(style),
            Run::LineBreak => None,
        }
    }
}

/// Compile a snapshot into runs.
///
/// Pure: the output depends only on `model` and `palette`.
pub fn compile(model: &ScreenModel, palette: &Palette) -> Vec<Run> {
    let line_breaks = model.lines.len().saturating_sub(1);
    let text_runs: usize = model.lines.iter().map(|l| l.spans.len().max(1)).sum();
    let mut runs = Vec::with_capacity(text_runs + line_breaks);

    for (i, line) in model.lines.iter().enumerate() {
        if i > 0 {
            runs.push(Run::LineBreak);
        }

        if line.is_empty() {
            runs.push(Run::text(EMPTY_LINE_PLACEHOLDER, ResolvedStyle::plain(palette)));
            continue;
        }

        for span in &line.spans {
            runs.push(Run::text(span.text.as_str(), resolve_span(span, palette)));
        }
    }

    runs
}

/// Flatten runs back to text, one `\n` per line break
pub fn plain_text(runs: &[Run]) -> String {
    runs.iter().map(Run::content).collect()
}

/// Coalesce neighbouring text runs that resolved to the same style.
///
/// Line breaks are never merged across.
pub fn merge_adjacent(runs: Vec<Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());

    for run in runs {
        if let (
            Some(Run::Text {
                content: prev_content,
                style: prev_style,
            }),
            Run::Text { content, style },
        ) = (merged.last_mut(), &run)
        {
            if prev_style == style {
                prev_content.push_str(content);
                continue;
            }
        }
        merged.push(run);
    }

    merged
}

/// Shape of a compiled run sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub text_runs: usize,
    pub line_breaks: usize,
}

impl RunStats {
    pub fn of(runs: &[Run]) -> Self {
        let line_breaks = runs.iter().filter(|r| r.is_line_break()).count();
        Self {
            text_runs: runs.len() - line_breaks,
            line_breaks,
        }
    }

    pub fn total(&self) -> usize {
        self.text_runs + self.line_breaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Line, Rgba, Span, StyleFlags};
    use crate::style::TextAttributes;

    fn model(lines: Vec<Line>) -> ScreenModel {
        ScreenModel::with_lines(80, 24, lines)
    }

    #[test]
    fn test_empty_model_compiles_to_nothing() {
        let runs = compile(&model(vec![]), &Palette::default());
        assert!(runs.is_empty());
    }

    #[test]
    fn test_single_bold_span() {
        let m = model(vec![Line::new(vec![Span::new("hi").with_flags(StyleFlags::BOLD)])]);
        let palette = Palette::default();
        let runs = compile(&m, &palette);

        assert_eq!(runs.len(), 1);
        match &runs[0] {
            Run::Text { content, style } => {
                assert_eq!(content, "hi");
                assert_eq!(style.attributes, TextAttributes::BOLD);
                assert_eq!(style.foreground, palette.foreground);
                assert_eq!(style.background, None);
            }
            Run::LineBreak => panic!("expected text run"),
        }
    }

    #[test]
    fn test_line_breaks_between_lines_only() {
        let m = model(vec![
            Line::new(vec![Span::new("a")]),
            Line::new(vec![Span::new("b")]),
            Line::new(vec![Span::new("c")]),
        ]);
        let runs = compile(&m, &Palette::default());
        let shape: Vec<bool> = runs.iter().map(Run::is_line_break).collect();
        assert_eq!(shape, vec![false, true, false, true, false]);
        assert!(!runs.last().unwrap().is_line_break());
    }

    #[test]
    fn test_empty_line_placeholder() {
        let palette = Palette::default();
        let m = model(vec![Line::default()]);
        let runs = compile(&m, &palette);
        assert_eq!(runs, vec![Run::text(" ", ResolvedStyle::plain(&palette))]);
    }

    #[test]
    fn test_empty_span_text_still_emitted() {
        let m = model(vec![Line::new(vec![Span::new(""), Span::new("x")])]);
        let runs = compile(&m, &Palette::default());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].content(), "");
    }

    #[test]
    fn test_identical_styles_not_merged() {
        let m = model(vec![Line::new(vec![Span::new("a"), Span::new("b")])]);
        let runs = compile(&m, &Palette::default());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].style(), runs[1].style());
    }

    #[test]
    fn test_run_count_law() {
        let m = model(vec![
            Line::new(vec![Span::new("a"), Span::new("b"), Span::new("c")]),
            Line::default(),
            Line::new(vec![Span::new("d")]),
        ]);
        let stats = RunStats::of(&compile(&m, &Palette::default()));
        assert_eq!(stats.text_runs, 3 + 1 + 1);
        assert_eq!(stats.line_breaks, 2);
        assert_eq!(stats.total(), 7);
    }

    #[test]
    fn test_plain_text_matches_model() {
        let m = model(vec![
            Line::new(vec![Span::new("$ "), Span::new("ls").with_fg(Rgba::rgb(0, 255, 0))]),
            Line::default(),
            Line::new(vec![Span::new("done")]),
        ]);
        let runs = compile(&m, &Palette::default());
        assert_eq!(plain_text(&runs), "$ ls\n \ndone");
        assert_eq!(plain_text(&runs), m.plain_text());
    }

    #[test]
    fn test_merge_adjacent() {
        let palette = Palette::default();
        let m = model(vec![
            Line::new(vec![
                Span::new("a"),
                Span::new("b"),
                Span::new("c").with_flags(StyleFlags::ITALIC),
            ]),
            Line::new(vec![Span::new("d")]),
        ]);
        let merged = merge_adjacent(compile(&m, &palette));
        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0].content(), "ab");
        assert_eq!(merged[1].content(), "c");
        assert!(merged[2].is_line_break());
        assert_eq!(merged[3].content(), "d");
    }

    #[test]
    fn test_merge_never_crosses_line_break() {
        let m = model(vec![
            Line::new(vec![Span::new("a")]),
            Line::new(vec![Span::new("b")]),
        ]);
        let merged = merge_adjacent(compile(&m, &Palette::default()));
        assert_eq!(plain_text(&merged), "a\nb");
        assert_eq!(merged.len(), 3);
    }
}
