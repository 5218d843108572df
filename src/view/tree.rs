//! Tree view
//!
//! Alternative to [`BufferView`](super::BufferView) that builds one markup
//! node per span, realizing bold, italic, underline and strikethrough as
//! wrapper nodes around the text. The visible result is the same as the
//! compiled runs but every span costs several allocated nodes, which is what
//! the render benchmark measures it against.

use crate::core::{Rgba, ScreenModel, Span};
use crate::style::{resolve_span, Palette, TextAttributes};

/// A markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Vertical stack; the root container
    Column(Vec<Node>),
    /// One line of text
    Text(Vec<Node>),
    /// Colored span; `dim` is the faint attribute
    Span {
        fg: Rgba,
        bg: Option<Rgba>,
        dim: bool,
        child: Box<Node>,
    },
    Strong(Box<Node>),
    Em(Box<Node>),
    Underline(Box<Node>),
    Strike(Box<Node>),
    Literal(String),
}

impl Node {
    /// Flattened text, `\n` between lines
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Column(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    child.write_text(out);
                }
            }
            Node::Text(children) => children.iter().for_each(|c| c.write_text(out)),
            Node::Span { child, .. }
            | Node::Strong(child)
            | Node::Em(child)
            | Node::Underline(child)
            | Node::Strike(child) => child.write_text(out),
            Node::Literal(text) => out.push_str(text),
        }
    }

    /// Number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + match self {
            Node::Column(children) | Node::Text(children) => {
                children.iter().map(Node::node_count).sum()
            }
            Node::Span { child, .. }
            | Node::Strong(child)
            | Node::Em(child)
            | Node::Underline(child)
            | Node::Strike(child) => child.node_count(),
            Node::Literal(_) => 0,
        }
    }
}

/// Build the markup tree for a snapshot
pub fn render_tree(model: &ScreenModel, palette: &Palette) -> Node {
    let lines = model
        .lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                Node::Text(vec![Node::Literal(" ".to_string())])
            } else {
                Node::Text(line.spans.iter().map(|s| span_node(s, palette)).collect())
            }
        })
        .collect();
    Node::Column(lines)
}

fn span_node(span: &Span, palette: &Palette) -> Node {
    let style = resolve_span(span, palette);
    let attrs = style.attributes;

    let mut content = Node::Literal(span.text.clone());
    if attrs.contains(TextAttributes::BOLD) {
        content = Node::Strong(Box::new(content));
    }
    if attrs.contains(TextAttributes::ITALIC) {
        content = Node::Em(Box::new(content));
    }
    if attrs.contains(TextAttributes::UNDERLINE) {
        content = Node::Underline(Box::new(content));
    }
    if attrs.contains(TextAttributes::STRIKETHROUGH) {
        content = Node::Strike(Box::new(content));
    }

    Node::Span {
        fg: style.foreground,
        bg: style.background,
        dim: attrs.contains(TextAttributes::DIM),
        child: Box::new(content),
    }
}

/// Footer summary: `"{cols}x{rows} | Cursor: (x, y) | Lines: n"`
pub fn status_line(model: &ScreenModel) -> String {
    format!(
        "{}x{} | Cursor: ({}, {}) | Lines: {}",
        model.cols, model.rows, model.cursor.0, model.cursor.1, model.total_lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Line, StyleFlags};

    #[test]
    fn test_wrapper_nesting_order() {
        let palette = Palette::default();
        let span = Span::new("x").with_flags(
            StyleFlags::BOLD | StyleFlags::ITALIC | StyleFlags::UNDERLINE | StyleFlags::STRIKETHROUGH,
        );
        let node = span_node(&span, &palette);

        let literal = Node::Literal("x".to_string());
        let strong = Node::Strong(Box::new(literal));
        let em = Node::Em(Box::new(strong));
        let underline = Node::Underline(Box::new(em));
        let expected = Node::Span {
            fg: palette.foreground,
            bg: None,
            dim: false,
            child: Box::new(Node::Strike(Box::new(underline))),
        };
        assert_eq!(node, expected);
    }

    #[test]
    fn test_faint_is_dim_prop() {
        let node = span_node(&Span::new("x").with_flags(StyleFlags::FAINT), &Palette::default());
        match node {
            Node::Span { dim, child, .. } => {
                assert!(dim);
                assert_eq!(*child, Node::Literal("x".to_string()));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_inverse_colors_match_resolver() {
        let span = Span::new("x")
            .with_fg(Rgba::rgb(255, 0, 0))
            .with_bg(Rgba::BLACK)
            .with_flags(StyleFlags::INVERSE);
        match span_node(&span, &Palette::default()) {
            Node::Span { fg, bg, .. } => {
                assert_eq!(fg, Rgba::BLACK);
                assert_eq!(bg, Some(Rgba::rgb(255, 0, 0)));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_placeholder() {
        let model = ScreenModel::with_lines(10, 2, vec![Line::default(), Line::new(vec![Span::new("a")])]);
        let tree = render_tree(&model, &Palette::default());
        assert_eq!(tree.plain_text(), " \na");
    }

    #[test]
    fn test_node_count_grows_with_attributes() {
        let palette = Palette::default();
        let plain = span_node(&Span::new("x"), &palette);
        let styled = span_node(
            &Span::new("x").with_flags(StyleFlags::BOLD | StyleFlags::ITALIC),
            &palette,
        );
        assert_eq!(plain.node_count(), 2);
        assert_eq!(styled.node_count(), 4);
    }

    #[test]
    fn test_empty_model() {
        let tree = render_tree(&ScreenModel::new(80, 24), &Palette::default());
        assert_eq!(tree, Node::Column(vec![]));
        assert_eq!(tree.plain_text(), "");
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_status_line() {
        let mut model = ScreenModel::new(120, 40);
        model.cursor = (5, 7);
        model.total_lines = 1000;
        assert_eq!(status_line(&model), "120x40 | Cursor: (5, 7) | Lines: 1000");
    }
}
