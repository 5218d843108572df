//! Termview
//!
//! Turns parsed terminal screen snapshots into renderer-ready styled text.
//! The ANSI parser and the UI framework live outside this crate; this crate
//! sits between them:
//!
//! - `core`: the screen model produced by the parser (lines, spans, flags)
//! - `style`: resolving span colors and flags, including reverse video
//! - `compile`: flattening a snapshot into an ordered run sequence
//! - `view`: a buffer-backed view that recompiles on snapshot change, and a
//!   node-per-span tree view kept for comparison
//! - `app`: configuration
//!
//! ```
//! use termview::compile::{compile, Run};
//! use termview::core::ScreenModel;
//! use termview::style::{Palette, TextAttributes};
//!
//! let model = ScreenModel::from_json(
//!     r#"{"cols":10,"rows":1,"cursor":[0,0],"totalLines":1,"lines":[{"spans":[{"text":"hi","flags":1}]}]}"#,
//! )
//! .unwrap();
//! let runs = compile(&model, &Palette::default());
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].style().unwrap().attributes, TextAttributes::BOLD);
//! ```

pub mod app;
pub mod compile;
pub mod core;
pub mod style;
pub mod view;
