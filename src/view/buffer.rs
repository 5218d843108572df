//! Buffer-backed terminal view
//!
//! Holds the current snapshot and keeps a renderer [`TextBuffer`] in sync
//! with it. Updates are signalled by handing over a new `Rc<ScreenModel>`;
//! the view compares pointers, never contents, so a snapshot mutated in
//! place behind the same `Rc` is not picked up.

use std::rc::Rc;

use tracing::{debug, trace};

use super::text_buffer::TextBuffer;
use crate::compile::{compile, Run};
use crate::core::ScreenModel;
use crate::style::Palette;

/// Terminal view that compiles snapshots into a flat text buffer
#[derive(Debug)]
pub struct BufferView<B: TextBuffer> {
    buffer: B,
    palette: Palette,
    data: Rc<ScreenModel>,
    runs: Vec<Run>,
    /// Number of compilations performed, including the initial one
    generation: u64,
}

impl<B: TextBuffer> BufferView<B> {
    /// Create a view and compile `data` into `buffer` immediately
    pub fn new(mut buffer: B, palette: Palette, data: Rc<ScreenModel>) -> Self {
        buffer.set_ambient(&palette);
        let mut view = Self {
            buffer,
            palette,
            data,
            runs: Vec::new(),
            generation: 0,
        };
        view.update_content();
        view
    }

    /// The snapshot currently shown
    pub fn data(&self) -> &Rc<ScreenModel> {
        &self.data
    }

    /// Replace the snapshot.
    ///
    /// Returns `true` if the view recompiled. Handing back the `Rc` that is
    /// already held is a no-op.
    pub fn update(&mut self, data: Rc<ScreenModel>) -> bool {
        if Rc::ptr_eq(&self.data, &data) {
            trace!(generation = self.generation, "snapshot unchanged, skipping recompile");
            return false;
        }
        self.data = data;
        self.update_content();
        true
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Change the default colors. Recompiles only if they differ.
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        if self.palette == palette {
            return false;
        }
        self.palette = palette;
        self.buffer.set_ambient(&self.palette);
        self.update_content();
        true
    }

    /// Runs from the most recent compilation
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Give the buffer back to the caller
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    fn update_content(&mut self) {
        self.runs = compile(&self.data, &self.palette);
        self.buffer.set_styled_text(&self.runs);
        self.generation += 1;
        debug!(
            generation = self.generation,
            lines = self.data.lines.len(),
            runs = self.runs.len(),
            "recompiled terminal snapshot"
        );
    }
}
