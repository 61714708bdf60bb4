//! A headless widget addressing its buffer as one flat run of chars.
//!
//! Models the simplest kind of host (a plain text field): a string value
//! plus a pair of selection offsets. Useful directly in tests and as the
//! reference for wiring a real flat-offset widget to a [`Binding`].
//!
//! [`Binding`]: super::Binding

use super::HostWidget;
use crate::cursor::{FlatPosition, Selection};
use crate::edit::byte_of_char;

/// An in-memory flat-offset widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainWidget {
    value: String,
    selection: Selection<FlatPosition>,
}

impl PlainWidget {
    /// A widget holding `text`, caret at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            value: text.into(),
            selection: Selection::caret(FlatPosition::new(0)),
        }
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Place the selection, clamping both offsets to the value's length.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.value.chars().count();
        self.selection = Selection::new(
            FlatPosition::new(start.min(len)),
            FlatPosition::new(end.min(len)),
        );
    }

    /// Replace the selected range with `text`, as typing or pasting would,
    /// and collapse the caret after the replacement.
    pub fn replace_selection(&mut self, text: &str) {
        let (lo, hi) = ordered(self.selection);
        let from = byte_of_char(&self.value, lo);
        let to = byte_of_char(&self.value, hi);
        self.value.replace_range(from..to, text);

        let caret = lo + text.chars().count();
        self.selection = Selection::caret(FlatPosition::new(caret));
    }
}

impl HostWidget for PlainWidget {
    type Cursor = FlatPosition;

    fn content(&self) -> String {
        self.value.clone()
    }

    fn set_content(&mut self, text: &str) {
        self.value = text.to_owned();
        self.select(self.selection.start.offset(), self.selection.end.offset());
    }

    fn selection(&self) -> Selection<FlatPosition> {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection<FlatPosition>) {
        self.select(selection.start.offset(), selection.end.offset());
    }
}

fn ordered(selection: Selection<FlatPosition>) -> (usize, usize) {
    let (a, b) = (selection.start.offset(), selection.end.offset());
    (a.min(b), a.max(b))
}
