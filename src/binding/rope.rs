//! A headless widget addressing its buffer as newline-delimited lines.
//!
//! Models hosts with a line/column cursor model. Content lives in a rope so
//! replacements and line lookups stay cheap on large documents; columns are
//! counted in chars to match the edit coordinate system.

use ropey::Rope;

use super::HostWidget;
use crate::cursor::{LineColPosition, Selection};

/// An in-memory line/column widget backed by a rope.
#[derive(Debug, Clone)]
pub struct RopeWidget {
    rope: Rope,
    selection: Selection<LineColPosition>,
}

impl RopeWidget {
    /// A widget holding `text`, caret at line 0, column 0.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::caret(LineColPosition::default()),
        }
    }

    /// An empty widget.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Total number of lines. At least 1, even when empty.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The content of a line without its trailing newline.
    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(index).to_string();
        while s.ends_with('\n') || s.ends_with('\r') {
            s.pop();
        }
        Some(s)
    }

    /// Char length of a line, excluding its trailing newline.
    pub fn line_len(&self, index: usize) -> usize {
        let slice = self.rope.line(index);
        let mut len = slice.len_chars();
        while len > 0 {
            let ch = slice.char(len - 1);
            if ch == '\n' || ch == '\r' {
                len -= 1;
            } else {
                break;
            }
        }
        len
    }

    /// Collapse the caret to a position, clamping to the content.
    pub fn move_to(&mut self, line: usize, column: usize) {
        self.selection = Selection::caret(self.clamp(LineColPosition::at(line, column)));
    }

    /// Place a selection, clamping both endpoints to the content.
    pub fn select(&mut self, start: LineColPosition, end: LineColPosition) {
        self.selection = Selection::new(self.clamp(start), self.clamp(end));
    }

    /// Insert text at the caret, as typing would, and move the caret past it.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let caret = self.selection.start;
        let at = self.char_idx(caret);
        self.rope.insert(at, s);

        let breaks = s.matches('\n').count();
        let moved = if breaks > 0 {
            let tail = s.rsplit('\n').next().map_or(0, |line| line.chars().count());
            LineColPosition::at(caret.line + breaks, tail)
        } else {
            LineColPosition::at(caret.line, caret.column + s.chars().count())
        };
        self.selection = Selection::caret(moved);
    }

    /// Delete the char before the caret (joining lines at column 0).
    ///
    /// Returns `false` at the very start of the buffer.
    pub fn delete_back(&mut self) -> bool {
        let caret = self.selection.start;
        if caret.line == 0 && caret.column == 0 {
            return false;
        }

        let at = self.char_idx(caret);
        let moved = if caret.column == 0 {
            LineColPosition::at(caret.line - 1, self.line_len(caret.line - 1))
        } else {
            LineColPosition::at(caret.line, caret.column - 1)
        };
        self.rope.remove(at - 1..at);
        self.selection = Selection::caret(moved);
        true
    }

    fn char_idx(&self, at: LineColPosition) -> usize {
        self.rope.line_to_char(at.line) + at.column
    }

    fn clamp(&self, at: LineColPosition) -> LineColPosition {
        let line = at.line.min(self.line_count() - 1);
        LineColPosition::at(line, at.column.min(self.line_len(line)))
    }
}

impl HostWidget for RopeWidget {
    type Cursor = LineColPosition;

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.selection = Selection::new(
            self.clamp(self.selection.start),
            self.clamp(self.selection.end),
        );
    }

    fn selection(&self) -> Selection<LineColPosition> {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection<LineColPosition>) {
        self.select(selection.start, selection.end);
    }
}
