//! Line/column cursor positions.
//!
//! Hosts that address their buffer as newline-delimited lines need edits
//! (which arrive as flat char offsets) converted into line/column terms
//! before a cursor can be relocated. The conversion walks the pre-edit
//! content, so these transforms carry the pre-edit text through every step.

use serde::{Deserialize, Serialize};

use super::TransformCursor;
use crate::edit::{Delete, Edit, Insert, byte_of_char};

/// A buffer position addressed as a zero-based line and char column.
///
/// `line` must index an existing line of the content it refers to, and
/// `column` may be at most that line's char length (end-of-line included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineColPosition {
    /// Zero-based line index.
    pub line: usize,
    /// Char offset within the line.
    pub column: usize,
}

impl LineColPosition {
    /// A position at `line` and `column`.
    pub const fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl TransformCursor for LineColPosition {
    fn transform(self, pre_edit_text: &str, edit: &Edit) -> Self {
        match edit {
            Edit::Delete(del) => across_delete(self, pre_edit_text, del),
            Edit::Insert(ins) => across_insert(self, pre_edit_text, ins),
        }
    }
}

fn across_delete(cursor: LineColPosition, text: &str, del: &Delete) -> LineColPosition {
    let removed_at = locate(text, del.position);
    let removed = char_span(text, del.position, del.length);
    let removed_lines = line_breaks(removed);

    let mut mapped = cursor;
    if cursor.line > removed_at.line + removed_lines {
        // Strictly below the deleted span: lines above close up, the column
        // is untouched.
        mapped.line -= removed_lines;
    } else if removed_lines > 0 && cursor.line == removed_at.line + removed_lines {
        // On the last, partially deleted line.
        let tail_removed = last_line_len(removed);
        if cursor.column >= tail_removed {
            // The cursor survives past the removed tail fragment and lands
            // on the join line, after whatever the deletion left there.
            mapped.line = removed_at.line;
            mapped.column = removed_at.column + cursor.column - tail_removed;
        } else {
            // The cursor sat inside the removed fragment: clamp to the
            // deletion start.
            mapped.line -= removed_lines;
            mapped.column = removed_at.column;
        }
    } else if cursor.line == removed_at.line && cursor.column > removed_at.column {
        // Single-line case; the min clamps a cursor inside the removed range
        // to the deletion start.
        mapped.column -= del.length.min(cursor.column - removed_at.column);
    }
    mapped
}

fn across_insert(cursor: LineColPosition, text: &str, ins: &Insert) -> LineColPosition {
    let added_at = locate(text, ins.position);
    let added_lines = line_breaks(&ins.text);

    let mut mapped = cursor;
    if cursor.line > added_at.line {
        mapped.line += added_lines;
    } else if cursor.line == added_at.line && cursor.column > added_at.column {
        mapped.line += added_lines;
        if added_lines > 0 {
            // The cursor's tail of the line now hangs off the inserted
            // text's final line.
            mapped.column = cursor.column - added_at.column + last_line_len(&ins.text);
        } else {
            mapped.column += ins.char_len();
        }
    }
    mapped
}

/// Line index and char column of the char offset `position` in `text`.
fn locate(text: &str, position: usize) -> LineColPosition {
    let mut at = LineColPosition::default();
    for ch in text.chars().take(position) {
        if ch == '\n' {
            at.line += 1;
            at.column = 0;
        } else {
            at.column += 1;
        }
    }
    at
}

/// The span of `text` starting at char offset `start`, `len` chars long.
fn char_span(text: &str, start: usize, len: usize) -> &str {
    let from = byte_of_char(text, start);
    let to = byte_of_char(text, start + len);
    &text[from..to]
}

fn line_breaks(s: &str) -> usize {
    s.chars().filter(|&ch| ch == '\n').count()
}

/// Chars on the final line of `s` (all of `s` if it has no line break).
fn last_line_len(s: &str) -> usize {
    s.rsplit('\n').next().map_or(0, |line| line.chars().count())
}
