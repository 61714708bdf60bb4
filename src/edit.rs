//! Insert and delete edit values.
//!
//! An [`Edit`] addresses the buffer it was generated against: positions and
//! lengths are counted in chars (Unicode scalar values), never bytes. Edits
//! arriving from a remote peer are validated with [`Edit::check`] before
//! anything downstream touches them; the pure transforms assume validity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text inserted at a char offset of the pre-edit buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insert {
    /// Char offset the text lands at (`0..=` buffer char length).
    pub position: usize,
    /// The inserted text. May span multiple lines.
    pub text: String,
}

impl Insert {
    /// Create an insert of `text` at char offset `position`.
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Length of the inserted text in chars.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// An empty-text insert changes nothing.
    pub fn is_noop(&self) -> bool {
        self.text.is_empty()
    }
}

/// A contiguous char range removed from the pre-edit buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    /// Char offset of the first removed char.
    pub position: usize,
    /// Number of removed chars.
    pub length: usize,
}

impl Delete {
    /// Create a delete of `length` chars starting at char offset `position`.
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Exclusive end of the removed range, in pre-edit char offsets.
    pub const fn end(&self) -> usize {
        self.position + self.length
    }

    /// A zero-length delete changes nothing.
    pub const fn is_noop(&self) -> bool {
        self.length == 0
    }
}

/// A single edit applied to a text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edit {
    /// Insert text at an offset.
    Insert(Insert),
    /// Remove a char range starting at an offset.
    Delete(Delete),
}

/// An edit whose offsets do not fit the buffer it was applied to.
///
/// Producers are responsible for generating edits against the content the
/// receiver holds; an out-of-bounds edit means the two sides have diverged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEdit {
    /// An insert position past the end of the buffer.
    #[error("insert at char {position} is past the end of a {buffer_len}-char buffer")]
    InsertPastEnd {
        /// The offending insert position.
        position: usize,
        /// The buffer's char length.
        buffer_len: usize,
    },
    /// A deleted range extending beyond the end of the buffer.
    #[error("delete of {length} chars at {position} overruns a {buffer_len}-char buffer")]
    DeleteOverrun {
        /// Start of the deleted range.
        position: usize,
        /// Length of the deleted range.
        length: usize,
        /// The buffer's char length.
        buffer_len: usize,
    },
}

impl Edit {
    /// The char offset this edit starts at.
    pub const fn position(&self) -> usize {
        match self {
            Self::Insert(ins) => ins.position,
            Self::Delete(del) => del.position,
        }
    }

    /// Whether applying this edit leaves any buffer unchanged.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Insert(ins) => ins.is_noop(),
            Self::Delete(del) => del.is_noop(),
        }
    }

    /// Verify this edit's offsets against `buffer`.
    ///
    /// # Errors
    /// Returns [`InvalidEdit`] if the position (or, for deletes, the whole
    /// removed range) does not fit inside `buffer`.
    pub fn check(&self, buffer: &str) -> Result<(), InvalidEdit> {
        let buffer_len = buffer.chars().count();
        match self {
            Self::Insert(ins) if ins.position > buffer_len => Err(InvalidEdit::InsertPastEnd {
                position: ins.position,
                buffer_len,
            }),
            Self::Delete(del) if del.end() > buffer_len => Err(InvalidEdit::DeleteOverrun {
                position: del.position,
                length: del.length,
                buffer_len,
            }),
            _ => Ok(()),
        }
    }

    /// Apply this edit to `buffer`, producing the post-edit content.
    ///
    /// # Panics
    /// Panics if the edit does not fit `buffer`. Edits from an untrusted
    /// source must go through [`Edit::check`] first; an in-bounds failure
    /// here is a caller bug, not a recoverable condition.
    pub fn apply(&self, buffer: &str) -> String {
        if let Err(err) = self.check(buffer) {
            panic!("edit applied to the wrong buffer: {err}");
        }
        match self {
            Self::Insert(ins) => {
                let at = byte_of_char(buffer, ins.position);
                let mut out = String::with_capacity(buffer.len() + ins.text.len());
                out.push_str(&buffer[..at]);
                out.push_str(&ins.text);
                out.push_str(&buffer[at..]);
                out
            }
            Self::Delete(del) => {
                let start = byte_of_char(buffer, del.position);
                let end = byte_of_char(buffer, del.end());
                let mut out = String::with_capacity(buffer.len() - (end - start));
                out.push_str(&buffer[..start]);
                out.push_str(&buffer[end..]);
                out
            }
        }
    }
}

/// Byte index of the `char_idx`-th char of `s`.
///
/// A `char_idx` equal to the char count maps to `s.len()`.
pub(crate) fn byte_of_char(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(b, _)| b)
}
