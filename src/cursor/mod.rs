//! Cursor positions and their relocation across remote edits.
//!
//! Host widgets address their buffer either as one linear run of chars
//! ([`FlatPosition`]) or as newline-delimited lines ([`LineColPosition`]).
//! Both implement [`TransformCursor`], so a binding picks the coordinate
//! system once at attach time instead of branching on every event.

mod flat;
mod line_col;

pub use flat::FlatPosition;
pub use line_col::LineColPosition;

use serde::{Deserialize, Serialize};

use crate::edit::Edit;

/// A position reference that can be relocated across an applied edit.
///
/// Transforms are pure: they take the pre-edit content (the buffer the
/// edit's offsets address) and return the position's new location in the
/// post-edit content. Implementations assume the edit satisfies the bounds
/// invariants of [`Edit`]; callers validate untrusted edits first.
pub trait TransformCursor: Copy {
    /// Where this position lands after `edit` is applied to `pre_edit_text`.
    #[must_use]
    fn transform(self, pre_edit_text: &str, edit: &Edit) -> Self;
}

/// A selection span between two independently tracked endpoints.
///
/// A caret is a selection whose endpoints coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<P> {
    /// Where the selection begins.
    pub start: P,
    /// Where the selection ends.
    pub end: P,
}

impl<P> Selection<P> {
    /// A selection spanning `start` to `end`.
    pub const fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    /// A collapsed selection (caret) at a single position.
    pub const fn caret(at: P) -> Self
    where
        P: Copy,
    {
        Self { start: at, end: at }
    }

    /// Whether the selection is collapsed to a caret.
    pub fn is_caret(&self) -> bool
    where
        P: PartialEq,
    {
        self.start == self.end
    }
}

impl<P: TransformCursor> Selection<P> {
    /// Relocate both endpoints across `edit`.
    ///
    /// Endpoints transform independently; an edit landing inside the span
    /// moves one end without the other, so a selection never shifts as a
    /// unit.
    #[must_use]
    pub fn transform(self, pre_edit_text: &str, edit: &Edit) -> Self {
        Self {
            start: self.start.transform(pre_edit_text, edit),
            end: self.end.transform(pre_edit_text, edit),
        }
    }
}
