//! Flat-offset cursor positions.

use serde::{Deserialize, Serialize};

use super::TransformCursor;
use crate::edit::Edit;

/// A buffer position counted in chars from the start of the content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FlatPosition(usize);

impl FlatPosition {
    /// A position `offset` chars into the content.
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// The char offset.
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl From<usize> for FlatPosition {
    fn from(offset: usize) -> Self {
        Self(offset)
    }
}

impl TransformCursor for FlatPosition {
    fn transform(self, _pre_edit_text: &str, edit: &Edit) -> Self {
        let cursor = self.0;
        let mapped = match edit {
            // A cursor inside the deleted range only moves back to the start
            // of the range, hence the min.
            Edit::Delete(del) if del.position < cursor => {
                cursor - del.length.min(cursor - del.position)
            }
            Edit::Insert(ins) if ins.position < cursor => cursor + ins.char_len(),
            _ => cursor,
        };
        Self(mapped)
    }
}
