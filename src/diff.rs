//! Edit extraction between two buffer snapshots.
//!
//! [`extract`] isolates the changed region by scanning in from both ends of
//! the old and new content. Per-keystroke changes are always a single
//! contiguous region, so the result is exact for typing, pasting, and
//! deleting; for arbitrary rearrangements it still round-trips (delete the
//! non-common middle, insert the replacement), just not minimally.

use crate::edit::{Delete, Edit, Insert, byte_of_char};

/// The at-most-one delete and at-most-one insert between two snapshots.
///
/// When both are present they share a position and apply delete-first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferDiff {
    /// The removed char range, if any.
    pub delete: Option<Delete>,
    /// The inserted text, if any.
    pub insert: Option<Insert>,
}

impl BufferDiff {
    /// Whether the two snapshots were identical.
    pub const fn is_empty(&self) -> bool {
        self.delete.is_none() && self.insert.is_none()
    }

    /// The edits in application order: delete before insert.
    pub fn edits(self) -> impl Iterator<Item = Edit> {
        self.delete
            .map(Edit::Delete)
            .into_iter()
            .chain(self.insert.map(Edit::Insert))
    }
}

/// Derive the edits that turn `old` into `new`.
///
/// O(min(old, new)) char comparisons and no allocation beyond the inserted
/// text. Applying the result to `old` (delete first) always reconstructs
/// `new` exactly.
pub fn extract(old: &str, new: &str) -> BufferDiff {
    // Equality is the overwhelmingly common case when polling a widget.
    if old == new {
        return BufferDiff::default();
    }

    let old_len = old.chars().count();
    let new_len = new.chars().count();

    let common_start = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .count();

    // The suffix scan must stop before re-claiming chars the prefix scan
    // already consumed, or repeated-char content ("aaa" -> "aa") would
    // double-count the overlap.
    let suffix_budget = old_len.min(new_len) - common_start;
    let common_end = old
        .chars()
        .rev()
        .zip(new.chars().rev())
        .take(suffix_budget)
        .take_while(|(a, b)| a == b)
        .count();

    let common = common_start + common_end;
    let delete = (old_len != common).then(|| Delete::new(common_start, old_len - common));
    let insert = (new_len != common).then(|| {
        let start = byte_of_char(new, common_start);
        let end = byte_of_char(new, new_len - common_end);
        Insert::new(common_start, &new[start..end])
    });

    BufferDiff { delete, insert }
}
