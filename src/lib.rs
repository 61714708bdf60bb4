//! # Tether
//!
//! Core algorithms for keeping a buffer-holding editor widget in sync with
//! a remotely edited document.
//!
//! Tether does three things:
//! - Extracts the insert/delete edits between two snapshots of a buffer
//! - Relocates cursors and selections across edits arriving from a peer
//! - Glues a host widget to a sync layer through a small binding session
//!
//! ## Architecture
//!
//! The cores are pure functions over immutable snapshots:
//! - **Diff**: scan in from both ends of old and new content to isolate the
//!   single changed region a keystroke produces
//! - **Cursor transforms**: pure relocation of a flat offset or a
//!   line/column pair across one edit
//! - **Binding**: the only stateful piece, holding a shadow of the last
//!   synchronized content per attached widget
//!
//! All offsets, lengths, and columns are counted in chars (Unicode scalar
//! values). The crate owns no wire protocol and no event loop; hosts drive
//! it by reporting settled content and delivering remote edits one at a
//! time.
//!
//! ## Modules
//!
//! - [`edit`]: Insert/delete edit values and validation
//! - [`diff`]: Edit extraction between buffer snapshots
//! - [`cursor`]: Cursor positions and relocation across edits
//! - [`binding`]: Widget glue and in-memory reference widgets

pub mod binding;
pub mod cursor;
pub mod diff;
pub mod edit;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::binding::{Binding, HostWidget};
    pub use crate::cursor::{FlatPosition, LineColPosition, Selection, TransformCursor};
    pub use crate::diff::{BufferDiff, extract};
    pub use crate::edit::{Delete, Edit, Insert, InvalidEdit};
}
